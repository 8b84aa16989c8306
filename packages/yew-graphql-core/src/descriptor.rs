use crate::{error::QueryError, variables::Variables};
use graphql_parser::query::{
    parse_query, Definition, OperationDefinition, Selection, SelectionSet, Type,
    VariableDefinition,
};
use std::{fmt::Display, sync::Arc};

/// The kind of an executable operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Query,
    Mutation,
}

impl Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationKind::Query => write!(f, "query"),
            OperationKind::Mutation => write!(f, "mutation"),
        }
    }
}

/// A variable declared by an operation, like `$pipelineID: String!`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDecl {
    name: String,
    ty: String,
    required: bool,
}

impl VariableDecl {
    /// Returns the name of the variable, without the `$`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared type as written in the document.
    pub fn ty(&self) -> &str {
        &self.ty
    }

    /// Returns `true` if the variable is non-null and has no default value.
    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// An immutable query document together with what it declares.
///
/// A descriptor is parsed once and can be shared by every call that executes
/// the operation.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryDescriptor {
    document: Arc<str>,
    kind: OperationKind,
    operation_name: Option<String>,
    root_field: String,
    variables: Arc<[VariableDecl]>,
}

impl QueryDescriptor {
    /// Parses a document containing exactly one query or mutation.
    pub fn parse(document: &str) -> Result<Self, QueryError> {
        let doc =
            parse_query::<String>(document).map_err(|e| QueryError::Parse(e.to_string()))?;

        let mut operations = doc.definitions.iter().filter_map(|def| match def {
            Definition::Operation(op) => Some(op),
            Definition::Fragment(_) => None,
        });

        let operation = operations.next().ok_or(QueryError::MissingOperation)?;
        let rest = operations.count();
        if rest > 0 {
            return Err(QueryError::AmbiguousOperation(rest + 1));
        }

        let (kind, name, variable_definitions, selection_set) = match operation {
            OperationDefinition::Query(q) => (
                OperationKind::Query,
                q.name.clone(),
                q.variable_definitions.as_slice(),
                &q.selection_set,
            ),
            OperationDefinition::Mutation(m) => (
                OperationKind::Mutation,
                m.name.clone(),
                m.variable_definitions.as_slice(),
                &m.selection_set,
            ),
            OperationDefinition::SelectionSet(s) => (OperationKind::Query, None, &[][..], s),
            OperationDefinition::Subscription(_) => {
                return Err(QueryError::UnsupportedOperation("subscription"))
            }
        };

        let root_field = find_root_field(selection_set, name.as_deref())?;
        let variables = variable_definitions.iter().map(to_decl).collect();

        Ok(QueryDescriptor {
            document: Arc::from(document),
            kind,
            operation_name: name,
            root_field,
            variables,
        })
    }

    /// Returns the source text of the document.
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Returns the kind of the operation.
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Returns the name of the operation, if any.
    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }

    /// Returns the response key under which the payload is nested.
    pub fn root_field(&self) -> &str {
        &self.root_field
    }

    /// Returns the declared variables.
    pub fn variables(&self) -> &[VariableDecl] {
        &self.variables
    }

    /// Checks the given variables against the declared ones.
    pub fn validate(&self, variables: &Variables) -> Result<(), QueryError> {
        for (name, _) in variables.iter() {
            if !self.variables.iter().any(|decl| decl.name == *name) {
                return Err(QueryError::UnknownVariable(name.clone()));
            }
        }

        for decl in self.variables.iter().filter(|decl| decl.required) {
            match variables.get(&decl.name) {
                Some(value) if !value.is_null() => {}
                _ => return Err(QueryError::MissingVariable(decl.name.clone())),
            }
        }

        Ok(())
    }
}

// Prefers the field whose response key matches the operation name.
fn find_root_field(
    selection_set: &SelectionSet<'_, String>,
    operation_name: Option<&str>,
) -> Result<String, QueryError> {
    let keys: Vec<&String> = selection_set
        .items
        .iter()
        .filter_map(|selection| match selection {
            Selection::Field(field) => Some(field.alias.as_ref().unwrap_or(&field.name)),
            _ => None,
        })
        .collect();

    let matching = operation_name.and_then(|name| keys.iter().find(|key| key.as_str() == name));

    matching
        .or_else(|| keys.first())
        .map(|key| key.to_string())
        .ok_or(QueryError::MissingRootField)
}

fn to_decl(def: &VariableDefinition<'_, String>) -> VariableDecl {
    let required = matches!(def.var_type, Type::NonNullType(_)) && def.default_value.is_none();

    VariableDecl {
        name: def.name.clone(),
        ty: render_type(&def.var_type),
        required,
    }
}

fn render_type(ty: &Type<'_, String>) -> String {
    match ty {
        Type::NamedType(name) => name.clone(),
        Type::ListType(inner) => format!("[{}]", render_type(inner)),
        Type::NonNullType(inner) => format!("{}!", render_type(inner)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PIPELINE_KEYS: &str = r#"
        query getPipelineApiKeys($pipelineID: String!, $environmentID: String!) {
            getPipelineApiKeys(pipelineID: $pipelineID, environmentID: $environmentID) {
                triggerID
                apiKey
            }
        }
    "#;

    #[test]
    fn parse_named_query_test() {
        let descriptor = QueryDescriptor::parse(PIPELINE_KEYS).unwrap();

        assert_eq!(descriptor.kind(), OperationKind::Query);
        assert_eq!(descriptor.operation_name(), Some("getPipelineApiKeys"));
        assert_eq!(descriptor.root_field(), "getPipelineApiKeys");
        assert_eq!(descriptor.document(), PIPELINE_KEYS);

        let names: Vec<&str> = descriptor.variables().iter().map(|v| v.name()).collect();
        assert_eq!(names, vec!["pipelineID", "environmentID"]);
        assert!(descriptor.variables().iter().all(|v| v.is_required()));
        assert_eq!(descriptor.variables()[0].ty(), "String!");
    }

    #[test]
    fn root_field_uses_alias_and_operation_name_test() {
        let descriptor = QueryDescriptor::parse(
            "query keys { first: version, keys: getPipelineApiKeys { apiKey } }",
        )
        .unwrap();
        assert_eq!(descriptor.root_field(), "keys");

        let descriptor = QueryDescriptor::parse("{ me { id } }").unwrap();
        assert_eq!(descriptor.root_field(), "me");
        assert_eq!(descriptor.operation_name(), None);
    }

    #[test]
    fn optional_and_list_variables_test() {
        let descriptor = QueryDescriptor::parse(
            "mutation update($ids: [ID!]!, $name: String, $active: Boolean! = true) { update(ids: $ids) }",
        )
        .unwrap();

        assert_eq!(descriptor.kind(), OperationKind::Mutation);
        let vars = descriptor.variables();
        assert_eq!(vars[0].ty(), "[ID!]!");
        assert!(vars[0].is_required());
        assert!(!vars[1].is_required());
        assert!(!vars[2].is_required());
    }

    #[test]
    fn rejects_invalid_documents_test() {
        assert!(matches!(
            QueryDescriptor::parse("query {"),
            Err(QueryError::Parse(_))
        ));
        assert_eq!(
            QueryDescriptor::parse("fragment f on User { id }"),
            Err(QueryError::MissingOperation)
        );
        assert_eq!(
            QueryDescriptor::parse("query a { x } query b { y }"),
            Err(QueryError::AmbiguousOperation(2))
        );
        assert_eq!(
            QueryDescriptor::parse("subscription s { events }"),
            Err(QueryError::UnsupportedOperation("subscription"))
        );
        assert_eq!(
            QueryDescriptor::parse("query q { ...f } fragment f on Query { x }"),
            Err(QueryError::MissingRootField)
        );
    }

    #[test]
    fn validate_variables_test() {
        let descriptor = QueryDescriptor::parse(PIPELINE_KEYS).unwrap();

        let ok = Variables::new()
            .with("pipelineID", "p1")
            .with("environmentID", "e1");
        assert_eq!(descriptor.validate(&ok), Ok(()));

        let missing = Variables::new().with("pipelineID", "p1");
        assert_eq!(
            descriptor.validate(&missing),
            Err(QueryError::MissingVariable("environmentID".to_owned()))
        );

        let null = Variables::new()
            .with("pipelineID", "p1")
            .with("environmentID", json!(null));
        assert_eq!(
            descriptor.validate(&null),
            Err(QueryError::MissingVariable("environmentID".to_owned()))
        );

        let unknown = ok.clone().with("limit", 10);
        assert_eq!(
            descriptor.validate(&unknown),
            Err(QueryError::UnknownVariable("limit".to_owned()))
        );
    }
}
