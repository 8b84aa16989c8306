use std::error::Error as StdError;
use std::fmt::Display;
use std::sync::Arc;

/// A cloneable error type.
#[derive(Clone)]
pub struct Error(Arc<dyn StdError + Send + Sync + 'static>);

impl Error {
    /// Constructs an error.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Error(Arc::new(error))
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<E> From<E> for Error
where
    E: StdError + Send + Sync + 'static,
{
    #[cold]
    fn from(error: E) -> Self {
        Error::new(error)
    }
}

/// An error detected before any request leaves the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The query document is not valid GraphQL.
    Parse(String),

    /// The document does not contain an operation.
    MissingOperation,

    /// The document contains more than one operation.
    AmbiguousOperation(usize),

    /// Subscriptions cannot be executed over a single HTTP request.
    UnsupportedOperation(&'static str),

    /// The operation does not select any field.
    MissingRootField,

    /// A required variable was not provided, or was `null`.
    MissingVariable(String),

    /// A variable was provided that the operation does not declare.
    UnknownVariable(String),

    /// The variables could not be converted into a JSON object.
    InvalidVariables(String),

    /// The endpoint address could not be resolved.
    EndpointNotConfigured(String),
}

impl StdError for QueryError {}

impl Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use QueryError::*;

        match self {
            Parse(msg) => write!(f, "invalid query document: {msg}"),
            MissingOperation => write!(f, "query document has no operation"),
            AmbiguousOperation(n) => write!(f, "query document has {n} operations, expected one"),
            UnsupportedOperation(kind) => write!(f, "`{kind}` operations are not supported"),
            MissingRootField => write!(f, "operation does not select a root field"),
            MissingVariable(name) => write!(f, "missing required variable `${name}`"),
            UnknownVariable(name) => write!(f, "variable `${name}` is not declared by the operation"),
            InvalidVariables(msg) => write!(f, "variables must be a JSON object: {msg}"),
            EndpointNotConfigured(var) => write!(f, "graphql endpoint not configured, `{var}` is not set"),
        }
    }
}
