use crate::error::QueryError;
use serde::Serialize;
use serde_json::{Map, Value};

/// The variables sent along with an operation.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Variables(Map<String, Value>);

impl Variables {
    /// Constructs an empty `Variables`.
    pub fn new() -> Self {
        Default::default()
    }

    /// Converts a serializable value, usually an input struct, into variables.
    ///
    /// Fails if the value does not serialize into a JSON object.
    pub fn from_serialize<S>(value: &S) -> Result<Self, QueryError>
    where
        S: Serialize + ?Sized,
    {
        match serde_json::to_value(value) {
            Ok(Value::Object(map)) => Ok(Variables(map)),
            Ok(Value::Null) => Ok(Variables::new()),
            Ok(other) => Err(QueryError::InvalidVariables(format!(
                "expected an object, found `{other}`"
            ))),
            Err(err) => Err(QueryError::InvalidVariables(err.to_string())),
        }
    }

    /// Adds a variable and returns `self`.
    pub fn with<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.insert(name, value);
        self
    }

    /// Sets the value of a variable, returning the previous one.
    pub fn insert<K, V>(&mut self, name: K, value: V) -> Option<Value>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.0.insert(name.into(), value.into())
    }

    /// Returns the value of the variable with the given name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Returns an iterator over the variables.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the inner JSON object.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Variables {
    fn from(map: Map<String, Value>) -> Self {
        Variables(map)
    }
}

impl<K, V> FromIterator<(K, V)> for Variables
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let map = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        Variables(map)
    }
}
