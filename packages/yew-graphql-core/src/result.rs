use crate::{
    error::QueryError,
    response::GraphQLError,
    transport::{Headers, TransportError},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;

/// The category of a failed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// The call was rejected before sending anything.
    Validation,

    /// The request did not complete, or the server answered with an error status.
    Transport,

    /// The server refused the credentials.
    Authorization,

    /// The server answered with GraphQL errors.
    GraphQL,

    /// The response could not be decoded.
    Decode,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Validation => write!(f, "validation"),
            ErrorKind::Transport => write!(f, "transport"),
            ErrorKind::Authorization => write!(f, "authorization"),
            ErrorKind::GraphQL => write!(f, "graphql"),
            ErrorKind::Decode => write!(f, "decode"),
        }
    }
}

/// What the server answered to a failed call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseInfo {
    pub status: u16,

    #[serde(default)]
    pub headers: Headers,

    #[serde(default)]
    pub errors: Vec<GraphQLError>,

    #[serde(default)]
    pub data: Option<Value>,

    /// The raw body, kept only when it is not a GraphQL response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// A failed call, as plain data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    pub message: String,

    /// `None` when the failure happened before a response was received.
    #[serde(default)]
    pub response: Option<ResponseInfo>,
}

impl ErrorInfo {
    /// Constructs an `ErrorInfo` without a response.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        ErrorInfo {
            kind,
            message: message.into(),
            response: None,
        }
    }

    /// Attaches the server response.
    pub fn with_response(mut self, response: ResponseInfo) -> Self {
        self.response = Some(response);
        self
    }

    /// Returns the HTTP status, if a response was received.
    pub fn status(&self) -> Option<u16> {
        self.response.as_ref().map(|r| r.status)
    }
}

impl std::error::Error for ErrorInfo {}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status() {
            Some(status) => write!(f, "{} error ({status}): {}", self.kind, self.message),
            None => write!(f, "{} error: {}", self.kind, self.message),
        }
    }
}

impl From<QueryError> for ErrorInfo {
    fn from(err: QueryError) -> Self {
        ErrorInfo::new(ErrorKind::Validation, err.to_string())
    }
}

impl From<TransportError> for ErrorInfo {
    fn from(err: TransportError) -> Self {
        ErrorInfo::new(ErrorKind::Transport, err.to_string())
    }
}

/// The outcome of executing an operation.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult<T> {
    /// The value at the root field; `None` if the server returned `null`.
    Data(Option<T>),

    /// The call failed.
    Failed(ErrorInfo),
}

impl<T> QueryResult<T> {
    /// Returns `true` if the call succeeded.
    pub fn is_data(&self) -> bool {
        matches!(self, QueryResult::Data(_))
    }

    /// Returns `true` if the call failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, QueryResult::Failed(_))
    }

    /// Returns the payload, if the call succeeded and it was not `null`.
    pub fn data(&self) -> Option<&T> {
        match self {
            QueryResult::Data(data) => data.as_ref(),
            QueryResult::Failed(_) => None,
        }
    }

    /// Returns the failure, if any.
    pub fn error(&self) -> Option<&ErrorInfo> {
        match self {
            QueryResult::Data(_) => None,
            QueryResult::Failed(err) => Some(err),
        }
    }

    /// Maps the payload of a successful call.
    pub fn map<U, F>(self, f: F) -> QueryResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            QueryResult::Data(data) => QueryResult::Data(data.map(f)),
            QueryResult::Failed(err) => QueryResult::Failed(err),
        }
    }

    /// Converts into a `Result`, to use `?` on it.
    pub fn into_result(self) -> Result<Option<T>, ErrorInfo> {
        self.into()
    }
}

impl<T> From<QueryResult<T>> for Result<Option<T>, ErrorInfo> {
    fn from(result: QueryResult<T>) -> Self {
        match result {
            QueryResult::Data(data) => Ok(data),
            QueryResult::Failed(err) => Err(err),
        }
    }
}

impl<T> From<Result<Option<T>, ErrorInfo>> for QueryResult<T> {
    fn from(result: Result<Option<T>, ErrorInfo>) -> Self {
        match result {
            Ok(data) => QueryResult::Data(data),
            Err(err) => QueryResult::Failed(err),
        }
    }
}
