use crate::error::QueryError;
use std::borrow::Cow;

/// The environment variable read by [`Endpoint::default`].
pub const DEFAULT_ENDPOINT_VAR: &str = "GRAPHQL_ENDPOINT_PRIVATE";

// A browser has no process environment, so wasm builds take the address from
// `GRAPHQL_ENDPOINT_PRIVATE` at compile time.
#[cfg(target_arch = "wasm32")]
const BUILD_ENDPOINT: Option<&str> = option_env!("GRAPHQL_ENDPOINT_PRIVATE");

#[cfg(not(target_arch = "wasm32"))]
const BUILD_ENDPOINT: Option<&str> = None;

/// Where the GraphQL endpoint address comes from.
///
/// The address is resolved on every request and used as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// A fixed address.
    Url(Cow<'static, str>),

    /// The name of an environment variable holding the address.
    Env(Cow<'static, str>),
}

impl Endpoint {
    /// An endpoint with a fixed address.
    pub fn url(url: impl Into<Cow<'static, str>>) -> Self {
        Endpoint::Url(url.into())
    }

    /// An endpoint read from the given environment variable.
    pub fn from_env(var: impl Into<Cow<'static, str>>) -> Self {
        Endpoint::Env(var.into())
    }

    /// Returns the current address.
    pub fn resolve(&self) -> Result<String, QueryError> {
        match self {
            Endpoint::Url(url) => Ok(url.to_string()),
            Endpoint::Env(var) => match std::env::var(var.as_ref()) {
                Ok(url) if !url.is_empty() => Ok(url),
                _ => Err(QueryError::EndpointNotConfigured(var.to_string())),
            },
        }
    }
}

/// Reads [`DEFAULT_ENDPOINT_VAR`] on every request.
///
/// On `wasm32` the variable is read when the crate is compiled instead, and
/// resolving fails with [`QueryError::EndpointNotConfigured`] if it was unset.
impl Default for Endpoint {
    fn default() -> Self {
        match BUILD_ENDPOINT {
            Some(url) => Endpoint::url(url),
            None => Endpoint::from_env(DEFAULT_ENDPOINT_VAR),
        }
    }
}

impl From<&'static str> for Endpoint {
    fn from(url: &'static str) -> Self {
        Endpoint::url(url)
    }
}

impl From<String> for Endpoint {
    fn from(url: String) -> Self {
        Endpoint::url(url)
    }
}
