use crate::{
    descriptor::QueryDescriptor,
    endpoint::Endpoint,
    executor::{run_operation, QueryExecutor},
    result::QueryResult,
    session::{Session, TokenSource},
    transport::{Headers, ReqwestTransport, Transport},
    variables::Variables,
};
use serde::de::DeserializeOwned;
use std::{fmt::Debug, rc::Rc};

/// The context used to execute operations: where to send them, which
/// credentials to use and how to send them.
#[derive(Clone)]
pub struct GraphQLClient {
    inner: Rc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) endpoint: Endpoint,
    pub(crate) session: Rc<dyn TokenSource>,
    pub(crate) transport: Rc<dyn Transport>,
    pub(crate) headers: Headers,
}

impl GraphQLClient {
    /// Returns a builder for a `GraphQLClient`.
    pub fn builder() -> GraphQLClientBuilder {
        GraphQLClientBuilder::new()
    }

    /// Returns an executor for the given operation.
    pub fn executor<T>(&self, descriptor: QueryDescriptor) -> QueryExecutor<T>
    where
        T: DeserializeOwned,
    {
        QueryExecutor::new(self.clone(), descriptor)
    }

    /// Executes an operation once.
    pub async fn execute<T>(&self, descriptor: &QueryDescriptor, variables: Variables) -> QueryResult<T>
    where
        T: DeserializeOwned,
    {
        run_operation(&self.inner, descriptor, variables).await
    }

    /// Returns the endpoint configuration.
    pub fn endpoint(&self) -> &Endpoint {
        &self.inner.endpoint
    }

    /// Returns the static headers sent with every request.
    pub fn headers(&self) -> &Headers {
        &self.inner.headers
    }
}

impl Debug for GraphQLClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphQLClient")
            .field("endpoint", &self.inner.endpoint)
            .field("session", &"TokenSource")
            .field("transport", &"Transport")
            .field("headers", &self.inner.headers)
            .finish()
    }
}

impl PartialEq for GraphQLClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// A builder for creating a `GraphQLClient`.
#[derive(Default)]
pub struct GraphQLClientBuilder {
    endpoint: Option<Endpoint>,
    session: Option<Rc<dyn TokenSource>>,
    transport: Option<Rc<dyn Transport>>,
    headers: Headers,
}

impl GraphQLClientBuilder {
    /// Constructs an empty `GraphQLClientBuilder`.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the endpoint, defaults to [`Endpoint::default`].
    ///
    /// The default reads `GRAPHQL_ENDPOINT_PRIVATE` on each request, or once at
    /// compile time when targeting `wasm32`.
    pub fn endpoint(mut self, endpoint: impl Into<Endpoint>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Sets where the bearer token is read from.
    pub fn session<S>(mut self, session: S) -> Self
    where
        S: TokenSource + 'static,
    {
        self.session = Some(Rc::new(session));
        self
    }

    /// Sets the transport, defaults to [`ReqwestTransport`].
    pub fn transport<T>(mut self, transport: T) -> Self
    where
        T: Transport + 'static,
    {
        self.transport = Some(Rc::new(transport));
        self
    }

    /// Adds a header sent with every request.
    ///
    /// An `authorization` header is replaced by the session token when there is one.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    /// Returns the `GraphQLClient` using this builder options.
    pub fn build(self) -> GraphQLClient {
        let Self {
            endpoint,
            session,
            transport,
            headers,
        } = self;

        let inner = ClientInner {
            endpoint: endpoint.unwrap_or_default(),
            session: session.unwrap_or_else(|| Rc::new(Session::new())),
            transport: transport.unwrap_or_else(|| Rc::new(ReqwestTransport)),
            headers,
        };

        GraphQLClient {
            inner: Rc::new(inner),
        }
    }
}
