use crate::{response::GraphQLRequest, Error};
use futures::{future::LocalBoxFuture, FutureExt};
use std::{collections::BTreeMap, fmt::Display};

pub type TryBoxFuture<'a, T, E = TransportError> = LocalBoxFuture<'a, Result<T, E>>;

/// Header names and values sent with, or received in, a request.
pub type Headers = BTreeMap<String, String>;

/// The raw outcome of an HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub headers: Headers,
    pub body: String,
}

impl TransportResponse {
    /// Returns `true` for a `2xx` status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// An error that prevented an HTTP exchange from completing.
#[derive(Debug, Clone)]
pub enum TransportError {
    /// The client could not be built, e.g. a header value is not valid.
    Build(Error),

    /// The request could not be sent or no response was received.
    Request(Error),

    /// The response body could not be read.
    Body(Error),
}

impl std::error::Error for TransportError {}

impl Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use TransportError::*;

        match self {
            Build(err) => write!(f, "failed to build http client: {err}"),
            Request(err) => write!(f, "request failed: {err}"),
            Body(err) => write!(f, "failed to read response body: {err}"),
        }
    }
}

/// Creates the clients used to talk to an endpoint.
///
/// A new client is created for every call.
pub trait Transport {
    /// Returns a client that sends requests to `endpoint` with `headers`.
    fn connect(
        &self,
        endpoint: &str,
        headers: &Headers,
    ) -> Result<Box<dyn TransportClient>, TransportError>;
}

/// A client bound to one endpoint and a set of headers.
pub trait TransportClient {
    /// Posts a GraphQL request and returns the raw response.
    fn request<'a>(&'a self, request: &'a GraphQLRequest<'a>) -> TryBoxFuture<'a, TransportResponse>;
}

/// A [`Transport`] that uses `reqwest`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReqwestTransport;

impl Transport for ReqwestTransport {
    fn connect(
        &self,
        endpoint: &str,
        headers: &Headers,
    ) -> Result<Box<dyn TransportClient>, TransportError> {
        use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

        let mut header_map = HeaderMap::new();
        for (name, value) in headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| TransportError::Build(e.into()))?;
            let value = HeaderValue::from_str(value).map_err(|e| TransportError::Build(e.into()))?;
            header_map.insert(name, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(header_map)
            .build()
            .map_err(|e| TransportError::Build(e.into()))?;

        Ok(Box::new(ReqwestClient {
            client,
            endpoint: endpoint.to_owned(),
        }))
    }
}

struct ReqwestClient {
    client: reqwest::Client,
    endpoint: String,
}

impl TransportClient for ReqwestClient {
    fn request<'a>(&'a self, request: &'a GraphQLRequest<'a>) -> TryBoxFuture<'a, TransportResponse> {
        async move {
            let response = self
                .client
                .post(&self.endpoint)
                .json(request)
                .send()
                .await
                .map_err(|e| TransportError::Request(e.into()))?;

            let status = response.status().as_u16();
            let headers = response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    let value = value.to_str().ok()?;
                    Some((name.as_str().to_owned(), value.to_owned()))
                })
                .collect();

            let body = response
                .text()
                .await
                .map_err(|e| TransportError::Body(e.into()))?;

            Ok(TransportResponse {
                status,
                headers,
                body,
            })
        }
        .boxed_local()
    }
}
