#![allow(dead_code)]

use futures::FutureExt;
use yew_graphql::transport::{
    Headers, Transport, TransportClient, TransportError, TransportResponse, TryBoxFuture,
};
use yew_graphql::GraphQLRequest;

pub fn get_inner_html(id: impl AsRef<str>) -> String {
    gloo_utils::document()
        .get_element_by_id(id.as_ref())
        .unwrap_or_else(|| panic!("html element with id `{}` was not found", id.as_ref()))
        .inner_html()
}

/// Answers every request with the same status and body, replacing
/// `{authorization}` in the body with the authorization header.
#[derive(Clone)]
pub struct StaticTransport {
    pub status: u16,
    pub body: &'static str,
}

struct StaticClient {
    status: u16,
    body: String,
}

impl Transport for StaticTransport {
    fn connect(
        &self,
        _endpoint: &str,
        headers: &Headers,
    ) -> Result<Box<dyn TransportClient>, TransportError> {
        let auth = headers.get("authorization").cloned().unwrap_or_default();

        Ok(Box::new(StaticClient {
            status: self.status,
            body: self.body.replace("{authorization}", &auth),
        }))
    }
}

impl TransportClient for StaticClient {
    fn request<'a>(&'a self, _request: &'a GraphQLRequest<'a>) -> TryBoxFuture<'a, TransportResponse> {
        let response = TransportResponse {
            status: self.status,
            headers: Headers::new(),
            body: self.body.clone(),
        };

        async move { Ok(response) }.boxed_local()
    }
}
