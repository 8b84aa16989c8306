use crate::{
    client::{ClientInner, GraphQLClient},
    descriptor::QueryDescriptor,
    response::{GraphQLRequest, GraphQLResponse},
    result::{ErrorInfo, ErrorKind, QueryResult, ResponseInfo},
    transport::{Headers, TransportResponse},
    variables::Variables,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{fmt::Debug, marker::PhantomData};

const AUTHORIZATION: &str = "authorization";

/// Executes one operation, decoding the payload at its root field as `T`.
///
/// Every call reads the endpoint and the session token again and uses a new
/// transport client, so calls are independent of each other.
pub struct QueryExecutor<T> {
    client: GraphQLClient,
    descriptor: QueryDescriptor,
    _marker: PhantomData<fn() -> T>,
}

impl<T> QueryExecutor<T>
where
    T: DeserializeOwned,
{
    /// Constructs an executor for the given operation.
    pub fn new(client: GraphQLClient, descriptor: QueryDescriptor) -> Self {
        QueryExecutor {
            client,
            descriptor,
            _marker: PhantomData,
        }
    }

    /// Returns the operation executed.
    pub fn descriptor(&self) -> &QueryDescriptor {
        &self.descriptor
    }

    /// Returns the client used to execute the operation.
    pub fn client(&self) -> &GraphQLClient {
        &self.client
    }

    /// Executes the operation with the given variables.
    pub async fn execute(&self, variables: Variables) -> QueryResult<T> {
        self.client.execute(&self.descriptor, variables).await
    }

    /// Executes the operation using a serializable input as variables.
    pub async fn execute_input<S>(&self, input: &S) -> QueryResult<T>
    where
        S: Serialize + ?Sized,
    {
        match Variables::from_serialize(input) {
            Ok(variables) => self.execute(variables).await,
            Err(err) => QueryResult::Failed(err.into()),
        }
    }
}

impl<T> Clone for QueryExecutor<T> {
    fn clone(&self) -> Self {
        QueryExecutor {
            client: self.client.clone(),
            descriptor: self.descriptor.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> Debug for QueryExecutor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryExecutor")
            .field("client", &self.client)
            .field("descriptor", &self.descriptor)
            .field("output", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T> PartialEq for QueryExecutor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.client == other.client && self.descriptor == other.descriptor
    }
}

pub(crate) async fn run_operation<T>(
    inner: &ClientInner,
    descriptor: &QueryDescriptor,
    variables: Variables,
) -> QueryResult<T>
where
    T: DeserializeOwned,
{
    let operation = descriptor
        .operation_name()
        .unwrap_or_else(|| descriptor.root_field());

    match try_run_operation(inner, descriptor, &variables).await {
        Ok(data) => {
            log::debug!("{} `{operation}` succeeded", descriptor.kind());
            QueryResult::Data(data)
        }
        Err(err) => {
            log::debug!("{} `{operation}` failed: {err}", descriptor.kind());
            QueryResult::Failed(err)
        }
    }
}

async fn try_run_operation<T>(
    inner: &ClientInner,
    descriptor: &QueryDescriptor,
    variables: &Variables,
) -> Result<Option<T>, ErrorInfo>
where
    T: DeserializeOwned,
{
    descriptor.validate(variables)?;

    let endpoint = inner.endpoint.resolve()?;
    let headers = request_headers(inner);
    let client = inner.transport.connect(&endpoint, &headers)?;

    let request = GraphQLRequest {
        query: descriptor.document(),
        operation_name: descriptor.operation_name(),
        variables,
    };

    log::trace!("sending {} to {endpoint}", descriptor.kind());
    let response = client.request(&request).await?;
    log::trace!("response {}: {}", response.status, response.body);

    decode_response(descriptor.root_field(), response)
}

fn request_headers(inner: &ClientInner) -> Headers {
    let mut headers = inner.headers.clone();

    match inner.session.token() {
        Some(token) => {
            headers.insert(AUTHORIZATION.to_owned(), format!("Bearer {token}"));
        }
        None => log::warn!("no session token available, request is not authenticated"),
    }

    headers
}

fn status_kind(status: u16) -> Option<ErrorKind> {
    match status {
        200..=299 => None,
        401 | 403 => Some(ErrorKind::Authorization),
        _ => Some(ErrorKind::Transport),
    }
}

// Only a JSON object is a GraphQL response, `[]` or `"ok"` are not.
fn parse_response(body: &str) -> Result<GraphQLResponse, String> {
    let value = serde_json::from_str::<serde_json::Value>(body).map_err(|e| e.to_string())?;

    if !value.is_object() {
        return Err("expected a json object".to_owned());
    }

    serde_json::from_value(value).map_err(|e| e.to_string())
}

fn decode_response<T>(root_field: &str, response: TransportResponse) -> Result<Option<T>, ErrorInfo>
where
    T: DeserializeOwned,
{
    let TransportResponse {
        status,
        headers,
        body,
    } = response;

    let parsed = match parse_response(&body) {
        Ok(parsed) => parsed,
        Err(err) => {
            let (kind, message) = match status_kind(status) {
                Some(kind) => (kind, format!("http status {status}")),
                None => (ErrorKind::Decode, format!("invalid graphql response: {err}")),
            };

            let info = ResponseInfo {
                status,
                headers,
                body: Some(body),
                ..Default::default()
            };

            return Err(ErrorInfo::new(kind, message).with_response(info));
        }
    };

    let GraphQLResponse { data, errors, .. } = parsed;

    // A successful reply must carry `data` or `errors`.
    if status_kind(status).is_none() && errors.is_empty() && data.is_none() {
        let info = ResponseInfo {
            status,
            headers,
            body: Some(body),
            ..Default::default()
        };

        let message = "invalid graphql response: neither `data` nor `errors` is present";
        return Err(ErrorInfo::new(ErrorKind::Decode, message).with_response(info));
    }

    let failure = match status_kind(status) {
        Some(kind) => Some(kind),
        None if !errors.is_empty() => {
            let unauthorized = errors
                .iter()
                .any(|e| matches!(e.code(), Some("UNAUTHENTICATED" | "FORBIDDEN")));

            Some(if unauthorized {
                ErrorKind::Authorization
            } else {
                ErrorKind::GraphQL
            })
        }
        None => None,
    };

    if let Some(kind) = failure {
        let message = if errors.is_empty() {
            format!("http status {status}")
        } else {
            errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ")
        };

        let info = ResponseInfo {
            status,
            headers,
            errors,
            data,
            body: None,
        };

        return Err(ErrorInfo::new(kind, message).with_response(info));
    }

    let root = data
        .as_ref()
        .and_then(|data| data.get(root_field))
        .filter(|value| !value.is_null());

    let Some(value) = root else {
        return Ok(None);
    };

    match T::deserialize(value) {
        Ok(payload) => Ok(Some(payload)),
        Err(err) => {
            let info = ResponseInfo {
                status,
                headers,
                data: data.clone(),
                ..Default::default()
            };

            let message = format!("invalid `{root_field}` payload: {err}");
            Err(ErrorInfo::new(ErrorKind::Decode, message).with_response(info))
        }
    }
}
