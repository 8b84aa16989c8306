use super::use_graphql_client;
use serde::de::DeserializeOwned;
use yew::hook;
use yew_graphql_core::{QueryDescriptor, QueryExecutor};

/// Returns an executor for the given operation using the client in context.
///
/// The token is read when the executor runs, not when this hook is called.
///
/// # Panics
/// If there is no `GraphQLClientProvider` above the component.
#[hook]
pub fn use_query_executor<T>(descriptor: QueryDescriptor) -> QueryExecutor<T>
where
    T: DeserializeOwned + 'static,
{
    let client = use_graphql_client().expect("expected GraphQLClient");
    client.executor(descriptor)
}
