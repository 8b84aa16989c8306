use crate::context::GraphQLClientContext;
use yew::{hook, use_context};
use yew_graphql_core::GraphQLClient;

/// Returns the client of the nearest [`GraphQLClientProvider`](crate::GraphQLClientProvider),
/// or `None` when the component is rendered outside of one.
#[hook]
pub fn use_graphql_client() -> Option<GraphQLClient> {
    use_context::<GraphQLClientContext>().map(|ctx| ctx.client)
}
