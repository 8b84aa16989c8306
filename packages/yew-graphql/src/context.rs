use yew::{function_component, Children, ContextProvider, Properties};
use yew_graphql_core::GraphQLClient;

/// Context value shared by [`GraphQLClientProvider`]: the endpoint, session
/// and transport every executor below it sends its operations with.
#[derive(Clone, PartialEq)]
pub struct GraphQLClientContext {
    pub(crate) client: GraphQLClient,
}

#[derive(Properties, PartialEq)]
pub struct GraphQLClientProviderProps {
    /// The client that reads the bearer token from its session on each call.
    pub client: GraphQLClient,

    #[prop_or_default]
    pub children: Children,
}

/// Makes `client` available to [`use_graphql_client`](crate::use_graphql_client)
/// and the query hooks of the children.
///
/// Replacing the client re-renders the consumers, a token change in the
/// client's session does not.
#[function_component]
pub fn GraphQLClientProvider(props: &GraphQLClientProviderProps) -> yew::Html {
    let context = GraphQLClientContext {
        client: props.client.clone(),
    };

    yew::html! {
        <ContextProvider<GraphQLClientContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<GraphQLClientContext>>
    }
}
