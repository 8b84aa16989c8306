#![cfg(target_arch = "wasm32")]

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

mod common;

use common::*;
use std::time::Duration;
use wasm_bindgen_test::wasm_bindgen_test;
use yew::platform::time::sleep;
use yew_graphql::{use_graphql_client, GraphQLClient, GraphQLClientProvider, Session};

#[yew::function_component]
fn AppTest() -> yew::Html {
    let client = GraphQLClient::builder()
        .endpoint("http://localhost/graphql")
        .session(Session::with_token("abc"))
        .build();

    yew::html! {
        <>
            <ClientEndpoint id="outside" />
            <GraphQLClientProvider client={client}>
                <ClientEndpoint id="inside" />
            </GraphQLClientProvider>
        </>
    }
}

#[derive(yew::Properties, PartialEq)]
struct ClientEndpointProps {
    id: yew::AttrValue,
}

#[yew::function_component]
fn ClientEndpoint(props: &ClientEndpointProps) -> yew::Html {
    let endpoint = match use_graphql_client() {
        Some(client) => client.endpoint().resolve().unwrap_or_default(),
        None => "none".to_owned(),
    };

    yew::html! { <div id={props.id.clone()}>{endpoint}</div> }
}

#[wasm_bindgen_test]
async fn use_graphql_client_reads_nearest_provider() {
    yew::Renderer::<AppTest>::with_root(
        gloo_utils::document().get_element_by_id("output").unwrap(),
    )
    .render();

    sleep(Duration::from_millis(10)).await;
    assert_eq!("none", get_inner_html("outside"));
    assert_eq!("http://localhost/graphql", get_inner_html("inside"));
}
