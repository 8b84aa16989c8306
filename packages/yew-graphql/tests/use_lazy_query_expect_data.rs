#![cfg(target_arch = "wasm32")]

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

mod common;

use common::*;
use std::time::Duration;
use wasm_bindgen_test::wasm_bindgen_test;
use yew::platform::time::sleep;
use yew_graphql::{
    queries::{get_pipeline_api_keys, PipelineApiKey},
    use_lazy_query, GraphQLClient, GraphQLClientProvider, Session, Variables,
};

const BODY: &str = r#"{
    "data": {
        "getPipelineApiKeys": [{
            "triggerID": "t1",
            "apiKey": "{authorization}",
            "apiKeyTail": "tail",
            "pipelineID": "p1",
            "environmentID": "e1",
            "expiresAt": null
        }]
    }
}"#;

#[yew::function_component]
fn AppTest() -> yew::Html {
    let client = GraphQLClient::builder()
        .endpoint("http://localhost/graphql")
        .session(Session::with_token("abc"))
        .transport(StaticTransport {
            status: 200,
            body: BODY,
        })
        .build();

    yew::html! {
        <GraphQLClientProvider client={client}>
            <UseLazyQueryComponent/>
        </GraphQLClientProvider>
    }
}

#[yew::function_component]
fn UseLazyQueryComponent() -> yew::Html {
    let query = use_lazy_query::<Vec<PipelineApiKey>>(get_pipeline_api_keys().clone());

    {
        let run = query.callback();
        yew::use_effect_with_deps(
            move |_| {
                run.emit(
                    Variables::new()
                        .with("pipelineID", "p1")
                        .with("environmentID", "e1"),
                );
            },
            (),
        );
    }

    if let Some(err) = query.error() {
        return yew::html! { <div id="result">{err.to_string()}</div> };
    }

    match query.data() {
        Some(keys) => yew::html! {
            <div id="result">{ keys.iter().map(|k| k.api_key.clone()).collect::<Vec<_>>().join(",") }</div>
        },
        None => yew::html! { <div id="result">{"Loading..."}</div> },
    }
}

#[wasm_bindgen_test]
async fn use_lazy_query_expect_data() {
    yew::Renderer::<AppTest>::with_root(
        gloo_utils::document().get_element_by_id("output").unwrap(),
    )
    .render();

    sleep(Duration::from_millis(10)).await;
    let result = get_inner_html("result");
    assert_eq!("Bearer abc", result);
}
