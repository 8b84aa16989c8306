use log::Level;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_graphql::queries::{get_pipeline_api_keys, GetPipelineApiKeysInput, PipelineApiKey};
use yew_graphql::{use_lazy_query, GraphQLClient, GraphQLClientProvider, Session, Variables};

const ENDPOINT: &str = match option_env!("GRAPHQL_ENDPOINT_PRIVATE") {
    Some(url) => url,
    None => "http://localhost:9001/app/private/graphql",
};

#[derive(Properties, PartialEq)]
struct PipelineKeysProps {
    pipeline_id: AttrValue,
    environment_id: AttrValue,
}

#[function_component]
fn PipelineKeys(props: &PipelineKeysProps) -> Html {
    let query = use_lazy_query::<Vec<PipelineApiKey>>(get_pipeline_api_keys().clone());

    let load = {
        let query = query.clone();
        let input = GetPipelineApiKeysInput {
            pipeline_id: props.pipeline_id.to_string(),
            environment_id: props.environment_id.to_string(),
        };

        move |_| match Variables::from_serialize(&input) {
            Ok(variables) => query.run(variables),
            Err(err) => log::error!("{err}"),
        }
    };

    let content = if query.is_loading() {
        html! { "Loading..." }
    } else if let Some(err) = query.error() {
        html! { <p style="color: red;">{format!("Error: {err}")}</p> }
    } else {
        let keys = query.data().cloned().unwrap_or_default();

        html! {
            <ul style="list-style-type: none;">
                { keys.iter().map(|key| {
                    html! {
                        <li style="padding-bottom: 10px;">
                            <fieldset>
                                <legend>{format!("trigger: {}", key.trigger_id)}</legend>
                                <p>{format!("key: ****{}", key.api_key_tail)}</p>
                                <p>{format!("expires: {}", key.expires_at.as_deref().unwrap_or("never"))}</p>
                            </fieldset>
                        </li>
                    }
                }).collect::<Html>()}
            </ul>
        }
    };

    html! {
        <>
            <button onclick={load}>{"Load keys"}</button>
            { content }
        </>
    }
}

#[function_component]
fn App() -> Html {
    let session = use_memo(|_| Session::new(), ());
    let client = use_memo(
        |session| {
            GraphQLClient::builder()
                .endpoint(ENDPOINT)
                .session((**session).clone())
                .build()
        },
        session.clone(),
    );

    let token_input = use_node_ref();
    let set_token = {
        let session = session.clone();
        let token_input = token_input.clone();

        move |_| {
            if let Some(input) = token_input.cast::<HtmlInputElement>() {
                session.set_token(input.value());
            }
        }
    };

    html! {
        <GraphQLClientProvider client={(*client).clone()}>
            <input ref={token_input} type="password" placeholder="token" />
            <button onclick={set_token}>{"Use token"}</button>
            <PipelineKeys pipeline_id="pipeline-1" environment_id="environment-1" />
        </GraphQLClientProvider>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(Level::Trace));
    yew::Renderer::<App>::new().render();
}
