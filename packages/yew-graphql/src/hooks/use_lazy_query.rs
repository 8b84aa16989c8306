use super::use_query_executor;
use serde::de::DeserializeOwned;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::{hook, use_mut_ref, use_state, Callback, UseStateHandle};
use yew_graphql_core::{ErrorInfo, QueryDescriptor, QueryResult, QueryState, Variables};

/// A handle to an operation that runs on demand.
pub struct UseLazyQueryHandle<T> {
    run: Callback<Variables>,
    state: UseStateHandle<QueryState>,
    data: UseStateHandle<Option<Rc<T>>>,
}

impl<T> UseLazyQueryHandle<T> {
    /// Runs the operation with the given variables.
    ///
    /// Only the result of the latest run is kept.
    pub fn run(&self, variables: Variables) {
        self.run.emit(variables);
    }

    /// Returns the callback that runs the operation.
    pub fn callback(&self) -> Callback<Variables> {
        self.run.clone()
    }

    /// Returns the data of the last successful run, `None` if it was `null`.
    pub fn data(&self) -> Option<&T> {
        self.data.as_deref()
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        self.state.error()
    }

    pub fn is_idle(&self) -> bool {
        self.state.is_idle()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn is_ready(&self) -> bool {
        self.state.is_ready()
    }

    pub fn is_failed(&self) -> bool {
        self.state.is_failed()
    }
}

impl<T> Clone for UseLazyQueryHandle<T> {
    fn clone(&self) -> Self {
        Self {
            run: self.run.clone(),
            state: self.state.clone(),
            data: self.data.clone(),
        }
    }
}

/// Returns a handle that executes the operation each time it is run and
/// keeps the outcome as component state.
#[hook]
pub fn use_lazy_query<T>(descriptor: QueryDescriptor) -> UseLazyQueryHandle<T>
where
    T: DeserializeOwned + 'static,
{
    let executor = use_query_executor::<T>(descriptor);
    let state = use_state(|| QueryState::Idle);
    let data = use_state(|| None::<Rc<T>>);
    let latest_id = use_mut_ref(|| 0_u32);

    let run = {
        let state = state.clone();
        let data = data.clone();

        Callback::from(move |variables: Variables| {
            let self_id = {
                let mut latest_id = latest_id.borrow_mut();
                *latest_id = latest_id.wrapping_add(1);
                *latest_id
            };

            let executor = executor.clone();
            let state = state.clone();
            let data = data.clone();
            let latest_id = latest_id.clone();

            state.set(QueryState::Loading);

            spawn_local(async move {
                let ret = executor.execute(variables).await;

                if *latest_id.borrow() != self_id {
                    log::trace!("discarding outdated result of `{}`", executor.descriptor().root_field());
                    return;
                }

                match ret {
                    QueryResult::Data(value) => {
                        data.set(value.map(Rc::new));
                        state.set(QueryState::Ready);
                    }
                    QueryResult::Failed(err) => {
                        data.set(None);
                        state.set(QueryState::Failed(err));
                    }
                }
            });
        })
    };

    UseLazyQueryHandle { run, state, data }
}
