mod context;
mod hooks;

pub use context::*;
pub use hooks::*;

pub use yew_graphql_core::*;
