mod use_graphql_client;
mod use_lazy_query;
mod use_query_executor;

pub use use_graphql_client::*;
pub use use_lazy_query::*;
pub use use_query_executor::*;
