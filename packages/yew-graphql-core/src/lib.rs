mod client;
mod descriptor;
mod endpoint;
mod executor;
mod response;
mod result;
mod session;
mod state;
mod variables;

pub use {
    client::*, descriptor::*, endpoint::*, executor::*, response::*, result::*, session::*,
    state::*, variables::*,
};

//
pub mod queries;
pub mod transport;

//
pub mod error;
pub use error::{Error, QueryError};
