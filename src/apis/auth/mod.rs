//! APIs and models related to authorization.

mod api;
mod model;

pub use api::AuthApi;
pub use model::*;
