//! APIs and models related to business to customer payments.

mod api;
mod model;

pub use api::B2cApi;
pub use model::*;
