//! APIs and models related to customer to business payments.

mod api;
mod model;

pub use api::C2bApi;
pub use model::*;
