//! APIs and models related to payment prompts pushed to a customer's phone (Lipa na M-Pesa Online).

mod api;
mod model;

pub use api::StkPushApi;
pub use model::*;
