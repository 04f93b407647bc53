//! An asynchronous Rust client for the [M-Pesa](https://developer.safaricom.co.ke) Daraja
//! payment gateway.
//!
//! # Usage
//!
//! ## Prerequisites
//!
//! Create an application on the [Daraja portal](https://developer.safaricom.co.ke) to obtain a
//! consumer key and secret, the pass key of your short code, and the public certificate used
//! to encrypt security credentials for disbursements.
//!
//! ## Initialize a new `MpesaClient`
//!
//! ```rust,no_run
//! # use mpesa_rust::{MpesaClient, apis::auth::Credentials, configuration::ConfigurationBuilder};
//! let configuration = ConfigurationBuilder::default()
//!     .pass_key("my-pass-key")
//!     .callback_url("https://my.callback.uri/mpesa")
//!     .security_credential_file_location("cert.cer")
//!     .build()
//!     .unwrap();
//!
//! let mpesa = MpesaClient::new(
//!     Credentials::new("my-consumer-key", "my-consumer-secret"),
//!     configuration,
//! );
//! ```
//!
//! By default, a `MpesaClient` connects to the Sandbox environment.
//! To go live, use [`with_environment(Environment::Production)`](crate::client::MpesaClientBuilder::with_environment).
//!
//! ## Prompt a customer to pay
//!
//! ```rust,no_run
//! # use mpesa_rust::{MpesaClient, Error, Outcome, apis::stk_push::*};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let mpesa: MpesaClient = unreachable!();
//! #
//! let request = StkPushRequestBuilder::default()
//!     .amount(10u64)
//!     .phone_number("254708374149")
//!     .account_number("INV001")
//!     .pay_bill_number("174379")
//!     .build()
//!     .unwrap();
//!
//! match mpesa.stk_push.process_request(&request).await? {
//!     Outcome::Success(res) => println!("Prompt sent: {:?}", res.checkout_request_id),
//!     Outcome::Failure(e) => println!("Gateway refused the prompt: {}", e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Pay a customer
//!
//! ```rust,no_run
//! # use mpesa_rust::{MpesaClient, Error, apis::b2c::*};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let mpesa: MpesaClient = unreachable!();
//! #
//! let request = B2cPaymentRequestBuilder::default()
//!     .amount(250u64)
//!     .phone_number("254708374149")
//!     .short_code("600981")
//!     .command_id(CommandId::BusinessPayment)
//!     .remarks("Refund")
//!     .build()
//!     .unwrap();
//!
//! let res = mpesa.b2c.payment_request(&request).await?;
//! if let Some(res) = res.success() {
//!     println!("Disbursement accepted: {:?}", res.conversation_id);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Every operation returns `Result<Outcome<T>, Error>`. A reply carrying an `errorCode` is a
//! [`Outcome::Failure`]; anything that prevented a usable reply (network, unparseable body,
//! unreadable certificate, refused token, deadline) is an [`Error`].
//!
//! ## More examples
//!
//! Look into the [`demos`](../demos) for runnable programs, e.g.:
//!
//! ```shell
//! cargo run --example stk_push
//! ```

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod apis;
pub mod authorization;
pub mod client;
mod common;
pub mod configuration;
pub mod error;
mod middlewares;
pub mod outcome;
pub mod security_credential;
pub mod timestamp;
mod transport;

pub use client::MpesaClient;
pub use error::Error;
pub use outcome::{GatewayError, Outcome};
