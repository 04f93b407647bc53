//! Read-only settings shared by all operations of a client.

use crate::apis::auth::Token;
use derive_builder::Builder;
use serde::Deserialize;
use std::path::PathBuf;

/// Initiator name sent with disbursements when none is configured.
pub static DEFAULT_INITIATOR_NAME: &str = "M-pesa Gem";

/// Gateway settings of the business using the client.
///
/// Can be deserialized (e.g. from a configuration file) or built in code:
///
/// ```rust
/// # use mpesa_rust::configuration::ConfigurationBuilder;
/// let configuration = ConfigurationBuilder::default()
///     .pass_key("bfb279f9aa9bdbcf158e97dd71a467cd2e0c893059b10f78e6b72ada1ed2c919")
///     .callback_url("https://example.com/mpesa/callback")
///     .security_credential_file_location("certs/SandboxCertificate.cer")
///     .build()
///     .unwrap();
///
/// assert_eq!(configuration.result_url(), "https://example.com/mpesa/callback");
/// ```
#[derive(Deserialize, Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Configuration {
    /// Lipa na M-Pesa pass key, mixed into every password.
    pub pass_key: Token,
    /// URL receiving asynchronous results of STK push requests.
    pub callback_url: String,
    /// Path of the gateway's X.509 certificate, used to encrypt disbursement credentials.
    pub security_credential_file_location: PathBuf,
    #[serde(default = "default_initiator_name")]
    #[builder(default = "DEFAULT_INITIATOR_NAME.to_string()")]
    pub initiator_name: String,
    /// URL receiving disbursement results. Defaults to `callback_url`.
    #[serde(default)]
    #[builder(default, setter(into, strip_option))]
    pub result_url: Option<String>,
    /// URL notified when a disbursement times out in the gateway queue. Defaults to `callback_url`.
    #[serde(default)]
    #[builder(default, setter(into, strip_option))]
    pub queue_timeout_url: Option<String>,
}

impl Configuration {
    pub fn result_url(&self) -> &str {
        self.result_url.as_deref().unwrap_or(&self.callback_url)
    }

    pub fn queue_timeout_url(&self) -> &str {
        self.queue_timeout_url
            .as_deref()
            .unwrap_or(&self.callback_url)
    }
}

fn default_initiator_name() -> String {
    DEFAULT_INITIATOR_NAME.to_string()
}
