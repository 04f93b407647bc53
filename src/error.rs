//! Standard errors used by all functions in the crate.

use crate::outcome::GatewayError;
use std::path::PathBuf;

/// Error collecting all possible failures of the M-Pesa client.
///
/// Business-level failures reported by the gateway are *not* errors of an operation:
/// they are returned as [`Outcome::Failure`](crate::outcome::Outcome::Failure).
/// The [`GatewayError`](Error::GatewayError) variant only appears when an `Outcome`
/// is explicitly converted into a `Result`.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Network, TLS or connection failure before a response was obtained.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    /// Error returned by an M-Pesa API endpoint.
    #[error("{0}")]
    GatewayError(#[from] GatewayError),
    /// The response body could not be understood.
    #[error("Unreadable gateway response: {source}")]
    ParseError {
        source: serde_json::Error,
        /// Raw response body, lossily decoded as UTF-8.
        body: String,
    },
    /// Error building the security credential of a disbursement.
    #[error("Error building security credential: {0}")]
    CredentialError(#[from] CredentialError),
    /// The authorization provider could not produce an access token.
    #[error("Authorization failed: {0}")]
    AuthorizationError(GatewayError),
    /// The operation did not complete within the configured deadline.
    #[error("Operation timed out")]
    Timeout,
    /// Catch-all variant for unexpected errors.
    #[error(transparent)]
    Other(anyhow::Error),
}

impl Error {
    pub(crate) fn parse(source: serde_json::Error, body: &[u8]) -> Self {
        Error::ParseError {
            source,
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => Error::HttpError(e),
            reqwest_middleware::Error::Middleware(e) => {
                e.downcast::<Error>().unwrap_or_else(Error::Other)
            }
        }
    }
}

impl From<Error> for reqwest_middleware::Error {
    fn from(e: Error) -> Self {
        reqwest_middleware::Error::Middleware(e.into())
    }
}

/// Failure while producing a [`SecurityCredential`](crate::security_credential::SecurityCredential).
#[derive(thiserror::Error, Debug)]
pub enum CredentialError {
    /// The certificate file could not be read.
    #[error("cannot read certificate {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The certificate is not a valid X.509 certificate holding an RSA public key.
    #[error("invalid certificate: {0}")]
    Certificate(openssl::error::ErrorStack),
    /// RSA encryption of the password failed.
    #[error("encryption failed: {0}")]
    Encryption(openssl::error::ErrorStack),
}
