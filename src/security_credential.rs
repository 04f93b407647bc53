//! Security credentials for disbursement requests.
//!
//! The gateway authenticates the initiating business of a B2C payment with a password
//! encrypted under the RSA public key of a certificate it issued.

use crate::{apis::auth::Token, error::CredentialError, timestamp::Timestamp};
use base64::{engine::general_purpose::STANDARD, Engine};
use openssl::{rsa::Padding, x509::X509};
use std::{borrow::Cow, path::PathBuf, sync::Arc};

/// Base64 of the RSA-encrypted password, as sent in the `SecurityCredential` field.
///
/// Only valid for the timestamp it was built with, so it is never cached.
#[derive(Clone, Debug)]
pub struct SecurityCredential(Token);

impl SecurityCredential {
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

/// Plaintext password: `base64(short_code + pass_key + timestamp)`.
///
/// STK push sends it as is; disbursements encrypt it into a [`SecurityCredential`].
pub fn password(short_code: &str, pass_key: &str, timestamp: &Timestamp) -> String {
    STANDARD.encode(format!("{}{}{}", short_code, pass_key, timestamp))
}

/// Encrypts the [`password`] with the public key of `certificate` (PEM or DER encoded X.509).
pub fn sign(
    short_code: &str,
    pass_key: &str,
    timestamp: &Timestamp,
    certificate: &[u8],
) -> Result<SecurityCredential, CredentialError> {
    let certificate = X509::from_pem(certificate)
        .or_else(|_| X509::from_der(certificate))
        .map_err(CredentialError::Certificate)?;
    let rsa = certificate
        .public_key()
        .and_then(|key| key.rsa())
        .map_err(CredentialError::Certificate)?;

    let password = password(short_code, pass_key, timestamp);
    let mut ciphertext = vec![0; rsa.size() as usize];
    let len = rsa
        .public_encrypt(password.as_bytes(), &mut ciphertext, Padding::PKCS1)
        .map_err(CredentialError::Encryption)?;
    ciphertext.truncate(len);

    Ok(SecurityCredential(Token::new(STANDARD.encode(ciphertext))))
}

/// Where the gateway certificate comes from.
#[derive(Clone, Debug)]
pub(crate) enum CertificateSource {
    /// Read from disk on every signature.
    File(PathBuf),
    /// Loaded once when the client was built.
    Loaded(Arc<Vec<u8>>),
}

impl CertificateSource {
    pub(crate) async fn load(&self) -> Result<Cow<'_, [u8]>, CredentialError> {
        match self {
            CertificateSource::File(path) => tokio::fs::read(path)
                .await
                .map(Cow::Owned)
                .map_err(|source| CredentialError::Io {
                    path: path.clone(),
                    source,
                }),
            CertificateSource::Loaded(bytes) => Ok(Cow::Borrowed(bytes.as_slice())),
        }
    }

    /// Loads the certificate and signs a fresh credential with it.
    pub(crate) async fn sign(
        &self,
        short_code: &str,
        pass_key: &str,
        timestamp: &Timestamp,
    ) -> Result<SecurityCredential, CredentialError> {
        let certificate = self.load().await?;
        sign(short_code, pass_key, timestamp, &certificate)
    }
}
