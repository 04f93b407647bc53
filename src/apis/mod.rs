//! Clients for the various M-Pesa APIs.

use crate::{
    authorization::AuthorizationProvider,
    client::{endpoint, Environment},
    configuration::Configuration,
    outcome::Outcome,
    security_credential::CertificateSource,
    transport, Error,
};
use reqwest_middleware::ClientWithMiddleware;
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fmt::{Debug, Formatter},
    future::Future,
    sync::Arc,
    time::Duration,
};

pub mod auth;
pub mod b2c;
pub mod c2b;
pub mod stk_push;

pub(crate) struct MpesaClientInner {
    pub(crate) client: ClientWithMiddleware,
    pub(crate) authorization: Arc<dyn AuthorizationProvider>,
    pub(crate) environment: Environment,
    pub(crate) configuration: Configuration,
    pub(crate) certificate: CertificateSource,
    pub(crate) timeout: Option<Duration>,
}

impl MpesaClientInner {
    /// Sends `payload` to the API endpoint at `path`.
    pub(crate) async fn execute<P, R>(&self, path: &str, payload: &P) -> Result<Outcome<R>, Error>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = endpoint(&self.environment.api_url(), path)?;
        transport::execute(&self.client, url, payload).await
    }

    /// Runs a whole operation under the configured deadline, if any.
    pub(crate) async fn within_deadline<F, T>(&self, operation: F) -> Result<T, Error>
    where
        F: Future<Output = Result<T, Error>>,
    {
        match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, operation)
                .await
                .map_err(|_| Error::Timeout)?,
            None => operation.await,
        }
    }
}

impl Debug for MpesaClientInner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MpesaClientInner")
            .field("environment", &self.environment)
            .field("authorization", &self.authorization)
            .finish_non_exhaustive()
    }
}
