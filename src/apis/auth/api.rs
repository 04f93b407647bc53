use crate::{
    apis::{auth::AuthorizationResult, MpesaClientInner},
    outcome::Outcome,
    Error,
};
use std::sync::Arc;

/// M-Pesa authorization API client.
#[derive(Debug, Clone)]
pub struct AuthApi {
    inner: Arc<MpesaClientInner>,
}

impl AuthApi {
    pub(crate) fn new(inner: Arc<MpesaClientInner>) -> Self {
        Self { inner }
    }

    /// Asks the configured [`AuthorizationProvider`](crate::authorization::AuthorizationProvider)
    /// for a new access token.
    ///
    /// This is the same call every operation makes before hitting the gateway.
    pub async fn get_access_token(&self) -> Result<Outcome<AuthorizationResult>, Error> {
        // Just delegate to the provider
        self.inner.authorization.call().await
    }
}
