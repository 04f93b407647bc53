use crate::{
    apis::auth::{AuthorizationResult, Credentials, Token},
    client::endpoint,
    common::AUTHORIZATION_PATH,
    error::Error,
    outcome::{normalize, Outcome},
};
use async_trait::async_trait;
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use std::fmt::{Debug, Formatter};

/// Source of the bearer tokens attached to every gateway request.
///
/// The client asks for a token once per operation and never caches it. Implement this
/// trait to plug in your own token management (a shared cache, a secrets service, ...).
#[async_trait]
pub trait AuthorizationProvider: Debug + Send + Sync {
    /// Returns a fresh access token, or the gateway's reason for refusing one.
    async fn call(&self) -> Result<Outcome<AuthorizationResult>, Error>;
}

/// Default provider: exchanges the application's consumer key and secret for an access token
/// using the gateway's client credentials grant.
#[derive(Clone)]
pub struct ClientCredentialsAuthorization {
    client: ClientWithMiddleware,
    auth_url: Url,
    credentials: Credentials,
}

impl ClientCredentialsAuthorization {
    pub fn new(client: ClientWithMiddleware, auth_url: Url, credentials: Credentials) -> Self {
        Self {
            client,
            auth_url,
            credentials,
        }
    }
}

impl Debug for ClientCredentialsAuthorization {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentialsAuthorization")
            .field("auth_url", &self.auth_url)
            .field("consumer_key", &self.credentials.consumer_key)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl AuthorizationProvider for ClientCredentialsAuthorization {
    #[tracing::instrument(name = "Get Access Token", level = "debug", skip(self))]
    async fn call(&self) -> Result<Outcome<AuthorizationResult>, Error> {
        let body = self
            .client
            .get(endpoint(&self.auth_url, AUTHORIZATION_PATH)?)
            .query(&[("grant_type", "client_credentials")])
            .basic_auth(
                &self.credentials.consumer_key,
                Some(self.credentials.consumer_secret.expose_secret()),
            )
            .send()
            .await?
            .bytes()
            .await?;

        let outcome = normalize(&body)?;
        if outcome.is_success() {
            tracing::info!("Got new access token");
        }

        Ok(outcome)
    }
}

/// Provider always returning the same externally obtained token.
#[derive(Clone, Debug)]
pub struct StaticAuthorization(Token);

impl StaticAuthorization {
    pub fn new(token: impl Into<Token>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl AuthorizationProvider for StaticAuthorization {
    async fn call(&self) -> Result<Outcome<AuthorizationResult>, Error> {
        Ok(Outcome::Success(AuthorizationResult {
            access_token: self.0.clone(),
        }))
    }
}
