//! Module containing the main M-Pesa API client.

use crate::{
    apis::{
        auth::{AuthApi, Credentials},
        b2c::B2cApi,
        c2b::C2bApi,
        stk_push::StkPushApi,
        MpesaClientInner,
    },
    authorization::{AuthorizationProvider, ClientCredentialsAuthorization},
    common::{DEFAULT_PRODUCTION_URL, DEFAULT_SANDBOX_URL},
    configuration::Configuration,
    middlewares::{
        authentication::AuthenticationMiddleware, inject_user_agent::InjectUserAgentMiddleware,
    },
    security_credential::CertificateSource,
    Error,
};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use reqwest_tracing::{DefaultSpanBackend, TracingMiddleware};
use std::{sync::Arc, time::Duration};

/// Client for the M-Pesa gateway APIs.
///
/// Every operation fetches a new access token from the configured
/// [`AuthorizationProvider`](crate::authorization::AuthorizationProvider), sends exactly one
/// request and never retries.
#[derive(Debug, Clone)]
pub struct MpesaClient {
    /// Authorization APIs client.
    pub auth: AuthApi,
    /// Business to customer (disbursement) APIs client.
    pub b2c: B2cApi,
    /// STK push (Lipa na M-Pesa Online) APIs client.
    pub stk_push: StkPushApi,
    /// Customer to business APIs client.
    pub c2b: C2bApi,
}

impl MpesaClient {
    /// Builds a new [`MpesaClient`](crate::client::MpesaClient) with the default configuration.
    pub fn new(credentials: Credentials, configuration: Configuration) -> MpesaClient {
        MpesaClientBuilder::new(credentials, configuration).build()
    }

    /// Returns a new builder to configure a new [`MpesaClient`](crate::client::MpesaClient).
    pub fn builder(credentials: Credentials, configuration: Configuration) -> MpesaClientBuilder {
        MpesaClientBuilder::new(credentials, configuration)
    }
}

/// Builder for a [`MpesaClient`](crate::client::MpesaClient).
#[derive(Debug)]
pub struct MpesaClientBuilder {
    client: reqwest::Client,
    credentials: Credentials,
    configuration: Configuration,
    environment: Environment,
    authorization: Option<Arc<dyn AuthorizationProvider>>,
    certificate: Option<Vec<u8>>,
    timeout: Option<Duration>,
}

impl MpesaClientBuilder {
    /// Creates a new builder to configure a [`MpesaClient`](crate::client::MpesaClient).
    pub fn new(credentials: Credentials, configuration: Configuration) -> Self {
        Self {
            client: reqwest::Client::new(),
            credentials,
            configuration,
            environment: Environment::Sandbox,
            authorization: None,
            certificate: None,
            timeout: None,
        }
    }

    /// Consumes the builder and builds a new [`MpesaClient`](crate::client::MpesaClient).
    pub fn build(self) -> MpesaClient {
        // Unless told otherwise, exchange the consumer credentials for tokens
        let authorization = self.authorization.unwrap_or_else(|| {
            Arc::new(ClientCredentialsAuthorization::new(
                build_client_with_middleware(self.client.clone(), None),
                self.environment.auth_url(),
                self.credentials,
            ))
        });

        let certificate = match self.certificate {
            Some(certificate) => CertificateSource::Loaded(Arc::new(certificate)),
            None => CertificateSource::File(
                self.configuration
                    .security_credential_file_location
                    .clone(),
            ),
        };

        let inner = Arc::new(MpesaClientInner {
            client: build_client_with_middleware(
                self.client,
                Some(AuthenticationMiddleware {
                    authorization: authorization.clone(),
                }),
            ),
            authorization,
            environment: self.environment,
            configuration: self.configuration,
            certificate,
            timeout: self.timeout,
        });

        MpesaClient {
            auth: AuthApi::new(inner.clone()),
            b2c: B2cApi::new(inner.clone()),
            stk_push: StkPushApi::new(inner.clone()),
            c2b: C2bApi::new(inner),
        }
    }

    /// Sets a specific reqwest [`Client`](reqwest::Client) to use.
    ///
    /// The default client verifies TLS certificates; keep it that way in production.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Sets the environment to which this client should connect.
    ///
    /// Defaults to: [`Environment::Sandbox`]
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Replaces the default client credentials exchange with a custom source of access tokens.
    pub fn with_authorization_provider(
        mut self,
        authorization: Arc<dyn AuthorizationProvider>,
    ) -> Self {
        self.authorization = Some(authorization);
        self
    }

    /// Loads the gateway certificate once, instead of reading
    /// [`security_credential_file_location`](crate::configuration::Configuration::security_credential_file_location)
    /// on every disbursement.
    pub fn with_security_certificate(mut self, certificate: Vec<u8>) -> Self {
        self.certificate = Some(certificate);
        self
    }

    /// Bounds every operation, token acquisition included.
    /// Operations exceeding it fail with [`Error::Timeout`](crate::Error::Timeout).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Gateway environment the client talks to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    /// `https://sandbox.safaricom.co.ke`
    Sandbox,
    /// `https://api.safaricom.co.ke`
    Production,
    /// Custom base URLs, e.g. a proxy or a local mock.
    Custom { auth_url: Url, api_url: Url },
}

impl Environment {
    /// Uses the same base URL for authorization and API calls.
    pub fn from_single_url(url: &Url) -> Self {
        Environment::Custom {
            auth_url: url.clone(),
            api_url: url.clone(),
        }
    }

    pub fn auth_url(&self) -> Url {
        match self {
            Environment::Custom { auth_url, .. } => auth_url.clone(),
            _ => self.api_url(),
        }
    }

    pub fn api_url(&self) -> Url {
        match self {
            Environment::Sandbox => Url::parse(DEFAULT_SANDBOX_URL).unwrap(),
            Environment::Production => Url::parse(DEFAULT_PRODUCTION_URL).unwrap(),
            Environment::Custom { api_url, .. } => api_url.clone(),
        }
    }
}

/// Joins an endpoint path onto a base URL.
pub(crate) fn endpoint(base: &Url, path: &str) -> Result<Url, Error> {
    base.join(path).map_err(|e| Error::Other(e.into()))
}

fn build_client_with_middleware(
    client: reqwest::Client,
    auth_middleware: Option<AuthenticationMiddleware>,
) -> ClientWithMiddleware {
    let mut builder = reqwest_middleware::ClientBuilder::new(client)
        .with(TracingMiddleware::<DefaultSpanBackend>::new())
        .with(InjectUserAgentMiddleware::new());

    if let Some(auth_middleware) = auth_middleware {
        builder = builder.with(auth_middleware);
    }

    builder.build()
}
