use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

/// Consumer key and secret of a gateway application, used to obtain access tokens.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: Token,
}

impl Credentials {
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<Token>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
        }
    }
}

/// Successful reply of the authorization endpoint.
///
/// Other fields sent by the gateway (like `expires_in`) are ignored, because tokens
/// are never cached by this client.
#[derive(Deserialize, Clone, Debug)]
pub struct AuthorizationResult {
    pub access_token: Token,
}

impl AuthorizationResult {
    /// Returns a reference to the bearer token returned by the authorization server.
    pub fn access_token(&self) -> &Token {
        &self.access_token
    }
}

/// Wrapper for a secret string that makes it harder to accidentally expose secrets
/// and ensures the backing memory is wiped on drop.
///
/// It is a wrapper around a [`secrecy::Secret`](secrecy::Secret).
///
/// ```rust
/// # use mpesa_rust::apis::auth::Token;
/// let token = Token::new("supersecret");
///
/// // The secret is redacted when printed with Debug
/// assert!(!format!("{:?}", token).contains("supersecret"));
///
/// // But can be manually exposed calling `expose_secret()`...
/// assert_eq!(token.expose_secret(), "supersecret");
///
/// // ... Or if serialized with Serde
/// let serialized = serde_json::to_string(&token).unwrap();
/// assert!(serialized.contains("supersecret"));
/// ```
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Token(#[serde(serialize_with = "serialize_secret")] Secret<String>);

impl Token {
    /// Wraps a secret string in a new `Token`.
    pub fn new<T: Into<String>>(s: T) -> Self {
        Self(Secret::new(s.into()))
    }

    /// Exposes a reference to the underlying secret string.
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl<T> From<T> for Token
where
    T: Into<String>,
{
    fn from(s: T) -> Self {
        Token::new(s)
    }
}

fn serialize_secret<S>(secret: &Secret<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::ser::Serializer,
{
    secret.expose_secret().serialize(serializer)
}
