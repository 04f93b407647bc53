//! Normalized result of every gateway operation.
//!
//! The gateway does not use HTTP status codes consistently: a business failure is
//! recognised solely by the presence of an `errorCode` key in the JSON reply.

use crate::Error;
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

/// Key whose presence marks a reply as a gateway-reported failure.
pub(crate) static ERROR_CODE_KEY: &str = "errorCode";

/// Outcome of a call that reached the gateway and got a readable reply.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome<T> {
    /// The gateway accepted the request.
    Success(T),
    /// The gateway explicitly rejected the request.
    Failure(GatewayError),
}

impl<T> Outcome<T> {
    /// Returns `true` if this is a [`Success`](Outcome::Success).
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if this is a [`Failure`](Outcome::Failure).
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Converts into the success value, discarding a failure.
    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(v) => Some(v),
            Outcome::Failure(_) => None,
        }
    }

    /// Converts into the gateway error, discarding a success.
    pub fn failure(self) -> Option<GatewayError> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(e) => Some(e),
        }
    }

    /// Maps the success value, leaving a failure untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Success(v) => Outcome::Success(f(v)),
            Outcome::Failure(e) => Outcome::Failure(e),
        }
    }

    /// Converts into a `Result`, so that gateway failures can be propagated with `?`.
    ///
    /// ```rust
    /// # use mpesa_rust::{outcome::Outcome, Error};
    /// fn accepted(outcome: Outcome<u32>) -> Result<u32, Error> {
    ///     Ok(outcome.into_result()?)
    /// }
    /// assert_eq!(accepted(Outcome::Success(1)).unwrap(), 1);
    /// ```
    pub fn into_result(self) -> Result<T, GatewayError> {
        self.into()
    }
}

impl<T> From<Outcome<T>> for Result<T, GatewayError> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(v) => Ok(v),
            Outcome::Failure(e) => Err(e),
        }
    }
}

/// Business-level failure reported by the gateway.
///
/// Numeric or boolean values are kept in their JSON text form, `null` becomes empty.
#[derive(thiserror::Error, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GatewayError {
    #[serde(rename = "errorCode", deserialize_with = "scalar_as_string")]
    pub error_code: String,
    /// Absent from some replies, in which case it is empty.
    #[serde(rename = "errorMessage", default, deserialize_with = "scalar_as_string")]
    pub error_message: String,
    #[serde(rename = "requestId", default, deserialize_with = "scalar_as_string")]
    pub request_id: String,
}

fn scalar_as_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "M-Pesa gateway error {}: {}",
            self.error_code, self.error_message
        )?;

        if !self.request_id.is_empty() {
            write!(f, "\nRequest ID: {}", self.request_id)?;
        }

        Ok(())
    }
}

/// Parses a raw reply body into an [`Outcome`].
///
/// Any reply carrying `errorCode` is a failure, whatever the type of its value. Returns
/// [`Error::ParseError`] if the body is not JSON, or is JSON that `T` cannot be read from.
pub(crate) fn normalize<T: DeserializeOwned>(body: &[u8]) -> Result<Outcome<T>, Error> {
    let value: Value = serde_json::from_slice(body).map_err(|e| Error::parse(e, body))?;

    if value.get(ERROR_CODE_KEY).is_some() {
        let error: GatewayError =
            serde_json::from_value(value).map_err(|e| Error::parse(e, body))?;
        tracing::debug!(
            error_code = %error.error_code,
            request_id = %error.request_id,
            "Gateway reported a failure"
        );
        return Ok(Outcome::Failure(error));
    }

    serde_json::from_value(value)
        .map(Outcome::Success)
        .map_err(|e| Error::parse(e, body))
}
