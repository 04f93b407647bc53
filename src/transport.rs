//! The request/response round trip shared by every gateway operation.

use crate::{
    outcome::{normalize, Outcome},
    Error,
};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use serde::{de::DeserializeOwned, Serialize};

/// POSTs `payload` as JSON to `url` and normalizes the reply.
///
/// The bearer token is attached by the client's authentication middleware. The HTTP
/// status is only logged: whether the call failed is decided by the body alone.
pub(crate) async fn execute<P, R>(
    client: &ClientWithMiddleware,
    url: Url,
    payload: &P,
) -> Result<Outcome<R>, Error>
where
    P: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let response = client.post(url).json(payload).send().await?;
    let status = response.status();
    let body = response.bytes().await?;

    tracing::debug!(status = status.as_u16(), len = body.len(), "Gateway replied");

    normalize(&body)
}
