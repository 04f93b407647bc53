use crate::{authorization::AuthorizationProvider, outcome::Outcome, Error};
use async_trait::async_trait;
use reqwest::{
    header::{HeaderValue, AUTHORIZATION},
    Request, Response,
};
use reqwest_middleware::{Middleware, Next};
use std::sync::Arc;
use task_local_extensions::Extensions;

/// Reqwest middleware to inject a bearer token into outgoing HTTP requests.
/// Every request fires an additional call to the authorization provider first.
pub struct AuthenticationMiddleware {
    pub(crate) authorization: Arc<dyn AuthorizationProvider>,
}

#[async_trait]
impl Middleware for AuthenticationMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        // Request an access token from the provider, aborting the call if it is refused
        let result = match self.authorization.call().await? {
            Outcome::Success(result) => result,
            Outcome::Failure(error) => return Err(Error::AuthorizationError(error).into()),
        };

        // Inject the access token as a header
        let mut header_value =
            HeaderValue::from_str(&format!("Bearer {}", result.access_token.expose_secret()))
                .map_err(|e| reqwest_middleware::Error::Middleware(e.into()))?;
        header_value.set_sensitive(true);
        req.headers_mut().insert(AUTHORIZATION, header_value);

        // Run the rest of the middlewares
        next.run(req, extensions).await
    }
}
