use crate::{
    apis::{
        c2b::{RegisterUrlsRequest, RegisterUrlsResponse, SimulateRequest, SimulateResponse},
        MpesaClientInner,
    },
    common::{C2B_REGISTER_URL_PATH, C2B_SIMULATE_PATH},
    outcome::Outcome,
    Error,
};
use std::sync::Arc;

/// M-Pesa customer to business APIs client.
#[derive(Clone, Debug)]
pub struct C2bApi {
    inner: Arc<MpesaClientInner>,
}

impl C2bApi {
    pub(crate) fn new(inner: Arc<MpesaClientInner>) -> Self {
        Self { inner }
    }

    /// Registers the URLs the gateway calls to validate and confirm customer payments
    /// to a short code.
    #[tracing::instrument(
        name = "C2B Register URLs",
        skip(self, request),
        fields(
            short_code = %request.short_code,
            response_type = ?request.response_type,
        )
    )]
    pub async fn register_urls(
        &self,
        request: &RegisterUrlsRequest,
    ) -> Result<Outcome<RegisterUrlsResponse>, Error> {
        self.inner
            .within_deadline(self.inner.execute(C2B_REGISTER_URL_PATH, request))
            .await
    }

    /// Simulates a customer paying `amount` to a till number.
    ///
    /// Only the sandbox environment supports this.
    #[tracing::instrument(
        name = "C2B Simulate",
        skip(self, request),
        fields(amount = request.amount, till_number = %request.till_number)
    )]
    pub async fn simulate(
        &self,
        request: &SimulateRequest,
    ) -> Result<Outcome<SimulateResponse>, Error> {
        self.inner
            .within_deadline(self.inner.execute(C2B_SIMULATE_PATH, &request.payload()))
            .await
    }
}
