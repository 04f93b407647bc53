use crate::{
    apis::{
        stk_push::{StkPushRequest, StkPushResponse},
        MpesaClientInner,
    },
    common::STK_PUSH_PROCESS_REQUEST_PATH,
    outcome::Outcome,
    timestamp::Timestamp,
    Error,
};
use std::sync::Arc;

/// M-Pesa STK push APIs client.
#[derive(Clone, Debug)]
pub struct StkPushApi {
    inner: Arc<MpesaClientInner>,
}

impl StkPushApi {
    pub(crate) fn new(inner: Arc<MpesaClientInner>) -> Self {
        Self { inner }
    }

    /// Prompts the customer to pay `amount` to a pay bill number from their phone.
    ///
    /// The outcome of the prompt is posted to
    /// [`Configuration::callback_url`](crate::configuration::Configuration::callback_url).
    #[tracing::instrument(
        name = "STK Push",
        skip(self, request),
        fields(
            amount = request.amount,
            pay_bill_number = %request.pay_bill_number,
        )
    )]
    pub async fn process_request(
        &self,
        request: &StkPushRequest,
    ) -> Result<Outcome<StkPushResponse>, Error> {
        self.inner
            .within_deadline(async {
                let configuration = &self.inner.configuration;
                let timestamp = Timestamp::now();
                let payload = request.payload(
                    configuration.pass_key.expose_secret(),
                    &configuration.callback_url,
                    &timestamp,
                );

                self.inner
                    .execute(STK_PUSH_PROCESS_REQUEST_PATH, &payload)
                    .await
            })
            .await
    }
}
