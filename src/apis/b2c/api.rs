use crate::{
    apis::{
        b2c::{B2cPaymentRequest, B2cPaymentResponse},
        MpesaClientInner,
    },
    common::B2C_PAYMENT_REQUEST_PATH,
    outcome::Outcome,
    timestamp::Timestamp,
    Error,
};
use std::sync::Arc;

/// M-Pesa business to customer APIs client.
#[derive(Clone, Debug)]
pub struct B2cApi {
    inner: Arc<MpesaClientInner>,
}

impl B2cApi {
    pub(crate) fn new(inner: Arc<MpesaClientInner>) -> Self {
        Self { inner }
    }

    /// Pays `amount` from a business short code to a customer's phone number.
    ///
    /// A fresh security credential is encrypted with the gateway certificate for every call.
    /// The gateway only acknowledges the request here; the final result is posted to
    /// [`Configuration::result_url`](crate::configuration::Configuration::result_url).
    #[tracing::instrument(
        name = "B2C Payment Request",
        skip(self, request),
        fields(
            amount = request.amount,
            short_code = %request.short_code,
            command_id = %request.command_id,
        )
    )]
    pub async fn payment_request(
        &self,
        request: &B2cPaymentRequest,
    ) -> Result<Outcome<B2cPaymentResponse>, Error> {
        self.inner
            .within_deadline(async {
                let configuration = &self.inner.configuration;
                let timestamp = Timestamp::now();
                let security_credential = self
                    .inner
                    .certificate
                    .sign(
                        &request.short_code,
                        configuration.pass_key.expose_secret(),
                        &timestamp,
                    )
                    .await?;

                self.inner
                    .execute(
                        B2C_PAYMENT_REQUEST_PATH,
                        &request.payload(configuration, &security_credential),
                    )
                    .await
            })
            .await
    }
}
