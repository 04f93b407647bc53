use crate::common::{test_context::TestContext, TEST_PHONE_NUMBER};
use mpesa_rust::{
    apis::b2c::{B2cPaymentRequest, B2cPaymentRequestBuilder, CommandId},
    error::CredentialError,
    Error, MpesaClient,
};

fn b2c_payment_request(ctx: &TestContext, amount: u64, command_id: CommandId) -> B2cPaymentRequest {
    B2cPaymentRequestBuilder::default()
        .amount(amount)
        .phone_number(TEST_PHONE_NUMBER)
        .short_code(ctx.b2c_short_code.clone())
        .command_id(command_id)
        .remarks("Integration test")
        .build()
        .unwrap()
}

#[tokio::test]
async fn payment_request() {
    let ctx = TestContext::start().await;

    for command_id in [
        CommandId::SalaryPayment,
        CommandId::BusinessPayment,
        CommandId::PromotionPayment,
    ] {
        let res = ctx
            .client
            .b2c
            .payment_request(&b2c_payment_request(&ctx, 10, command_id))
            .await
            .unwrap();

        let res = res.into_result().unwrap();
        assert_eq!(res.response_code.as_deref(), Some("0"), "{}", command_id);
        assert!(res.conversation_id.is_some());
        assert!(res.originator_conversation_id.is_some());
    }
}

#[tokio::test]
async fn payment_request_with_preloaded_certificate() {
    let ctx = TestContext::start().await;
    let certificate = tokio::fs::read(&ctx.configuration.security_credential_file_location)
        .await
        .unwrap();

    let client = MpesaClient::builder(ctx.credentials.clone(), ctx.configuration.clone())
        .with_environment(ctx.environment())
        .with_security_certificate(certificate)
        .build();

    let res = client
        .b2c
        .payment_request(&b2c_payment_request(&ctx, 10, CommandId::BusinessPayment))
        .await
        .unwrap();

    assert!(res.is_success());
}

#[tokio::test]
async fn missing_certificate_fails_before_sending() {
    let ctx = TestContext::start().await;
    let mut configuration = ctx.configuration.clone();
    configuration.security_credential_file_location = "/does/not/exist.cer".into();

    let client = MpesaClient::builder(ctx.credentials.clone(), configuration)
        .with_environment(ctx.environment())
        .build();

    let err = client
        .b2c
        .payment_request(&b2c_payment_request(&ctx, 10, CommandId::BusinessPayment))
        .await
        .expect_err("Expected error");

    assert!(matches!(
        err,
        Error::CredentialError(CredentialError::Io { .. })
    ));
}

#[cfg(not(feature = "acceptance-tests"))]
#[tokio::test]
async fn payment_request_rejected() {
    use crate::common::mock_server::MOCK_REJECTED_AMOUNT;

    let ctx = TestContext::start().await;

    let res = ctx
        .client
        .b2c
        .payment_request(&b2c_payment_request(
            &ctx,
            MOCK_REJECTED_AMOUNT,
            CommandId::SalaryPayment,
        ))
        .await
        .unwrap();

    let err: Error = res.into_result().unwrap_err().into();
    assert!(matches!(err, Error::GatewayError(e) if e.error_code == "400.002.02"));
}
