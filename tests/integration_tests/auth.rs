use crate::common::{test_context::TestContext, TEST_PHONE_NUMBER};
use mpesa_rust::{
    apis::{auth::Credentials, stk_push::StkPushRequestBuilder},
    Error, MpesaClient,
};

#[tokio::test]
async fn get_access_token() {
    let ctx = TestContext::start().await;

    let access_token = ctx
        .client
        .auth
        .get_access_token()
        .await
        .unwrap()
        .success()
        .unwrap()
        .access_token()
        .clone();

    assert!(!access_token.expose_secret().is_empty());
}

#[tokio::test]
async fn invalid_credentials() {
    let ctx = TestContext::start().await;

    // Create a new client with a set of invalid credentials pointing to the same server
    let client = MpesaClient::builder(
        Credentials::new("invalid", "invalid"),
        ctx.configuration.clone(),
    )
    .with_environment(ctx.environment())
    .build();

    // The refusal is a gateway outcome when asking for the token directly...
    let outcome = client.auth.get_access_token().await.unwrap();
    assert!(outcome.is_failure());

    // ... and aborts any operation needing it
    let err = client
        .stk_push
        .process_request(
            &StkPushRequestBuilder::default()
                .amount(1u64)
                .phone_number(TEST_PHONE_NUMBER)
                .account_number("INV001")
                .pay_bill_number(ctx.pay_bill_number.clone())
                .build()
                .unwrap(),
        )
        .await
        .expect_err("Expected error");
    assert!(matches!(err, Error::AuthorizationError(_)));
}
