use crate::common::{test_context::TestContext, TEST_PHONE_NUMBER};
use mpesa_rust::apis::c2b::{
    RegisterUrlsRequestBuilder, ResponseType, SimulateRequest, SimulateRequestBuilder,
};

fn simulate_request(ctx: &TestContext, amount: u64, phone_number: &str) -> SimulateRequest {
    SimulateRequestBuilder::default()
        .amount(amount)
        .phone_number(phone_number)
        .till_number(ctx.till_number.clone())
        .build()
        .unwrap()
}

#[tokio::test]
async fn register_urls() {
    let ctx = TestContext::start().await;

    let res = ctx
        .client
        .c2b
        .register_urls(
            &RegisterUrlsRequestBuilder::default()
                .short_code(ctx.till_number.clone())
                .response_type(ResponseType::Completed)
                .confirmation_url("https://mock.callback.uri/confirmation")
                .validation_url("https://mock.callback.uri/validation")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    let res = res.success().unwrap();
    assert_eq!(res.response_code.as_deref(), Some("0"));
    // Read from the misspelled field sent by the gateway
    assert!(res.originator_conversation_id.is_some());
}

#[tokio::test]
async fn simulate() {
    let ctx = TestContext::start().await;

    let res = ctx
        .client
        .c2b
        .simulate(&simulate_request(&ctx, 1, TEST_PHONE_NUMBER))
        .await
        .unwrap();

    let res = res.success().unwrap();
    // The sandbox only sends a misspelled originator conversation id
    assert_eq!(res.response_code.as_deref(), Some("0"));
    assert!(res.checkout_request_id.is_some());
    assert!(res.customer_message.is_none());
}

#[cfg(not(feature = "acceptance-tests"))]
mod mock_only {
    use super::*;
    use crate::common::mock_server::{MOCK_REJECTED_AMOUNT, MOCK_UNAVAILABLE_MSISDN};
    use mpesa_rust::Error;

    #[tokio::test]
    async fn register_urls_rejected() {
        let ctx = TestContext::start().await;

        let res = ctx
            .client
            .c2b
            .register_urls(
                &RegisterUrlsRequestBuilder::default()
                    .short_code(ctx.till_number.clone())
                    .response_type(ResponseType::Cancelled)
                    .confirmation_url("http://insecure.uri/confirmation")
                    .validation_url("http://insecure.uri/validation")
                    .build()
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.failure().unwrap().error_code, "400.003.02");
    }

    #[tokio::test]
    async fn simulate_rejected() {
        let ctx = TestContext::start().await;

        let res = ctx
            .client
            .c2b
            .simulate(&simulate_request(&ctx, MOCK_REJECTED_AMOUNT, TEST_PHONE_NUMBER))
            .await
            .unwrap();

        assert!(res.is_failure());
    }

    #[tokio::test]
    async fn simulate_unreadable_reply() {
        let ctx = TestContext::start().await;

        let err = ctx
            .client
            .c2b
            .simulate(&simulate_request(&ctx, 1, MOCK_UNAVAILABLE_MSISDN))
            .await
            .expect_err("Expected error");

        assert!(
            matches!(err, Error::ParseError { ref body, .. } if body.contains("Service Unavailable"))
        );
    }
}
