use crate::common::{test_context::TestContext, TEST_PHONE_NUMBER};
use mpesa_rust::{
    apis::stk_push::{StkPushRequest, StkPushRequestBuilder},
    Outcome,
};

fn stk_push_request(ctx: &TestContext, amount: u64) -> StkPushRequest {
    StkPushRequestBuilder::default()
        .amount(amount)
        .phone_number(TEST_PHONE_NUMBER)
        .account_number("INV001")
        .pay_bill_number(ctx.pay_bill_number.clone())
        .build()
        .unwrap()
}

#[tokio::test]
async fn process_request() {
    let ctx = TestContext::start().await;

    let res = ctx
        .client
        .stk_push
        .process_request(&stk_push_request(&ctx, 1))
        .await
        .unwrap();

    match res {
        Outcome::Success(res) => {
            assert_eq!(res.response_code.as_deref(), Some("0"));
            assert!(res.checkout_request_id.is_some());
            assert!(res.merchant_request_id.is_some());
        }
        Outcome::Failure(e) => panic!("Unexpected gateway error: {}", e),
    }
}

#[tokio::test]
async fn process_request_twice_gets_distinct_checkout_requests() {
    let ctx = TestContext::start().await;
    let request = stk_push_request(&ctx, 1);

    let first = ctx.client.stk_push.process_request(&request).await.unwrap();
    let second = ctx.client.stk_push.process_request(&request).await.unwrap();

    assert_ne!(
        first.success().unwrap().checkout_request_id,
        second.success().unwrap().checkout_request_id
    );
}

#[cfg(not(feature = "acceptance-tests"))]
#[tokio::test]
async fn process_request_twice_uses_fresh_tokens_and_passwords() {
    let ctx = TestContext::start().await;
    let request = stk_push_request(&ctx, 1);

    assert!(ctx
        .client
        .stk_push
        .process_request(&request)
        .await
        .unwrap()
        .is_success());
    // Timestamps have a one second resolution
    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;
    assert!(ctx
        .client
        .stk_push
        .process_request(&request)
        .await
        .unwrap()
        .is_success());

    let received = ctx.received_requests("/mpesa/stkpush/v1/processrequest");
    assert_eq!(received.len(), 2);
    assert_ne!(received[0].access_token, received[1].access_token);
    assert_ne!(received[0].body["Timestamp"], received[1].body["Timestamp"]);
    assert_ne!(received[0].body["Password"], received[1].body["Password"]);
}

#[cfg(not(feature = "acceptance-tests"))]
#[tokio::test]
async fn process_request_rejected() {
    use crate::common::mock_server::MOCK_REJECTED_AMOUNT;

    let ctx = TestContext::start().await;

    let res = ctx
        .client
        .stk_push
        .process_request(&stk_push_request(&ctx, MOCK_REJECTED_AMOUNT))
        .await
        .unwrap();

    let error = res.failure().unwrap();
    assert_eq!(error.error_code, "400.002.02");
    assert_eq!(error.error_message, "Bad Request - Invalid Amount");
    assert!(!error.request_id.is_empty());
}

#[tokio::test]
async fn concurrent_requests_share_one_client() {
    let ctx = TestContext::start().await;
    let requests = (1..=5)
        .map(|amount| stk_push_request(&ctx, amount))
        .collect::<Vec<_>>();

    let outcomes = futures::future::try_join_all(
        requests
            .iter()
            .map(|request| ctx.client.stk_push.process_request(request)),
    )
    .await
    .unwrap();

    assert_eq!(outcomes.len(), 5);
    assert!(outcomes.iter().all(|outcome| outcome.is_success()));
}
