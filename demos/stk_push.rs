use anyhow::Context;
use mpesa_rust::{
    apis::{auth::Credentials, stk_push::StkPushRequestBuilder},
    client::Environment,
    configuration::Configuration,
    MpesaClient, Outcome,
};

#[derive(serde::Deserialize, Debug)]
struct Config {
    consumer_key: String,
    consumer_secret: String,
    phone_number: String,
    pay_bill_number: String,
    account_number: String,
    amount: u64,
    mpesa: Configuration,
}

impl Config {
    fn read() -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::with_name("config"))
            .build()?
            .try_deserialize()
            .context("Failed to assemble the required configuration")
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::read()?;

    // Setup M-Pesa client
    let mpesa = MpesaClient::builder(
        Credentials::new(config.consumer_key, config.consumer_secret),
        config.mpesa,
    )
    .with_environment(Environment::Sandbox)
    .build();

    let request = StkPushRequestBuilder::default()
        .amount(config.amount)
        .phone_number(config.phone_number)
        .account_number(config.account_number)
        .pay_bill_number(config.pay_bill_number)
        .build()?;

    match mpesa.stk_push.process_request(&request).await? {
        Outcome::Success(res) => {
            tracing::info!(
                "Prompt sent, checkout request {}: {}",
                res.checkout_request_id.unwrap_or_default(),
                res.customer_message.unwrap_or_default()
            );
            tracing::info!("The payment result will be posted to the callback URL");
        }
        Outcome::Failure(e) => tracing::warn!("Gateway refused the prompt: {}", e),
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Setting default subscriber failed");

    if let Err(e) = run().await {
        tracing::error!("Fatal error: {:?}", e);
        std::process::exit(1);
    }
}
