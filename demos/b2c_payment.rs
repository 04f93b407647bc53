use anyhow::Context;
use mpesa_rust::{
    apis::{
        auth::Credentials,
        b2c::{B2cPaymentRequestBuilder, CommandId},
    },
    client::Environment,
    configuration::Configuration,
    MpesaClient,
};
use std::time::Duration;

#[derive(serde::Deserialize, Debug)]
struct Config {
    consumer_key: String,
    consumer_secret: String,
    phone_number: String,
    short_code: String,
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

    // Load the certificate once instead of on every payment
    let certificate = tokio::fs::read(&config.mpesa.security_credential_file_location)
        .await
        .context("Cannot read the gateway certificate")?;

    let mpesa = MpesaClient::builder(
        Credentials::new(config.consumer_key, config.consumer_secret),
        config.mpesa,
    )
    .with_environment(Environment::Sandbox)
    .with_security_certificate(certificate)
    .with_timeout(Duration::from_secs(30))
    .build();

    let request = B2cPaymentRequestBuilder::default()
        .amount(config.amount)
        .phone_number(config.phone_number)
        .short_code(config.short_code)
        .command_id(CommandId::BusinessPayment)
        .remarks("Demo disbursement")
        .build()?;

    // Gateway refusals become errors here
    let res = mpesa.b2c.payment_request(&request).await?.into_result()?;

    tracing::info!(
        "Disbursement {} accepted: {}",
        res.conversation_id.unwrap_or_default(),
        res.response_description.unwrap_or_default()
    );

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
