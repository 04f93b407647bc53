use mpesa_rust::{
    apis::auth::Credentials,
    client::Environment,
    configuration::{Configuration, ConfigurationBuilder},
    MpesaClient,
};

pub struct TestContext {
    pub client: MpesaClient,
    pub credentials: Credentials,
    pub configuration: Configuration,
    pub b2c_short_code: String,
    pub pay_bill_number: String,
    pub till_number: String,
}

impl TestContext {
    pub async fn start() -> Self {
        // Take the required credentials from the env
        let consumer_key = std::env::var("ACCEPTANCE_TESTS_CONSUMER_KEY").unwrap();
        let consumer_secret = std::env::var("ACCEPTANCE_TESTS_CONSUMER_SECRET").unwrap();
        let pass_key = std::env::var("ACCEPTANCE_TESTS_PASS_KEY").unwrap();
        let certificate_path = std::env::var("ACCEPTANCE_TESTS_CERTIFICATE_PATH").unwrap();
        let callback_url = std::env::var("ACCEPTANCE_TESTS_CALLBACK_URL").unwrap();

        let configuration = ConfigurationBuilder::default()
            .pass_key(pass_key)
            .callback_url(callback_url)
            .security_credential_file_location(certificate_path)
            .build()
            .unwrap();

        // Configure a new MpesaClient to point to Sandbox
        let credentials = Credentials::new(consumer_key, consumer_secret);
        let client = MpesaClient::builder(credentials.clone(), configuration.clone())
            .with_environment(Environment::Sandbox)
            .build();

        Self {
            client,
            credentials,
            configuration,
            b2c_short_code: std::env::var("ACCEPTANCE_TESTS_B2C_SHORT_CODE")
                .unwrap_or_else(|_| "600981".to_string()),
            pay_bill_number: "174379".to_string(),
            till_number: std::env::var("ACCEPTANCE_TESTS_TILL_NUMBER")
                .unwrap_or_else(|_| "600981".to_string()),
        }
    }

    pub fn environment(&self) -> Environment {
        Environment::Sandbox
    }
}
