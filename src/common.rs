// Default URLs
pub static DEFAULT_SANDBOX_URL: &str = "https://sandbox.safaricom.co.ke";
pub static DEFAULT_PRODUCTION_URL: &str = "https://api.safaricom.co.ke";

// Endpoint paths
pub static AUTHORIZATION_PATH: &str = "/oauth/v1/generate";
pub static B2C_PAYMENT_REQUEST_PATH: &str = "/mpesa/b2c/v1/paymentrequest";
pub static STK_PUSH_PROCESS_REQUEST_PATH: &str = "/mpesa/stkpush/v1/processrequest";
pub static C2B_REGISTER_URL_PATH: &str = "/mpesa/c2b/v1/registerurl";
pub static C2B_SIMULATE_PATH: &str = "/mpesa/c2b/v1/simulate";
