
/// Customer phone number used by all tests, as accepted by the sandbox.
pub static TEST_PHONE_NUMBER: &str = "254708374149";
