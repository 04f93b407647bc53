use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Command of every simulated customer payment to a till number.
pub static CUSTOMER_BUY_GOODS_ONLINE: &str = "CustomerBuyGoodsOnline";

/// What the gateway does with a payment when the validation URL cannot be reached.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseType {
    Cancelled,
    Completed,
}

/// Confirmation and validation callbacks to register for a short code.
#[derive(Serialize, Debug, Clone, Builder)]
#[builder(setter(into))]
#[serde(rename_all = "PascalCase")]
pub struct RegisterUrlsRequest {
    pub short_code: String,
    pub response_type: ResponseType,
    #[serde(rename = "ConfirmationURL")]
    pub confirmation_url: String,
    #[serde(rename = "ValidationURL")]
    pub validation_url: String,
}

/// Acknowledgement of a callback registration.
///
/// Fields missing from the reply are `None`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "RawRegisterUrlsResponse")]
pub struct RegisterUrlsResponse {
    pub originator_conversation_id: Option<String>,
    pub response_code: Option<String>,
    pub response_description: Option<String>,
}

/// The gateway has been seen to misspell the originator conversation id in more than one
/// way. Every spelling is its own field so a reply carrying several still deserializes.
#[derive(Deserialize)]
struct RawRegisterUrlsResponse {
    #[serde(rename = "OriginatorConversationID")]
    originator_conversation_id: Option<String>,
    #[serde(rename = "OriginatorCoversationID")]
    originator_coversation_id: Option<String>,
    #[serde(rename = "OriginatorConverstionID")]
    originator_converstion_id: Option<String>,
    #[serde(rename = "ResponseCode")]
    response_code: Option<String>,
    #[serde(rename = "ResponseDescription")]
    response_description: Option<String>,
}

impl From<RawRegisterUrlsResponse> for RegisterUrlsResponse {
    fn from(raw: RawRegisterUrlsResponse) -> Self {
        Self {
            originator_conversation_id: raw
                .originator_conversation_id
                .or(raw.originator_coversation_id)
                .or(raw.originator_converstion_id),
            response_code: raw.response_code,
            response_description: raw.response_description,
        }
    }
}

/// A customer payment to a till number, only honoured by the sandbox.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct SimulateRequest {
    /// Whole currency units.
    pub amount: u64,
    /// Paying customer.
    pub phone_number: String,
    /// Till number receiving the payment.
    pub till_number: String,
}

/// Wire body of `POST /mpesa/c2b/v1/simulate`.
#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct SimulatePayload<'a> {
    short_code: &'a str,
    #[serde(rename = "CommandID")]
    command_id: &'static str,
    amount: u64,
    msisdn: &'a str,
}

impl SimulateRequest {
    pub(crate) fn payload(&self) -> SimulatePayload<'_> {
        SimulatePayload {
            short_code: &self.till_number,
            command_id: CUSTOMER_BUY_GOODS_ONLINE,
            amount: self.amount,
            msisdn: &self.phone_number,
        }
    }
}

/// Acknowledgement of a simulated payment.
///
/// Fields missing from the reply are `None`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "RawSimulateResponse")]
pub struct SimulateResponse {
    pub merchant_request_id: Option<String>,
    pub checkout_request_id: Option<String>,
    pub response_code: Option<String>,
    pub response_description: Option<String>,
    pub customer_message: Option<String>,
}

/// The live gateway labels the two identifiers as conversation IDs, sometimes misspelt.
/// The documented names take precedence when a reply carries more than one.
#[derive(Deserialize)]
struct RawSimulateResponse {
    #[serde(rename = "MerchantRequestID")]
    merchant_request_id: Option<String>,
    #[serde(rename = "ConversationID")]
    conversation_id: Option<String>,
    #[serde(rename = "CheckoutRequestID")]
    checkout_request_id: Option<String>,
    #[serde(rename = "OriginatorConversationID")]
    originator_conversation_id: Option<String>,
    #[serde(rename = "OriginatorCoversationID")]
    originator_coversation_id: Option<String>,
    #[serde(rename = "ResponseCode")]
    response_code: Option<String>,
    #[serde(rename = "ResponseDescription")]
    response_description: Option<String>,
    #[serde(rename = "CustomerMessage")]
    customer_message: Option<String>,
}

impl From<RawSimulateResponse> for SimulateResponse {
    fn from(raw: RawSimulateResponse) -> Self {
        Self {
            merchant_request_id: raw.merchant_request_id.or(raw.conversation_id),
            checkout_request_id: raw
                .checkout_request_id
                .or(raw.originator_conversation_id)
                .or(raw.originator_coversation_id),
            response_code: raw.response_code,
            response_description: raw.response_description,
            customer_message: raw.customer_message,
        }
    }
}
