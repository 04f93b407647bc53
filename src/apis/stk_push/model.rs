use crate::timestamp::Timestamp;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Transaction type of every STK push to a pay bill number.
pub static CUSTOMER_PAY_BILL_ONLINE: &str = "CustomerPayBillOnline";

/// Parameters of a payment prompt pushed to a customer's phone.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct StkPushRequest {
    /// Whole currency units.
    pub amount: u64,
    /// Customer to prompt, e.g. `254708374149`.
    pub phone_number: String,
    /// Account the payment is made against, shown to the customer.
    pub account_number: String,
    /// Pay bill number receiving the payment.
    pub pay_bill_number: String,
    #[builder(default = "\"Payment of X\".to_string()")]
    pub transaction_desc: String,
}

/// Wire body of `POST /mpesa/stkpush/v1/processrequest`.
#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct StkPushPayload<'a> {
    business_short_code: &'a str,
    password: String,
    timestamp: &'a str,
    transaction_type: &'static str,
    amount: u64,
    party_a: &'a str,
    party_b: &'a str,
    phone_number: &'a str,
    #[serde(rename = "CallBackURL")]
    callback_url: &'a str,
    account_reference: &'a str,
    transaction_desc: &'a str,
}

impl StkPushRequest {
    pub(crate) fn payload<'a>(
        &'a self,
        pass_key: &str,
        callback_url: &'a str,
        timestamp: &'a Timestamp,
    ) -> StkPushPayload<'a> {
        StkPushPayload {
            business_short_code: &self.pay_bill_number,
            password: crate::security_credential::password(
                &self.pay_bill_number,
                pass_key,
                timestamp,
            ),
            timestamp: timestamp.as_str(),
            transaction_type: CUSTOMER_PAY_BILL_ONLINE,
            amount: self.amount,
            party_a: &self.phone_number,
            party_b: &self.pay_bill_number,
            phone_number: &self.phone_number,
            callback_url,
            account_reference: &self.account_number,
            transaction_desc: &self.transaction_desc,
        }
    }
}

/// Acknowledgement of a prompt sent to the customer.
///
/// Fields missing from the reply are `None`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StkPushResponse {
    #[serde(rename = "MerchantRequestID")]
    pub merchant_request_id: Option<String>,
    #[serde(rename = "CheckoutRequestID")]
    pub checkout_request_id: Option<String>,
    #[serde(rename = "ResponseCode")]
    pub response_code: Option<String>,
    #[serde(rename = "ResponseDescription")]
    pub response_description: Option<String>,
    #[serde(rename = "CustomerMessage")]
    pub customer_message: Option<String>,
}
