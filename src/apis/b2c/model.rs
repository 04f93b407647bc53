use crate::{configuration::Configuration, security_credential::SecurityCredential};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameters of a business to customer payment.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct B2cPaymentRequest {
    /// Whole currency units.
    pub amount: u64,
    /// Receiving customer, e.g. `254700000000`.
    pub phone_number: String,
    /// Short code of the paying business.
    pub short_code: String,
    pub command_id: CommandId,
    pub remarks: String,
    #[builder(default)]
    pub occasion: String,
}

/// Kind of disbursement.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    SalaryPayment,
    BusinessPayment,
    PromotionPayment,
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CommandId::SalaryPayment => "SalaryPayment",
            CommandId::BusinessPayment => "BusinessPayment",
            CommandId::PromotionPayment => "PromotionPayment",
        };
        f.write_str(s)
    }
}

/// Wire body of `POST /mpesa/b2c/v1/paymentrequest`.
#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct B2cPaymentPayload<'a> {
    initiator_name: &'a str,
    security_credential: &'a str,
    #[serde(rename = "CommandID")]
    command_id: CommandId,
    amount: u64,
    party_a: &'a str,
    party_b: &'a str,
    remarks: &'a str,
    #[serde(rename = "QueueTimeOutURL")]
    queue_timeout_url: &'a str,
    #[serde(rename = "ResultURL")]
    result_url: &'a str,
    occasion: &'a str,
}

impl B2cPaymentRequest {
    pub(crate) fn payload<'a>(
        &'a self,
        configuration: &'a Configuration,
        security_credential: &'a SecurityCredential,
    ) -> B2cPaymentPayload<'a> {
        B2cPaymentPayload {
            initiator_name: &configuration.initiator_name,
            security_credential: security_credential.expose_secret(),
            command_id: self.command_id,
            amount: self.amount,
            party_a: &self.short_code,
            party_b: &self.phone_number,
            remarks: &self.remarks,
            queue_timeout_url: configuration.queue_timeout_url(),
            result_url: configuration.result_url(),
            occasion: &self.occasion,
        }
    }
}

/// Acknowledgement of an accepted disbursement. The actual result is delivered to the result URL.
///
/// Fields missing from the reply are `None`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct B2cPaymentResponse {
    #[serde(rename = "ConversationID")]
    pub conversation_id: Option<String>,
    #[serde(rename = "OriginatorConversationID")]
    pub originator_conversation_id: Option<String>,
    #[serde(rename = "ResponseCode")]
    pub response_code: Option<String>,
    #[serde(rename = "ResponseDescription")]
    pub response_description: Option<String>,
}
