use serde::{Deserialize, Serialize};

use crate::{
    core::{Expandable, ListObject, Resource, impl_identified},
    resources::{Customer, PaymentType, Refund},
    types::{Address, Billing, JsonObject, Metadata, Timestamp},
};

/// A single attempt to move money into your Stripe account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    pub id: String,
    /// Always `"charge"`.
    pub object: String,
    /// Amount in the smallest currency unit, e.g. `100` cents for $1.00.
    pub amount: i64,
    pub amount_captured: i64,
    pub amount_refunded: i64,
    pub application: Option<String>,
    pub application_fee: Option<String>,
    pub application_fee_amount: Option<i64>,
    pub balance_transaction: Option<String>,
    pub billing_details: Billing,
    pub calculated_statement_descriptor: Option<String>,
    /// `false` while an uncaptured authorization is pending.
    pub captured: bool,
    pub created: Timestamp,
    /// Three-letter ISO currency code, lowercase.
    pub currency: String,
    pub customer: Option<Expandable<Customer>>,
    pub description: Option<String>,
    pub disputed: bool,
    pub failure_balance_transaction: Option<String>,
    /// Only present when `status` is `failed`.
    pub failure_code: Option<String>,
    pub failure_message: Option<String>,
    pub fraud_details: Option<FraudDetails>,
    pub invoice: Option<String>,
    pub livemode: bool,
    pub metadata: Option<Metadata>,
    pub on_behalf_of: Option<String>,
    pub outcome: Option<Outcome>,
    pub paid: bool,
    pub payment_intent: Option<String>,
    pub payment_method: Option<String>,
    pub payment_method_details: Option<PaymentMethodDetails>,
    pub radar_options: Option<RadarOptions>,
    pub receipt_email: Option<String>,
    pub receipt_number: Option<String>,
    pub receipt_url: Option<String>,
    pub refunded: bool,
    pub refunds: Option<ListObject<Refund>>,
    pub review: Option<String>,
    pub shipping: Option<ChargeShipping>,
    pub source_transfer: Option<String>,
    pub statement_descriptor: Option<String>,
    pub statement_descriptor_suffix: Option<String>,
    pub status: ChargeStatus,
    pub transfer: Option<String>,
    pub transfer_data: Option<TransferData>,
    pub transfer_group: Option<String>,
}

impl Resource for Charge {
    const SCHEMA: &'static str = "charges";
}

impl_identified!(Charge);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeStatus {
    Succeeded,
    Pending,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FraudDetails {
    /// `"fraudulent"` when Stripe Radar flagged the charge.
    pub stripe_report: Option<String>,
    /// `"safe"` or `"fraudulent"` when you reported the charge.
    pub user_report: Option<String>,
}

/// How the charge was screened and what the network said about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// e.g. `approved_by_network`, `declined_by_network`, `not_sent_to_network`.
    pub network_status: Option<String>,
    pub reason: Option<String>,
    pub risk_level: Option<String>,
    /// 0 to 99. Only reported for Radar for Fraud Teams.
    pub risk_score: Option<i64>,
    pub rule: Option<String>,
    pub seller_message: Option<String>,
    /// e.g. `authorized`, `manual_review`, `issuer_declined`, `blocked`, `invalid`.
    #[serde(rename = "type")]
    pub outcome_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarOptions {
    pub session: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeShipping {
    pub address: Option<Address>,
    pub carrier: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub tracking_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferData {
    pub amount: Option<i64>,
    /// The connected account receiving the transfer.
    pub destination: String,
}

/// Method-specific details of the payment method a charge used.
///
/// The block under the method's own key (e.g. `card`) varies per method and is kept raw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodDetails {
    #[serde(rename = "type")]
    pub method_type: PaymentType,
    #[serde(flatten)]
    pub details: JsonObject,
}

impl PaymentMethodDetails {
    /// The block keyed by the method type, e.g. `payment_method_details.card`.
    pub fn method_block(&self) -> Option<&serde_json::Value> {
        self.details.get(self.method_type.as_str())
    }
}
