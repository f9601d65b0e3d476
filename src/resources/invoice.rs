use serde::{Deserialize, Serialize};

use crate::{
    core::{ListObject, Resource, impl_identified},
    resources::{AutomaticTaxStatus, Price, TaxAmount, TaxRate},
    types::{Address, Metadata, Shipping, Timestamp},
};

/// A statement of amounts owed by a customer, generated once or per subscription cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    /// Always `"invoice"`.
    pub object: String,
    pub account_country: Option<String>,
    pub account_name: Option<String>,
    pub account_tax_ids: Option<Vec<String>>,
    pub amount_due: i64,
    pub amount_overpaid: i64,
    pub amount_paid: i64,
    pub amount_remaining: i64,
    pub amount_shipping: i64,
    pub application: Option<String>,
    pub attempt_count: i64,
    pub attempted: bool,
    pub auto_advance: bool,
    pub automatic_tax: InvoiceAutomaticTax,
    pub billing_reason: Option<BillingReason>,
    pub collection_method: CollectionMethod,
    pub created: Timestamp,
    pub currency: String,
    pub custom_fields: Option<Vec<InvoiceCustomField>>,
    pub customer: String,
    pub customer_address: Option<Address>,
    pub customer_email: Option<String>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_shipping: Option<Shipping>,
    pub customer_tax_exempt: Option<CustomerTaxExempt>,
    pub customer_tax_ids: Option<Vec<CustomerTaxId>>,
    pub default_payment_method: Option<String>,
    pub default_source: Option<String>,
    pub default_tax_rates: Vec<TaxRate>,
    pub description: Option<String>,
    /// Discount ids, in the order they apply.
    pub discounts: Vec<String>,
    pub due_date: Option<Timestamp>,
    pub effective_at: Option<Timestamp>,
    pub ending_balance: Option<i64>,
    pub footer: Option<String>,
    pub from_invoice: Option<FromInvoice>,
    pub hosted_invoice_url: Option<String>,
    pub invoice_pdf: Option<String>,
    pub issuer: Issuer,
    pub last_finalization_error: Option<LastFinalizationError>,
    pub latest_revision: Option<String>,
    pub lines: ListObject<InvoiceLineItem>,
    pub livemode: bool,
    pub metadata: Option<Metadata>,
    pub next_payment_attempt: Option<Timestamp>,
    pub number: Option<String>,
    pub on_behalf_of: Option<String>,
    pub payment_settings: InvoicePaymentSettings,
    pub period_end: Timestamp,
    pub period_start: Timestamp,
    pub post_payment_credit_notes_amount: i64,
    pub pre_payment_credit_notes_amount: i64,
    pub receipt_number: Option<String>,
    pub rendering: Option<Rendering>,
    pub shipping_cost: Option<InvoiceShippingCost>,
    pub shipping_details: Option<Shipping>,
    pub starting_balance: i64,
    pub statement_descriptor: Option<String>,
    pub status: Option<InvoiceStatus>,
    pub status_transitions: StatusTransitions,
    pub subscription: Option<String>,
    pub subtotal: i64,
    pub subtotal_excluding_tax: Option<i64>,
    pub test_clock: Option<String>,
    pub threshold_reason: Option<ThresholdReason>,
    pub total: i64,
    pub total_discount_amounts: Option<Vec<TotalDiscountAmount>>,
    pub total_excluding_tax: Option<i64>,
    pub total_tax_amounts: Option<Vec<TotalTaxAmount>>,
    pub webhooks_delivered_at: Option<Timestamp>,
}

impl Resource for Invoice {
    const SCHEMA: &'static str = "invoices";
}

impl_identified!(Invoice);

impl Invoice {
    /// `true` when nothing is left to collect.
    pub fn is_settled(&self) -> bool {
        self.amount_remaining == 0
            && matches!(self.status, Some(InvoiceStatus::Paid | InvoiceStatus::Void))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Open,
    Paid,
    Uncollectible,
    Void,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingReason {
    AutomaticPendingInvoiceItemInvoice,
    Manual,
    QuoteAccept,
    Subscription,
    SubscriptionCreate,
    SubscriptionCycle,
    SubscriptionThreshold,
    SubscriptionUpdate,
    Upcoming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionMethod {
    ChargeAutomatically,
    SendInvoice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerTaxExempt {
    Exempt,
    None,
    Reverse,
}

/// A customer tax id as captured at the time of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerTaxId {
    /// e.g. `eu_vat`, `us_ein`.
    #[serde(rename = "type")]
    pub tax_id_type: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceAutomaticTax {
    pub enabled: bool,
    pub disabled_reason: Option<String>,
    pub liability: Option<Issuer>,
    pub status: Option<AutomaticTaxStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceCustomField {
    pub name: String,
    pub value: String,
}

/// The connected account that is liable for tax, or the platform itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issuer {
    /// Only set when `issuer_type` is `account`.
    pub account: Option<String>,
    #[serde(rename = "type")]
    pub issuer_type: IssuerType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssuerType {
    #[serde(rename = "account")]
    Account,
    #[serde(rename = "self")]
    SelfIssued,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FromInvoice {
    /// e.g. `revision`.
    pub action: String,
    pub invoice: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastFinalizationError {
    pub code: Option<String>,
    pub doc_url: Option<String>,
    pub message: Option<String>,
    pub param: Option<String>,
    #[serde(rename = "type")]
    pub error_type: FinalizationErrorType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalizationErrorType {
    ApiError,
    CardError,
    IdempotencyError,
    InvalidRequestError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoicePaymentSettings {
    pub default_mandate: Option<String>,
    /// Options keyed by payment method type. The blocks are kept raw.
    pub payment_method_options: Option<serde_json::Map<String, serde_json::Value>>,
    pub payment_method_types: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendering {
    pub amount_tax_display: Option<String>,
    pub pdf: Option<PdfRendering>,
    pub template: Option<String>,
    pub template_version: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfRendering {
    /// `a4`, `letter` or `auto`.
    pub page_size: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceShippingCost {
    pub amount_subtotal: i64,
    pub amount_tax: i64,
    pub amount_total: i64,
    pub shipping_rate: Option<String>,
    pub taxes: Option<Vec<TaxAmount>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTransitions {
    pub finalized_at: Option<Timestamp>,
    pub marked_uncollectible_at: Option<Timestamp>,
    pub paid_at: Option<Timestamp>,
    pub voided_at: Option<Timestamp>,
}

/// Why a billing threshold invoice was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdReason {
    pub amount_gte: Option<i64>,
    pub item_reasons: Vec<ItemReason>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemReason {
    pub line_item_ids: Vec<String>,
    pub usage_gte: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalDiscountAmount {
    pub amount: i64,
    /// The discount id.
    pub discount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalTaxAmount {
    pub amount: i64,
    pub inclusive: bool,
    /// The tax rate id.
    pub tax_rate: String,
}

/// One line on an invoice: an invoice item or a subscription period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    pub id: String,
    /// Always `"line_item"`.
    pub object: String,
    pub amount: i64,
    pub currency: String,
    pub description: Option<String>,
    pub discount_amounts: Option<Vec<TotalDiscountAmount>>,
    pub discountable: bool,
    pub discounts: Vec<String>,
    pub invoice: Option<String>,
    pub livemode: bool,
    pub metadata: Metadata,
    pub period: Period,
    pub price: Option<Price>,
    pub proration: bool,
    pub quantity: Option<i64>,
    pub subscription: Option<String>,
    pub subscription_item: Option<String>,
    pub tax_amounts: Option<Vec<TotalTaxAmount>>,
    pub tax_rates: Option<Vec<TaxRate>>,
    #[serde(rename = "type")]
    pub line_type: LineItemType,
}

impl_identified!(InvoiceLineItem);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemType {
    Invoiceitem,
    Subscription,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    pub end: Timestamp,
    pub start: Timestamp,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn invoice_json() -> serde_json::Value {
        json!({
            "id": "in_123",
            "object": "invoice",
            "account_country": "US",
            "account_name": "Acme",
            "amount_due": 2000,
            "amount_overpaid": 0,
            "amount_paid": 2000,
            "amount_remaining": 0,
            "amount_shipping": 0,
            "attempt_count": 1,
            "attempted": true,
            "auto_advance": false,
            "automatic_tax": {
                "enabled": true,
                "disabled_reason": null,
                "liability": { "type": "self" },
                "status": "complete"
            },
            "billing_reason": "subscription_cycle",
            "collection_method": "charge_automatically",
            "created": 1700000000,
            "currency": "usd",
            "customer": "cus_123",
            "customer_tax_exempt": "none",
            "customer_tax_ids": [{ "type": "eu_vat", "value": "DE123456789" }],
            "default_tax_rates": [],
            "description": null,
            "discounts": [],
            "issuer": { "type": "account", "account": "acct_1" },
            "lines": {
                "object": "list",
                "data": [{
                    "id": "il_1",
                    "object": "line_item",
                    "amount": 2000,
                    "currency": "usd",
                    "description": "1 x Pro plan",
                    "discountable": true,
                    "discounts": [],
                    "livemode": false,
                    "metadata": {},
                    "period": { "end": 1702592000, "start": 1700000000 },
                    "proration": false,
                    "quantity": 1,
                    "subscription": "sub_1",
                    "tax_amounts": [{ "amount": 0, "inclusive": false, "tax_rate": "txr_1" }],
                    "type": "subscription"
                }],
                "has_more": false,
                "url": "/v1/invoices/in_123/lines"
            },
            "livemode": false,
            "payment_settings": {
                "default_mandate": null,
                "payment_method_options": null,
                "payment_method_types": null
            },
            "period_end": 1700000000,
            "period_start": 1697408000,
            "post_payment_credit_notes_amount": 0,
            "pre_payment_credit_notes_amount": 0,
            "starting_balance": 0,
            "status": "paid",
            "status_transitions": {
                "finalized_at": 1700000100,
                "marked_uncollectible_at": null,
                "paid_at": 1700000200,
                "voided_at": null
            },
            "subtotal": 2000,
            "total": 2000
        })
    }

    #[test]
    fn decode_paid_invoice() {
        let invoice: Invoice = serde_json::from_value(invoice_json()).unwrap();

        assert_eq!(invoice.status, Some(InvoiceStatus::Paid));
        assert!(invoice.is_settled());
        assert_eq!(invoice.billing_reason, Some(BillingReason::SubscriptionCycle));
        assert_eq!(invoice.collection_method, CollectionMethod::ChargeAutomatically);
        assert_eq!(invoice.issuer.issuer_type, IssuerType::Account);
        assert_eq!(invoice.issuer.account.as_deref(), Some("acct_1"));
        assert_eq!(
            invoice.automatic_tax.liability.unwrap().issuer_type,
            IssuerType::SelfIssued
        );
        assert_eq!(
            invoice.automatic_tax.status,
            Some(AutomaticTaxStatus::Complete)
        );
        assert_eq!(
            invoice.customer_tax_ids.unwrap()[0].value.as_deref(),
            Some("DE123456789")
        );
        assert_eq!(invoice.status_transitions.paid_at, Some(Timestamp(1700000200)));
        assert_eq!(Invoice::SCHEMA, "invoices");
    }

    #[test]
    fn decode_line_items() {
        let invoice: Invoice = serde_json::from_value(invoice_json()).unwrap();
        let line = &invoice.lines.data[0];

        assert_eq!(line.line_type, LineItemType::Subscription);
        assert_eq!(line.period.start, Timestamp(1700000000));
        assert_eq!(line.tax_amounts.as_ref().unwrap()[0].tax_rate, "txr_1");
        assert_eq!(line.price, None);
    }

    #[test]
    fn finalization_error_type_is_closed() {
        let error: LastFinalizationError = serde_json::from_value(json!({
            "code": "customer_tax_location_invalid",
            "message": "Tax location is invalid.",
            "type": "invalid_request_error"
        }))
        .unwrap();
        assert_eq!(error.error_type, FinalizationErrorType::InvalidRequestError);

        assert!(
            serde_json::from_value::<LastFinalizationError>(json!({ "type": "rate_limit_error" }))
                .is_err()
        );
    }

    #[test]
    fn self_issuer_round_trips_as_keyword() {
        let issuer = Issuer { account: None, issuer_type: IssuerType::SelfIssued };
        assert_eq!(
            serde_json::to_value(&issuer).unwrap(),
            json!({ "account": null, "type": "self" })
        );
    }

    #[test]
    fn open_invoice_is_not_settled() {
        let mut payload = invoice_json();
        payload["status"] = json!("open");
        payload["amount_remaining"] = json!(2000);
        let invoice: Invoice = serde_json::from_value(payload).unwrap();
        assert!(!invoice.is_settled());
    }
}
