use serde::{Deserialize, Serialize};

use crate::{
    core::{ListObject, Resource, impl_identified},
    resources::{
        AutomaticTaxStatus, CustomerTaxExempt, CustomerTaxId, InvoiceCustomField, Issuer, Price,
        TaxAmount,
    },
    types::{Address, Metadata, Record, Timestamp},
};

/// A customer's session as they pay through Checkout or Payment Links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    /// Always `"checkout.session"`.
    pub object: String,
    pub amount_subtotal: Option<i64>,
    pub amount_total: Option<i64>,
    pub automatic_tax: SessionAutomaticTax,
    pub billing_address_collection: Option<BillingAddressCollection>,
    pub cancel_url: Option<String>,
    pub client_reference_id: Option<String>,
    /// Only set for `embedded` sessions.
    pub client_secret: Option<String>,
    pub consent: Option<Consent>,
    pub consent_collection: Option<ConsentCollection>,
    pub created: Timestamp,
    pub currency: Option<String>,
    pub custom_fields: Vec<CustomFieldResponse>,
    pub custom_text: CustomText,
    pub customer: Option<String>,
    pub customer_creation: Option<CustomerCreation>,
    pub customer_details: Option<CustomerDetails>,
    pub customer_email: Option<String>,
    pub discounts: Option<Vec<SessionDiscount>>,
    pub expires_at: Timestamp,
    pub invoice: Option<String>,
    pub invoice_creation: InvoiceCreation,
    /// Only present when expanded.
    pub line_items: Option<ListObject<SessionLineItem>>,
    pub livemode: bool,
    pub locale: Option<String>,
    pub metadata: Option<Metadata>,
    pub mode: Mode,
    pub payment_intent: Option<String>,
    pub payment_link: Option<String>,
    pub payment_method_collection: Option<PaymentMethodCollection>,
    pub payment_method_configuration_details: Option<PaymentMethodConfigurationDetails>,
    /// Options keyed by payment method type. The blocks are kept raw.
    pub payment_method_options: Option<Record<serde_json::Value>>,
    pub payment_method_types: Vec<String>,
    pub payment_status: CheckoutPaymentStatus,
    pub phone_number_collection: Option<PhoneNumberCollection>,
    pub recovered_from: Option<String>,
    pub redirect_on_completion: Option<RedirectOnCompletion>,
    pub return_url: Option<String>,
    pub setup_intent: Option<String>,
    pub shipping_address_collection: Option<ShippingAddressCollection>,
    pub shipping_cost: Option<SessionShippingCost>,
    pub shipping_options: Vec<ShippingOption>,
    pub status: Option<SessionStatus>,
    pub submit_type: Option<SubmitType>,
    pub subscription: Option<String>,
    pub success_url: Option<String>,
    pub tax_id_collection: Option<TaxIdCollection>,
    pub total_details: Option<TotalDetails>,
    pub ui_mode: Option<UiMode>,
    /// The hosted page URL. `None` once the session is complete or expired.
    pub url: Option<String>,
}

impl Resource for CheckoutSession {
    const SCHEMA: &'static str = "checkout/sessions";
}

impl_identified!(CheckoutSession);

impl CheckoutSession {
    /// `true` while the customer can still pay, judged against `now`.
    pub fn is_open_at(&self, now: Timestamp) -> bool {
        self.status == Some(SessionStatus::Open) && self.expires_at > now
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Payment,
    Setup,
    Subscription,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Complete,
    Expired,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutPaymentStatus {
    NoPaymentRequired,
    Paid,
    Unpaid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingAddressCollection {
    Auto,
    Required,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerCreation {
    Always,
    IfRequired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodCollection {
    Always,
    IfRequired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitType {
    Auto,
    Book,
    Donate,
    Pay,
    Subscribe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectOnCompletion {
    Always,
    IfRequired,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiMode {
    Embedded,
    Hosted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionAutomaticTax {
    pub enabled: bool,
    pub liability: Option<Issuer>,
    pub status: Option<AutomaticTaxStatus>,
}

/// What the customer agreed to during the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consent {
    pub promotions: Option<ConsentStatus>,
    pub terms_of_service: Option<ConsentStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentStatus {
    OptIn,
    OptOut,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentCollection {
    pub promotions: Option<PromotionConsent>,
    pub terms_of_service: Option<TermsOfServiceConsent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromotionConsent {
    Auto,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermsOfServiceConsent {
    None,
    Required,
}

/// A merchant-defined field and the customer's answer to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFieldResponse {
    pub key: String,
    pub label: CustomFieldLabel,
    pub optional: bool,
    #[serde(rename = "type")]
    pub field_type: CustomFieldType,
    pub text: Option<CustomFieldInput>,
    pub dropdown: Option<CustomFieldDropdown>,
    pub numeric: Option<CustomFieldInput>,
}

impl CustomFieldResponse {
    /// The customer's answer, read from the block matching `field_type`.
    pub fn value(&self) -> Option<&str> {
        match self.field_type {
            CustomFieldType::Text => self.text.as_ref()?.value.as_deref(),
            CustomFieldType::Numeric => self.numeric.as_ref()?.value.as_deref(),
            CustomFieldType::Dropdown => self.dropdown.as_ref()?.value.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomFieldType {
    Dropdown,
    Numeric,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFieldLabel {
    pub custom: Option<String>,
    #[serde(rename = "type")]
    pub label_type: LabelType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelType {
    Custom,
}

/// Shared by `text` and `numeric` fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFieldInput {
    pub default_value: Option<String>,
    pub maximum_length: Option<i64>,
    pub minimum_length: Option<i64>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFieldDropdown {
    pub default_value: Option<String>,
    pub options: Vec<DropdownOption>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomText {
    pub after_submit: Option<CustomTextMessage>,
    pub shipping_address: Option<CustomTextMessage>,
    pub submit: Option<CustomTextMessage>,
    pub terms_of_service_acceptance: Option<CustomTextMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomTextMessage {
    pub message: String,
}

/// Customer details collected during the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub address: Option<Address>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub tax_exempt: Option<CustomerTaxExempt>,
    pub tax_ids: Option<Vec<CustomerTaxId>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDiscount {
    pub coupon: Option<String>,
    pub promotion_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceCreation {
    pub enabled: bool,
    pub invoice_data: InvoiceData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceData {
    pub account_tax_ids: Option<Vec<String>>,
    pub custom_fields: Option<Vec<InvoiceCustomField>>,
    pub description: Option<String>,
    pub footer: Option<String>,
    pub issuer: Option<Issuer>,
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodConfigurationDetails {
    pub id: String,
    pub parent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumberCollection {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddressCollection {
    /// Two-letter ISO country codes.
    pub allowed_countries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionShippingCost {
    pub amount_subtotal: i64,
    pub amount_tax: i64,
    pub amount_total: i64,
    pub shipping_rate: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingOption {
    pub shipping_amount: i64,
    pub shipping_rate: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxIdCollection {
    pub enabled: bool,
    pub required: TaxIdRequired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxIdRequired {
    IfSupported,
    Never,
}

/// Discount, shipping and tax totals. Shared with orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalDetails {
    pub amount_discount: i64,
    pub amount_shipping: Option<i64>,
    pub amount_tax: i64,
    /// Only present when expanded.
    pub breakdown: Option<Breakdown>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub discounts: Vec<DiscountBreakdown>,
    pub taxes: Vec<TaxAmount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountBreakdown {
    pub amount: i64,
    pub discount: DiscountRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRef {
    pub id: String,
    pub object: String,
}

/// A line item as priced within a checkout session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLineItem {
    pub id: String,
    /// Always `"item"`.
    pub object: String,
    pub amount_discount: i64,
    pub amount_subtotal: i64,
    pub amount_tax: i64,
    pub amount_total: i64,
    pub currency: String,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub quantity: Option<i64>,
}

impl_identified!(SessionLineItem);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::resources::IssuerType;

    fn session_json() -> serde_json::Value {
        json!({
            "id": "cs_test_123",
            "object": "checkout.session",
            "amount_subtotal": 2000,
            "amount_total": 2000,
            "automatic_tax": { "enabled": false, "liability": null, "status": null },
            "cancel_url": null,
            "client_reference_id": null,
            "consent": null,
            "created": 1700000000,
            "currency": "usd",
            "custom_fields": [],
            "custom_text": {
                "after_submit": null,
                "shipping_address": null,
                "submit": { "message": "We ship within 2 days." },
                "terms_of_service_acceptance": null
            },
            "customer": null,
            "customer_creation": "if_required",
            "customer_details": null,
            "customer_email": null,
            "expires_at": 1700086400,
            "invoice": null,
            "invoice_creation": {
                "enabled": false,
                "invoice_data": {
                    "account_tax_ids": null,
                    "custom_fields": null,
                    "description": null,
                    "footer": null,
                    "issuer": null,
                    "metadata": {}
                }
            },
            "livemode": false,
            "locale": null,
            "metadata": {},
            "mode": "payment",
            "payment_intent": null,
            "payment_method_collection": "if_required",
            "payment_method_options": { "card": { "request_three_d_secure": "automatic" } },
            "payment_method_types": ["card"],
            "payment_status": "unpaid",
            "phone_number_collection": { "enabled": false },
            "shipping_options": [],
            "status": "open",
            "success_url": "https://example.com/success",
            "total_details": { "amount_discount": 0, "amount_shipping": 0, "amount_tax": 0 },
            "ui_mode": "hosted",
            "url": "https://checkout.stripe.com/c/pay/cs_test_123"
        })
    }

    #[test]
    fn decode_open_session() {
        let session: CheckoutSession = serde_json::from_value(session_json()).unwrap();

        assert_eq!(session.mode, Mode::Payment);
        assert_eq!(session.payment_status, CheckoutPaymentStatus::Unpaid);
        assert_eq!(session.customer_creation, Some(CustomerCreation::IfRequired));
        assert_eq!(session.ui_mode, Some(UiMode::Hosted));
        assert_eq!(
            session.custom_text.submit.as_ref().map(|m| m.message.as_str()),
            Some("We ship within 2 days.")
        );
        assert!(session.is_open_at(Timestamp(1700000500)));
        assert!(!session.is_open_at(Timestamp(1700086400)));
        assert_eq!(CheckoutSession::SCHEMA, "checkout/sessions");
    }

    #[test]
    fn custom_text_is_required() {
        let mut payload = session_json();
        payload.as_object_mut().unwrap().remove("custom_text");
        let err = serde_json::from_value::<CheckoutSession>(payload).unwrap_err();
        assert!(err.to_string().contains("missing field `custom_text`"));
    }

    #[test]
    fn decode_completed_session_details() {
        let mut payload = session_json();
        payload["status"] = json!("complete");
        payload["payment_status"] = json!("paid");
        payload["url"] = json!(null);
        payload["automatic_tax"] = json!({
            "enabled": true,
            "liability": { "type": "self" },
            "status": "complete"
        });
        payload["consent"] = json!({ "promotions": "opt_in", "terms_of_service": null });
        payload["customer_details"] = json!({
            "address": { "country": "DE", "postal_code": "10115" },
            "email": "jenny@example.com",
            "name": "Jenny Rosen",
            "phone": null,
            "tax_exempt": "reverse",
            "tax_ids": [{ "type": "eu_vat", "value": "DE123456789" }]
        });
        payload["custom_fields"] = json!([
            {
                "key": "engraving",
                "label": { "custom": "Engraving", "type": "custom" },
                "optional": true,
                "type": "text",
                "text": { "default_value": null, "maximum_length": 20, "minimum_length": null, "value": "J.R." }
            },
            {
                "key": "size",
                "label": { "custom": "Size", "type": "custom" },
                "optional": false,
                "type": "dropdown",
                "dropdown": {
                    "default_value": null,
                    "options": [{ "label": "Small", "value": "s" }, { "label": "Large", "value": "l" }],
                    "value": "l"
                }
            }
        ]);

        let session: CheckoutSession = serde_json::from_value(payload).unwrap();
        assert!(!session.is_open_at(Timestamp(1700000500)));
        assert_eq!(
            session.automatic_tax.liability.unwrap().issuer_type,
            IssuerType::SelfIssued
        );
        assert_eq!(session.consent.unwrap().promotions, Some(ConsentStatus::OptIn));

        let details = session.customer_details.unwrap();
        assert_eq!(details.tax_exempt, Some(CustomerTaxExempt::Reverse));
        assert_eq!(details.address.unwrap().postal_code.as_deref(), Some("10115"));

        assert_eq!(session.custom_fields[0].value(), Some("J.R."));
        assert_eq!(session.custom_fields[1].value(), Some("l"));
        assert_eq!(session.custom_fields[1].dropdown.as_ref().unwrap().options.len(), 2);
    }

    #[test]
    fn decode_total_details_breakdown() {
        let totals: TotalDetails = serde_json::from_value(json!({
            "amount_discount": 500,
            "amount_shipping": 0,
            "amount_tax": 0,
            "breakdown": {
                "discounts": [{ "amount": 500, "discount": { "id": "di_1", "object": "discount" } }],
                "taxes": []
            }
        }))
        .unwrap();

        let breakdown = totals.breakdown.unwrap();
        assert_eq!(breakdown.discounts[0].discount.id, "di_1");
        assert!(breakdown.taxes.is_empty());
    }
}
