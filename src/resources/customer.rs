use serde::{Deserialize, Serialize};

use crate::{
    core::{ListObject, Resource, impl_identified},
    resources::Discount,
    types::{Address, Metadata, Record, Shipping, Timestamp},
};

/// A customer you can charge repeatedly and whose payments you can track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    /// Always `"customer"`.
    pub object: String,
    pub address: Option<Address>,
    /// Balance in the smallest currency unit, applied to the next invoice.
    /// Negative values are credit.
    pub balance: i64,
    pub business_name: Option<String>,
    pub cash_balance: Option<CashBalance>,
    pub created: Timestamp,
    pub currency: Option<String>,
    pub default_source: Option<String>,
    pub delinquent: Option<bool>,
    pub description: Option<String>,
    pub discount: Option<Discount>,
    pub email: Option<String>,
    pub individual_name: Option<String>,
    /// Credit balance per currency, keyed by lowercase currency code.
    pub invoice_credit_balance: Option<Record<i64>>,
    pub invoice_prefix: Option<String>,
    pub invoice_settings: Option<InvoiceSettings>,
    pub livemode: bool,
    pub metadata: Option<Metadata>,
    pub name: Option<String>,
    pub next_invoice_sequence: Option<i64>,
    pub phone: Option<String>,
    pub preferred_locales: Option<Vec<String>>,
    pub shipping: Option<Shipping>,
    pub sources: Option<ListObject<Source>>,
    pub subscriptions: Option<ListObject<Subscription>>,
    pub tax: Option<Tax>,
    /// `none`, `exempt` or `reverse`.
    pub tax_exempt: Option<String>,
    pub tax_ids: Option<ListObject<TaxId>>,
    pub test_clock: Option<String>,
}

impl Resource for Customer {
    const SCHEMA: &'static str = "customers";
}

impl_identified!(Customer);

/// The response of `GET /v1/customers`.
pub type CustomerList = ListObject<Customer>;

/// Funds held on the customer's cash balance, keyed by currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashBalance {
    /// Always `"cash_balance"`.
    pub object: String,
    pub available: Option<Record<i64>>,
    pub customer: String,
    pub livemode: bool,
    pub settings: CashBalanceSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashBalanceSettings {
    pub reconciliation_mode: String,
    pub using_merchant_default: bool,
}

/// A legacy payment source (bank account, card) attached to the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub id: String,
    pub object: String,
    pub account: Option<String>,
    pub account_holder_name: Option<String>,
    pub account_holder_type: Option<String>,
    pub account_type: Option<String>,
    pub bank_name: Option<String>,
    pub country: Option<String>,
    pub currency: Option<String>,
    pub customer: Option<String>,
    pub fingerprint: Option<String>,
    pub last4: Option<String>,
    pub metadata: Option<Metadata>,
    pub routing_number: Option<String>,
    pub status: Option<String>,
}

impl_identified!(Source);

/// A subscription embedded in the customer object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub object: String,
    pub application: Option<String>,
    pub cancel_at: Option<Timestamp>,
    pub cancel_at_period_end: bool,
    pub canceled_at: Option<Timestamp>,
    /// `charge_automatically` or `send_invoice`.
    pub collection_method: String,
    pub created: Timestamp,
    pub currency: String,
    pub current_period_end: Timestamp,
    pub current_period_start: Timestamp,
    pub customer: String,
    pub default_payment_method: Option<String>,
    pub discount: Option<Discount>,
    pub ended_at: Option<Timestamp>,
    pub livemode: bool,
    pub metadata: Option<Metadata>,
    pub start_date: Timestamp,
    /// e.g. `active`, `past_due`, `trialing`.
    pub status: String,
    pub trial_end: Option<Timestamp>,
    pub trial_start: Option<Timestamp>,
}

impl_identified!(Subscription);

/// Tax details Stripe Tax inferred about the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tax {
    pub automatic_tax: CustomerAutomaticTax,
    pub ip_address: Option<String>,
    pub location: Option<TaxLocation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerAutomaticTax {
    Supported,
    NotCollecting,
    UnrecognizedLocation,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxLocation {
    pub country: Option<String>,
    pub source: Option<LocationSource>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationSource {
    BillingAddress,
    IpAddress,
    PaymentMethod,
    ShippingDestination,
}

/// A tax identifier registered for the customer, e.g. a VAT number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxId {
    pub id: String,
    pub object: String,
    pub country: Option<String>,
    pub created: Timestamp,
    pub customer: Option<String>,
    pub livemode: bool,
    /// e.g. `eu_vat`, `us_ein`.
    #[serde(rename = "type")]
    pub tax_id_type: String,
    pub value: String,
    pub verification: Option<Verification>,
}

impl_identified!(TaxId);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    pub status: VerificationStatus,
    pub verified_address: Option<String>,
    pub verified_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Pending,
    Verified,
    Unverified,
    Unavailable,
}

/// Default invoice settings for a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceSettings {
    pub custom_fields: Option<Vec<CustomField>>,
    pub default_payment_method: Option<String>,
    pub footer: Option<String>,
}

/// A name/value pair printed on invoices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    pub name: String,
    pub value: String,
}
