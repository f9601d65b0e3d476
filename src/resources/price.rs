use serde::{Deserialize, Serialize};

use crate::{
    core::{Resource, impl_identified},
    types::{Metadata, Record, Timestamp},
};

/// The unit cost, currency and (optional) billing cycle of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub id: String,
    /// Always `"price"`.
    pub object: String,
    /// Whether the price can be used for new purchases.
    pub active: bool,
    pub billing_scheme: BillingScheme,
    pub created: Timestamp,
    pub currency: String,
    /// Prices in other currencies, keyed by lowercase currency code.
    pub currency_options: Option<Record<CurrencyOption>>,
    pub custom_unit_amount: Option<CustomUnitAmount>,
    pub livemode: bool,
    pub lookup_key: Option<String>,
    pub metadata: Option<Metadata>,
    pub nickname: Option<String>,
    /// The id of the product this price belongs to.
    pub product: String,
    pub recurring: Option<Recurring>,
    pub tax_behavior: Option<TaxBehavior>,
    /// Only set when `billing_scheme` is `tiered`.
    pub tiers: Option<Vec<Tier>>,
    pub tiers_mode: Option<TiersMode>,
    pub transform_quantity: Option<TransformQuantity>,
    #[serde(rename = "type")]
    pub price_type: PriceType,
    pub unit_amount: Option<i64>,
    /// `unit_amount` as a decimal string with up to 12 decimal places.
    pub unit_amount_decimal: Option<String>,
}

impl Resource for Price {
    const SCHEMA: &'static str = "prices";
}

impl_identified!(Price);

impl Price {
    pub fn is_recurring(&self) -> bool {
        self.price_type == PriceType::Recurring
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyOption {
    pub custom_unit_amount: Option<CustomUnitAmount>,
    /// `inclusive`, `exclusive` or `unspecified`.
    pub tax_behavior: Option<String>,
    pub tiers: Option<Vec<Tier>>,
    pub unit_amount: Option<i64>,
    pub unit_amount_decimal: Option<String>,
}

/// Bounds for customer-chosen amounts, e.g. pay-what-you-want donations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomUnitAmount {
    pub maximum: Option<i64>,
    pub minimum: Option<i64>,
    pub preset: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recurring {
    /// How metered usage is aggregated, e.g. `sum`.
    pub aggregate_usage: Option<String>,
    pub interval: RecurringInterval,
    /// Number of intervals between billings, e.g. `3` with `month` bills quarterly.
    pub interval_count: i64,
    pub meter: Option<String>,
    pub usage_type: UsageType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurringInterval {
    Day,
    Month,
    Week,
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageType {
    Licensed,
    Metered,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub flat_amount: Option<i64>,
    pub flat_amount_decimal: Option<String>,
    pub unit_amount: Option<i64>,
    pub unit_amount_decimal: Option<String>,
    /// Upper bound of this tier. `None` for the last, unbounded tier.
    pub up_to: Option<i64>,
}

/// Applies a transformation to the reported quantity before multiplying by `unit_amount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformQuantity {
    pub divide_by: i64,
    pub round: Round,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Round {
    Down,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingScheme {
    PerUnit,
    Tiered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxBehavior {
    Exclusive,
    Inclusive,
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TiersMode {
    Graduated,
    Volume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceType {
    OneTime,
    Recurring,
}
