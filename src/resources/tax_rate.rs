use serde::{Deserialize, Serialize};

use crate::{
    core::{Resource, impl_identified},
    types::{Metadata, Timestamp},
};

/// A tax rate applied to invoices, subscriptions and checkout sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRate {
    pub id: String,
    /// Always `"tax_rate"`.
    pub object: String,
    /// Archived rates stay usable on existing subscriptions.
    pub active: bool,
    pub country: Option<String>,
    pub created: Timestamp,
    pub description: Option<String>,
    /// Shown on the customer's invoice, e.g. `VAT`.
    pub display_name: String,
    pub inclusive: bool,
    pub jurisdiction: Option<String>,
    pub livemode: bool,
    pub metadata: Option<Metadata>,
    /// Percentage out of 100, e.g. `19.0`.
    pub percentage: f64,
    pub state: Option<String>,
    /// e.g. `vat`, `sales_tax`, `gst`.
    pub tax_type: Option<String>,
}

impl Resource for TaxRate {
    const SCHEMA: &'static str = "tax_rates";
}

impl_identified!(TaxRate);
