use serde::{Deserialize, Serialize};

use crate::{
    core::{Resource, impl_identified},
    types::{Metadata, Timestamp},
};

/// A good or service you sell. Prices point at products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    /// Always `"product"`.
    pub object: String,
    pub active: bool,
    pub created: Timestamp,
    pub default_price: Option<String>,
    pub description: Option<String>,
    /// Up to eight image URLs.
    pub images: Vec<String>,
    pub livemode: bool,
    /// Absent on older products.
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub marketing_features: Vec<MarketingFeature>,
    pub metadata: Option<Metadata>,
    pub name: String,
    pub package_dimensions: Option<PackageDimensions>,
    pub shippable: Option<bool>,
    pub statement_descriptor: Option<String>,
    pub tax_code: Option<String>,
    pub unit_label: Option<String>,
    pub updated: Timestamp,
    pub url: Option<String>,
}

impl Resource for Product {
    const SCHEMA: &'static str = "products";
}

impl_identified!(Product);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketingFeature {
    pub name: Option<String>,
}

/// Shipping dimensions, in inches and ounces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackageDimensions {
    pub height: f64,
    pub length: f64,
    pub weight: f64,
    pub width: f64,
}
