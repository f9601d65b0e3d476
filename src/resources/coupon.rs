use serde::{Deserialize, Serialize};

use crate::{
    core::{Resource, impl_identified},
    types::{Metadata, Record, Timestamp},
};

/// A percent-off or amount-off discount applicable to invoices, checkout sessions and orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub id: String,
    pub object: String,
    pub amount_off: Option<i64>,
    pub applies_to: Option<AppliesTo>,
    pub created: Timestamp,
    /// Currency of `amount_off`. Unset for percent-off coupons.
    pub currency: Option<String>,
    pub currency_options: Option<Record<CouponCurrencyOption>>,
    pub duration: CouponDuration,
    /// Only set when `duration` is `repeating`.
    pub duration_in_months: Option<i64>,
    pub livemode: bool,
    pub max_redemptions: Option<i64>,
    pub metadata: Option<Metadata>,
    pub name: Option<String>,
    pub percent_off: Option<f64>,
    pub redeem_by: Option<Timestamp>,
    pub times_redeemed: i64,
    /// `false` once the coupon can no longer be redeemed.
    pub valid: bool,
}

impl Resource for Coupon {
    const SCHEMA: &'static str = "coupons";
}

impl_identified!(Coupon);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CouponDuration {
    Forever,
    Once,
    Repeating,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliesTo {
    pub products: Option<Vec<String>>,
    pub prices: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponCurrencyOption {
    pub amount_off: i64,
}

/// A coupon applied to a customer, subscription, invoice or checkout session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub id: String,
    /// Always `"discount"`.
    pub object: String,
    pub checkout_session: Option<String>,
    pub coupon: Coupon,
    pub customer: String,
    /// `null` for coupons with a `forever` duration.
    pub end: Option<Timestamp>,
    pub invoice: Option<String>,
    pub invoice_item: Option<String>,
    pub promotion_code: Option<String>,
    pub start: Timestamp,
    pub subscription: Option<String>,
}

impl_identified!(Discount);
