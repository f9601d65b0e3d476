use serde::{Deserialize, Serialize};

use crate::{
    core::{Expandable, ListObject, Resource, impl_identified},
    resources::{
        Customer, CustomerTaxExempt, CustomerTaxId, Discount, Payment, Price, Product, TaxRate,
        TotalDetails,
    },
    types::{Billing, Metadata, Shipping, Timestamp},
};

/// A set of products a customer intends to buy, with shipping and tax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    /// Always `"order"`.
    pub object: String,
    pub amount_subtotal: i64,
    pub amount_total: i64,
    pub application: Option<String>,
    pub automatic_tax: AutomaticTax,
    pub billing_details: Option<Billing>,
    pub client_secret: Option<String>,
    pub created: Timestamp,
    pub currency: String,
    pub customer: Option<Expandable<Customer>>,
    pub description: Option<String>,
    pub discounts: Vec<Expandable<Discount>>,
    pub ip_address: Option<String>,
    pub line_items: Option<ListObject<LineItem>>,
    pub livemode: bool,
    pub metadata: Metadata,
    pub payment: Payment,
    pub shipping_cost: Option<ShippingCost>,
    pub shipping_details: Option<Shipping>,
    pub status: OrderStatus,
    pub tax_details: Option<TaxDetails>,
    pub total_details: TotalDetails,
}

impl Resource for Order {
    const SCHEMA: &'static str = "orders";
}

impl_identified!(Order);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Open,
    Submitted,
    Processing,
    Complete,
    Canceled,
}

/// Stripe Tax settings for an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomaticTax {
    pub enabled: bool,
    pub requires_location_inputs: bool,
    pub status: Option<AutomaticTaxStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutomaticTaxStatus {
    RequiresLocationInputs,
    Complete,
    Failed,
}

/// One purchased product, with its price, quantity and totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,
    /// Always `"item"`.
    pub object: String,
    pub amount_discount: i64,
    pub amount_subtotal: i64,
    pub amount_tax: i64,
    pub amount_total: i64,
    pub currency: String,
    pub description: Option<String>,
    pub discounts: Vec<LineItemDiscount>,
    pub price: Price,
    pub product: Expandable<Product>,
    pub quantity: i64,
    pub taxes: Option<Vec<TaxAmount>>,
}

impl_identified!(LineItem);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemDiscount {
    pub amount: i64,
    pub discount: Discount,
}

/// A tax amount together with the rate that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxAmount {
    pub amount: i64,
    pub rate: TaxRate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingCost {
    pub amount_subtotal: i64,
    pub amount_tax: i64,
    pub amount_total: i64,
    pub shipping_rate: Option<String>,
    pub taxes: Option<Vec<TaxAmount>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxDetails {
    pub tax_exempt: Option<CustomerTaxExempt>,
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub tax_ids: Vec<CustomerTaxId>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::resources::PaymentStatus;

    fn price_json() -> serde_json::Value {
        json!({
            "id": "price_1",
            "object": "price",
            "active": true,
            "billing_scheme": "per_unit",
            "created": 1700000000,
            "currency": "usd",
            "livemode": false,
            "product": "prod_1",
            "type": "one_time",
            "unit_amount": 1500
        })
    }

    fn order_json() -> serde_json::Value {
        json!({
            "id": "order_123",
            "object": "order",
            "amount_subtotal": 3000,
            "amount_total": 3300,
            "application": null,
            "automatic_tax": { "enabled": false, "requires_location_inputs": false, "status": null },
            "billing_details": null,
            "client_secret": "order_123_secret",
            "created": 1700000000,
            "currency": "usd",
            "customer": "cus_123",
            "description": null,
            "discounts": [],
            "ip_address": null,
            "line_items": {
                "object": "list",
                "data": [{
                    "id": "li_1",
                    "object": "item",
                    "amount_discount": 0,
                    "amount_subtotal": 3000,
                    "amount_tax": 0,
                    "amount_total": 3000,
                    "currency": "usd",
                    "description": "T-shirt",
                    "discounts": [],
                    "price": price_json(),
                    "product": "prod_1",
                    "quantity": 2
                }],
                "has_more": false,
                "url": "/v1/orders/order_123/line_items"
            },
            "livemode": false,
            "metadata": {},
            "payment": {
                "payment_intent": null,
                "settings": {
                    "payment_method_types": ["card"],
                    "return_url": null
                },
                "status": "requires_payment_method"
            },
            "shipping_cost": {
                "amount_subtotal": 300,
                "amount_tax": 0,
                "amount_total": 300,
                "shipping_rate": "shr_1"
            },
            "status": "open",
            "tax_details": { "tax_exempt": "none", "tax_ids": [] },
            "total_details": { "amount_discount": 0, "amount_shipping": 300, "amount_tax": 0 }
        })
    }

    #[test]
    fn decode_order() {
        let order: Order = serde_json::from_value(order_json()).unwrap();

        assert_eq!(order.status, OrderStatus::Open);
        assert_eq!(order.customer.as_ref().and_then(|c| c.as_id()), Some("cus_123"));
        assert!(order.discounts.is_empty());
        assert_eq!(order.payment.status, Some(PaymentStatus::RequiresPaymentMethod));
        assert_eq!(order.shipping_cost.unwrap().amount_total, 300);
        assert_eq!(order.total_details.amount_shipping, Some(300));
        assert_eq!(
            order.tax_details.unwrap().tax_exempt,
            Some(CustomerTaxExempt::None)
        );

        let items = order.line_items.unwrap();
        let item = &items.data[0];
        assert_eq!(item.quantity, 2);
        assert_eq!(item.price.unit_amount, Some(1500));
        assert_eq!(item.product.as_id(), Some("prod_1"));
        assert_eq!(Order::SCHEMA, "orders");
    }

    #[test]
    fn metadata_is_required_on_orders() {
        let mut payload = order_json();
        payload.as_object_mut().unwrap().remove("metadata");
        assert!(serde_json::from_value::<Order>(payload).is_err());
    }

    #[test]
    fn expanded_discounts_mix_with_ids() {
        let mut payload = order_json();
        payload["discounts"] = json!([
            "di_1",
            {
                "id": "di_2",
                "object": "discount",
                "coupon": {
                    "id": "TENOFF",
                    "object": "coupon",
                    "amount_off": 1000,
                    "created": 1700000000,
                    "currency": "usd",
                    "duration": "once",
                    "livemode": false,
                    "times_redeemed": 1,
                    "valid": true
                },
                "customer": "cus_123",
                "end": null,
                "start": 1700000000
            }
        ]);

        let order: Order = serde_json::from_value(payload).unwrap();
        assert_eq!(order.discounts.len(), 2);
        assert_eq!(order.discounts[0].id(), "di_1");
        assert!(order.discounts[1].is_expanded());
        assert_eq!(order.discounts[1].id(), "di_2");
    }

    #[test]
    fn null_tax_ids_match_absent() {
        let absent: TaxDetails = serde_json::from_value(json!({ "tax_exempt": "exempt" })).unwrap();
        let null: TaxDetails =
            serde_json::from_value(json!({ "tax_exempt": "exempt", "tax_ids": null })).unwrap();

        assert!(absent.tax_ids.is_empty());
        assert_eq!(absent, null);
    }
}
