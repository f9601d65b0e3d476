use serde::{Deserialize, Serialize};

use crate::{
    core::{Resource, impl_identified},
    types::{Billing, Metadata, Timestamp},
};

/// A customer's payment instrument, used with payment intents and setup intents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: String,
    /// Always `"payment_method"`.
    pub object: String,
    pub billing_details: Option<Billing>,
    pub created: Timestamp,
    /// The customer this payment method is attached to, if any.
    pub customer: Option<String>,
    pub livemode: bool,
    pub metadata: Option<Metadata>,
    #[serde(rename = "type")]
    pub method_type: PaymentType,
}

impl Resource for PaymentMethod {
    const SCHEMA: &'static str = "payment_methods";
}

impl_identified!(PaymentMethod);

wire_enum! {
    /// The kind of a payment method. An additional hash named after the type
    /// carries the method-specific data.
    pub enum PaymentType {
        AcssDebit = "acss_debit",
        Affirm = "affirm",
        AfterpayClearpay = "afterpay_clearpay",
        Alipay = "alipay",
        AmazonPay = "amazon_pay",
        AuBecsDebit = "au_becs_debit",
        BacsDebit = "bacs_debit",
        Bancontact = "bancontact",
        Blik = "blik",
        Boleto = "boleto",
        Card = "card",
        CardPresent = "card_present",
        Cashapp = "cashapp",
        CustomerBalance = "customer_balance",
        Eps = "eps",
        Fpx = "fpx",
        Giropay = "giropay",
        Grabpay = "grabpay",
        Ideal = "ideal",
        InteracPresent = "interac_present",
        Klarna = "klarna",
        Konbini = "konbini",
        Link = "link",
        Mobilepay = "mobilepay",
        Multibanco = "multibanco",
        Oxxo = "oxxo",
        P24 = "p24",
        Paynow = "paynow",
        Paypal = "paypal",
        Pix = "pix",
        Promptpay = "promptpay",
        RevolutPay = "revolut_pay",
        SepaDebit = "sepa_debit",
        Sofort = "sofort",
        Swish = "swish",
        Twint = "twint",
        UsBankAccount = "us_bank_account",
        WechatPay = "wechat_pay",
        Zip = "zip",
    }
}
