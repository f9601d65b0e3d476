//! Payment settings and the payment-method option blocks that ride along with them.
//!
//! `MethodOption` is polymorphic. Stripe keys the option block by method name, but
//! the block itself carries no discriminant. Two decode paths exist:
//!
//! - **Structural**: used by `Deserialize` and [`MethodOption::from_value`]. The shapes
//!   are tried in a fixed priority order (see [`MethodOptionKind::ALL`]) and the first
//!   one that decodes wins. A payload that satisfies the required fields of several
//!   shapes resolves to the earliest of them. A Klarna block (`capture_method`,
//!   `preferred_locale`, `setup_future_usage`) is also a valid card block, so it comes
//!   back as [`MethodOption::Card`].
//! - **Tagged**: [`MethodOption::from_tagged`] decodes against the single shape named by
//!   a sibling discriminant. [`Details`] uses it with its own `type` field.
//!
//! ```
//! use stripe_kit::resources::{MethodOption, MethodOptionKind};
//!
//! let option = MethodOption::from_value(serde_json::json!({
//!     "capture_method": "manual",
//!     "preferred_locale": "en-US"
//! }))
//! .unwrap();
//! assert_eq!(option.kind(), MethodOptionKind::Paypal);
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    core::{Expandable, Resource},
    errors::{Error, Result},
    resources::PaymentIntent,
    types::{CaptureMethod, SetupFutureUsage},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub payment_intent: Option<Expandable<PaymentIntent>>,
    pub settings: Settings,
    pub status: Option<PaymentStatus>,
}

impl Resource for Payment {
    const SCHEMA: &'static str = "payments";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Canceled,
    Complete,
    NotRequired,
    Processing,
    RequiresAction,
    RequiresCapture,
    RequiresConfirmation,
    RequiresPaymentMethod,
}

/// Settings forwarded to the payment intent created for a payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Fee in the smallest currency unit, transferred to the application owner.
    pub application_fee_amount: Option<i64>,
    pub payment_method_options: Option<MethodOption>,
    pub payment_method_types: Vec<MethodType>,
    pub return_url: Option<String>,
    pub statement_descriptor: Option<String>,
    pub statement_descriptor_suffix: Option<String>,
    pub transfer_data: Option<SettingsTransferData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsTransferData {
    pub amount: i64,
    pub destination: String,
}

wire_enum! {
    /// Payment method types a payment may be settled with.
    pub enum MethodType {
        Card = "card",
        CustomerBalance = "customer_balance",
        Ideal = "ideal",
        Link = "link",
        SepaDebit = "sepa_debit",
        Eps = "eps",
        WechatPay = "wechat_pay",
        Oxxo = "oxxo",
        Bancontact = "bancontact",
        Alipay = "alipay",
        P24 = "p24",
        BacsDebit = "bacs_debit",
        Giropay = "giropay",
        Sofort = "sofort",
        AuBecsDebit = "au_becs_debit",
        Fpx = "fpx",
        Klarna = "klarna",
        Paypal = "paypal",
        AcssDebit = "acss_debit",
        Grabpay = "grabpay",
        AfterpayClearpay = "afterpay_clearpay",
    }
}

wire_enum! {
    /// The shapes a [`MethodOption`] can take. `ALL` is the structural decode priority.
    pub enum MethodOptionKind {
        AfterpayClearpay = "afterpay_clearpay",
        Card = "card",
        CustomerBalance = "customer_balance",
        Klarna = "klarna",
        Paypal = "paypal",
        UsBankAccount = "us_bank_account",
    }
}

impl MethodOptionKind {
    fn decode(&self, value: &serde_json::Value) -> std::result::Result<MethodOption, serde_json::Error> {
        match self {
            MethodOptionKind::AfterpayClearpay => {
                AfterpayClearpay::deserialize(value).map(MethodOption::AfterpayClearpay)
            }
            MethodOptionKind::Card => PaymentCard::deserialize(value).map(MethodOption::Card),
            MethodOptionKind::CustomerBalance => {
                CustomerBalance::deserialize(value).map(MethodOption::CustomerBalance)
            }
            MethodOptionKind::Klarna => Klarna::deserialize(value).map(MethodOption::Klarna),
            MethodOptionKind::Paypal => PayPal::deserialize(value).map(MethodOption::Paypal),
            MethodOptionKind::UsBankAccount => {
                UsBankAccount::deserialize(value).map(MethodOption::UsBankAccount)
            }
        }
    }
}

/// Method-specific options for one payment method.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MethodOption {
    AfterpayClearpay(AfterpayClearpay),
    Card(PaymentCard),
    CustomerBalance(CustomerBalance),
    Klarna(Klarna),
    Paypal(PayPal),
    UsBankAccount(UsBankAccount),
}

impl MethodOption {
    pub fn kind(&self) -> MethodOptionKind {
        match self {
            MethodOption::AfterpayClearpay(_) => MethodOptionKind::AfterpayClearpay,
            MethodOption::Card(_) => MethodOptionKind::Card,
            MethodOption::CustomerBalance(_) => MethodOptionKind::CustomerBalance,
            MethodOption::Klarna(_) => MethodOptionKind::Klarna,
            MethodOption::Paypal(_) => MethodOptionKind::Paypal,
            MethodOption::UsBankAccount(_) => MethodOptionKind::UsBankAccount,
        }
    }

    /// Decodes by trying every shape in priority order.
    ///
    /// Fails with [`Error::UnrecognizedMethodOption`] listing each rejected candidate.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let mut attempted = Vec::with_capacity(MethodOptionKind::ALL.len());

        for kind in MethodOptionKind::ALL {
            match kind.decode(&value) {
                Ok(option) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("Decoded payment method option as '{}'", kind);
                    return Ok(option);
                }
                Err(err) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!("Payment method option candidate '{}' rejected: {}", kind, err);
                    attempted.push(format!("{kind}: {err}"));
                }
            }
        }

        Err(Error::UnrecognizedMethodOption { attempted })
    }

    /// Decodes against the shape named by `kind`, e.g. the `type` of the enclosing object.
    ///
    /// When `kind` names a method without a dedicated option shape, this falls back to
    /// [`MethodOption::from_value`].
    pub fn from_tagged(kind: &str, value: serde_json::Value) -> Result<Self> {
        match MethodOptionKind::from_wire(kind) {
            Some(kind) => kind
                .decode(&value)
                .map_err(|err| Error::UnrecognizedMethodOption {
                    attempted: vec![format!("{kind}: {err}")],
                }),
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    "No option shape for payment method '{}'; matching structurally",
                    kind
                );
                Self::from_value(value)
            }
        }
    }
}

impl<'de> Deserialize<'de> for MethodOption {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        MethodOption::from_value(value).map_err(serde::de::Error::custom)
    }
}

/// Transaction-specific details of the payment method used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Details {
    /// The payment method type, e.g. `card` or `klarna`.
    #[serde(rename = "type")]
    pub details_type: String,
    pub object: MethodOption,
}

impl<'de> Deserialize<'de> for Details {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawDetails {
            #[serde(rename = "type")]
            details_type: String,
            object: serde_json::Value,
        }

        let raw = RawDetails::deserialize(deserializer)?;
        let object = MethodOption::from_tagged(&raw.details_type, raw.object)
            .map_err(serde::de::Error::custom)?;

        Ok(Details {
            details_type: raw.details_type,
            object,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AfterpayClearpay {
    pub capture_method: CaptureMethod,
    /// An internal identifier or reference this payment corresponds to.
    pub reference: String,
    pub setup_future_usage: SetupFutureUsage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentCard {
    pub capture_method: CaptureMethod,
    pub setup_future_usage: SetupFutureUsage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerBalance {
    pub bank_transfer: BankTransfer,
    /// Always `bank_transfer` today.
    pub funding_type: String,
    pub setup_future_usage: SetupFutureUsage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankTransfer {
    pub requested_address_types: Vec<RequestedAddressType>,
    #[serde(rename = "type")]
    pub transfer_type: TransferType,
    pub funding_type: String,
    pub setup_future_usage: SetupFutureUsage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestedAddressType {
    Zengin,
    SortCode,
    Iban,
    Spei,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferType {
    EuBankTransfer,
    GbBankTransfer,
    JpBankTransfer,
    MxBankTransfer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Klarna {
    pub capture_method: CaptureMethod,
    pub preferred_locale: String,
    pub setup_future_usage: SetupFutureUsage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPal {
    pub capture_method: CaptureMethod,
    pub preferred_locale: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsBankAccount {
    pub account_holder_type: AccountHolderType,
    pub account_type: AccountType,
    pub bank_name: String,
    pub fingerprint: String,
    pub last4: String,
    pub routing_number: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountHolderType {
    Company,
    Individual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Checking,
    Savings,
}
