use serde::{Deserialize, Serialize};

use crate::{
    core::{Resource, impl_identified},
    resources::PaymentMethod,
    types::{CaptureMethod, JsonObject, Metadata, Record, SetupFutureUsage, Shipping, Timestamp},
};

/// Guides the process of collecting a payment from a customer, from creation to capture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    /// Always `"payment_intent"`.
    pub object: String,
    pub amount: i64,
    pub amount_capturable: Option<i64>,
    pub amount_details: Option<AmountDetails>,
    pub amount_received: Option<i64>,
    pub application: Option<String>,
    pub application_fee_amount: Option<i64>,
    pub automatic_payment_methods: Option<AutomaticPaymentMethods>,
    pub canceled_at: Option<Timestamp>,
    pub cancellation_reason: Option<CancellationReason>,
    pub capture_method: CaptureMethod,
    /// Used client-side to confirm the intent. Do not log or store it.
    pub client_secret: Option<String>,
    pub confirmation_method: Option<ConfirmationMethod>,
    pub created: Timestamp,
    pub currency: String,
    pub customer: Option<String>,
    pub description: Option<String>,
    pub invoice: Option<String>,
    pub last_payment_error: Option<LastPaymentError>,
    pub latest_charge: Option<String>,
    pub livemode: bool,
    pub metadata: Option<Metadata>,
    pub next_action: Option<NextAction>,
    pub on_behalf_of: Option<String>,
    pub payment_method: Option<String>,
    /// Options keyed by payment method type. The blocks are kept raw.
    pub payment_method_options: Option<Record<serde_json::Value>>,
    pub payment_method_types: Vec<String>,
    pub processing: Option<Processing>,
    pub receipt_email: Option<String>,
    pub review: Option<String>,
    pub setup_future_usage: Option<SetupFutureUsage>,
    pub shipping: Option<Shipping>,
    pub statement_descriptor: Option<String>,
    pub statement_descriptor_suffix: Option<String>,
    pub status: PaymentIntentStatus,
    pub transfer_data: Option<PaymentIntentTransferData>,
    pub transfer_group: Option<String>,
}

impl Resource for PaymentIntent {
    const SCHEMA: &'static str = "payment_intents";
}

impl_identified!(PaymentIntent);

impl PaymentIntent {
    /// `true` once the intent reached a state it cannot leave.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.status,
            PaymentIntentStatus::Succeeded | PaymentIntentStatus::Canceled
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentIntentStatus {
    Canceled,
    Processing,
    RequiresAction,
    RequiresCapture,
    RequiresConfirmation,
    RequiresPaymentMethod,
    Succeeded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancellationReason {
    Abandoned,
    Automatic,
    Duplicate,
    FailedInvoice,
    Fraudulent,
    RequestedByCustomer,
    VoidInvoice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationMethod {
    Automatic,
    Manual,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountDetails {
    pub tip: Option<Tip>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub amount: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomaticPaymentMethods {
    pub allow_redirects: Option<AllowRedirects>,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowRedirects {
    Always,
    Never,
}

/// The error from the last failed confirmation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastPaymentError {
    pub code: Option<String>,
    pub decline_code: Option<String>,
    pub doc_url: Option<String>,
    pub message: Option<String>,
    pub param: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    /// e.g. `card_error`, `api_error`, `invalid_request_error`.
    #[serde(rename = "type")]
    pub error_type: String,
}

/// What the customer must do to complete the payment, when `status` is `requires_action`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextAction {
    /// e.g. `redirect_to_url` or `use_stripe_sdk`.
    #[serde(rename = "type")]
    pub action_type: String,
    pub redirect_to_url: Option<RedirectToUrl>,
    pub use_stripe_sdk: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectToUrl {
    pub return_url: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Processing {
    pub card: Option<CardProcessing>,
    #[serde(rename = "type")]
    pub processing_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardProcessing {
    pub customer_notification: Option<CustomerNotification>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerNotification {
    pub approval_requested: Option<bool>,
    pub completes_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentIntentTransferData {
    pub amount: Option<i64>,
    pub destination: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn intent_json() -> serde_json::Value {
        json!({
            "id": "pi_123",
            "object": "payment_intent",
            "amount": 2000,
            "amount_capturable": 0,
            "amount_details": { "tip": {} },
            "amount_received": 0,
            "automatic_payment_methods": { "allow_redirects": "never", "enabled": true },
            "canceled_at": null,
            "cancellation_reason": null,
            "capture_method": "automatic_async",
            "client_secret": "pi_123_secret_abc",
            "confirmation_method": "automatic",
            "created": 1700000000,
            "currency": "usd",
            "customer": "cus_123",
            "livemode": false,
            "metadata": { "order_id": "6735" },
            "payment_method_options": {
                "card": { "request_three_d_secure": "automatic" }
            },
            "payment_method_types": ["card", "link"],
            "status": "requires_payment_method"
        })
    }

    #[test]
    fn decode_payment_intent() {
        let intent: PaymentIntent = serde_json::from_value(intent_json()).unwrap();

        assert_eq!(intent.capture_method, CaptureMethod::AutomaticAsync);
        assert_eq!(intent.status, PaymentIntentStatus::RequiresPaymentMethod);
        assert_eq!(intent.amount_details.unwrap().tip.unwrap().amount, None);
        assert_eq!(
            intent.automatic_payment_methods.unwrap().allow_redirects,
            Some(AllowRedirects::Never)
        );
        assert_eq!(intent.metadata.unwrap()["order_id"], "6735");
        assert_eq!(
            intent.payment_method_options.unwrap()["card"]["request_three_d_secure"],
            json!("automatic")
        );
        assert!(!PaymentIntent::SCHEMA.is_empty());
    }

    #[test]
    fn decode_requires_action_with_redirect() {
        let mut payload = intent_json();
        payload["status"] = json!("requires_action");
        payload["next_action"] = json!({
            "type": "redirect_to_url",
            "redirect_to_url": {
                "return_url": "https://example.com/return",
                "url": "https://hooks.stripe.com/redirect/authenticate/src_1"
            }
        });

        let intent: PaymentIntent = serde_json::from_value(payload).unwrap();
        let action = intent.next_action.unwrap();
        assert_eq!(action.action_type, "redirect_to_url");
        assert_eq!(
            action.redirect_to_url.unwrap().return_url.as_deref(),
            Some("https://example.com/return")
        );
        assert_eq!(action.use_stripe_sdk, None);
    }

    #[test]
    fn decode_last_payment_error_with_payment_method() {
        let mut payload = intent_json();
        payload["last_payment_error"] = json!({
            "code": "card_declined",
            "decline_code": "insufficient_funds",
            "doc_url": "https://stripe.com/docs/error-codes/card-declined",
            "message": "Your card has insufficient funds.",
            "payment_method": {
                "id": "pm_1",
                "object": "payment_method",
                "created": 1700000000,
                "livemode": false,
                "type": "card"
            },
            "type": "card_error"
        });

        let intent: PaymentIntent = serde_json::from_value(payload).unwrap();
        let error = intent.last_payment_error.unwrap();
        assert_eq!(error.decline_code.as_deref(), Some("insufficient_funds"));
        assert_eq!(error.payment_method.unwrap().id, "pm_1");
        assert_eq!(error.error_type, "card_error");
    }

    #[test]
    fn terminal_states() {
        let mut payload = intent_json();
        payload["status"] = json!("canceled");
        payload["cancellation_reason"] = json!("requested_by_customer");

        let intent: PaymentIntent = serde_json::from_value(payload).unwrap();
        assert!(intent.is_terminal());
        assert_eq!(
            intent.cancellation_reason,
            Some(CancellationReason::RequestedByCustomer)
        );
    }

    #[test]
    fn decode_processing_card_notification() {
        let mut payload = intent_json();
        payload["status"] = json!("processing");
        payload["processing"] = json!({
            "type": "card",
            "card": {
                "customer_notification": { "approval_requested": true, "completes_at": 1700003600 }
            }
        });

        let intent: PaymentIntent = serde_json::from_value(payload).unwrap();
        assert!(!intent.is_terminal());
        let notification = intent
            .processing
            .unwrap()
            .card
            .unwrap()
            .customer_notification
            .unwrap();
        assert_eq!(notification.completes_at, Some(Timestamp(1700003600)));
    }
}
