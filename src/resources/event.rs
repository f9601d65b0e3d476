use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    core::{Resource, impl_identified},
    decode,
    errors::Result,
    types::{JsonObject, Timestamp},
};

/// A v1 event, as delivered to webhook endpoints or listed from `/v1/events`.
///
/// `type` is kept as a string so that event types added after this crate was
/// released still decode. Use [`Event::event_type`] to match on known ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    /// Always `"event"`.
    pub object: String,
    /// The connected account that originated the event.
    pub account: Option<String>,
    /// The API version used to render `data`.
    pub api_version: Option<String>,
    #[serde(rename = "type")]
    pub event_type: String,
    pub created: Timestamp,
    pub data: EventData,
    pub livemode: bool,
    /// Webhooks not yet delivered successfully.
    pub pending_webhooks: i64,
    pub request: Option<EventRequest>,
    pub context: Option<String>,
}

impl Resource for Event {
    const SCHEMA: &'static str = "events";
}

impl_identified!(Event);

impl Event {
    /// The known event type, or `None` for types this crate does not list.
    pub fn event_type(&self) -> Option<EventType> {
        EventType::from_wire(&self.event_type)
    }

    /// Decode the resource carried in `data.object`, e.g. a
    /// [`Charge`](crate::resources::Charge) for `charge.succeeded`.
    pub fn data_object<T: DeserializeOwned>(&self) -> Result<T> {
        #[cfg(feature = "tracing")]
        tracing::trace!(event = %self.id, event_type = %self.event_type, "Decoding event data object");

        decode::from_value(serde_json::Value::Object(self.data.object.clone()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventData {
    /// The resource the event is about, as it was when the event fired.
    pub object: JsonObject,
    /// Prior values of the changed attributes. Only set on `*.updated` events.
    pub previous_attributes: Option<JsonObject>,
}

/// The API request that triggered the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRequest {
    /// `None` for automatic events, e.g. subscription renewals.
    pub id: Option<String>,
    pub idempotency_key: Option<String>,
}

wire_enum! {
    /// Event types commonly subscribed to.
    pub enum EventType {
        // Account events
        AccountUpdated = "account.updated",
        AccountApplicationAuthorized = "account.application.authorized",
        AccountApplicationDeauthorized = "account.application.deauthorized",
        AccountExternalAccountCreated = "account.external_account.created",
        AccountExternalAccountDeleted = "account.external_account.deleted",
        AccountExternalAccountUpdated = "account.external_account.updated",

        // Balance events
        BalanceAvailable = "balance.available",

        // Charge events
        ChargeSucceeded = "charge.succeeded",
        ChargeFailed = "charge.failed",
        ChargePending = "charge.pending",
        ChargeRefunded = "charge.refunded",
        ChargeUpdated = "charge.updated",
        ChargeCaptured = "charge.captured",
        ChargeExpired = "charge.expired",
        ChargeDisputeCreated = "charge.dispute.created",
        ChargeDisputeUpdated = "charge.dispute.updated",
        ChargeDisputeClosed = "charge.dispute.closed",
        ChargeDisputeFundsWithdrawn = "charge.dispute.funds_withdrawn",
        ChargeDisputeFundsReinstated = "charge.dispute.funds_reinstated",
        ChargeRefundUpdated = "charge.refund.updated",

        // Checkout events
        CheckoutSessionCompleted = "checkout.session.completed",
        CheckoutSessionExpired = "checkout.session.expired",
        CheckoutSessionAsyncPaymentSucceeded = "checkout.session.async_payment_succeeded",
        CheckoutSessionAsyncPaymentFailed = "checkout.session.async_payment_failed",

        // Customer events
        CustomerCreated = "customer.created",
        CustomerUpdated = "customer.updated",
        CustomerDeleted = "customer.deleted",
        CustomerSubscriptionCreated = "customer.subscription.created",
        CustomerSubscriptionUpdated = "customer.subscription.updated",
        CustomerSubscriptionDeleted = "customer.subscription.deleted",
        CustomerSubscriptionTrialWillEnd = "customer.subscription.trial_will_end",
        CustomerSubscriptionPaused = "customer.subscription.paused",
        CustomerSubscriptionResumed = "customer.subscription.resumed",
        CustomerSourceCreated = "customer.source.created",
        CustomerSourceUpdated = "customer.source.updated",
        CustomerSourceDeleted = "customer.source.deleted",
        CustomerSourceExpiring = "customer.source.expiring",
        CustomerDiscountCreated = "customer.discount.created",
        CustomerDiscountUpdated = "customer.discount.updated",
        CustomerDiscountDeleted = "customer.discount.deleted",
        CustomerTaxIdCreated = "customer.tax_id.created",
        CustomerTaxIdUpdated = "customer.tax_id.updated",
        CustomerTaxIdDeleted = "customer.tax_id.deleted",

        // Invoice events
        InvoiceCreated = "invoice.created",
        InvoiceUpdated = "invoice.updated",
        InvoiceDeleted = "invoice.deleted",
        InvoiceFinalized = "invoice.finalized",
        InvoicePaid = "invoice.paid",
        InvoicePaymentSucceeded = "invoice.payment_succeeded",
        InvoicePaymentFailed = "invoice.payment_failed",
        InvoicePaymentActionRequired = "invoice.payment_action_required",
        InvoiceSent = "invoice.sent",
        InvoiceUpcoming = "invoice.upcoming",
        InvoiceMarkedUncollectible = "invoice.marked_uncollectible",
        InvoiceVoided = "invoice.voided",

        // Invoice item events
        InvoiceItemCreated = "invoiceitem.created",
        InvoiceItemUpdated = "invoiceitem.updated",
        InvoiceItemDeleted = "invoiceitem.deleted",

        // Payment intent events
        PaymentIntentCreated = "payment_intent.created",
        PaymentIntentSucceeded = "payment_intent.succeeded",
        PaymentIntentPaymentFailed = "payment_intent.payment_failed",
        PaymentIntentCanceled = "payment_intent.canceled",
        PaymentIntentProcessing = "payment_intent.processing",
        PaymentIntentRequiresAction = "payment_intent.requires_action",
        PaymentIntentAmountCapturableUpdated = "payment_intent.amount_capturable_updated",
        PaymentIntentPartiallyFunded = "payment_intent.partially_funded",

        // Payment link events
        PaymentLinkCreated = "payment_link.created",
        PaymentLinkUpdated = "payment_link.updated",

        // Payment method events
        PaymentMethodAttached = "payment_method.attached",
        PaymentMethodDetached = "payment_method.detached",
        PaymentMethodUpdated = "payment_method.updated",
        PaymentMethodAutomaticallyUpdated = "payment_method.automatically_updated",

        // Payout events
        PayoutCreated = "payout.created",
        PayoutUpdated = "payout.updated",
        PayoutCanceled = "payout.canceled",
        PayoutFailed = "payout.failed",
        PayoutPaid = "payout.paid",
        PayoutReconciliationCompleted = "payout.reconciliation_completed",

        // Price events
        PriceCreated = "price.created",
        PriceUpdated = "price.updated",
        PriceDeleted = "price.deleted",

        // Product events
        ProductCreated = "product.created",
        ProductUpdated = "product.updated",
        ProductDeleted = "product.deleted",

        // Refund events
        RefundCreated = "refund.created",
        RefundUpdated = "refund.updated",

        // Setup intent events
        SetupIntentCreated = "setup_intent.created",
        SetupIntentSucceeded = "setup_intent.succeeded",
        SetupIntentCanceled = "setup_intent.canceled",
        SetupIntentRequiresAction = "setup_intent.requires_action",
        SetupIntentSetupFailed = "setup_intent.setup_failed",

        // Subscription schedule events
        SubscriptionScheduleCreated = "subscription_schedule.created",
        SubscriptionScheduleUpdated = "subscription_schedule.updated",
        SubscriptionScheduleCanceled = "subscription_schedule.canceled",
        SubscriptionScheduleReleased = "subscription_schedule.released",
        SubscriptionScheduleCompleted = "subscription_schedule.completed",
        SubscriptionScheduleAborted = "subscription_schedule.aborted",
        SubscriptionScheduleExpiring = "subscription_schedule.expiring",

        // Transfer events
        TransferCreated = "transfer.created",
        TransferUpdated = "transfer.updated",
        TransferReversed = "transfer.reversed",
    }
}
