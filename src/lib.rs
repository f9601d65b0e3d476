//! # Stripe Kit
//!
//! Typed models for the Stripe REST API, plus the credential and header plumbing an HTTP
//! client needs to call it.
//!
//! This crate performs no I/O. You bring the transport; `stripe-kit` gives you:
//!
//! - [`resources`]: v1 objects such as [`Charge`](resources::Charge),
//!   [`Customer`](resources::Customer) and [`Invoice`](resources::Invoice), and the webhook
//!   [`Event`](resources::Event).
//! - [`v2`]: meter events, meter event sessions, event destinations and thin events.
//! - [`config`]: [`Api`](config::Api) with per-namespace endpoints and request headers.
//! - [`decode`]: entry points that report the field path of a decode failure.
//!
//! ## Quick Start
//!
//! ```rust
//! use stripe_kit::{
//!     config::{Api, Namespace},
//!     decode,
//!     resources::{Charge, ChargeStatus},
//! };
//!
//! let mut api = Api::default();
//! api.configure(None, "sk_test_123", None);
//!
//! let url = api.url_for::<Charge>().unwrap();
//! let headers = api.headers_for(Namespace::V1).unwrap();
//! assert_eq!(url.as_str(), "https://api.stripe.com/v1/charges");
//! assert_eq!(headers["authorization"], "Bearer sk_test_123");
//!
//! // ...send the request with your HTTP client, then decode the body:
//! let body = r#"{
//!     "id": "ch_123",
//!     "object": "charge",
//!     "amount": 2000,
//!     "amount_captured": 2000,
//!     "amount_refunded": 0,
//!     "billing_details": {},
//!     "captured": true,
//!     "created": 1700000000,
//!     "currency": "usd",
//!     "disputed": false,
//!     "livemode": false,
//!     "paid": true,
//!     "refunded": false,
//!     "status": "succeeded"
//! }"#;
//! let charge: Charge = decode::from_str(body).unwrap();
//! assert_eq!(charge.status, ChargeStatus::Succeeded);
//! ```
//!
//! ## Wire Format
//!
//! Field names match Stripe's keys. Where a key is a Rust keyword (`type`), the field is
//! renamed locally, e.g. [`Outcome::outcome_type`](resources::Outcome::outcome_type).
//!
//! - A missing key and an explicit `null` both decode to `None`.
//! - Unknown keys are ignored.
//! - Enums are closed: a wire string that is not listed fails the decode. Vocabularies that
//!   Stripe extends often, such as event types, stay `String`.
//!
//! ## Error Handling
//!
//! Everything returns [`errors::Result`]. Decode failures carry a
//! [`DecodeError`](errors::DecodeError) with the field path and a
//! [`DecodeErrorKind`](errors::DecodeErrorKind).
//!
//! ## Features
//!
//! - `tracing` (default): emits `tracing` events when configuring the API and while
//!   resolving polymorphic payment method options.
#![recursion_limit = "256"]

#[macro_use]
mod macros;

pub mod config;
pub mod core;
pub mod decode;
pub mod errors;
pub mod resources;
pub mod types;
pub mod v2;
