//! v2 resources: usage metering, event destinations and thin events.
//!
//! Every resource here reports [`Namespace::V2`](crate::core::Namespace::V2), so requests for
//! them take JSON bodies and a `Stripe-Version` header.

mod event_destination;
mod list;
mod meter_event;
mod meter_event_session;
mod thin_event;

pub use event_destination::*;
pub use list::*;
pub use meter_event::*;
pub use meter_event_session::*;
pub use thin_event::*;
