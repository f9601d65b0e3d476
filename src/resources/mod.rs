//! v1 resource models, one module per resource.
//!
//! Every resource implements [`Resource`](crate::core::Resource), whose `SCHEMA` is the path
//! segment under `/v1/`.

mod charge;
mod checkout_session;
mod coupon;
mod customer;
mod event;
mod invoice;
mod order;
mod payment;
mod payment_intent;
mod payment_method;
mod price;
mod product;
mod refund;
mod tax_rate;

pub use charge::*;
pub use checkout_session::*;
pub use coupon::*;
pub use customer::*;
pub use event::*;
pub use invoice::*;
pub use order::*;
pub use payment::*;
pub use payment_intent::*;
pub use payment_method::*;
pub use price::*;
pub use product::*;
pub use refund::*;
pub use tax_rate::*;
