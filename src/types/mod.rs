//! Leaf value types shared across Stripe resources.

mod address;
mod common;

pub use address::*;
pub use common::*;
