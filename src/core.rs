//! Core traits and types used across the Stripe resources.

use serde::{Deserialize, Serialize};

/// The API generation a request targets.
///
/// v1 takes form-encoded request bodies; v2 takes JSON and requires a `Stripe-Version` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    V1,
    V2,
}

impl Namespace {
    /// The production base URL for this namespace. Always ends with a `/`.
    pub fn base_url(&self) -> &'static str {
        match self {
            Namespace::V1 => "https://api.stripe.com/v1/",
            Namespace::V2 => "https://api.stripe.com/v2/",
        }
    }

    /// The request `Content-Type` this namespace expects.
    pub fn content_type(&self) -> &'static str {
        match self {
            Namespace::V1 => "application/x-www-form-urlencoded",
            Namespace::V2 => "application/json",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::V1 => "v1",
            Namespace::V2 => "v2",
        }
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A top-level Stripe object with its own endpoint.
pub trait Resource {
    /// Path of the resource relative to its namespace base URL, e.g. `"charges"`.
    const SCHEMA: &'static str;
    /// The namespace serving this resource.
    const NAMESPACE: Namespace = Namespace::V1;
}

/// A resource carrying a vendor-assigned `id`.
pub trait Identified {
    fn id(&self) -> &str;
}

macro_rules! impl_identified {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::core::Identified for $ty {
                fn id(&self) -> &str {
                    &self.id
                }
            }
        )*
    };
}

pub(crate) use impl_identified;

/// A relation Stripe returns as a bare id, or as the embedded object when the
/// request asked for it through `expand[]`.
///
/// ```
/// use stripe_kit::{core::Expandable, resources::Customer};
///
/// let bare: Expandable<Customer> = serde_json::from_value(serde_json::json!("cus_123")).unwrap();
/// assert_eq!(bare.as_id(), Some("cus_123"));
/// assert!(!bare.is_expanded());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expandable<T> {
    Id(String),
    Object(Box<T>),
}

impl<T> Expandable<T> {
    pub fn is_expanded(&self) -> bool {
        matches!(self, Expandable::Object(_))
    }

    /// The bare id, if the relation was not expanded.
    pub fn as_id(&self) -> Option<&str> {
        match self {
            Expandable::Id(id) => Some(id),
            Expandable::Object(_) => None,
        }
    }

    pub fn as_object(&self) -> Option<&T> {
        match self {
            Expandable::Id(_) => None,
            Expandable::Object(object) => Some(object),
        }
    }

    pub fn into_object(self) -> Option<T> {
        match self {
            Expandable::Id(_) => None,
            Expandable::Object(object) => Some(*object),
        }
    }
}

impl<T: Identified> Expandable<T> {
    /// The related id, whether or not the relation was expanded.
    pub fn id(&self) -> &str {
        match self {
            Expandable::Id(id) => id,
            Expandable::Object(object) => object.id(),
        }
    }
}

/// A page of a v1 list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListObject<T> {
    /// Always `"list"`.
    pub object: String,
    pub data: Vec<T>,
    pub has_more: bool,
    /// The URL this list can be fetched from, e.g. `/v1/charges/ch_123/refunds`.
    pub url: String,
}

impl<T> ListObject<T> {
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> IntoIterator for ListObject<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
