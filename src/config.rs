//! Credentials, endpoints and request headers for talking to Stripe.
//!
//! [`Api`] is a plain value: build one per account, or share one process-wide through
//! [`SharedApi`]. Nothing here performs I/O; an HTTP client reads the endpoint and headers
//! and issues the request itself.
//!
//! ```
//! use stripe_kit::{config::Api, core::Namespace};
//!
//! let mut api = Api::default();
//! api.configure(None, "sk_test_123", None);
//!
//! let headers = api.headers_for(Namespace::V2).unwrap();
//! assert_eq!(headers["authorization"], "Bearer sk_test_123");
//! assert_eq!(headers["content-type"], "application/json");
//! assert_eq!(headers["stripe-version"], "2024-09-30.acacia");
//! ```

use std::sync::{Arc, LazyLock};

use bon::Builder;
use http::{
    HeaderMap, HeaderName, HeaderValue,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use parking_lot::RwLock;
use url::Url;

pub use crate::core::Namespace;
use crate::{
    core::Resource,
    errors::{Error, Result},
};

/// The API version sent with v2 requests unless configured otherwise.
pub const DEFAULT_API_VERSION: &str = "2024-09-30.acacia";

/// Required on every v2 request.
pub const STRIPE_VERSION: HeaderName = HeaderName::from_static("stripe-version");

/// Endpoints and credentials for one Stripe account.
///
/// An unset endpoint falls back to the production URL of its namespace.
#[derive(Builder, Clone, PartialEq, Eq)]
pub struct Api {
    /// v1 base URL, e.g. a proxy or `stripe-mock`.
    #[builder(with = |url: Url| with_trailing_slash(url))]
    endpoint: Option<Url>,
    /// v2 base URL.
    #[builder(with = |url: Url| with_trailing_slash(url))]
    v2_endpoint: Option<Url>,
    #[builder(into)]
    secret: Option<String>,
    /// Sent as `Stripe-Version` on v2 requests.
    #[builder(into, default = DEFAULT_API_VERSION.to_string())]
    pub api_version: String,
}

impl Default for Api {
    fn default() -> Self {
        Api {
            endpoint: None,
            v2_endpoint: None,
            secret: None,
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }
}

impl std::fmt::Debug for Api {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Api")
            .field("endpoint", &self.endpoint_for(Namespace::V1))
            .field("v2_endpoint", &self.endpoint_for(Namespace::V2))
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl Api {
    /// A configured `Api` with a custom v1 endpoint and the production v2 endpoint.
    pub fn new(endpoint: Url, secret: impl Into<String>) -> Self {
        let mut api = Api::default();
        api.configure(Some(endpoint), secret, None);
        api
    }

    /// Sets every field at once.
    ///
    /// `endpoint` defaults to the production v1 URL and `api_version` to
    /// [`DEFAULT_API_VERSION`]. The v2 endpoint is always reset to production.
    pub fn configure(
        &mut self,
        endpoint: Option<Url>,
        secret: impl Into<String>,
        api_version: Option<String>,
    ) {
        self.endpoint = endpoint.map(with_trailing_slash);
        self.v2_endpoint = None;
        self.secret = Some(secret.into());
        self.api_version = api_version.unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            v1 = %self.endpoint_for(Namespace::V1),
            v2 = %self.endpoint_for(Namespace::V2),
            api_version = %self.api_version,
            "Configured Stripe API"
        );
    }

    /// Like [`Api::configure`], but leaves the v1 endpoint untouched.
    ///
    /// v2 only accepts secret keys, not restricted keys.
    pub fn configure_v2(&mut self, secret: impl Into<String>, api_version: Option<String>) {
        self.v2_endpoint = None;
        self.secret = Some(secret.into());
        self.api_version = api_version.unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            namespace = %Namespace::V2,
            api_version = %self.api_version,
            "Configured Stripe API"
        );
    }

    /// Points the v2 namespace somewhere other than production.
    pub fn set_v2_endpoint(&mut self, endpoint: Url) {
        self.v2_endpoint = Some(with_trailing_slash(endpoint));
    }

    pub fn is_configured(&self) -> bool {
        self.secret.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// The base URL for `namespace`. Always ends with a `/`.
    pub fn endpoint_for(&self, namespace: Namespace) -> &str {
        let configured = match namespace {
            Namespace::V1 => self.endpoint.as_ref(),
            Namespace::V2 => self.v2_endpoint.as_ref(),
        };
        configured.map(Url::as_str).unwrap_or(namespace.base_url())
    }

    /// The collection URL of `R`, e.g. `https://api.stripe.com/v1/charges`.
    pub fn url_for<R: Resource>(&self) -> Result<Url> {
        let base = Url::parse(self.endpoint_for(R::NAMESPACE))?;
        Ok(base.join(R::SCHEMA)?)
    }

    /// Headers for a request to `namespace`.
    ///
    /// Always `Authorization` and `Content-Type`; `Stripe-Version` for v2 only.
    /// Fails with [`Error::MissingSecret`] until a secret is configured.
    pub fn headers_for(&self, namespace: Namespace) -> Result<HeaderMap> {
        let secret = match self.secret.as_deref() {
            Some(secret) if !secret.is_empty() => secret,
            _ => {
                #[cfg(feature = "tracing")]
                tracing::warn!(%namespace, "Stripe headers requested before a secret was configured");

                return Err(Error::MissingSecret);
            }
        };

        let mut authorization = HeaderValue::from_str(&format!("Bearer {secret}"))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::with_capacity(3);
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static(namespace.content_type()),
        );
        if namespace == Namespace::V2 {
            headers.insert(STRIPE_VERSION, HeaderValue::from_str(&self.api_version)?);
        }
        Ok(headers)
    }
}

// `Url::join` replaces the last path segment unless the base ends with `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

static GLOBAL: LazyLock<SharedApi> = LazyLock::new(SharedApi::default);

/// An [`Api`] shared between threads.
///
/// Writers replace the configuration under a write lock, so readers always see either the
/// old or the new credential set, never a mix.
#[derive(Debug, Clone, Default)]
pub struct SharedApi(Arc<RwLock<Api>>);

impl SharedApi {
    pub fn new(api: Api) -> Self {
        SharedApi(Arc::new(RwLock::new(api)))
    }

    /// The process-wide instance. Unconfigured until [`SharedApi::configure`] is called.
    pub fn global() -> &'static SharedApi {
        &GLOBAL
    }

    pub fn configure(
        &self,
        endpoint: Option<Url>,
        secret: impl Into<String>,
        api_version: Option<String>,
    ) {
        self.0.write().configure(endpoint, secret, api_version);
    }

    pub fn configure_v2(&self, secret: impl Into<String>, api_version: Option<String>) {
        self.0.write().configure_v2(secret, api_version);
    }

    /// Swaps in a whole new configuration and returns the previous one.
    pub fn replace(&self, api: Api) -> Api {
        std::mem::replace(&mut *self.0.write(), api)
    }

    /// A copy of the current configuration.
    pub fn snapshot(&self) -> Api {
        self.0.read().clone()
    }

    pub fn endpoint_for(&self, namespace: Namespace) -> String {
        self.0.read().endpoint_for(namespace).to_string()
    }

    pub fn url_for<R: Resource>(&self) -> Result<Url> {
        self.0.read().url_for::<R>()
    }

    pub fn headers_for(&self, namespace: Namespace) -> Result<HeaderMap> {
        self.0.read().headers_for(namespace)
    }
}

impl From<Api> for SharedApi {
    fn from(api: Api) -> Self {
        SharedApi::new(api)
    }
}
