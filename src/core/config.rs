//! Endpoint resolution.
//!
//! The deployed backend URL can come from several places depending on how the
//! site is served. Each place is an [`EndpointSource`]; sources are queried in
//! priority order and the first usable value wins. The shipped default still
//! contains [`PLACEHOLDER_MARKER`], which keeps a fresh checkout runnable but
//! marks the endpoint as unconfigured until a deployer replaces it.

use std::sync::OnceLock;

/// Sentinel substring left in the default endpoint until a deployer swaps in
/// the real deployment URL.
pub const PLACEHOLDER_MARKER: &str = "YOUR_DEPLOYMENT_ID";

/// Shipped default. Must be replaced (or overridden) before the client can
/// reach a real backend.
pub const DEFAULT_ENDPOINT: &str = "https://script.google.com/macros/s/YOUR_DEPLOYMENT_ID/exec";

/// One place an endpoint URL may come from.
pub trait EndpointSource {
    /// The URL this source offers, or `None` when it has nothing usable.
    fn endpoint(&self) -> Option<String>;
}

/// A value injected at runtime by the embedder. Wins unconditionally when
/// present and non-empty.
pub struct RuntimeOverride(pub Option<String>);

impl EndpointSource for RuntimeOverride {
    fn endpoint(&self) -> Option<String> {
        self.0.clone().filter(|url| !url.is_empty())
    }
}

/// A value lifted out of page-embedded metadata (a `<meta name="gas-api-url">`
/// tag on the hosting page). Rejected while it still carries the placeholder,
/// since site templates ship with the tag present but unfilled.
pub struct PageMetadata(pub Option<String>);

impl EndpointSource for PageMetadata {
    fn endpoint(&self) -> Option<String> {
        self.0
            .clone()
            .filter(|url| !url.is_empty() && !url.contains(PLACEHOLDER_MARKER))
    }
}

/// Last-resort source; always yields [`DEFAULT_ENDPOINT`].
pub struct DefaultEndpoint;

impl EndpointSource for DefaultEndpoint {
    fn endpoint(&self) -> Option<String> {
        Some(DEFAULT_ENDPOINT.to_string())
    }
}

/// The resolved backend URL. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    url: String,
}

impl EndpointConfig {
    /// Query `sources` in order and take the first offered value. Falls back
    /// to [`DEFAULT_ENDPOINT`] when every source declines.
    pub fn resolve(sources: &[&dyn EndpointSource]) -> Self {
        let url = sources
            .iter()
            .find_map(|source| source.endpoint())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Self { url }
    }

    /// Wrap an already-known URL, skipping source resolution.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Resolve once for the whole process and keep the result. Later calls
    /// return the first resolution regardless of the sources they pass.
    pub fn global(sources: &[&dyn EndpointSource]) -> &'static EndpointConfig {
        static RESOLVED: OnceLock<EndpointConfig> = OnceLock::new();
        RESOLVED.get_or_init(|| Self::resolve(sources))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// True when the URL is non-empty and the deployer has replaced the
    /// placeholder. Callers should check this before issuing requests to get
    /// a clearer diagnostic than an HTTP failure against the placeholder host.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.url.contains(PLACEHOLDER_MARKER)
    }
}
