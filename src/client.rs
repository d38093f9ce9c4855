//! The remote client: endpoint + verb wrappers around the action-dispatch API.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::core::{
    ApiError, ApiRequest, EndpointConfig, EndpointSource, Method, Params, http::HttpClient,
};

/// Content type sent with POST requests by default.
///
/// `text/plain` keeps cross-origin POSTs out of CORS-preflight territory; the
/// Apps Script backend does not implement the OPTIONS method, so a preflighted
/// request would never complete.
pub const TEXT_PLAIN_UTF8: &str = "text/plain;charset=utf-8";

/// Immutable client configuration, built once and handed to
/// [`RemoteClient::new`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: EndpointConfig,
    /// Content type for POST bodies. Defaults to [`TEXT_PLAIN_UTF8`]; change
    /// it when targeting a backend that handles preflight normally.
    pub post_content_type: String,
    /// Overrides the default `votes-client/<version>` user agent.
    pub user_agent: Option<String>,
}

impl ClientConfig {
    pub fn new(endpoint: EndpointConfig) -> Self {
        Self {
            endpoint,
            post_content_type: TEXT_PLAIN_UTF8.to_string(),
            user_agent: None,
        }
    }

    pub fn with_post_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.post_content_type = content_type.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

/// Seam for callers that want to stub the remote API in tests.
#[async_trait]
pub trait RemoteApi: Send + Sync {
    /// Read-style invocation; parameters travel in the query string.
    async fn get(&self, action: &str, params: Params) -> Result<Value, ApiError>;

    /// Mutating invocation; `body` travels as a JSON payload with the action
    /// merged in.
    async fn post(&self, action: &str, body: Map<String, Value>) -> Result<Value, ApiError>;
}

/// Async client for the spreadsheet-backed voting API.
///
/// Holds a shared `reqwest::Client` and an immutable [`ClientConfig`], so any
/// number of requests may be in flight concurrently.
pub struct RemoteClient {
    config: ClientConfig,
    http: HttpClient,
}

impl RemoteClient {
    /// Build a client from an explicit configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = HttpClient::new(config.user_agent.as_deref())?;
        Ok(Self { config, http })
    }

    /// Build a client whose endpoint is resolved from the given sources, in
    /// priority order.
    pub fn from_sources(sources: &[&dyn EndpointSource]) -> Result<Self, ApiError> {
        Self::new(ClientConfig::new(EndpointConfig::resolve(sources)))
    }

    /// Issue a GET for `action`. Every non-null entry of `params` is added to
    /// the query string, coerced to its string rendering.
    pub async fn get(&self, action: &str, params: Params) -> Result<Value, ApiError> {
        debug_assert!(!action.is_empty(), "action name must be non-empty");
        self.dispatch(ApiRequest::get(action, params)).await
    }

    /// Issue a POST for `action` with `body` as the JSON payload. An `action`
    /// key inside `body` is overwritten by the `action` argument.
    pub async fn post(&self, action: &str, body: Map<String, Value>) -> Result<Value, ApiError> {
        debug_assert!(!action.is_empty(), "action name must be non-empty");
        self.dispatch(ApiRequest::post(action, body)).await
    }

    /// Execute a request over the verb it names.
    async fn dispatch(&self, request: ApiRequest) -> Result<Value, ApiError> {
        match request.method {
            Method::Get => {
                self.http
                    .get_json(
                        self.config.endpoint.url(),
                        &request.query_pairs(),
                        &request.action,
                    )
                    .await
            }
            Method::Post => {
                self.http
                    .post_json(
                        self.config.endpoint.url(),
                        &self.config.post_content_type,
                        &request.json_payload(),
                        &request.action,
                    )
                    .await
            }
        }
    }

    /// True when the resolved endpoint points at a real deployment. Check
    /// this before issuing requests; a placeholder endpoint only fails later
    /// with an opaque HTTP error.
    pub fn is_configured(&self) -> bool {
        self.config.endpoint.is_configured()
    }

    pub fn endpoint(&self) -> &str {
        self.config.endpoint.url()
    }
}

#[async_trait]
impl RemoteApi for RemoteClient {
    async fn get(&self, action: &str, params: Params) -> Result<Value, ApiError> {
        RemoteClient::get(self, action, params).await
    }

    async fn post(&self, action: &str, body: Map<String, Value>) -> Result<Value, ApiError> {
        RemoteClient::post(self, action, body).await
    }
}
