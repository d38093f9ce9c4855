//! Thin reqwest wrapper shared by the GET and POST paths.
//!
//! One suspend point per request, no retries, no timeout. Failures are logged
//! with the action that triggered them and propagated unchanged.

use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::{debug, error};

use super::error::ApiError;

pub(crate) struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub(crate) fn new(user_agent: Option<&str>) -> Result<Self, ApiError> {
        let default_ua = format!("votes-client/{}", env!("CARGO_PKG_VERSION"));
        let ua = user_agent.unwrap_or(&default_ua);

        let client = reqwest::Client::builder()
            .user_agent(ua)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| ApiError::Configuration(format!("failed to build reqwest client: {e}")))?;

        Ok(Self { client })
    }

    /// Issue a GET with the given query pairs and parse the body as JSON.
    #[tracing::instrument(name = "api_get", skip(self, query), fields(url = %url), err)]
    pub(crate) async fn get_json(
        &self,
        url: &str,
        query: &[(String, String)],
        action: &str,
    ) -> Result<Value, ApiError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| transport_error(action, e))?;

        read_json(response, action).await
    }

    /// Issue a POST with a JSON payload under the given content type and
    /// parse the body as JSON.
    #[tracing::instrument(name = "api_post", skip(self, payload), fields(url = %url), err)]
    pub(crate) async fn post_json(
        &self,
        url: &str,
        content_type: &str,
        payload: &Value,
        action: &str,
    ) -> Result<Value, ApiError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, content_type)
            .body(payload.to_string())
            .send()
            .await
            .map_err(|e| transport_error(action, e))?;

        read_json(response, action).await
    }
}

fn transport_error(action: &str, source: reqwest::Error) -> ApiError {
    error!(action, error = %source, "request failed to reach the endpoint");
    ApiError::Transport {
        action: action.to_string(),
        source,
    }
}

async fn read_json(response: reqwest::Response, action: &str) -> Result<Value, ApiError> {
    let status = response.status();

    if !status.is_success() {
        error!(action, status = status.as_u16(), "endpoint returned error status");
        return Err(ApiError::Http {
            action: action.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| transport_error(action, e))?;

    debug!(action, status = %status, "request successful");

    serde_json::from_str(&body).map_err(|e| {
        error!(action, error = %e, "response body is not valid JSON");
        ApiError::Parse {
            action: action.to_string(),
            source: e,
        }
    })
}
