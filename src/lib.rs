//! # votes-client
//!
//! Async client for a spreadsheet-backed, action-dispatch voting REST API.
//!
//! The backend is a single URL that multiplexes operations on an `action`
//! parameter: reads go out as GETs with the action and parameters in the
//! query string, writes as POSTs with the action merged into a JSON payload.
//! Responses are arbitrary JSON and returned unvalidated as
//! [`serde_json::Value`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use votes_client::{ClientConfig, EndpointConfig, Params, RemoteClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let endpoint = EndpointConfig::from_url("https://script.google.com/macros/s/AKfy123/exec");
//!     let client = RemoteClient::new(ClientConfig::new(endpoint))?;
//!
//!     if !client.is_configured() {
//!         eprintln!("endpoint still carries the deployment placeholder");
//!         return Ok(());
//!     }
//!
//!     let data = client
//!         .get("getVoteData", Params::new().set("year", 2024))
//!         .await?;
//!     println!("{data}");
//!     Ok(())
//! }
//! ```
//!
//! Endpoint URLs can also be resolved from an ordered chain of sources
//! (runtime override, page metadata, shipped default) via
//! [`EndpointConfig::resolve`]; see [`core::config`].

pub mod client;
pub mod core;
pub mod format;
pub mod navigator;

pub use client::{ClientConfig, RemoteApi, RemoteClient, TEXT_PLAIN_UTF8};
pub use core::{
    ApiError, ApiRequest, DEFAULT_ENDPOINT, DefaultEndpoint, EndpointConfig, EndpointSource,
    Method, PLACEHOLDER_MARKER, PageMetadata, ParamValue, Params, RuntimeOverride, post_payload,
};
pub use format::format_number;
pub use navigator::{Navigate, Navigator, PageContext, target_for};
