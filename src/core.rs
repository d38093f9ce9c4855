pub mod config;
pub mod error;
pub(crate) mod http;
pub mod types;

pub use config::{
    DEFAULT_ENDPOINT, DefaultEndpoint, EndpointConfig, EndpointSource, PLACEHOLDER_MARKER,
    PageMetadata, RuntimeOverride,
};
pub use error::ApiError;
pub use types::{ApiRequest, Method, ParamValue, Params, post_payload};
