//! Request-side types shared by the client.

use serde_json::{Map, Value};

/// A scalar query-parameter value.
///
/// `Null` stands for an absent value and is dropped when the query string is
/// built; everything else is coerced to its string rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl ParamValue {
    /// String rendering for the query string, or `None` for `Null`.
    pub fn coerce(&self) -> Option<String> {
        match self {
            ParamValue::Str(s) => Some(s.clone()),
            ParamValue::Int(i) => Some(i.to_string()),
            ParamValue::Float(f) => Some(f.to_string()),
            ParamValue::Bool(b) => Some(b.to_string()),
            ParamValue::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ParamValue::Null)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::Null, Into::into)
    }
}

/// Ordered query parameters for a GET action.
#[derive(Debug, Clone, Default)]
pub struct Params(Vec<(String, ParamValue)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter. Builder-style so call sites read like the query
    /// string they produce.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.0.push((key.into(), value.into()));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, ParamValue)> {
        self.0.iter()
    }
}

/// HTTP verb for an [`ApiRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One remote invocation: which action, over which verb, with which data.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub action: String,
    pub method: Method,
    /// Query parameters; carries data for GET requests.
    pub params: Params,
    /// Payload fields; carries data for POST requests.
    pub body: Map<String, Value>,
}

impl ApiRequest {
    /// A read-style invocation with parameters in the query string.
    pub fn get(action: impl Into<String>, params: Params) -> Self {
        Self {
            action: action.into(),
            method: Method::Get,
            params,
            body: Map::new(),
        }
    }

    /// A mutating invocation with `body` as the JSON payload.
    pub fn post(action: impl Into<String>, body: Map<String, Value>) -> Self {
        Self {
            action: action.into(),
            method: Method::Post,
            params: Params::new(),
            body,
        }
    }

    /// The full query-string pairs for a GET: `action` first, then every
    /// non-null parameter coerced to string, in insertion order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("action".to_string(), self.action.clone())];
        pairs.extend(
            self.params
                .iter()
                .filter_map(|(key, value)| value.coerce().map(|v| (key.clone(), v))),
        );
        pairs
    }

    /// The POST payload: `body` with the request's action merged in.
    pub fn json_payload(&self) -> Value {
        post_payload(&self.action, self.body.clone())
    }
}

/// Build the POST payload: `body` with `action` set to the given name.
///
/// The explicit action is inserted after the merge, so an `action` key inside
/// `body` is always overwritten.
pub fn post_payload(action: &str, body: Map<String, Value>) -> Value {
    let mut payload = body;
    payload.insert("action".to_string(), Value::String(action.to_string()));
    Value::Object(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_pairs_drop_null_values() {
        let request = ApiRequest::get(
            "getVoteData",
            Params::new()
                .set("year", 2024)
                .set("region", ParamValue::Null),
        );
        assert_eq!(
            request.query_pairs(),
            vec![
                ("action".to_string(), "getVoteData".to_string()),
                ("year".to_string(), "2024".to_string()),
            ]
        );
    }

    #[test]
    fn query_pairs_coerce_scalars_to_strings() {
        let request = ApiRequest::get(
            "search",
            Params::new()
                .set("q", "turnout")
                .set("limit", 25)
                .set("exact", true),
        );
        assert_eq!(
            request.query_pairs(),
            vec![
                ("action".to_string(), "search".to_string()),
                ("q".to_string(), "turnout".to_string()),
                ("limit".to_string(), "25".to_string()),
                ("exact".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn none_option_becomes_null() {
        let value: ParamValue = Option::<i64>::None.into();
        assert!(value.is_null());
    }

    #[test]
    fn post_payload_sets_action_key() {
        let body = json!({ "candidate": "A", "count": 3 });
        let payload = post_payload("submitVote", body.as_object().cloned().unwrap_or_default());
        assert_eq!(payload["action"], "submitVote");
        assert_eq!(payload["candidate"], "A");
        assert_eq!(payload["count"], 3);
    }

    #[test]
    fn explicit_action_overwrites_body_action() {
        let body = json!({ "action": "spoofed", "candidate": "B" });
        let payload = post_payload("submitVote", body.as_object().cloned().unwrap_or_default());
        assert_eq!(payload["action"], "submitVote");
    }

    #[test]
    fn post_request_payload_merges_action() {
        let body = json!({ "candidate": "C" });
        let request = ApiRequest::post("submitVote", body.as_object().cloned().unwrap_or_default());
        assert_eq!(request.method, Method::Post);

        let payload = request.json_payload();
        assert_eq!(payload["action"], "submitVote");
        assert_eq!(payload["candidate"], "C");
    }
}
