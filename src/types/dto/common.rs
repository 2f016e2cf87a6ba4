use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// One rejected input value
#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    /// Where the value came from, e.g. `["body", "price"]` or `["query", "query"]`
    pub loc: Vec<String>,

    /// Human-readable description of the expected type or constraint
    pub msg: String,

    /// Machine-readable error kind
    #[oai(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,

    /// The value that was received, `null` when it was missing
    pub input: Option<serde_json::Value>,
}

/// Response body for rejected requests
#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    /// Every offending field
    pub detail: Vec<FieldError>,
}

/// Response body for routing errors
#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}
