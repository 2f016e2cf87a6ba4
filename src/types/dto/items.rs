use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// A submitted item
///
/// `description` and `tax` are optional; when absent they serialize as `null`.
#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Name of the item
    pub name: String,

    /// Optional description of the item
    pub description: Option<String>,

    /// Price of the item
    pub price: f64,

    /// Optional tax applied to the item
    pub tax: Option<f64>,
}

/// Item echoed back with the tax-inclusive price
#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedItem {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,

    /// `price + tax`, present only when `tax` is non-zero
    #[oai(skip_serializing_if_is_none)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_with_tax: Option<f64>,
}

/// Item merged with the path parameter it was submitted under
#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    /// Path parameter value
    pub request_and_path_parameter: i64,

    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,
}

/// Item merged with its path parameter and the optional query string
#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathQueryItem {
    /// Path parameter value
    pub request_and_path_and_query_parameter: i64,

    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,

    /// Query string, present only when non-empty
    #[oai(skip_serializing_if_is_none)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}
