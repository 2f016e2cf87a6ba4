use std::collections::BTreeMap;
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Fixed site listing returned by the query parameter endpoints
#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryListing {
    /// Two single-entry maps of category to site
    pub query_parameter: Vec<BTreeMap<String, String>>,

    /// Query string, present only when non-empty
    #[oai(skip_serializing_if_is_none)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}
