use std::collections::BTreeMap;
use crate::services::item_service::truthy_text;
use crate::types::dto::QueryListing;

const LISTING: [(&str, &str); 2] = [
    ("naija_news", "Nairaland.com"),
    ("naija_entertainment", "Naijaloaded.com"),
];

/// Builds the fixed listing served by the query parameter endpoints
#[derive(Debug, Default, Clone, Copy)]
pub struct ListingService;

impl ListingService {
    pub fn new() -> Self {
        Self
    }

    /// The two-entry listing, plus `query` when it is non-empty
    pub fn listing(&self, query: Option<String>) -> QueryListing {
        let query_parameter = LISTING
            .iter()
            .map(|(category, site)| BTreeMap::from([(category.to_string(), site.to_string())]))
            .collect();

        QueryListing {
            query_parameter,
            query: truthy_text(query),
        }
    }
}
