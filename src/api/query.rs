use poem_openapi::{param::Query, payload::Json, OpenApi, Tags};
use crate::errors::ApiError;
use crate::services::{LengthBounds, ListingService};
use crate::types::dto::QueryListing;

/// Upper bound shared by the length-limited listing endpoints
pub const QUERY_MAX_LENGTH: usize = 50;

/// Lower bound of the two-sided listing endpoint
pub const QUERY_MIN_LENGTH: usize = 3;

const WITH_LIMIT: LengthBounds = LengthBounds::at_most(QUERY_MAX_LENGTH);
const WITH_LIMIT_VALIDATION: LengthBounds = LengthBounds::between(QUERY_MIN_LENGTH, QUERY_MAX_LENGTH);

/// Bounds the listing route at `path` applies to `query`
///
/// Also used to rebuild the field error when the bounds declared on the
/// parameter reject a value before the handler runs.
pub fn query_bounds(path: &str) -> LengthBounds {
    match path.trim_end_matches('/') {
        "/query_parameter_with_limit" | "/query_parameter_as_optional_with_limit" => WITH_LIMIT,
        "/query_parameter_as_optional_with_limit_validation" => WITH_LIMIT_VALIDATION,
        _ => LengthBounds::UNBOUNDED,
    }
}

/// Listing endpoints driven by an optional `query` string
pub struct QueryApi {
    service: ListingService,
}

impl QueryApi {
    pub fn new() -> Self {
        Self {
            service: ListingService::new(),
        }
    }

    fn respond(&self, query: Option<String>, bounds: LengthBounds) -> Result<Json<QueryListing>, ApiError> {
        let query = bounds.check("query", query)?;

        Ok(Json(self.service.listing(query)))
    }
}

impl Default for QueryApi {
    fn default() -> Self {
        Self::new()
    }
}

/// API tags for query parameter endpoints
#[derive(Tags)]
enum ApiTags {
    /// Query parameter handling
    Query,
}

#[OpenApi]
impl QueryApi {
    /// Fixed listing, echoing `query` when given
    #[oai(path = "/query_parameter", method = "get", tag = "ApiTags::Query")]
    async fn query_parameter(&self, query: Query<Option<String>>) -> Result<Json<QueryListing>, ApiError> {
        self.respond(query.0, LengthBounds::UNBOUNDED)
    }

    /// Fixed listing; `query` may be at most 50 characters
    #[oai(path = "/query_parameter_with_limit", method = "get", tag = "ApiTags::Query")]
    async fn query_parameter_with_limit(
        &self,
        #[oai(validator(max_length = 50))] query: Query<Option<String>>,
    ) -> Result<Json<QueryListing>, ApiError> {
        self.respond(query.0, WITH_LIMIT)
    }

    /// Fixed listing; optional `query` of at most 50 characters
    #[oai(path = "/query_parameter_as_optional_with_limit", method = "get", tag = "ApiTags::Query")]
    async fn query_parameter_as_optional_with_limit(
        &self,
        #[oai(validator(max_length = 50))] query: Query<Option<String>>,
    ) -> Result<Json<QueryListing>, ApiError> {
        self.respond(query.0, WITH_LIMIT)
    }

    /// Fixed listing; optional `query` of 3 to 50 characters
    #[oai(
        path = "/query_parameter_as_optional_with_limit_validation",
        method = "get",
        tag = "ApiTags::Query"
    )]
    async fn query_parameter_as_optional_with_limit_validation(
        &self,
        #[oai(validator(min_length = 3, max_length = 50))] query: Query<Option<String>>,
    ) -> Result<Json<QueryListing>, ApiError> {
        self.respond(query.0, WITH_LIMIT_VALIDATION)
    }
}
