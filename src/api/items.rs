use poem_openapi::{param::{Path, Query}, payload::Json, OpenApi, Tags};
use crate::api::payload::ItemBody;
use crate::errors::ApiError;
use crate::services::{ItemService, ItemValidator};
use crate::types::dto::{Item, PathItem, PathQueryItem, PricedItem};

/// Integer path parameters, each named after the route segment it follows
pub const PATH_PARAMETERS: [&str; 2] = [
    "request_and_path_parameter",
    "request_and_path_and_query_parameter",
];

/// Item endpoints accepting a JSON request body
///
/// Bodies arrive as [`ItemBody`] and run through [`ItemValidator`] so that a
/// rejected payload reports every offending field.
pub struct ItemsApi {
    validator: ItemValidator,
    service: ItemService,
}

impl ItemsApi {
    pub fn new() -> Self {
        Self {
            validator: ItemValidator::new(),
            service: ItemService::new(),
        }
    }
}

impl Default for ItemsApi {
    fn default() -> Self {
        Self::new()
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ApiTags {
    /// Request body handling
    Items,
}

#[OpenApi]
impl ItemsApi {
    /// Create an item
    ///
    /// Echoes the validated item back unchanged
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    async fn create_item(&self, body: ItemBody) -> Result<Json<Item>, ApiError> {
        let item = self.validator.validate(&body.0)?;
        tracing::debug!("Creating item {}", item.name);

        Ok(Json(self.service.echo(item)))
    }

    /// Create an item and compute its tax-inclusive price
    ///
    /// `price_with_tax` is only present when `tax` is non-zero
    #[oai(path = "/create_parameter_with_module", method = "post", tag = "ApiTags::Items")]
    async fn create_parameter_with_module(
        &self,
        body: ItemBody,
    ) -> Result<Json<PricedItem>, ApiError> {
        let item = self.validator.validate(&body.0)?;

        Ok(Json(self.service.with_tax(item)))
    }

    /// Update an item addressed by a path parameter
    #[oai(
        path = "/request_and_path_parameter/:request_and_path_parameter",
        method = "put",
        tag = "ApiTags::Items"
    )]
    async fn request_and_path_parameter(
        &self,
        request_and_path_parameter: Path<i64>,
        body: ItemBody,
    ) -> Result<Json<PathItem>, ApiError> {
        let item = self.validator.validate(&body.0)?;
        tracing::debug!("Updating item {} at {}", item.name, request_and_path_parameter.0);

        Ok(Json(self.service.merge_path(request_and_path_parameter.0, item)))
    }

    /// Update an item addressed by a path parameter, with an optional query string
    ///
    /// `query` is only echoed when non-empty
    #[oai(
        path = "/request_and_path_and_query_parameter/:request_and_path_and_query_parameter",
        method = "put",
        tag = "ApiTags::Items"
    )]
    async fn request_and_path_and_query_parameter(
        &self,
        request_and_path_and_query_parameter: Path<i64>,
        body: ItemBody,
        query: Query<Option<String>>,
    ) -> Result<Json<PathQueryItem>, ApiError> {
        let item = self.validator.validate(&body.0)?;

        Ok(Json(self.service.merge_path_and_query(
            request_and_path_and_query_parameter.0,
            item,
            query.0,
        )))
    }
}
