// API layer - HTTP endpoints
pub mod helpers;
pub mod items;
pub mod payload;
pub mod query;

pub use items::ItemsApi;
pub use query::QueryApi;

use poem::middleware::{NormalizePath, Tracing, TrailingSlash};
use poem::{Endpoint, EndpointExt, Route};
use poem_openapi::OpenApiService;

pub const API_TITLE: &str = "Request Body API";
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// OpenAPI service containing every endpoint
pub fn api_service(server_url: &str) -> OpenApiService<(ItemsApi, QueryApi), ()> {
    OpenApiService::new((ItemsApi::new(), QueryApi::new()), API_TITLE, API_VERSION)
        .server(server_url)
}

/// Compose the full application
///
/// Endpoints are served from the root, the generated document at
/// `/openapi.json` and Swagger UI under `/docs`. Trailing slashes are trimmed
/// before routing, so `/items/` and `/items` reach the same endpoint.
pub fn build_app(server_url: String) -> impl Endpoint {
    let api_service = api_service(&server_url);
    let spec = api_service.spec_endpoint();
    let ui = api_service.swagger_ui();

    Route::new()
        .at("/openapi.json", spec)
        .nest("/docs", ui)
        .nest("/", api_service)
        .with(NormalizePath::new(TrailingSlash::Trim))
        .with(Tracing)
        .around(helpers::handle_errors)
}
