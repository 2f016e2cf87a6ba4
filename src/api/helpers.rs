use std::sync::Arc;
use poem::error::{MethodNotAllowedError, NotFoundError};
use poem::{Endpoint, IntoResponse, Request, Response};
use poem_openapi::error::{ParseParamError, ParsePathError, ParseRequestPayloadError};
use serde::Deserialize;
use crate::api::items::PATH_PARAMETERS;
use crate::api::query::query_bounds;
use crate::errors::{ApiError, Location};
use crate::types::dto::FieldError;

/// Request details kept for rendering errors after the request is consumed
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RequestContext {
    pub path: String,
    pub query: Option<String>,
}

#[derive(Deserialize)]
struct QueryString {
    query: Option<String>,
}

impl RequestContext {
    pub fn from_request(req: &Request) -> Self {
        Self {
            path: req.uri().path().to_string(),
            query: req.params::<QueryString>().ok().and_then(|params| params.query),
        }
    }
}

/// Call the endpoint and render whatever error it returns
pub async fn handle_errors<E: Endpoint>(ep: Arc<E>, req: Request) -> poem::Result<Response> {
    let context = RequestContext::from_request(&req);

    match ep.call(req).await {
        Ok(output) => Ok(output.into_response()),
        Err(err) => Ok(render_error(&context, err)),
    }
}

/// Map framework errors onto the structured error bodies
///
/// Routing misses become 404/405 with a `detail` message. Body and parameter
/// parse failures become 422 in the same shape as validator rejections. Any
/// other error, including `ApiError`s returned by handlers, is passed through.
pub fn render_error(context: &RequestContext, err: poem::Error) -> Response {
    to_api_error(context, &err)
        .map(IntoResponse::into_response)
        .unwrap_or_else(|| err.into_response())
}

fn to_api_error(context: &RequestContext, err: &poem::Error) -> Option<ApiError> {
    if err.is::<NotFoundError>() {
        return Some(ApiError::not_found());
    }

    if err.is::<MethodNotAllowedError>() {
        return Some(ApiError::method_not_allowed());
    }

    if let Some(payload_err) = err.downcast_ref::<ParseRequestPayloadError>() {
        tracing::debug!("Unparsable request body: {}", payload_err.reason);
        return Some(ApiError::validation(vec![FieldError::json_invalid(&payload_err.reason)]));
    }

    if let Some(path_err) = err.downcast_ref::<ParsePathError>() {
        tracing::debug!("Unparsable path parameter {}: {}", path_err.name, path_err.reason);
        return path_parameter_error(&context.path);
    }

    if let Some(param_err) = err.downcast_ref::<ParseParamError>() {
        tracing::debug!("Rejected parameter {}: {}", param_err.name, param_err.reason);
        return Some(query_parameter_error(context, param_err));
    }

    None
}

/// The path error names a generated placeholder, so the declared name is
/// recovered from the route segment preceding the raw value
fn path_parameter_error(path: &str) -> Option<ApiError> {
    let mut segments = path.split('/').filter(|segment| !segment.is_empty());
    let route = segments.next()?;
    let raw = segments.next()?;
    let name = PATH_PARAMETERS.iter().find(|name| **name == route)?;

    Some(ApiError::validation(vec![FieldError::int_parsing(Location::Path, name, raw)]))
}

fn query_parameter_error(context: &RequestContext, err: &ParseParamError) -> ApiError {
    if err.name == "query" {
        if let Err(errors) = query_bounds(&context.path).check(err.name, context.query.clone()) {
            return errors.into();
        }
    }

    let input = if err.name == "query" { context.query.as_deref() } else { None };
    ApiError::validation(vec![FieldError::value_error(Location::Query, err.name, input, &err.reason)])
}
