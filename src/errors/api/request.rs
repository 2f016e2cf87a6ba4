use crate::errors::internal::ValidationErrors;
use crate::types::dto::{ErrorDetail, FieldError, ValidationErrorResponse};
use poem_openapi::{ApiResponse, payload::Json};
use std::fmt;

/// Errors returned by the item and query endpoints
#[derive(ApiResponse, Debug)]
pub enum ApiError {
    /// No route matches the request path
    #[oai(status = 404)]
    NotFound(Json<ErrorDetail>),

    /// The path exists but not for this method
    #[oai(status = 405)]
    MethodNotAllowed(Json<ErrorDetail>),

    /// Body, path or query parameters failed validation
    #[oai(status = 422)]
    UnprocessableEntity(Json<ValidationErrorResponse>),
}

impl ApiError {
    /// Create a NotFound error
    pub fn not_found() -> Self {
        ApiError::NotFound(Json(ErrorDetail {
            detail: "Not Found".to_string(),
        }))
    }

    /// Create a MethodNotAllowed error
    pub fn method_not_allowed() -> Self {
        ApiError::MethodNotAllowed(Json(ErrorDetail {
            detail: "Method Not Allowed".to_string(),
        }))
    }

    /// Create an UnprocessableEntity error listing every offending field
    pub fn validation(errors: Vec<FieldError>) -> Self {
        ApiError::UnprocessableEntity(Json(ValidationErrorResponse { detail: errors }))
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::NotFound(_) => 404,
            ApiError::MethodNotAllowed(_) => 405,
            ApiError::UnprocessableEntity(_) => 422,
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        tracing::debug!("Rejecting request: {}", errors);
        ApiError::validation(errors.into_inner())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(json) | ApiError::MethodNotAllowed(json) => {
                write!(f, "{}", json.0.detail)
            }
            ApiError::UnprocessableEntity(json) => {
                write!(f, "{} validation error(s)", json.0.detail.len())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::internal::Location;

    #[test]
    fn test_validation_errors_convert_to_422() {
        let errors = ValidationErrors(vec![
            FieldError::missing(Location::Body, "name"),
            FieldError::missing(Location::Body, "price"),
        ]);

        let api_err = ApiError::from(errors);

        assert_eq!(api_err.status_code(), 422);
        match api_err {
            ApiError::UnprocessableEntity(json) => {
                assert_eq!(json.0.detail.len(), 2);
                assert_eq!(json.0.detail[0].loc, vec!["body", "name"]);
            }
            other => panic!("Expected UnprocessableEntity, got {:?}", other),
        }
    }

    #[test]
    fn test_routing_errors() {
        assert_eq!(ApiError::not_found().status_code(), 404);
        assert_eq!(ApiError::not_found().to_string(), "Not Found");
        assert_eq!(ApiError::method_not_allowed().status_code(), 405);
        assert_eq!(ApiError::method_not_allowed().to_string(), "Method Not Allowed");
    }
}
