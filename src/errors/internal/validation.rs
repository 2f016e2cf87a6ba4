use serde_json::Value;
use thiserror::Error;
use crate::types::dto::FieldError;

/// Where a rejected value was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Body,
    Path,
    Query,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Body => "body",
            Location::Path => "path",
            Location::Query => "query",
        }
    }

    fn loc(&self, field: Option<&str>) -> Vec<String> {
        let mut loc = vec![self.as_str().to_string()];
        if let Some(field) = field {
            loc.push(field.to_string());
        }
        loc
    }
}

impl FieldError {
    /// Required field was omitted or null
    pub fn missing(location: Location, field: &str) -> Self {
        Self {
            loc: location.loc(Some(field)),
            msg: "Field required".to_string(),
            kind: "missing".to_string(),
            input: None,
        }
    }

    pub fn string_type(location: Location, field: &str, input: &Value) -> Self {
        Self {
            loc: location.loc(Some(field)),
            msg: "Input should be a valid string".to_string(),
            kind: "string_type".to_string(),
            input: Some(input.clone()),
        }
    }

    pub fn float_type(location: Location, field: &str, input: &Value) -> Self {
        Self {
            loc: location.loc(Some(field)),
            msg: "Input should be a valid number".to_string(),
            kind: "float_type".to_string(),
            input: Some(input.clone()),
        }
    }

    /// Whole payload was not a JSON object
    pub fn dict_type(location: Location, input: &Value) -> Self {
        Self {
            loc: location.loc(None),
            msg: "Input should be a valid dictionary".to_string(),
            kind: "dict_type".to_string(),
            input: Some(input.clone()),
        }
    }

    pub fn string_too_short(location: Location, field: &str, input: &str, min_length: usize) -> Self {
        Self {
            loc: location.loc(Some(field)),
            msg: format!(
                "String should have at least {} character{}",
                min_length,
                if min_length == 1 { "" } else { "s" }
            ),
            kind: "string_too_short".to_string(),
            input: Some(Value::String(input.to_string())),
        }
    }

    pub fn string_too_long(location: Location, field: &str, input: &str, max_length: usize) -> Self {
        Self {
            loc: location.loc(Some(field)),
            msg: format!(
                "String should have at most {} character{}",
                max_length,
                if max_length == 1 { "" } else { "s" }
            ),
            kind: "string_too_long".to_string(),
            input: Some(Value::String(input.to_string())),
        }
    }

    /// Path segment is not an integer, or does not fit in 64 bits
    pub fn int_parsing(location: Location, field: &str, input: &str) -> Self {
        Self {
            loc: location.loc(Some(field)),
            msg: "Input should be a valid integer, unable to parse string as an integer".to_string(),
            kind: "int_parsing".to_string(),
            input: Some(Value::String(input.to_string())),
        }
    }

    /// Parameter rejected by a constraint that has no dedicated error kind
    pub fn value_error(location: Location, field: &str, input: Option<&str>, reason: &str) -> Self {
        Self {
            loc: location.loc(Some(field)),
            msg: format!("Value error, {}", reason),
            kind: "value_error".to_string(),
            input: input.map(|text| Value::String(text.to_string())),
        }
    }

    /// Body was not parseable JSON
    pub fn json_invalid(reason: &str) -> Self {
        Self {
            loc: Location::Body.loc(None),
            msg: format!("JSON decode error: {}", reason),
            kind: "json_invalid".to_string(),
            input: None,
        }
    }
}

/// Every problem found in one request, in the order they were found
#[derive(Debug, Clone, Default, PartialEq, Error)]
#[error("request failed validation with {} error(s)", .0.len())]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(error: FieldError) -> Self {
        Self(vec![error])
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_has_null_input() {
        let err = FieldError::missing(Location::Body, "price");

        assert_eq!(err.loc, vec!["body", "price"]);
        assert_eq!(err.kind, "missing");
        assert!(err.input.is_none());
    }

    #[test]
    fn test_type_errors_keep_input() {
        let err = FieldError::float_type(Location::Body, "price", &json!("cheap"));

        assert_eq!(err.kind, "float_type");
        assert_eq!(err.input, Some(json!("cheap")));
    }

    #[test]
    fn test_length_messages() {
        let short = FieldError::string_too_short(Location::Query, "query", "qu", 3);
        let long = FieldError::string_too_long(Location::Query, "query", "q", 1);

        assert_eq!(short.msg, "String should have at least 3 characters");
        assert_eq!(short.loc, vec!["query", "query"]);
        assert_eq!(long.msg, "String should have at most 1 character");
    }

    #[test]
    fn test_int_parsing_keeps_raw_segment() {
        let err = FieldError::int_parsing(Location::Path, "request_and_path_parameter", "abc");

        assert_eq!(err.loc, vec!["path", "request_and_path_parameter"]);
        assert_eq!(err.kind, "int_parsing");
        assert_eq!(err.input, Some(json!("abc")));
    }

    #[test]
    fn test_dict_type_located_at_body() {
        let err = FieldError::dict_type(Location::Body, &json!([1, 2]));

        assert_eq!(err.loc, vec!["body"]);
        assert_eq!(err.input, Some(json!([1, 2])));
    }

    #[test]
    fn test_validation_errors_display() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());

        errors.push(FieldError::missing(Location::Body, "name"));
        errors.push(FieldError::missing(Location::Body, "price"));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.to_string(), "request failed validation with 2 error(s)");
    }
}
