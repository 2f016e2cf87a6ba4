use crate::errors::{Location, ValidationErrors};
use crate::types::dto::FieldError;

/// Inclusive length bounds for an optional text parameter
///
/// Lengths count Unicode scalar values, not bytes. An absent value always
/// passes; bounds only apply once a value is supplied.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl LengthBounds {
    pub const UNBOUNDED: LengthBounds = LengthBounds {
        min_length: None,
        max_length: None,
    };

    pub const fn at_most(max_length: usize) -> Self {
        Self {
            min_length: None,
            max_length: Some(max_length),
        }
    }

    pub const fn between(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length: Some(min_length),
            max_length: Some(max_length),
        }
    }

    /// Check an optional query value against these bounds
    ///
    /// # Returns
    /// * `Ok(None)` - Parameter was not supplied
    /// * `Ok(Some(value))` - Value is within bounds
    /// * `Err(ValidationErrors)` - Value is too short or too long
    pub fn check(&self, name: &str, value: Option<String>) -> Result<Option<String>, ValidationErrors> {
        let Some(value) = value else {
            return Ok(None);
        };

        let length = value.chars().count();

        if let Some(min_length) = self.min_length {
            if length < min_length {
                return Err(ValidationErrors::single(FieldError::string_too_short(
                    Location::Query,
                    name,
                    &value,
                    min_length,
                )));
            }
        }

        if let Some(max_length) = self.max_length {
            if length > max_length {
                return Err(ValidationErrors::single(FieldError::string_too_long(
                    Location::Query,
                    name,
                    &value,
                    max_length,
                )));
            }
        }

        Ok(Some(value))
    }
}
