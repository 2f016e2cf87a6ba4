use serde_json::{Map, Value};
use crate::errors::{Location, ValidationErrors};
use crate::types::dto::{FieldError, Item};

/// Validates untyped JSON payloads into [`Item`]s
///
/// Every field is checked before returning, so a rejected payload reports
/// all of its problems at once rather than the first one found.
///
/// - `name`: required string
/// - `description`: optional string
/// - `price`: required number (numeric strings are coerced)
/// - `tax`: optional number (numeric strings are coerced)
///
/// `null` counts as absent. Unknown fields are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct ItemValidator;

impl ItemValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a payload
    ///
    /// # Returns
    /// * `Ok(Item)` - Payload is an object with type-correct fields
    /// * `Err(ValidationErrors)` - One entry per offending field
    pub fn validate(&self, payload: &Value) -> Result<Item, ValidationErrors> {
        let Some(fields) = payload.as_object() else {
            return Err(ValidationErrors::single(FieldError::dict_type(Location::Body, payload)));
        };

        let mut errors = ValidationErrors::new();

        let name = required_string(fields, "name", &mut errors);
        let description = optional_string(fields, "description", &mut errors);
        let price = required_number(fields, "price", &mut errors);
        let tax = optional_number(fields, "tax", &mut errors);

        match (name, price) {
            (Some(name), Some(price)) if errors.is_empty() => Ok(Item {
                name,
                description,
                price,
                tax,
            }),
            _ => Err(errors),
        }
    }
}

fn present<'a>(fields: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    fields.get(field).filter(|value| !value.is_null())
}

fn required_string(fields: &Map<String, Value>, field: &str, errors: &mut ValidationErrors) -> Option<String> {
    match present(fields, field) {
        None => {
            errors.push(FieldError::missing(Location::Body, field));
            None
        }
        Some(value) => string_value(value, field, errors),
    }
}

fn optional_string(fields: &Map<String, Value>, field: &str, errors: &mut ValidationErrors) -> Option<String> {
    present(fields, field).and_then(|value| string_value(value, field, errors))
}

fn string_value(value: &Value, field: &str, errors: &mut ValidationErrors) -> Option<String> {
    match value.as_str() {
        Some(text) => Some(text.to_string()),
        None => {
            errors.push(FieldError::string_type(Location::Body, field, value));
            None
        }
    }
}

fn required_number(fields: &Map<String, Value>, field: &str, errors: &mut ValidationErrors) -> Option<f64> {
    match present(fields, field) {
        None => {
            errors.push(FieldError::missing(Location::Body, field));
            None
        }
        Some(value) => number_value(value, field, errors),
    }
}

fn optional_number(fields: &Map<String, Value>, field: &str, errors: &mut ValidationErrors) -> Option<f64> {
    present(fields, field).and_then(|value| number_value(value, field, errors))
}

/// JSON numbers, or strings holding a finite decimal number
fn number_value(value: &Value, field: &str, errors: &mut ValidationErrors) -> Option<f64> {
    let number = match value {
        Value::String(text) => text.trim().parse::<f64>().ok().filter(|number| number.is_finite()),
        _ => value.as_f64(),
    };

    match number {
        Some(number) => Some(number),
        None => {
            errors.push(FieldError::float_type(Location::Body, field, value));
            None
        }
    }
}
