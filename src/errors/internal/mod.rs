// Internal error types, converted to ApiError at the API boundary
pub mod validation;

pub use validation::{Location, ValidationErrors};
