pub mod common;
pub mod items;
pub mod query;

pub use common::{ErrorDetail, FieldError, ValidationErrorResponse};
pub use items::{Item, PathItem, PathQueryItem, PricedItem};
pub use query::QueryListing;
