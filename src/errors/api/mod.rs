// API-facing error types
pub mod request;

pub use request::ApiError;
