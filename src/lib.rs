// Library exports for integration tests and the binary

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod services;
pub mod types;

#[cfg(test)]
pub mod test;
