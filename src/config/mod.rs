mod config_spec;
mod env_provider;
mod errors;
mod logging;
mod server_settings;

pub use config_spec::{ConfigSpec, ConfigValue, ConfigValueSource};
pub use env_provider::{EnvironmentProvider, MockEnvironment, SystemEnvironment};
pub use errors::{ConfigError, LoggingError};
pub use logging::{init_logging, LoggingConfig};
pub use server_settings::ServerSettings;
