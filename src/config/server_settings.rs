use std::fmt;
use std::sync::Arc;
use crate::config::config_spec::ConfigSpec;
use crate::config::errors::ConfigError;
use crate::config::EnvironmentProvider;

/// Listener settings for the HTTP server
pub struct ServerSettings {
    server_host: String,
    server_port: u16,
}

impl ServerSettings {
    /// Load server settings from the given environment provider
    ///
    /// `HOST` defaults to `0.0.0.0` and `PORT` to `8000`.
    pub fn from_env_provider(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Result<Self, ConfigError> {
        let host_spec = ConfigSpec::new(env_provider.clone())
            .env_override("HOST")
            .default_value("0.0.0.0")
            .validator(ConfigSpec::validate_host_address);

        let port_spec = ConfigSpec::new(env_provider)
            .env_override("PORT")
            .default_value("8000")
            .validator(|value| ConfigSpec::validate_port_range(value, 1, 65535));

        let server_host = host_spec
            .load_setting_with_source()?
            .value;

        let port_value = port_spec
            .load_setting_with_source()?
            .value;

        let server_port = ConfigSpec::parse_port(&port_value, "PORT")?;

        Ok(Self {
            server_host,
            server_port,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ConfigError> {
        use crate::config::SystemEnvironment;
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    /// `host:port` for binding; IPv6 hosts are bracketed
    pub fn server_address(&self) -> String {
        format!("{}:{}", bracketed(&self.server_host), self.server_port)
    }

    /// Base URL advertised in the OpenAPI document
    pub fn public_url(&self) -> String {
        let host = match self.server_host.as_str() {
            "0.0.0.0" | "::" | "[::]" => "localhost".to_string(),
            other => bracketed(other),
        };
        format!("http://{}:{}", host, self.server_port)
    }
}

fn bracketed(host: &str) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("[{}]", host)
    } else {
        host.to_string()
    }
}

impl fmt::Debug for ServerSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerSettings")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}
