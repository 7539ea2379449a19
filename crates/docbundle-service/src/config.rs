//! Service configuration.

/// Service name, replaced by the scaffolder when a project is created.
pub const TEMPLATE_NAME: &str = "${{ values.name }}";

/// Service description, replaced by the scaffolder.
pub const TEMPLATE_DESCRIPTION: &str = "${{ values.description }}";

/// Deployment environment, replaced by the scaffolder.
pub const TEMPLATE_ENVIRONMENT: &str = "${{ values.environment }}";

/// Reported service version.
pub const SERVICE_VERSION: &str = "1.0.0";

/// Port used when `PORT` is unset or empty.
pub const DEFAULT_PORT: u16 = 8000;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value {0:?}: expected an integer between 0 and 65535")]
    InvalidPort(String),
}

/// Static per-process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Service name
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// Deployment environment label
    pub environment: String,

    /// Reported version
    pub version: String,

    /// Port to listen on
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: TEMPLATE_NAME.to_string(),
            description: TEMPLATE_DESCRIPTION.to_string(),
            environment: TEMPLATE_ENVIRONMENT.to_string(),
            version: SERVICE_VERSION.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServiceConfig {
    /// Load configuration, taking the port from the `PORT` environment variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;

        Ok(Self {
            port,
            ..Default::default()
        })
    }
}

/// Parse a `PORT` value, falling back to [`DEFAULT_PORT`] when absent or blank.
pub fn parse_port(value: Option<&str>) -> Result<u16, ConfigError> {
    match value.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidPort(raw.to_string())),
    }
}
