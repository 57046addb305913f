use thiserror::Error;

/// Error loading the application configuration from the environment.
///
/// Produced by [`crate::server::config::Config::from_env`] and reported at startup,
/// before the HTTP server exists, so it carries no response mapping.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}
