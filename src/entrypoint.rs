//! Standardized initialization for the lambda binary: environment
//! detection, panic reporting, and tracing configuration.

use std::{fmt::Display, str::FromStr};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// The current environment the application is running in
#[derive(Debug, Clone, Copy)]
pub enum Environment {
    /// Production environment
    Production,
    /// Dev and or staging environment
    Develop,
    /// The binary is running on localhost
    Local,
}

/// Represents a value which cannot be converted into an [Environment]
#[derive(Debug, Error)]
#[error("could not convert {0} into an environment value")]
pub struct UnknownValue(String);

impl Environment {
    /// Attempt to construct a new [Environment] from the `ENVIRONMENT`
    /// variable, falling back to production if we fail to construct
    pub fn new_or_prod() -> Self {
        std::env::var("ENVIRONMENT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(Environment::Production)
    }
}

impl FromStr for Environment {
    type Err = UnknownValue;

    fn from_str(environment: &str) -> Result<Self, UnknownValue> {
        match environment {
            "prod" | "production" => Ok(Environment::Production),
            "dev" | "develop" => Ok(Environment::Develop),
            "local" => Ok(Environment::Local),
            other => Err(UnknownValue(other.to_string())),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "prod"),
            Environment::Develop => write!(f, "dev"),
            Environment::Local => write!(f, "local"),
        }
    }
}

/// Defines the initialization behaviour for this binary
#[derive(Debug)]
pub struct Entrypoint {
    env: Environment,
}

impl Default for Entrypoint {
    fn default() -> Self {
        Entrypoint {
            env: Environment::new_or_prod(),
        }
    }
}

impl Entrypoint {
    /// consume self and initialize this binary
    pub fn init(self) {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        match self.env {
            Environment::Local => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            Environment::Production | Environment::Develop => {
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .init();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_parse_known_environments() {
        assert!(matches!(
            "production".parse::<Environment>(),
            Ok(Environment::Production)
        ));
        assert!(matches!(
            "dev".parse::<Environment>(),
            Ok(Environment::Develop)
        ));
        assert!(matches!(
            "local".parse::<Environment>(),
            Ok(Environment::Local)
        ));
    }

    #[test]
    fn it_should_reject_unknown_environments() {
        assert!("staging2".parse::<Environment>().is_err());
    }
}
