//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use serde::Deserialize;
use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogProfile {
    /// Human-readable output for development
    #[serde(alias = "dev")]
    Development,
    /// JSON structured output for production
    #[serde(alias = "prod")]
    Production,
    /// Warnings and errors only; demo output stays readable
    #[default]
    Quiet,
    /// Test capture mode for deterministic testing
    Test,
}

impl LogProfile {
    /// Default filter directive when `RUST_LOG` is unset
    pub fn default_directive(&self) -> &'static str {
        match self {
            LogProfile::Development => "patterns=debug,patterns_core=debug,patterns_cli=debug",
            LogProfile::Production => "patterns=info,patterns_core=info,patterns_cli=info",
            LogProfile::Quiet | LogProfile::Test => "warn",
        }
    }
}

impl std::str::FromStr for LogProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dev" | "development" => Ok(LogProfile::Development),
            "prod" | "production" => Ok(LogProfile::Production),
            "quiet" => Ok(LogProfile::Quiet),
            "test" => Ok(LogProfile::Test),
            other => Err(format!(
                "unknown log profile '{}' (expected dev, prod, quiet or test)",
                other
            )),
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// This function should be called once at application startup. Later calls
/// are ignored.
///
/// # Profiles
///
/// - **Development**: Human-readable logs with debug level
/// - **Production**: JSON structured logs with info level
/// - **Quiet**: Human-readable, warnings only
/// - **Test**: Capture mode for test assertions
///
/// Log lines go to stderr so they never interleave with demo output on stdout.
///
/// # Example
///
/// ```
/// use patterns_core::logging_facility::{init, LogProfile};
///
/// init(LogProfile::Quiet);
/// ```
pub fn init(profile: LogProfile) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(profile.default_directive()));
        match profile {
            LogProfile::Development | LogProfile::Quiet => {
                tracing_subscriber::fmt()
                    .with_writer(std::io::stderr)
                    .with_env_filter(filter)
                    .init();
            }
            LogProfile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_env_filter(filter)
                    .init();
            }
            LogProfile::Test => {
                // Test capture is initialized separately via init_test_capture()
                tracing_subscriber::registry().init();
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_idempotent() {
        init(LogProfile::Test);
        init(LogProfile::Test);
        init(LogProfile::Test);
    }

    #[test]
    fn test_profile_from_str() {
        assert_eq!("dev".parse::<LogProfile>(), Ok(LogProfile::Development));
        assert_eq!("PROD".parse::<LogProfile>(), Ok(LogProfile::Production));
        assert_eq!("quiet".parse::<LogProfile>(), Ok(LogProfile::Quiet));
        assert!("verbose".parse::<LogProfile>().is_err());
    }

    #[test]
    fn test_default_profile_is_quiet() {
        assert_eq!(LogProfile::default(), LogProfile::Quiet);
        assert_eq!(LogProfile::Quiet.default_directive(), "warn");
    }
}
