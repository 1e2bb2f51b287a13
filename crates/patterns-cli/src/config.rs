//! Settings file
//!
//! Every key is optional. Flags given on the command line win over the
//! file, and the file wins over built-in defaults.
//!
//! ```toml
//! seed = 7
//! log_profile = "dev"
//!
//! [memento]
//! fair_rounds = 10
//!
//! [memento.rules]
//! round_price = 20
//! ```

use patterns_core::catalogue::MementoDemoConfig;
use patterns_core::logging_facility::LogProfile;
use patterns_core::PatternError;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub seed: Option<u64>,
    pub log_profile: Option<LogProfile>,
    pub memento: MementoDemoConfig,
}

impl Settings {
    /// Read and validate a settings file
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the file cannot be read, is not valid
    /// TOML, or holds unusable values.
    pub fn load(path: &Path) -> Result<Self, PatternError> {
        let text = std::fs::read_to_string(path).map_err(|e| PatternError::InvalidConfig {
            reason: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::parse(&text)
    }

    /// # Errors
    ///
    /// Returns `InvalidConfig` for malformed TOML, unknown keys, or rules
    /// that fail validation.
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        let settings: Settings =
            toml::from_str(text).map_err(|e| PatternError::InvalidConfig {
                reason: e.to_string(),
            })?;
        settings.memento.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let settings = Settings::parse("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.memento.rules.round_price, 10);
    }

    #[test]
    fn test_partial_tables_keep_remaining_defaults() {
        let settings = Settings::parse(
            r#"
            seed = 7
            log_profile = "dev"

            [memento]
            fair_rounds = 5

            [memento.rules]
            starting_money = 50
            "#,
        )
        .unwrap();

        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.log_profile, Some(LogProfile::Development));
        assert_eq!(settings.memento.fair_rounds, 5);
        assert_eq!(settings.memento.scum_wins, 40);
        assert_eq!(settings.memento.rules.starting_money, 50);
        assert_eq!(settings.memento.rules.round_price, 10);
    }

    #[test]
    fn test_zero_round_price_rejected() {
        let err = Settings::parse("[memento.rules]\nround_price = 0\n").unwrap_err();
        assert!(matches!(err, PatternError::InvalidConfig { .. }));
        assert!(err.to_string().contains("round_price"));
    }

    #[test]
    fn test_starting_money_at_i64_max_rejected() {
        let err = Settings::parse("[memento.rules]\nstarting_money = 9223372036854775807\n")
            .unwrap_err();
        assert!(matches!(err, PatternError::InvalidConfig { .. }));
        assert!(err.to_string().contains("starting_money"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Settings::parse("sed = 7\n").unwrap_err();
        assert!(matches!(err, PatternError::InvalidConfig { .. }));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(matches!(
            Settings::parse("seed = "),
            Err(PatternError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_missing_file_rejected() {
        let err = Settings::load(Path::new("/nonexistent/patterns.toml")).unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }
}
