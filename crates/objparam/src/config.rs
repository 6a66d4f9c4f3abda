//! Accessor configuration and generated method naming.

use serde::{Deserialize, Serialize};

use objparam_store::StoreConfig;

use crate::error::{ParamError, ParamResult};

/// The noun used when none is configured.
pub const DEFAULT_NOUN: &str = "param";

/// Configuration for one accessor binding.
///
/// ```toml
/// noun = "tag"
///
/// [store]
/// sweep_threshold = 128
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessorConfig {
    /// Word the three method names are derived from.
    pub noun: String,
    /// Tuning for the binding's private attribute store.
    pub store: StoreConfig,
}

impl Default for AccessorConfig {
    fn default() -> Self {
        Self {
            noun: DEFAULT_NOUN.to_string(),
            store: StoreConfig::default(),
        }
    }
}

impl AccessorConfig {
    /// Configuration with the given noun and default store tuning.
    pub fn with_noun(noun: impl Into<String>) -> Self {
        Self {
            noun: noun.into(),
            ..Default::default()
        }
    }

    /// Parse a configuration from TOML. Missing fields take their defaults.
    pub fn from_toml_str(s: &str) -> ParamResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| ParamError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the noun can form method names.
    pub fn validate(&self) -> ParamResult<()> {
        validate_noun(&self.noun)
    }

    /// The method names this configuration generates.
    pub fn method_names(&self) -> MethodNames {
        MethodNames::for_noun(&self.noun)
    }
}

/// Names of the three methods generated for one noun.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MethodNames {
    /// The list/get/set method, named after the noun itself.
    pub get: String,
    /// `has_<noun>`.
    pub has: String,
    /// `delete_<noun>`.
    pub delete: String,
}

impl MethodNames {
    /// Names derived from `noun`.
    pub fn for_noun(noun: &str) -> Self {
        Self {
            get: noun.to_string(),
            has: format!("has_{noun}"),
            delete: format!("delete_{noun}"),
        }
    }
}

/// A noun must be a plain identifier: `[A-Za-z_][A-Za-z0-9_]*`.
pub fn validate_noun(noun: &str) -> ParamResult<()> {
    let mut chars = noun.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(ParamError::InvalidNoun(noun.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_noun_is_param() {
        let config = AccessorConfig::default();
        assert_eq!(config.noun, "param");
        assert_eq!(
            config.method_names(),
            MethodNames {
                get: "param".into(),
                has: "has_param".into(),
                delete: "delete_param".into(),
            }
        );
    }

    #[test]
    fn names_follow_noun() {
        let names = AccessorConfig::with_noun("tag").method_names();
        assert_eq!(names.get, "tag");
        assert_eq!(names.has, "has_tag");
        assert_eq!(names.delete, "delete_tag");
    }

    #[test]
    fn parses_toml() {
        let config = AccessorConfig::from_toml_str(
            r#"
            noun = "tag"

            [store]
            sweep_threshold = 128
            "#,
        )
        .unwrap();
        assert_eq!(config.noun, "tag");
        assert_eq!(config.store.sweep_threshold, 128);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config = AccessorConfig::from_toml_str("").unwrap();
        assert_eq!(config, AccessorConfig::default());
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let result = AccessorConfig::from_toml_str("noun = ");
        assert!(matches!(result, Err(ParamError::Config(_))));
    }

    #[test]
    fn invalid_noun_in_toml_is_rejected() {
        let result = AccessorConfig::from_toml_str(r#"noun = "two words""#);
        assert_eq!(result, Err(ParamError::InvalidNoun("two words".into())));
    }

    #[test]
    fn noun_validation() {
        assert!(validate_noun("param").is_ok());
        assert!(validate_noun("_private").is_ok());
        assert!(validate_noun("tag2").is_ok());
        assert!(validate_noun("").is_err());
        assert!(validate_noun("2tag").is_err());
        assert!(validate_noun("has-tag").is_err());
    }
}
