//! Shared context handed to every operation builder.

use serde::{Deserialize, Serialize};

/// Context available to transforms while they compile into operations.
///
/// Exponent and matrix transforms carry their parameters with them and
/// ignore the config; it exists so transform types that resolve named
/// resources have a lookup context without changing the builder signature.
/// Group builds thread it through to their children unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    description: String,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Human-readable label for this configuration.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_empty_description() {
        assert_eq!(Config::new().description(), "");
    }

    #[test]
    fn test_description_roundtrips() {
        let mut config = Config::new();
        config.set_description("display grade");
        assert_eq!(config.description(), "display grade");
    }
}
