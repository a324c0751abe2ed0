use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::session::EngineError;

/// Engine tuning knobs.
///
/// The reply delay models the assistant's "thinking" time before its
/// message appears. It is presentation tuning, not a behavioral contract:
/// any value including zero preserves the engine's ordering guarantees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub reply_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { reply_delay_ms: 1000 }
    }
}

impl EngineConfig {
    /// Zero-delay configuration, used by tests and headless hosts.
    pub fn immediate() -> Self {
        Self { reply_delay_ms: 0 }
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    /// Parse a TOML configuration fragment. Missing keys take defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, EngineError> {
        toml::from_str(raw).map_err(|e| EngineError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delay_is_one_second() {
        assert_eq!(EngineConfig::default().reply_delay_ms, 1000);
    }

    #[test]
    fn test_from_toml() {
        let config = EngineConfig::from_toml_str("reply_delay_ms = 250").unwrap();
        assert_eq!(config.reply_delay(), Duration::from_millis(250));

        // Empty fragment falls back to defaults.
        assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_from_toml_rejects_garbage() {
        assert!(EngineConfig::from_toml_str("reply_delay_ms = \"soon\"").is_err());
    }
}
