//! Engine configuration

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Tunables for a `MorphEngine`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    /// Cap on analysis candidates after ranking; `None` keeps them all
    #[serde(default)]
    pub max_candidates: Option<usize>,

    /// List "not applicable" cells when rendering a root tree
    #[serde(default)]
    pub include_not_applicable: bool,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_candidates == Some(0) {
            return Err(Error::Config(
                "max_candidates must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }

    /// Reads a JSON config file and validates it.
    pub fn load(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.max_candidates, None);
        assert!(!config.include_not_applicable);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialization_fills_missing_fields() {
        let config: EngineConfig = serde_json::from_str(r#"{ "max_candidates": 3 }"#).unwrap();
        assert_eq!(config.max_candidates, Some(3));
        assert!(!config.include_not_applicable);
    }

    #[test]
    fn test_zero_cap_rejected() {
        let config = EngineConfig {
            max_candidates: Some(0),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}
