//! Store configuration.
//!
//! `StoreConfig` is a plain serde struct so it can be embedded in an
//! application's own configuration file. Missing fields take their
//! defaults.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Number of traces `summarize_bucket` returns when no limit is given.
pub const DEFAULT_SUMMARY_LIMIT: usize = 20;

/// Configuration for a [`DataStore`](crate::DataStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Default bound on the trace list of a bucket summary
    pub summary_limit: usize,
}

impl StoreConfig {
    /// Parse a configuration from JSON.
    ///
    /// # Example
    ///
    /// ```
    /// use bucketdb::StoreConfig;
    ///
    /// let config = StoreConfig::from_json(r#"{"summary_limit": 5}"#).unwrap();
    /// assert_eq!(config.summary_limit, 5);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: StoreConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the store cannot use.
    pub fn validate(&self) -> Result<()> {
        if self.summary_limit == 0 {
            return Err(Error::InvalidInput(
                "summary_limit must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            summary_limit: DEFAULT_SUMMARY_LIMIT,
        }
    }
}
