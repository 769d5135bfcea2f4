//! # Noise Configuration
//!
//! A generator seed plus its fBm options, read from a TOML document.
//!
//! ```toml
//! seed = 1337
//!
//! [fbm]
//! octaves = 5
//! gain = 0.45
//! ```
//!
//! Parsing works on strings only; reading the file is the caller's job.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::fbm::FbmOptions;
use crate::generator::Generator;

/// Everything needed to reproduce a noise field.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoiseConfig {
    /// Generator seed.
    pub seed: u32,
    /// Fractal options; defaults when the `[fbm]` table is absent.
    #[serde(default)]
    pub fbm: FbmOptions,
}

impl NoiseConfig {
    /// Parses a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfig`] if the document is malformed,
    /// lacks a `seed`, or holds out-of-range fBm values.
    pub fn from_toml_str(source: &str) -> CoreResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| CoreError::InvalidConfig(e.to_string()))?;
        tracing::debug!(
            "Loaded noise config: seed={} octaves={}",
            config.seed,
            config.fbm.octaves()
        );
        Ok(config)
    }

    /// Serializes the configuration back to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfig`] if serialization fails.
    pub fn to_toml_string(&self) -> CoreResult<String> {
        toml::to_string(self).map_err(|e| CoreError::InvalidConfig(e.to_string()))
    }

    /// Creates a fresh generator for this configuration.
    #[must_use]
    pub fn generator(&self) -> Generator {
        Generator::new(self.seed)
    }
}
