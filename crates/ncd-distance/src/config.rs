use std::path::Path;

use ncd_compress::{Compressor, CompressorConfig};
use serde::{Deserialize, Serialize};

use crate::concat::ConcatStrategy;
use crate::distance::Ncd;
use crate::error::{NcdError, NcdResult};

/// Configuration for a distance engine.
///
/// Every field has a default, so an empty document is valid:
///
/// ```toml
/// enforce_symmetry = true
///
/// [compressor]
/// codec = "lz4"
///
/// [concatenation]
/// strategy = "sequential"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NcdConfig {
    /// Measure both concatenation orders and keep the smaller. Guarantees an
    /// order-independent result at the cost of one extra compression per call.
    pub enforce_symmetry: bool,
    /// Which compressor to use and how to parameterize it.
    pub compressor: CompressorConfig,
    /// How the two objects are joined before joint compression.
    pub concatenation: ConcatStrategy,
}

impl Default for NcdConfig {
    fn default() -> Self {
        Self {
            enforce_symmetry: true,
            compressor: CompressorConfig::default(),
            concatenation: ConcatStrategy::default(),
        }
    }
}

impl NcdConfig {
    /// Configuration for the fast, order-dependent path.
    pub fn asymmetric() -> Self {
        Self {
            enforce_symmetry: false,
            ..Default::default()
        }
    }

    pub fn from_toml_str(s: &str) -> NcdResult<Self> {
        toml::from_str(s).map_err(|e| NcdError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> NcdResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> NcdResult<String> {
        toml::to_string(self).map_err(|e| NcdError::Config(e.to_string()))
    }

    /// Build the configured engine.
    pub fn build(&self) -> NcdResult<Ncd<Box<dyn Compressor>, ConcatStrategy>> {
        let compressor = self.compressor.build()?;
        tracing::debug!(
            compressor = compressor.name(),
            enforce_symmetry = self.enforce_symmetry,
            "ncd engine configured"
        );
        Ok(Ncd::new(compressor)
            .enforce_symmetry(self.enforce_symmetry)
            .with_concatenation(self.concatenation.clone()))
    }
}
