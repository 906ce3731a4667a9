//! Configuration builders controlling corpus loading.

use std::path::PathBuf;

use crate::error::{ChartokError, Result};
use serde::{Deserialize, Serialize};

/// File name used when no corpus path is supplied.
pub const DEFAULT_CORPUS_PATH: &str = "input.txt";

/// Configuration describing where the corpus lives and how it is read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorpusConfig {
    /// Path of the plain-text corpus, resolved relative to the working directory.
    pub path: PathBuf,
    /// Strips a leading U+FEFF byte order mark before deriving the vocabulary.
    pub strip_bom: bool,
}

impl CorpusConfig {
    /// Returns a builder initialised with [`CorpusConfig::default`].
    #[must_use]
    pub fn builder() -> CorpusBuilder {
        CorpusBuilder::default()
    }

    /// Validates the invariants required for loading.
    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ChartokError::InvalidConfig(
                "corpus path must not be empty".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CORPUS_PATH),
            strip_bom: false,
        }
    }
}

/// Builder for [`CorpusConfig`].
#[derive(Debug, Default, Clone)]
pub struct CorpusBuilder {
    cfg: CorpusConfig,
}

impl CorpusBuilder {
    /// Creates a builder with [`CorpusConfig::default`] settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the corpus path.
    #[must_use]
    pub fn path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.cfg.path = path.into();
        self
    }

    /// Enables or disables byte order mark stripping.
    #[must_use]
    pub fn strip_bom(mut self, enabled: bool) -> Self {
        self.cfg.strip_bom = enabled;
        self
    }

    /// Finalises the builder, returning a validated [`CorpusConfig`].
    pub fn build(self) -> Result<CorpusConfig> {
        self.cfg.validate()?;
        Ok(self.cfg)
    }
}
