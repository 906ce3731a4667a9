//! Facilities for loading a plain-text corpus into memory.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::CorpusConfig;
use crate::error::{ChartokError, Result};

const BOM: char = '\u{feff}';

/// Full text of a corpus file together with the path it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    path: PathBuf,
    text: String,
    byte_len: usize,
}

impl Corpus {
    /// Wraps in-memory text as a corpus without touching the filesystem.
    pub fn from_text<P: Into<PathBuf>>(path: P, text: impl Into<String>) -> Self {
        let text = text.into();
        let byte_len = text.len();
        Self {
            path: path.into(),
            text,
            byte_len,
        }
    }

    /// Returns the path the corpus was loaded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the decoded corpus text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters (Unicode scalar values) in the corpus.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Size of the file on disk, including a stripped byte order mark.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// Consumes the corpus, returning its text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

/// Reads the corpus described by `cfg` as UTF-8 text.
///
/// A missing or unreadable file yields [`ChartokError::NotFound`]; bytes that are not valid UTF-8 yield
/// [`ChartokError::Decode`].  No lossy decoding is attempted.
pub fn load_corpus(cfg: &CorpusConfig) -> Result<Corpus> {
    cfg.validate()?;
    let path = cfg.path.as_path();
    let bytes = fs::read(path).map_err(|err| ChartokError::not_found(err, path.to_path_buf()))?;
    let byte_len = bytes.len();
    let mut text = String::from_utf8(bytes).map_err(|err| ChartokError::Decode {
        path: path.to_path_buf(),
        valid_up_to: err.utf8_error().valid_up_to(),
    })?;
    if cfg.strip_bom && text.starts_with(BOM) {
        text.replace_range(..BOM.len_utf8(), "");
    }
    debug!("loaded corpus {} ({byte_len} bytes)", path.display());
    Ok(Corpus {
        path: path.to_path_buf(),
        text,
        byte_len,
    })
}

/// Convenience wrapper around [`load_corpus`] using default settings for `path`.
pub fn load_corpus_from_path<P: AsRef<Path>>(path: P) -> Result<Corpus> {
    let cfg = CorpusConfig::builder().path(path.as_ref()).build()?;
    load_corpus(&cfg)
}
