//! Serialisable statistics describing a corpus and its vocabulary.

use serde::{Deserialize, Serialize};

use crate::codec::CharCodec;
use crate::corpus::Corpus;

/// Report printed by the CLI after the vocabulary has been derived.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorpusSummary {
    /// Corpus path as displayed to the user.
    pub path: String,
    /// Number of characters in the corpus.
    pub corpus_chars: usize,
    /// Size of the corpus file in bytes.
    pub corpus_bytes: usize,
    /// Number of distinct characters.
    pub vocab_size: usize,
    /// Vocabulary characters concatenated in id order.
    pub vocabulary: String,
}

impl CorpusSummary {
    /// Collects statistics for `corpus` and the codec derived from it.
    #[must_use]
    pub fn new(corpus: &Corpus, codec: &CharCodec) -> Self {
        Self {
            path: corpus.path().display().to_string(),
            corpus_chars: corpus.char_count(),
            corpus_bytes: corpus.byte_len(),
            vocab_size: codec.vocab_size(),
            vocabulary: codec.vocabulary().to_string(),
        }
    }
}
