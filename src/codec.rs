//! Bijective character/id codec built from a [`Vocabulary`].

use log::debug;
use rustc_hash::FxHashMap;

use crate::error::{ChartokError, Result};
use crate::vocab::{build_vocabulary, Vocabulary};

/// Token identifier used throughout the crate.
pub type TokenId = u32;

/// Immutable forward (`char -> id`) and inverse (`id -> char`) tables over one vocabulary.
///
/// For every vocabulary character `c`, `char_for(token_id(c)) == Some(c)`, and for every id
/// below [`CharCodec::vocab_size`], `token_id(char_for(id)) == Some(id)`.
#[must_use]
#[derive(Debug, Clone)]
pub struct CharCodec {
    vocab: Vocabulary,
    stoi: FxHashMap<char, TokenId>,
}

impl CharCodec {
    /// Pairs each vocabulary character with its position.
    pub fn new(vocab: &Vocabulary) -> Self {
        let stoi = vocab
            .iter()
            .enumerate()
            .map(|(idx, &ch)| (ch, idx as TokenId))
            .collect::<FxHashMap<_, _>>();
        debug!("constructed codec over {} characters", vocab.len());
        Self {
            vocab: vocab.clone(),
            stoi,
        }
    }

    /// Derives the vocabulary of `corpus` and builds a codec over it.
    pub fn from_corpus(corpus: &str) -> Self {
        Self::new(&build_vocabulary(corpus))
    }

    /// Number of characters the codec can encode.
    #[must_use]
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Returns the vocabulary backing the codec.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Looks up the id of a single character.
    #[must_use]
    pub fn token_id(&self, ch: char) -> Option<TokenId> {
        self.stoi.get(&ch).copied()
    }

    /// Looks up the character for a single id.
    #[must_use]
    pub fn char_for(&self, id: TokenId) -> Option<char> {
        self.vocab.chars().get(id as usize).copied()
    }

    /// Maps every character of `text` to its id, preserving order and length.
    ///
    /// Fails with [`ChartokError::UnknownCharacter`] on the first character outside the
    /// vocabulary; nothing is skipped or substituted.
    pub fn encode(&self, text: &str) -> Result<Vec<TokenId>> {
        text.chars()
            .enumerate()
            .map(|(position, character)| {
                self.token_id(character)
                    .ok_or(ChartokError::UnknownCharacter {
                        character,
                        position,
                    })
            })
            .collect()
    }

    /// Maps every id back to its character, preserving order and length.
    ///
    /// Fails with [`ChartokError::IndexOutOfRange`] on the first id `>= vocab_size`.
    pub fn decode(&self, ids: &[TokenId]) -> Result<String> {
        let mut text = String::with_capacity(ids.len());
        for (position, &index) in ids.iter().enumerate() {
            let ch = self
                .char_for(index)
                .ok_or_else(|| ChartokError::IndexOutOfRange {
                    index,
                    position,
                    vocab_size: self.vocab_size(),
                })?;
            text.push(ch);
        }
        Ok(text)
    }
}

/// Builds a [`CharCodec`] over `vocab`.
pub fn construct_codec(vocab: &Vocabulary) -> CharCodec {
    CharCodec::new(vocab)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "First Citizen:\nBefore we proceed any further, hear me speak.";

    #[test]
    fn encodes_and_decodes_concrete_scenario() {
        let codec = CharCodec::from_corpus("abc abc");
        assert_eq!(codec.vocab_size(), 4);
        assert_eq!(codec.encode("ab").unwrap(), vec![1, 2]);
        assert_eq!(codec.decode(&[1, 2]).unwrap(), "ab");
        assert_eq!(codec.encode(" ").unwrap(), vec![0]);
    }

    #[test]
    fn mapping_is_bijective() {
        let codec = construct_codec(&build_vocabulary(SAMPLE));
        for &ch in codec.vocabulary() {
            let id = codec.token_id(ch).expect("vocab char has an id");
            assert_eq!(codec.char_for(id), Some(ch));
            let single = ch.to_string();
            assert_eq!(codec.decode(&codec.encode(&single).unwrap()).unwrap(), single);
        }
        for id in 0..codec.vocab_size() as TokenId {
            let ch = codec.char_for(id).expect("id in range");
            assert_eq!(codec.token_id(ch), Some(id));
            assert_eq!(codec.encode(&codec.decode(&[id]).unwrap()).unwrap(), vec![id]);
        }
    }

    #[test]
    fn text_round_trip_preserves_length() {
        let codec = CharCodec::from_corpus(SAMPLE);
        let ids = codec.encode(SAMPLE).unwrap();
        assert_eq!(ids.len(), SAMPLE.chars().count());
        assert_eq!(codec.decode(&ids).unwrap(), SAMPLE);
    }

    #[test]
    fn id_round_trip_preserves_sequence() {
        let codec = CharCodec::from_corpus(SAMPLE);
        let size = codec.vocab_size() as TokenId;
        let ids: Vec<TokenId> = (0..64).map(|step| (step * 7) % size).collect();
        let text = codec.decode(&ids).unwrap();
        assert_eq!(text.chars().count(), ids.len());
        assert_eq!(codec.encode(&text).unwrap(), ids);
    }

    #[test]
    fn multibyte_characters_are_single_tokens() {
        let codec = CharCodec::from_corpus("naïve café ∑");
        let ids = codec.encode("ï∑").unwrap();
        assert_eq!(ids.len(), 2);
        assert_eq!(codec.decode(&ids).unwrap(), "ï∑");
    }

    #[test]
    fn unknown_character_is_rejected() {
        let codec = CharCodec::from_corpus("abc abc");
        let err = codec.encode("ab∅").expect_err("unknown char");
        assert!(err.is_lookup());
        assert!(matches!(
            err,
            ChartokError::UnknownCharacter {
                character: '∅',
                position: 2
            }
        ));
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let codec = CharCodec::from_corpus("abc abc");
        let err = codec.decode(&[0, 4]).expect_err("index out of range");
        assert!(matches!(
            err,
            ChartokError::IndexOutOfRange {
                index: 4,
                position: 1,
                vocab_size: 4
            }
        ));
    }

    #[test]
    fn empty_vocabulary_rejects_everything_but_empty_input() {
        let codec = CharCodec::from_corpus("");
        assert_eq!(codec.vocab_size(), 0);
        assert_eq!(codec.encode("").unwrap(), Vec::<TokenId>::new());
        assert_eq!(codec.decode(&[]).unwrap(), "");
        assert!(matches!(
            codec.encode("a"),
            Err(ChartokError::UnknownCharacter { character: 'a', .. })
        ));
        assert!(matches!(
            codec.decode(&[0]),
            Err(ChartokError::IndexOutOfRange { index: 0, vocab_size: 0, .. })
        ));
    }

    #[test]
    fn codec_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CharCodec>();
    }
}
