//! Deterministic character vocabulary derivation.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Distinct characters of a corpus, sorted ascending by code point.
///
/// Every constructor sorts and deduplicates, so a `Vocabulary` value never holds the same
/// character twice and its order does not depend on how the input was iterated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<char>", into = "Vec<char>")]
pub struct Vocabulary {
    chars: Vec<char>,
}

impl Vocabulary {
    /// Builds a vocabulary from an arbitrary collection of characters.
    pub fn from_chars<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let set: BTreeSet<char> = chars.into_iter().collect();
        Self {
            chars: set.into_iter().collect(),
        }
    }

    /// Number of distinct characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` when the corpus contained no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The ordered characters; the position of each is its token id.
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Returns `true` if `ch` occurs in the vocabulary.
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.chars.binary_search(&ch).is_ok()
    }

    /// Iterates over the characters in id order.
    pub fn iter(&self) -> std::slice::Iter<'_, char> {
        self.chars.iter()
    }
}

/// Collects the distinct characters of `corpus` sorted by code point.
///
/// An empty corpus yields an empty vocabulary.
pub fn build_vocabulary(corpus: &str) -> Vocabulary {
    Vocabulary::from_chars(corpus.chars())
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.chars {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl From<Vec<char>> for Vocabulary {
    fn from(chars: Vec<char>) -> Self {
        Self::from_chars(chars)
    }
}

impl From<Vocabulary> for Vec<char> {
    fn from(vocab: Vocabulary) -> Self {
        vocab.chars
    }
}

impl FromIterator<char> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::from_chars(iter)
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a char;
    type IntoIter = std::slice::Iter<'a, char>;

    fn into_iter(self) -> Self::IntoIter {
        self.chars.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_sorts_before_letters() {
        let vocab = build_vocabulary("abc abc");
        assert_eq!(vocab.chars(), &[' ', 'a', 'b', 'c']);
        assert_eq!(vocab.len(), 4);
        assert_eq!(vocab.to_string(), " abc");
    }

    #[test]
    fn empty_corpus_has_empty_vocabulary() {
        let vocab = build_vocabulary("");
        assert!(vocab.is_empty());
        assert_eq!(vocab.len(), 0);
        assert_eq!(vocab.to_string(), "");
    }

    #[test]
    fn order_is_independent_of_input_order() {
        let forward = build_vocabulary("the quick brown fox");
        let reversed: String = "the quick brown fox".chars().rev().collect();
        assert_eq!(forward, build_vocabulary(&reversed));
        let shuffled: Vocabulary = "xof nworbkciuqeht".chars().collect();
        assert_eq!(forward, shuffled);
    }

    #[test]
    fn sorted_by_code_point_for_non_ascii() {
        let vocab = build_vocabulary("zé\nÅa!");
        assert_eq!(vocab.chars(), &['\n', '!', 'a', 'z', 'Å', 'é']);
        assert!(vocab.chars().windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn contains_uses_sorted_lookup() {
        let vocab = build_vocabulary("hello");
        assert!(vocab.contains('l'));
        assert!(!vocab.contains('z'));
    }

    #[test]
    fn deserialization_normalizes_order() {
        let vocab: Vocabulary = serde_json::from_str(r#"["c","a","c","b"]"#).expect("parse");
        assert_eq!(vocab.chars(), &['a', 'b', 'c']);
    }
}
