//! Character-level vocabulary construction and encode/decode codec.
//!
//! The crate exposes both a library API and a `chartok` command line interface.
//! Typical usage loads a UTF-8 corpus, derives the sorted set of distinct characters as
//! a [`Vocabulary`], and builds a [`CharCodec`] mapping each character to a stable
//! integer id and back.
//!
//! ```
//! use chartok::{build_vocabulary, CharCodec};
//!
//! # fn main() -> chartok::Result<()> {
//! let vocab = build_vocabulary("abc abc");
//! assert_eq!(vocab.to_string(), " abc");
//!
//! let codec = CharCodec::new(&vocab);
//! let ids = codec.encode("ab")?;
//! assert_eq!(ids, vec![1, 2]);
//! assert_eq!(codec.decode(&ids)?, "ab");
//! # Ok(())
//! # }
//! ```
//!
//! The CLI is enabled by default through the `cli` feature.  Users targeting the
//! library portion only can disable default features to avoid the CLI
//! dependencies: `chartok = { version = "...", default-features = false }`.

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    clippy::all,
    rust_2018_idioms,
    future_incompatible,
    unused_lifetimes,
    unreachable_pub
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::doc_markdown
)]

pub mod codec;
pub mod config;
pub mod corpus;
pub mod error;
pub mod summary;
pub mod vocab;

pub use codec::{construct_codec, CharCodec, TokenId};
pub use config::{CorpusBuilder, CorpusConfig};
pub use corpus::{load_corpus, Corpus};
pub use error::{ChartokError, Result};
pub use summary::CorpusSummary;
pub use vocab::{build_vocabulary, Vocabulary};
