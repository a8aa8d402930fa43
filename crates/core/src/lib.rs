//! Unbiased diceware passphrase generation.
//!
//! Passphrases are built by sampling words uniformly at random from a
//! fixed 7776 word list. The index sampler uses rejection sampling
//! over a 32-bit word source so that no modulo bias is introduced,
//! and the word source must always be a cryptographically secure
//! generator supplied by the platform.
#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod estimate;
pub mod passphrase;
pub mod sampler;
pub mod source;
pub mod wordlist;

pub use error::Error;
pub use passphrase::{
    generate_passphrase, generate_passphrase_words, DEFAULT_WORDS,
    PHRASE_SEPARATOR,
};
pub use sampler::IndexSampler;
pub use source::{OsRandomSource, RandomSource};
pub use wordlist::{WordList, WORD_LIST_SIZE};

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
