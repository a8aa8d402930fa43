use thiserror::Error;

/// Error thrown by the library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when a sampling bound cannot be represented
    /// by a 32-bit random source.
    #[error("bound {0} is out of range, must be in (0, 2^32]")]
    OutOfRange(u64),

    /// Error generated when a word list does not contain exactly
    /// the required number of words.
    #[error("word list contains {0} words, expected exactly {1}")]
    CorruptWordList(usize, usize),

    /// Error generated when the platform cryptographic random
    /// source is unavailable.
    #[error("platform cryptographic random source is unavailable")]
    RandomSourceUnavailable,

    /// Error generated when too few words are requested for
    /// a passphrase.
    #[error("passphrase of {0} words is too short, minimum is {1}")]
    TooFewWords(usize, usize),

    /// Error generated by input/output.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
