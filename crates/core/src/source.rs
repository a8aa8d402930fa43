//! Sources of uniformly distributed random 32-bit words.
use crate::{Error, Result};
use rand::{rngs::OsRng, CryptoRng, RngCore};
use std::collections::VecDeque;

/// Trait for sources of uniformly distributed 32-bit words.
///
/// Implementations used outside of tests must draw from a
/// cryptographically secure generator; the unpredictability of
/// every passphrase rests entirely on this source.
pub trait RandomSource {
    /// Draw the next 32-bit word from the source.
    fn next_word(&mut self) -> Result<u32>;
}

/// Random source backed by the operating system CSPRNG.
#[derive(Debug, Clone, Copy)]
pub struct OsRandomSource(OsRng);

impl OsRandomSource {
    /// Create an operating system random source.
    ///
    /// Probes the platform facility once so a missing or failing
    /// CSPRNG is detected before any generation attempt; there is
    /// never a fallback to a weaker generator.
    pub fn new() -> Result<Self> {
        let mut probe = [0u8; 4];
        OsRng
            .try_fill_bytes(&mut probe)
            .map_err(|_| Error::RandomSourceUnavailable)?;
        Ok(Self(OsRng))
    }
}

impl RandomSource for OsRandomSource {
    fn next_word(&mut self) -> Result<u32> {
        let mut word = [0u8; 4];
        self.0
            .try_fill_bytes(&mut word)
            .map_err(|_| Error::RandomSourceUnavailable)?;
        Ok(u32::from_le_bytes(word))
    }
}

/// Adapter exposing any CSPRNG from the rand ecosystem as a
/// [RandomSource].
pub struct RngSource<R>(R);

impl<R: RngCore + CryptoRng> RngSource<R> {
    /// Wrap a cryptographically secure generator.
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl<R: RngCore + CryptoRng> RandomSource for RngSource<R> {
    fn next_word(&mut self) -> Result<u32> {
        let mut word = [0u8; 4];
        self.0
            .try_fill_bytes(&mut word)
            .map_err(|_| Error::RandomSourceUnavailable)?;
        Ok(u32::from_le_bytes(word))
    }
}

/// Source yielding a fixed sequence of words for deterministic tests.
///
/// Fails with [Error::RandomSourceUnavailable] once the sequence is
/// exhausted. Never use this outside of a test suite.
pub struct FixedSource {
    words: VecDeque<u32>,
}

impl FixedSource {
    /// Create a source from a fixed sequence of words.
    pub fn new(words: impl IntoIterator<Item = u32>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Number of words remaining in the sequence.
    pub fn remaining(&self) -> usize {
        self.words.len()
    }
}

impl RandomSource for FixedSource {
    fn next_word(&mut self) -> Result<u32> {
        self.words.pop_front().ok_or(Error::RandomSourceUnavailable)
    }
}
