//! Unbiased index sampling from a 32-bit random source.
use crate::{source::RandomSource, Error, Result};

/// Number of distinct values a 32-bit source can produce.
const SOURCE_RANGE: u64 = 1 << 32;

/// Samples unbiased integers in `[0, bound)` by rejection sampling.
///
/// Taking `word % bound` directly skews the low residues whenever
/// `bound` does not evenly divide `2^32`; draws that land in the
/// final partial cycle are discarded and redrawn instead. Calls are
/// independent and the only side effect is entropy consumed from
/// the source.
pub struct IndexSampler<S: RandomSource> {
    source: S,
}

impl<S: RandomSource> IndexSampler<S> {
    /// Create a sampler from a random word source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Sample a uniformly distributed integer in `[0, bound)`.
    ///
    /// The bound must be in `(0, 2^32]`; anything else fails with
    /// [Error::OutOfRange] rather than being clamped or truncated.
    pub fn next(&mut self, bound: u64) -> Result<u32> {
        if bound == 0 || bound > SOURCE_RANGE {
            return Err(Error::OutOfRange(bound));
        }

        // Largest multiple of the bound that fits in 32 bits; words
        // at or above it would bias the low residues.
        let limit = (SOURCE_RANGE / bound) * bound;

        // Rejection probability is below one half for any valid
        // bound so the expected number of draws is under two, and
        // close to one for the wordlist bound of 7776.
        loop {
            let word = self.source.next_word()? as u64;
            if word < limit {
                return Ok((word % bound) as u32);
            }
        }
    }
}
