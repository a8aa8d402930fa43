//! Passphrase generation from a diceware word list.
use crate::{
    estimate,
    sampler::IndexSampler,
    source::{OsRandomSource, RandomSource},
    wordlist::WordList,
    Error, Result,
};
use secrecy::SecretString;

/// Separator placed between passphrase words.
pub const PHRASE_SEPARATOR: &str = "-";

/// Default number of words in a generated passphrase.
pub const DEFAULT_WORDS: usize = 20;

/// Minimum number of words in a generated passphrase.
pub const MIN_WORDS: usize = 1;

/// Generate a passphrase drawing words from the given random source.
///
/// Words are drawn independently with replacement so duplicates
/// across positions are allowed and expected. A failure in the
/// sampler or the source propagates unchanged; a partial or
/// degraded passphrase is never returned.
pub fn generate_with<S: RandomSource>(
    source: S,
    word_list: &WordList,
    words: usize,
) -> Result<SecretString> {
    if words < MIN_WORDS {
        return Err(Error::TooFewWords(words, MIN_WORDS));
    }

    let mut sampler = IndexSampler::new(source);
    let mut chosen = Vec::with_capacity(words);
    for _ in 0..words {
        let index = sampler.next(word_list.len() as u64)?;
        chosen.push(word_list.as_slice()[index as usize].clone());
    }

    Ok(SecretString::from(chosen.join(PHRASE_SEPARATOR)))
}

/// Generate a passphrase of the given word count using the
/// operating system CSPRNG.
///
/// Returns the passphrase alongside its entropy in bits.
pub fn generate_passphrase_words(
    word_list: &WordList,
    words: usize,
) -> Result<(SecretString, f64)> {
    let source = OsRandomSource::new()?;
    let passphrase = generate_with(source, word_list, words)?;
    Ok((passphrase, estimate::entropy_bits(words)))
}

/// Generate a passphrase with the default word count, which carries
/// ~258 bits of entropy.
pub fn generate_passphrase(
    word_list: &WordList,
) -> Result<(SecretString, f64)> {
    generate_passphrase_words(word_list, DEFAULT_WORDS)
}
