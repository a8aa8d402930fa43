//! Entropy, combination and crack-time estimation for display.
//!
//! Combination counts are computed as `f64` and are approximate at
//! large magnitudes; they exist purely for display. The sampling
//! logic itself is exact integer arithmetic and never depends on
//! these figures.
use crate::wordlist::WORD_LIST_SIZE;

/// Attempts per second assumed by the default crack-time display.
pub const DEFAULT_ATTEMPTS_PER_SECOND: f64 = 1e9;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
const YEAR: f64 = 365.25 * DAY;
const MILLENNIUM: f64 = 1_000.0 * YEAR;
const BILLION_YEARS: f64 = 1e9 * YEAR;
const UNIVERSE_AGE: f64 = 13.8e9 * YEAR;

/// Entropy in bits contributed by a single word (log2 of 7776,
/// roughly 12.925 bits).
pub fn bits_per_word() -> f64 {
    (WORD_LIST_SIZE as f64).log2()
}

/// Entropy in bits of a passphrase with the given word count.
pub fn entropy_bits(words: usize) -> f64 {
    words as f64 * bits_per_word()
}

/// Number of possible passphrases with the given word count.
///
/// Overflows to infinity somewhere beyond seventy words; by then the
/// count is already far past anything displayable exactly.
pub fn combinations(words: usize) -> f64 {
    (WORD_LIST_SIZE as f64).powf(words as f64)
}

/// Format a combination count for display.
///
/// Counts below one million are grouped with thousands separators,
/// anything larger switches to scientific notation with two decimal
/// places.
pub fn format_combinations(count: f64) -> String {
    if count < 1e6 {
        group_thousands(count.round() as u64)
    } else {
        format!("{:.2e}", count)
    }
}

/// Human readable brute-force duration for the given search space.
///
/// Models the average case as half the combinations tried at a fixed
/// rate, then displays one decimal place in the largest unit that
/// fits. This is an illustrative heuristic for display, not a
/// rigorous security estimate.
pub fn crack_time(combinations: f64, attempts_per_second: f64) -> String {
    let seconds = combinations / (2.0 * attempts_per_second);

    if seconds < MINUTE {
        format!("{:.1} seconds", seconds)
    } else if seconds < HOUR {
        format!("{:.1} minutes", seconds / MINUTE)
    } else if seconds < DAY {
        format!("{:.1} hours", seconds / HOUR)
    } else if seconds < YEAR {
        format!("{:.1} days", seconds / DAY)
    } else if seconds < MILLENNIUM {
        format!("{:.1} years", seconds / YEAR)
    } else if seconds < BILLION_YEARS {
        format!("{:.1} millennia", seconds / MILLENNIUM)
    } else if seconds < UNIVERSE_AGE {
        format!("{:.1} billion years", seconds / BILLION_YEARS)
    } else {
        format!("{:.1} × age of universe", seconds / UNIVERSE_AGE)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}
