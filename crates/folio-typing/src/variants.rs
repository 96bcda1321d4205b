//! Alternative pacing and reveal styles.

use std::time::Duration;

use crate::entropy::{Entropy, pick_glyph};

/// Shortest delay the natural-speed profile will produce.
pub const MIN_NATURAL_DELAY: Duration = Duration::from_millis(20);
/// Jitter range applied on each side of the scaled delay, in milliseconds.
const JITTER_MS: i64 = 20;

/// Default glyphs for [`matrix_frame`].
pub const MATRIX_GLYPHS: &str = "01";
/// Default length of a matrix reveal.
pub const MATRIX_DURATION: Duration = Duration::from_millis(2000);

/// Typing delay after `typed`, scaled like a person typing.
///
/// Spaces go at half speed, sentence punctuation at double, commas at one
/// and a half, then up to 20 ms of jitter either way.
pub fn natural_delay(base: Duration, typed: Option<char>, entropy: &mut dyn Entropy) -> Duration {
    let base_ms = i64::try_from(base.as_millis()).unwrap_or(i64::MAX / 4);
    let scaled = match typed {
        Some(' ') => base_ms / 2,
        Some('.' | '!' | '?') => base_ms * 2,
        Some(',') => base_ms * 3 / 2,
        _ => base_ms,
    };
    let span = usize::try_from(JITTER_MS * 2 + 1).unwrap_or(1);
    let jitter = i64::try_from(entropy.index(span)).unwrap_or(JITTER_MS) - JITTER_MS;
    let ms = u64::try_from(scaled + jitter).unwrap_or(0);
    Duration::from_millis(ms).max(MIN_NATURAL_DELAY)
}

/// One frame of a matrix-style reveal of `text` at `elapsed` into a
/// reveal lasting `duration`.
///
/// Characters reveal left to right in proportion to elapsed time; the rest
/// are random glyphs from `charset`.
pub fn matrix_frame(
    text: &str,
    elapsed: Duration,
    duration: Duration,
    charset: &[char],
    entropy: &mut dyn Entropy,
) -> String {
    let chars: Vec<char> = text.chars().collect();
    let revealed = revealed_count(chars.len(), elapsed, duration);
    chars
        .iter()
        .enumerate()
        .map(|(i, ch)| {
            if i < revealed {
                *ch
            } else {
                pick_glyph(&mut *entropy, charset)
            }
        })
        .collect()
}

/// Characters shown at `elapsed`, rounded up so the first one appears as
/// soon as any time has passed.
fn revealed_count(len: usize, elapsed: Duration, duration: Duration) -> usize {
    let total = duration.as_millis();
    if total == 0 || elapsed >= duration {
        return len;
    }
    let len_wide = u128::try_from(len).unwrap_or(u128::MAX);
    let shown = len_wide.saturating_mul(elapsed.as_millis()).div_ceil(total);
    usize::try_from(shown).unwrap_or(len).min(len)
}
