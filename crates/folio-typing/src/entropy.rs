//! Randomness for glyph scrambling and speed jitter.

/// Source of uniformly distributed indices.
pub trait Entropy: Send {
    /// Index in `0..bound`. `bound` is never zero.
    fn index(&mut self, bound: usize) -> usize;
}

/// OS-backed entropy via `getrandom`. Falls back to index 0 if the OS
/// source is unavailable, which only degrades the visual noise.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl Entropy for OsEntropy {
    fn index(&mut self, bound: usize) -> usize {
        let mut bytes = [0u8; 8];
        if let Err(error) = getrandom::fill(&mut bytes) {
            tracing::debug!(%error, "os entropy unavailable");
            return 0;
        }
        let value = u64::from_le_bytes(bytes);
        let bound = u64::try_from(bound).unwrap_or(u64::MAX);
        usize::try_from(value % bound).unwrap_or(0)
    }
}

/// Replays a fixed sequence of raw values, wrapping around.
///
/// Each value is reduced modulo the requested bound.
#[derive(Debug, Clone)]
pub struct SequenceEntropy {
    values: Vec<usize>,
    cursor: usize,
}

impl SequenceEntropy {
    #[must_use]
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl Entropy for SequenceEntropy {
    fn index(&mut self, bound: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        value % bound
    }
}

/// Pick one glyph from `charset`. Empty charsets yield a space.
pub fn pick_glyph(entropy: &mut dyn Entropy, charset: &[char]) -> char {
    if charset.is_empty() {
        return ' ';
    }
    charset[entropy.index(charset.len())]
}
