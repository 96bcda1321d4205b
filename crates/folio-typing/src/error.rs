//! Typing effect error types.

#[derive(Debug, thiserror::Error)]
pub enum TypingError {
    /// The effect needs at least one string to cycle through.
    #[error("typing effect needs at least one text")]
    NoTexts,
}
