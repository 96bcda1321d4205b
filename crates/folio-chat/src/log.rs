//! Bounded chat transcript.

use std::collections::VecDeque;

use folio_core::entities::ChatMessage;

/// Entries retained before the oldest is evicted.
pub const CHAT_LOG_CAPACITY: usize = 20;

/// Most recent chat messages, oldest first.
///
/// Write-only from the assistant's point of view: the classifier never
/// reads it.
#[derive(Debug, Clone)]
pub struct ChatLog {
    entries: VecDeque<ChatMessage>,
    capacity: usize,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::with_capacity(CHAT_LOG_CAPACITY)
    }
}

impl ChatLog {
    /// A log keeping at most `capacity` entries (at least one).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append, evicting the oldest entry when full.
    pub fn push(&mut self, message: ChatMessage) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(message);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatMessage> {
        self.entries.iter()
    }

    #[must_use]
    pub fn last(&self) -> Option<&ChatMessage> {
        self.entries.back()
    }
}
