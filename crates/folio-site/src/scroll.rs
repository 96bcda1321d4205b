//! Scroll-driven page behavior: reveal-on-scroll, active nav section,
//! progress bar, and stat counters.
//!
//! Geometry comes in as plain numbers so hosts can feed whatever their
//! layout engine reports.

use std::collections::HashSet;
use std::time::Duration;

/// Visible fraction at which an element animates in.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Scroll offset added before testing which section is active.
pub const NAV_OFFSET: f64 = 100.0;
/// Length of a counter run-up.
pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);
/// Counter update interval.
pub const COUNTER_FRAME: Duration = Duration::from_millis(16);

/// One-shot reveal bookkeeping.
///
/// An element is observed until its visible ratio first reaches the
/// threshold. It is then marked animated and never reported again.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    threshold: f64,
    observed: HashSet<String>,
    animated: HashSet<String>,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD)
    }
}

impl RevealTracker {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            observed: HashSet::new(),
            animated: HashSet::new(),
        }
    }

    /// Start watching `id`. Already-animated elements stay unobserved.
    pub fn observe(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.animated.contains(&id) {
            self.observed.insert(id);
        }
    }

    /// Report a new visibility ratio. Returns `true` exactly once per
    /// element: the first time the ratio reaches the threshold.
    pub fn update(&mut self, id: &str, ratio: f64) -> bool {
        if ratio < self.threshold || !self.observed.remove(id) {
            return false;
        }
        self.animated.insert(id.to_string());
        true
    }

    #[must_use]
    pub fn is_animated(&self, id: &str) -> bool {
        self.animated.contains(id)
    }

    #[must_use]
    pub fn is_observed(&self, id: &str) -> bool {
        self.observed.contains(id)
    }

    /// Elements still waiting to be revealed.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.observed.len()
    }
}

/// Vertical extent of a page section.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Section whose span contains `scroll_y + NAV_OFFSET`. The last match wins
/// when sections overlap.
#[must_use]
pub fn active_section(sections: &[Section], scroll_y: f64) -> Option<&str> {
    let position = scroll_y + NAV_OFFSET;
    sections
        .iter()
        .rev()
        .find(|s| position >= s.top && position < s.top + s.height)
        .map(|s| s.id.as_str())
}

/// Percentage of the scrollable distance covered, clamped to `0..=100`.
#[must_use]
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Counter value shown `elapsed` into a run-up towards `target`.
///
/// Advances in whole frames and lands exactly on `target` at the end.
#[must_use]
pub fn counter_value(target: u64, elapsed: Duration) -> u64 {
    let frame_ms = COUNTER_FRAME.as_millis();
    let total_ms = COUNTER_DURATION.as_millis();
    let frames = elapsed.as_millis() / frame_ms;
    let reached = u128::from(target) * frames * frame_ms / total_ms;
    u64::try_from(reached).unwrap_or(u64::MAX).min(target)
}

/// Counter label, keeping a trailing `+` when the source text had one.
#[must_use]
pub fn counter_label(target: u64, elapsed: Duration, plus: bool) -> String {
    let value = counter_value(target, elapsed);
    if plus { format!("{value}+") } else { value.to_string() }
}
