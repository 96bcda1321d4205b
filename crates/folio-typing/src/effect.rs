//! The typing state machine.
//!
//! [`TypingEffect::tick`] performs one step and reports the text to show
//! plus how long to wait before the next step. It owns no timer; the
//! [`driver`](crate::driver) module schedules ticks on tokio.

use std::fmt;
use std::time::Duration;

use folio_config::TypingConfig;

use crate::entropy::{Entropy, OsEntropy, pick_glyph};
use crate::error::TypingError;
use crate::variants::natural_delay;

/// Glyphs substituted for the not-yet-revealed suffix in scramble mode.
pub const SCRAMBLE_GLYPHS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*";

/// Timing and behavior knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingOptions {
    pub type_speed: Duration,
    pub delete_speed: Duration,
    /// Hold after a string is fully typed.
    pub pause: Duration,
    /// Hold after a string is fully deleted.
    pub pause_after_delete: Duration,
    pub looping: bool,
    pub scramble: bool,
    /// Glyph appended to the displayed text. `None` hides it.
    pub cursor: Option<String>,
    /// Vary the typing delay by character and add jitter.
    pub natural_speed: bool,
}

impl Default for TypingOptions {
    fn default() -> Self {
        Self::from(&TypingConfig::default())
    }
}

impl From<&TypingConfig> for TypingOptions {
    fn from(config: &TypingConfig) -> Self {
        Self {
            type_speed: Duration::from_millis(config.type_speed_ms),
            delete_speed: Duration::from_millis(config.delete_speed_ms),
            pause: Duration::from_millis(config.pause_ms),
            pause_after_delete: Duration::from_millis(config.pause_after_delete_ms),
            looping: config.looping,
            scramble: config.scramble,
            cursor: Some(config.cursor.clone()).filter(|c| !c.is_empty()),
            natural_speed: false,
        }
    }
}

/// Where the machine is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingState {
    /// Revealing the current string; holds the number of characters shown.
    Typing(usize),
    PausedAfterType,
    /// Removing characters; holds the number still shown.
    Deleting(usize),
    PausedAfterDelete,
}

/// Output of one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    /// Wait before the next tick. `None` once the effect has halted.
    pub next_delay: Option<Duration>,
    /// Character revealed by this tick, if any. Hosts hang keypress
    /// feedback off this.
    pub typed: Option<char>,
}

impl Frame {
    #[must_use]
    pub const fn is_halted(&self) -> bool {
        self.next_delay.is_none()
    }

    /// Text with the cursor glyph appended.
    #[must_use]
    pub fn display(&self, cursor: Option<&str>) -> String {
        match cursor {
            Some(cursor) => format!("{}{cursor}", self.text),
            None => self.text.clone(),
        }
    }
}

pub struct TypingEffect {
    texts: Vec<Vec<char>>,
    text_index: usize,
    state: TypingState,
    halted: bool,
    options: TypingOptions,
    glyphs: Vec<char>,
    entropy: Box<dyn Entropy>,
}

impl fmt::Debug for TypingEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypingEffect")
            .field("texts", &self.texts.len())
            .field("text_index", &self.text_index)
            .field("state", &self.state)
            .field("halted", &self.halted)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl TypingEffect {
    /// # Errors
    ///
    /// Returns [`TypingError::NoTexts`] when `texts` is empty.
    pub fn new<S: AsRef<str>>(texts: &[S], options: TypingOptions) -> Result<Self, TypingError> {
        Ok(Self {
            texts: split_texts(texts)?,
            text_index: 0,
            state: TypingState::Typing(0),
            halted: false,
            options,
            glyphs: SCRAMBLE_GLYPHS.chars().collect(),
            entropy: Box::new(OsEntropy),
        })
    }

    /// Build from the `[typing]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`TypingError::NoTexts`] when the configured list is empty.
    pub fn from_config(config: &TypingConfig) -> Result<Self, TypingError> {
        Self::new(&config.texts, TypingOptions::from(config))
    }

    /// Replace the randomness used for scrambling and jitter.
    #[must_use]
    pub fn with_entropy(mut self, entropy: Box<dyn Entropy>) -> Self {
        self.entropy = entropy;
        self
    }

    #[must_use]
    pub const fn state(&self) -> TypingState {
        self.state
    }

    #[must_use]
    pub const fn text_index(&self) -> usize {
        self.text_index
    }

    #[must_use]
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    #[must_use]
    pub const fn options(&self) -> &TypingOptions {
        &self.options
    }

    /// The string currently being typed or deleted.
    #[must_use]
    pub fn current_text(&self) -> String {
        self.current().iter().collect()
    }

    /// Swap the string list and restart from the first entry.
    ///
    /// # Errors
    ///
    /// Returns [`TypingError::NoTexts`] when `texts` is empty; the effect is
    /// left untouched.
    pub fn change_texts<S: AsRef<str>>(&mut self, texts: &[S]) -> Result<(), TypingError> {
        self.texts = split_texts(texts)?;
        self.text_index = 0;
        self.state = TypingState::Typing(0);
        self.halted = false;
        Ok(())
    }

    /// Advance one step.
    pub fn tick(&mut self) -> Frame {
        if self.halted {
            return Frame {
                text: self.current_text(),
                next_delay: None,
                typed: None,
            };
        }
        match self.state {
            TypingState::Typing(revealed) => self.type_step(revealed),
            TypingState::PausedAfterType => self.delete_step(self.current().len()),
            TypingState::Deleting(remaining) => self.delete_step(remaining),
            TypingState::PausedAfterDelete => {
                self.text_index = (self.text_index + 1) % self.texts.len();
                self.type_step(0)
            }
        }
    }

    fn current(&self) -> &[char] {
        &self.texts[self.text_index]
    }

    fn type_step(&mut self, revealed: usize) -> Frame {
        let len = self.current().len();
        let typed = self.current().get(revealed).copied();
        let shown = (revealed + 1).min(len);
        let text = self.compose(shown);

        if shown < len {
            self.state = TypingState::Typing(shown);
            let delay = self.type_delay(typed);
            return Frame {
                text,
                next_delay: Some(delay),
                typed,
            };
        }

        self.state = TypingState::PausedAfterType;
        if !self.options.looping && self.text_index + 1 == self.texts.len() {
            self.halted = true;
            tracing::debug!(text_index = self.text_index, "typing effect halted");
            return Frame {
                text,
                next_delay: None,
                typed,
            };
        }
        Frame {
            text,
            next_delay: Some(self.options.pause),
            typed,
        }
    }

    fn delete_step(&mut self, remaining: usize) -> Frame {
        let shown = remaining.saturating_sub(1);
        let text: String = self.current()[..shown].iter().collect();
        let next_delay = if shown == 0 {
            self.state = TypingState::PausedAfterDelete;
            self.options.pause_after_delete
        } else {
            self.state = TypingState::Deleting(shown);
            self.options.delete_speed
        };
        Frame {
            text,
            next_delay: Some(next_delay),
            typed: None,
        }
    }

    /// Revealed prefix, followed by scramble glyphs for the rest when enabled.
    fn compose(&mut self, shown: usize) -> String {
        let current = &self.texts[self.text_index];
        let mut text: String = current[..shown].iter().collect();
        if self.options.scramble {
            for _ in shown..current.len() {
                text.push(pick_glyph(self.entropy.as_mut(), &self.glyphs));
            }
        }
        text
    }

    fn type_delay(&mut self, typed: Option<char>) -> Duration {
        if self.options.natural_speed {
            natural_delay(self.options.type_speed, typed, self.entropy.as_mut())
        } else {
            self.options.type_speed
        }
    }
}

fn split_texts<S: AsRef<str>>(texts: &[S]) -> Result<Vec<Vec<char>>, TypingError> {
    if texts.is_empty() {
        return Err(TypingError::NoTexts);
    }
    Ok(texts.iter().map(|t| t.as_ref().chars().collect()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::SequenceEntropy;
    use pretty_assertions::assert_eq;

    fn plain() -> TypingOptions {
        TypingOptions {
            type_speed: Duration::from_millis(100),
            delete_speed: Duration::from_millis(50),
            pause: Duration::from_millis(2000),
            pause_after_delete: Duration::from_millis(500),
            looping: true,
            scramble: false,
            cursor: None,
            natural_speed: false,
        }
    }

    fn run(effect: &mut TypingEffect, ticks: usize) -> Vec<String> {
        (0..ticks).map(|_| effect.tick().text).collect()
    }

    #[test]
    fn empty_texts_are_rejected() {
        let texts: [&str; 0] = [];
        assert!(matches!(
            TypingEffect::new(&texts, plain()),
            Err(TypingError::NoTexts)
        ));
    }

    #[test]
    fn non_looping_single_text_halts_without_deleting() {
        let options = TypingOptions {
            looping: false,
            ..plain()
        };
        let mut effect = TypingEffect::new(&["Hi"], options).unwrap();

        let first = effect.tick();
        assert_eq!(first.text, "H");
        assert_eq!(first.typed, Some('H'));
        assert_eq!(first.next_delay, Some(Duration::from_millis(100)));

        let second = effect.tick();
        assert_eq!(second.text, "Hi");
        assert!(second.is_halted());
        assert!(effect.is_halted());
        assert_eq!(effect.state(), TypingState::PausedAfterType);

        for _ in 0..10 {
            let frame = effect.tick();
            assert_eq!(frame.text, "Hi");
            assert!(frame.is_halted());
        }
    }

    #[test]
    fn full_cycle_types_deletes_and_advances() {
        let mut effect = TypingEffect::new(&["ab", "c"], plain()).unwrap();

        let frames: Vec<Frame> = (0..7).map(|_| effect.tick()).collect();
        let texts: Vec<&str> = frames.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, ["a", "ab", "a", "", "c", "", "a"]);

        let delays: Vec<u64> = frames
            .iter()
            .map(|f| u64::try_from(f.next_delay.unwrap().as_millis()).unwrap())
            .collect();
        assert_eq!(delays, [100, 2000, 50, 500, 2000, 500, 100]);
        assert_eq!(effect.text_index(), 0);
    }

    #[test]
    fn looping_single_text_retypes() {
        let mut effect = TypingEffect::new(&["Yo"], plain()).unwrap();
        assert_eq!(run(&mut effect, 6), ["Y", "Yo", "Y", "", "Y", "Yo"]);
    }

    #[test]
    fn non_looping_cycles_once_and_stops_on_last() {
        let options = TypingOptions {
            looping: false,
            ..plain()
        };
        let mut effect = TypingEffect::new(&["a", "b"], options).unwrap();
        assert_eq!(run(&mut effect, 3), ["a", "", "b"]);
        assert!(effect.is_halted());
        assert_eq!(effect.tick().text, "b");
    }

    #[test]
    fn scramble_fills_unrevealed_suffix() {
        let options = TypingOptions {
            scramble: true,
            ..plain()
        };
        let mut effect = TypingEffect::new(&["Hey"], options)
            .unwrap()
            .with_entropy(Box::new(SequenceEntropy::new(vec![0, 1])));

        assert_eq!(effect.tick().text, "HAB");
        assert_eq!(effect.tick().text, "HeA");
        assert_eq!(effect.tick().text, "Hey");
    }

    #[test]
    fn scramble_glyphs_come_from_alphabet() {
        let options = TypingOptions {
            scramble: true,
            ..plain()
        };
        let mut effect = TypingEffect::new(&["Problem Solver"], options).unwrap();
        for revealed in 1..14 {
            let frame = effect.tick();
            let chars: Vec<char> = frame.text.chars().collect();
            assert_eq!(chars.len(), 14);
            let prefix: String = chars[..revealed].iter().collect();
            assert_eq!(prefix, &"Problem Solver"[..revealed]);
            assert!(chars[revealed..].iter().all(|c| SCRAMBLE_GLYPHS.contains(*c)));
        }
    }

    #[test]
    fn change_texts_restarts() {
        let options = TypingOptions {
            looping: false,
            ..plain()
        };
        let mut effect = TypingEffect::new(&["a"], options).unwrap();
        effect.tick();
        assert!(effect.is_halted());

        effect.change_texts(&["xy"]).unwrap();
        assert!(!effect.is_halted());
        assert_eq!(effect.state(), TypingState::Typing(0));
        assert_eq!(effect.tick().text, "x");

        let empty: [&str; 0] = [];
        assert!(effect.change_texts(&empty).is_err());
        assert_eq!(effect.current_text(), "xy");
    }

    #[test]
    fn empty_string_entry_is_skipped_through() {
        let mut effect = TypingEffect::new(&["", "z"], plain()).unwrap();
        let frame = effect.tick();
        assert_eq!(frame.text, "");
        assert_eq!(frame.typed, None);
        assert_eq!(frame.next_delay, Some(Duration::from_millis(2000)));
        assert_eq!(run(&mut effect, 2), ["", "z"]);
    }

    #[test]
    fn cursor_is_appended_on_display() {
        let frame = Frame {
            text: "Hi".into(),
            next_delay: None,
            typed: None,
        };
        assert_eq!(frame.display(Some("|")), "Hi|");
        assert_eq!(frame.display(None), "Hi");
    }

    #[test]
    fn options_follow_config() {
        let config = TypingConfig {
            cursor: String::new(),
            looping: false,
            ..TypingConfig::default()
        };
        let options = TypingOptions::from(&config);
        assert_eq!(options.cursor, None);
        assert!(!options.looping);
        assert_eq!(options.pause, Duration::from_millis(2000));
    }
}
