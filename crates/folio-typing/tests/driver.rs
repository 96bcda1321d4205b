//! Driver tests on a paused tokio clock.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use pretty_assertions::assert_eq;

use folio_typing::{TextTarget, TypingDriver, TypingEffect, TypingOptions};

// ── Test helpers ──

#[derive(Clone, Default)]
struct Recorder {
    frames: Arc<Mutex<Vec<String>>>,
    keys: Arc<Mutex<Vec<char>>>,
}

impl Recorder {
    fn frames(&self) -> Vec<String> {
        self.frames.lock().unwrap().clone()
    }

    fn keys(&self) -> String {
        self.keys.lock().unwrap().iter().collect()
    }
}

impl TextTarget for Recorder {
    fn set_text(&mut self, text: &str) {
        self.frames.lock().unwrap().push(text.to_string());
    }

    fn on_keystroke(&mut self, typed: char) {
        self.keys.lock().unwrap().push(typed);
    }
}

fn options(looping: bool) -> TypingOptions {
    TypingOptions {
        type_speed: Duration::from_millis(100),
        delete_speed: Duration::from_millis(50),
        pause: Duration::from_millis(2000),
        pause_after_delete: Duration::from_millis(500),
        looping,
        scramble: false,
        cursor: Some("|".into()),
        natural_speed: false,
    }
}

// ── Tests ──

#[tokio::test(start_paused = true)]
async fn non_looping_effect_halts_after_typing() {
    let recorder = Recorder::default();
    let effect = TypingEffect::new(&["Hi"], options(false)).unwrap();
    let handle = TypingDriver::spawn(effect, recorder.clone());

    handle.finished().await;
    assert_eq!(recorder.frames(), ["H|", "Hi|"]);
    assert_eq!(recorder.keys(), "Hi");

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(recorder.frames().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn frames_follow_configured_delays() {
    let recorder = Recorder::default();
    let effect = TypingEffect::new(&["ab"], options(true)).unwrap();
    let handle = TypingDriver::spawn(effect, recorder.clone());

    // First frame is immediate; the second waits one type tick.
    tokio::time::sleep(Duration::from_millis(1)).await;
    assert_eq!(recorder.frames(), ["a|"]);
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(recorder.frames(), ["a|", "ab|"]);

    // Held for the pause, then deletion starts.
    tokio::time::sleep(Duration::from_millis(1990)).await;
    assert_eq!(recorder.frames().len(), 2);
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(recorder.frames().last().map(String::as_str), Some("a|"));

    handle.teardown();
}

#[tokio::test(start_paused = true)]
async fn teardown_stops_further_writes() {
    let recorder = Recorder::default();
    let effect = TypingEffect::new(&["Full Stack Developer"], options(true)).unwrap();
    let handle = TypingDriver::spawn(effect, recorder.clone());

    tokio::time::sleep(Duration::from_millis(250)).await;
    let seen = recorder.frames().len();
    assert!(seen >= 3);

    handle.teardown();
    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(recorder.frames().len(), seen);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_cancels() {
    let recorder = Recorder::default();
    let effect = TypingEffect::new(&["Creative Thinker"], options(true)).unwrap();
    {
        let _handle = TypingDriver::spawn(effect, recorder.clone());
        tokio::time::sleep(Duration::from_millis(150)).await;
    }
    let seen = recorder.frames().len();
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(recorder.frames().len(), seen);
}

#[tokio::test(start_paused = true)]
async fn timed_out_wait_cancels_the_driver() {
    let recorder = Recorder::default();
    let effect = TypingEffect::new(&["Problem Solver"], options(true)).unwrap();
    let handle = TypingDriver::spawn(effect, recorder.clone());

    let waited = tokio::time::timeout(Duration::from_millis(250), handle.finished()).await;
    assert!(waited.is_err());
    let seen = recorder.frames().len();

    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(recorder.frames().len(), seen);
}

#[tokio::test(start_paused = true)]
async fn pause_holds_frames_until_resume() {
    let recorder = Recorder::default();
    let effect = TypingEffect::new(&["Developer"], options(true)).unwrap();
    let handle = TypingDriver::spawn(effect, recorder.clone());

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(recorder.frames(), ["D|", "De|"]);

    handle.pause();
    assert!(handle.is_paused());
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(recorder.frames(), ["D|", "De|"]);

    handle.resume();
    assert!(!handle.is_paused());
    tokio::time::sleep(Duration::from_millis(1)).await;
    assert_eq!(recorder.frames(), ["D|", "De|", "Dev|"]);
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(recorder.frames().last().map(String::as_str), Some("Deve|"));

    handle.teardown();
}
