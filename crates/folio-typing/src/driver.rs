//! Runs a [`TypingEffect`] on tokio timers.
//!
//! The driver task is the only owner of the pending timer. Tearing the
//! handle down (explicitly or by dropping it) aborts the task, so no tick
//! lands on a target that has been detached. Pausing holds the next tick
//! until the handle resumes.

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::effect::TypingEffect;

/// Where frames are written.
pub trait TextTarget: Send + 'static {
    fn set_text(&mut self, text: &str);

    /// Called once per revealed character.
    fn on_keystroke(&mut self, _typed: char) {}
}

pub struct TypingDriver;

impl TypingDriver {
    /// Start ticking `effect` into `target` on the current tokio runtime.
    ///
    /// Must be called from within a runtime.
    pub fn spawn<T: TextTarget>(mut effect: TypingEffect, mut target: T) -> TypingHandle {
        let cursor = effect.options().cursor.clone();
        let (paused_tx, mut paused) = watch::channel(false);
        let task = tokio::spawn(async move {
            loop {
                if paused.wait_for(|held| !held).await.is_err() {
                    break;
                }
                let frame = effect.tick();
                target.set_text(&frame.display(cursor.as_deref()));
                if let Some(typed) = frame.typed {
                    target.on_keystroke(typed);
                }
                match frame.next_delay {
                    Some(delay) => tokio::time::sleep(delay).await,
                    None => break,
                }
            }
            tracing::debug!("typing driver finished");
        });
        TypingHandle {
            task: Some(task),
            paused: paused_tx,
        }
    }
}

/// Owner of a running driver.
#[derive(Debug)]
pub struct TypingHandle {
    task: Option<JoinHandle<()>>,
    paused: watch::Sender<bool>,
}

impl TypingHandle {
    /// Whether the effect halted on its own or was torn down.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Cancel the pending timer. No further frames are written.
    pub fn teardown(mut self) {
        self.abort();
    }

    /// Hold the next frame until [`Self::resume`]. A frame already on
    /// screen stays there.
    pub fn pause(&self) {
        self.paused.send_replace(true);
    }

    /// Continue ticking from where the effect was paused.
    pub fn resume(&self) {
        self.paused.send_replace(false);
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        *self.paused.borrow()
    }

    /// Wait for a non-looping effect to halt.
    ///
    /// The task stays owned by the handle while awaited, so dropping this
    /// future (a lost `select!` branch, a timeout) aborts it.
    pub async fn finished(mut self) {
        if let Some(task) = self.task.as_mut() {
            if let Err(error) = task.await {
                tracing::warn!(%error, "typing driver task failed");
            }
        }
        self.task = None;
    }

    fn abort(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for TypingHandle {
    fn drop(&mut self) {
        self.abort();
    }
}
