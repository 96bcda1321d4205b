//! The chat widget: transcript, input gating, and reply selection.

use folio_config::OwnerConfig;
use folio_core::entities::ChatMessage;
use folio_core::enums::ChatRole;
use folio_core::responses::ReplySource;

use crate::classifier::Classifier;
use crate::client::CompletionClient;
use crate::log::ChatLog;
use crate::prompt::{apology, build_prompt, clean_response, welcome};

/// The send control and typing indicator of the widget.
pub trait InputControl {
    fn set_enabled(&mut self, enabled: bool);

    fn set_typing_indicator(&mut self, _visible: bool) {}
}

/// Disables input and shows the typing indicator for its lifetime.
///
/// Dropping the guard restores both, so every exit path of a submit
/// (reply, error, or the future being dropped) re-enables input.
pub struct InputGuard<'a, I: InputControl + ?Sized> {
    control: &'a mut I,
}

impl<'a, I: InputControl + ?Sized> InputGuard<'a, I> {
    pub fn engage(control: &'a mut I) -> Self {
        control.set_enabled(false);
        control.set_typing_indicator(true);
        Self { control }
    }
}

impl<I: InputControl + ?Sized> Drop for InputGuard<'_, I> {
    fn drop(&mut self) {
        self.control.set_typing_indicator(false);
        self.control.set_enabled(true);
    }
}

/// Reply produced by [`ChatWidget::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
    pub role: ChatRole,
    pub source: ReplySource,
}

/// Canned-answer assistant with a completion fallback.
#[derive(Debug)]
pub struct ChatWidget<C> {
    classifier: Classifier,
    client: C,
    log: ChatLog,
}

impl<C: CompletionClient> ChatWidget<C> {
    pub fn new(owner: OwnerConfig, client: C) -> Self {
        Self {
            classifier: Classifier::new(owner),
            client,
            log: ChatLog::default(),
        }
    }

    #[must_use]
    pub const fn log(&self) -> &ChatLog {
        &self.log
    }

    #[must_use]
    pub const fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    fn owner_name(&self) -> &str {
        &self.classifier.owner().name
    }

    /// Post the welcome line if the transcript is empty. Returns whether a
    /// message was added.
    pub fn open(&mut self) -> bool {
        if !self.log.is_empty() {
            return false;
        }
        let text = welcome(self.owner_name());
        self.log.push(ChatMessage::now(ChatRole::Assistant, text));
        true
    }

    /// Handle one visitor message. Blank input is ignored.
    ///
    /// Input stays disabled until the reply is chosen. Fallback failures are
    /// logged and answered with the apology.
    pub async fn submit<I>(&mut self, message: &str, input: &mut I) -> Option<ChatReply>
    where
        I: InputControl + ?Sized,
    {
        let message = message.trim();
        if message.is_empty() {
            return None;
        }
        self.log.push(ChatMessage::now(ChatRole::User, message));

        let reply = {
            let _guard = InputGuard::engage(input);
            self.reply_to(message).await
        };

        self.log
            .push(ChatMessage::now(reply.role, reply.text.clone()));
        Some(reply)
    }

    async fn reply_to(&self, message: &str) -> ChatReply {
        if let Some(text) = self.classifier.classify(message) {
            return ChatReply {
                text,
                role: ChatRole::Assistant,
                source: ReplySource::Canned,
            };
        }

        let prompt = build_prompt(self.classifier.owner(), message);
        match self.client.complete(&prompt).await {
            Ok(generated) => ChatReply {
                text: clean_response(&generated, self.owner_name()),
                role: ChatRole::Assistant,
                source: ReplySource::Generated,
            },
            Err(error) => {
                tracing::warn!(%error, "chat fallback failed");
                ChatReply {
                    text: apology(self.owner_name()),
                    role: ChatRole::Error,
                    source: ReplySource::Apology,
                }
            }
        }
    }
}
