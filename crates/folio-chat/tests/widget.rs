//! End-to-end widget behavior with fake completion clients.

use std::time::Duration;

use pretty_assertions::assert_eq;

use folio_chat::prompt::apology;
use folio_chat::{CHAT_LOG_CAPACITY, ChatError, ChatWidget, CompletionClient, InputControl};
use folio_config::OwnerConfig;
use folio_core::enums::ChatRole;
use folio_core::responses::ReplySource;

// ── Test helpers ──

/// Fails every request like a dropped connection would.
#[derive(Default)]
struct FailingClient;

impl CompletionClient for FailingClient {
    async fn complete(&self, _prompt: &str) -> Result<String, ChatError> {
        Err(ChatError::Api {
            status: 503,
            message: "unavailable".into(),
        })
    }
}

/// Echoes the prompt back followed by a fixed answer.
struct EchoClient;

impl CompletionClient for EchoClient {
    async fn complete(&self, prompt: &str) -> Result<String, ChatError> {
        Ok(format!("{prompt}\nI enjoy building tools for small teams."))
    }
}

/// Never answers.
struct StalledClient;

impl CompletionClient for StalledClient {
    async fn complete(&self, _prompt: &str) -> Result<String, ChatError> {
        std::future::pending().await
    }
}

#[derive(Default)]
struct RecordingInput {
    enabled: Vec<bool>,
    indicator: Vec<bool>,
}

impl RecordingInput {
    fn is_enabled(&self) -> bool {
        self.enabled.last().copied().unwrap_or(true)
    }
}

impl InputControl for RecordingInput {
    fn set_enabled(&mut self, enabled: bool) {
        self.enabled.push(enabled);
    }

    fn set_typing_indicator(&mut self, visible: bool) {
        self.indicator.push(visible);
    }
}

// ── Tests ──

#[tokio::test]
async fn canned_answer_skips_the_client() {
    let client = FailingClient::default();
    let mut widget = ChatWidget::new(OwnerConfig::default(), client);
    let mut input = RecordingInput::default();

    let reply = widget
        .submit("What's your email?", &mut input)
        .await
        .unwrap();
    assert_eq!(reply.source, ReplySource::Canned);
    assert!(reply.text.contains("hello@example.com"));
    assert!(reply.text.contains("+63 900 000 0000"));
    assert_eq!(input.enabled, [false, true]);
    assert_eq!(input.indicator, [true, false]);
}

#[tokio::test]
async fn network_failure_yields_apology_and_reenables_input() {
    let mut widget = ChatWidget::new(OwnerConfig::default(), FailingClient::default());
    let mut input = RecordingInput::default();

    let reply = widget.submit("tell me a joke", &mut input).await.unwrap();
    assert_eq!(reply.source, ReplySource::Apology);
    assert_eq!(reply.role, ChatRole::Error);
    assert_eq!(reply.text, apology("Jordan Cruz"));
    assert!(input.is_enabled());

    let last = widget.log().last().unwrap();
    assert_eq!(last.role, ChatRole::Error);
    assert_eq!(widget.log().len(), 2);
}

#[tokio::test]
async fn generated_answer_is_cleaned() {
    let mut widget = ChatWidget::new(OwnerConfig::default(), EchoClient);
    let mut input = RecordingInput::default();

    let reply = widget.submit("tell me a joke", &mut input).await.unwrap();
    assert_eq!(reply.source, ReplySource::Generated);
    assert!(reply.text.ends_with("I enjoy building tools for small teams."));
    assert!(!reply.text.contains("Please respond"));
}

#[tokio::test]
async fn blank_message_is_ignored() {
    let mut widget = ChatWidget::new(OwnerConfig::default(), FailingClient::default());
    let mut input = RecordingInput::default();

    assert!(widget.submit("   ", &mut input).await.is_none());
    assert!(widget.log().is_empty());
    assert!(input.enabled.is_empty());
}

#[tokio::test(start_paused = true)]
async fn cancelled_submit_reenables_input() {
    let mut widget = ChatWidget::new(OwnerConfig::default(), StalledClient);
    let mut input = RecordingInput::default();

    let result = tokio::time::timeout(
        Duration::from_secs(10),
        widget.submit("tell me a joke", &mut input),
    )
    .await;
    assert!(result.is_err());
    assert!(input.is_enabled());
    assert_eq!(input.indicator.last(), Some(&false));
}

#[tokio::test]
async fn transcript_is_capped() {
    let mut widget = ChatWidget::new(OwnerConfig::default(), FailingClient::default());
    let mut input = RecordingInput::default();

    assert!(widget.open());
    assert!(!widget.open());
    for i in 0..15 {
        widget.submit(&format!("hello #{i}"), &mut input).await;
    }
    assert_eq!(widget.log().len(), CHAT_LOG_CAPACITY);
    assert_eq!(widget.log().last().unwrap().role, ChatRole::Assistant);
}
