//! # folio-chat
//!
//! The portfolio's chat assistant.
//!
//! Questions are first matched against keyword topics ([`classifier`]) and
//! answered from the owner profile. Anything else goes to a hosted
//! text-generation endpoint ([`client`]); any failure there is answered
//! with a fixed apology. The transcript keeps the last 20 messages.

pub mod classifier;
pub mod client;
pub mod log;
pub mod prompt;
pub mod widget;

mod error;
mod http;

pub use classifier::{Classifier, Topic};
pub use client::{CompletionClient, HostedCompletionClient};
pub use error::ChatError;
pub use log::{CHAT_LOG_CAPACITY, ChatLog};
pub use widget::{ChatReply, ChatWidget, InputControl, InputGuard};
