//! # folio-site
//!
//! Assembles the portfolio page.
//!
//! - [`portfolio::Portfolio`]: the composition root owning the store, the
//!   filter, the chat widget, and the theme preference
//! - [`page`]: static document markup
//! - [`scroll`]: reveal-on-scroll tracking, active section, progress, counters
//! - [`contact`]: contact form validation

pub mod contact;
pub mod page;
pub mod portfolio;
pub mod scroll;

mod error;

pub use contact::{ContactError, ContactForm};
pub use error::SiteError;
pub use portfolio::Portfolio;
