//! # folio-projects
//!
//! The portfolio's project list and everything that reads it:
//! - [`store::ProjectStore`]: ordered, immutable project records with a
//!   subscription feed that publishes every update
//! - [`filter::ProjectFilter`]: category + free-text filter, recomputed in
//!   full on every change
//! - [`render`]: card markup for the projects grid

pub mod defaults;
pub mod filter;
pub mod render;
pub mod store;

mod error;

pub use error::StoreError;
pub use filter::{FilterOutcome, FilterState, FilterView, NoResults, PlaceholderChange, ProjectFilter, SearchInfo};
pub use store::{ProjectFeed, ProjectStore};
