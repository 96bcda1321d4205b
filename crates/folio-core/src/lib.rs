//! # folio-core
//!
//! Core types and error types for Folio.
//!
//! This crate provides the foundational types shared across all Folio crates:
//! - Entity structs for portfolio data (projects, chat messages)
//! - Category, filter, role and theme enums
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
