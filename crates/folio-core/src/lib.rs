//! Folio Core - Foundational types for the Folio portfolio site
//!
//! This crate provides the types that all other Folio crates depend on:
//! - `Vec2`, `Dimensions`, `Rect` - 2D surface-space types
//! - `Rgba` - CSS-style colors
//! - `ContactSubmission`, `SubmitOutcome` - the contact form payload and its user-facing result
//! - Error types and Result alias

mod contact;
mod error;
mod types;

pub use contact::{ContactSubmission, SubmitOutcome, DEFAULT_RELAY_ENDPOINT};
pub use error::{FolioError, Result};
pub use types::{Dimensions, Rect, Rgba, Vec2};
