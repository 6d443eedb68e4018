//! # Classic behavioural patterns
//!
//! Two small pattern demos:
//!
//! 1. **Iterator**: an even/odd [`Cursor`] that yields the items at indices
//!    0, 2, 4, ... and then 1, 3, 5, ...
//! 2. **Memento**: an [`Originator`] whose state is captured in
//!    [`Snapshot`]s kept by a [`Caretaker`] and restored on undo.
//!
//! ## Usage Example
//!
//! ```
//! use classic_patterns::WordCollection;
//!
//! let words: WordCollection<&str> = ["A", "B", "C", "D", "E"].into_iter().collect();
//! let order: Vec<_> = words.cursor().copied().collect();
//! assert_eq!(order, ["A", "C", "E", "B", "D"]);
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod config;     // Demo configuration
pub mod demo;       // Console demo harness
pub mod logging;    // Subscriber setup
pub mod memento;    // Snapshot/restore
pub mod sequencer;  // Even/odd traversal

// Re-exports for convenience
pub use config::{IteratorDemoConfig, MementoDemoConfig};
pub use memento::{Caretaker, Memento, Originator, Snapshot};
pub use sequencer::{begin, Cursor, Phase, WordCollection};

use thiserror::Error;

/// Errors raised by the pattern demos
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// Missing or unusable input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Memento not produced by the originator restoring it
    #[error("Unknown snapshot {0}")]
    UnknownSnapshot(String),
}
