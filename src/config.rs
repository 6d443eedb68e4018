//! Configuration for the two demos
//!
//! Plain structs with defaults matching the classic console demos. The CLI
//! overrides individual fields from flags.

use std::ops::Range;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::memento::DEFAULT_SHOT_RANGE;

/// Sample words printed by the iterator demo.
pub const SAMPLE_WORDS: [&str; 9] = [
    "Plum0",
    "Peach1",
    "Cherry2",
    "Watermelon3",
    "Melon4",
    "Grape5",
    "Apple6",
    "Pear7",
    "Orange8",
];

/// Iterator demo settings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IteratorDemoConfig {
    /// Words to traverse, in insertion order
    pub words: Vec<String>,
}

impl Default for IteratorDemoConfig {
    fn default() -> Self {
        Self::with_words(SAMPLE_WORDS)
    }
}

impl IteratorDemoConfig {
    /// Config over an explicit word list
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

/// Memento demo settings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MementoDemoConfig {
    /// State before any shot is fired
    pub initial_state: String,

    /// Shots fired, each followed by a backup
    pub shots: usize,

    /// Undo steps taken at the end
    pub undos: usize,

    /// RNG seed; `None` draws from OS entropy
    pub seed: Option<u64>,

    /// Range shot values are drawn from
    pub shot_range: Range<u32>,

    /// Pause before each backup
    pub backup_delay: Duration,
}

impl Default for MementoDemoConfig {
    fn default() -> Self {
        Self {
            initial_state: "Preparing ".to_string(),
            shots: 3,
            undos: 2,
            seed: None,
            shot_range: DEFAULT_SHOT_RANGE,
            backup_delay: Duration::ZERO,
        }
    }
}

impl MementoDemoConfig {
    /// Reproducible config for a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}
