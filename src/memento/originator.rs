use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::{Memento, Snapshot};
use crate::PatternError;

/// Default range for generated shot values.
pub const DEFAULT_SHOT_RANGE: Range<u32> = 10..40;

/// Object whose state gets saved and restored.
///
/// State is a single string; [`do_something`](Self::do_something) stands in
/// for business logic that overwrites it.
#[derive(Debug)]
pub struct Originator<R = StdRng> {
    state: String,
    rng: R,
    shot_range: Range<u32>,
}

impl Originator<StdRng> {
    /// Originator seeded from OS entropy.
    pub fn new(state: impl Into<String>) -> Self {
        Self::with_rng(state, StdRng::from_entropy())
    }

    /// Originator with a reproducible shot sequence.
    pub fn seeded(state: impl Into<String>, seed: u64) -> Self {
        Self::with_rng(state, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Originator<R> {
    /// Originator drawing shots from `rng`.
    pub fn with_rng(state: impl Into<String>, rng: R) -> Self {
        let state = state.into();
        info!(state = %state, "initial state");
        Self {
            state,
            rng,
            shot_range: DEFAULT_SHOT_RANGE,
        }
    }

    /// Replace the range shots are drawn from.
    pub fn with_shot_range(mut self, shot_range: Range<u32>) -> Result<Self, PatternError> {
        if shot_range.is_empty() {
            return Err(PatternError::InvalidInput(format!(
                "empty shot range {}..{}",
                shot_range.start, shot_range.end
            )));
        }
        self.shot_range = shot_range;
        Ok(self)
    }

    /// Current state.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Fire a shot, overwriting the state. Returns the new state.
    pub fn do_something(&mut self) -> &str {
        let shot = self.rng.gen_range(self.shot_range.clone());
        self.state = format!("Shot: {}", shot);
        debug!(state = %self.state, "state changed");
        &self.state
    }

    /// Save the current state.
    pub fn save(&self) -> Snapshot {
        Snapshot::new(self.state.clone())
    }

    /// Restore state from a memento this originator type produced.
    pub fn restore(&mut self, memento: &dyn Memento) -> Result<(), PatternError> {
        let snapshot = memento
            .as_any()
            .downcast_ref::<Snapshot>()
            .ok_or_else(|| PatternError::UnknownSnapshot(memento.name()))?;

        self.state = snapshot.state().to_string();
        info!(state = %self.state, "state restored");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shots_stay_in_range() {
        let mut originator = Originator::seeded("Preparing ", 7)
            .with_shot_range(10..12)
            .unwrap();
        for _ in 0..50 {
            let state = originator.do_something().to_string();
            assert!(state == "Shot: 10" || state == "Shot: 11", "got {}", state);
        }
    }

    #[test]
    fn test_empty_shot_range_rejected() {
        let result = Originator::seeded("x", 1).with_shot_range(5..5);
        assert!(matches!(result, Err(PatternError::InvalidInput(_))));
    }

    #[test]
    fn test_save_then_restore() {
        let mut originator = Originator::seeded("Preparing ", 3);
        let saved = originator.save();
        originator.do_something();
        assert_ne!(originator.state(), "Preparing ");

        originator.restore(&saved).unwrap();
        assert_eq!(originator.state(), "Preparing ");
    }
}
