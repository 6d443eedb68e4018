use std::any::Any;
use std::fmt;

use chrono::{DateTime, Local};

/// Characters of state shown in a memento's display name.
pub const NAME_PREFIX_CHARS: usize = 11;

/// Metadata view of a saved state.
///
/// Caretakers only ever see this trait; the originator that produced a
/// memento recovers its concrete type through [`Memento::as_any`].
pub trait Memento: fmt::Debug + Any {
    /// Display name: creation time plus a short state prefix.
    fn name(&self) -> String;

    /// Saved state.
    fn state(&self) -> &str;

    /// Creation time.
    fn date(&self) -> DateTime<Local>;

    /// Downcast hook.
    fn as_any(&self) -> &dyn Any;
}

/// Concrete memento produced by [`Originator::save`](super::Originator::save).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    state: String,
    date: DateTime<Local>,
}

impl Snapshot {
    /// Snapshot of `state` stamped with the current local time.
    pub fn new(state: impl Into<String>) -> Self {
        Self::at(state, Local::now())
    }

    /// Snapshot of `state` with an explicit timestamp.
    pub fn at(state: impl Into<String>, date: DateTime<Local>) -> Self {
        Self {
            state: state.into(),
            date,
        }
    }
}

impl Memento for Snapshot {
    fn name(&self) -> String {
        let prefix: String = self.state.chars().take(NAME_PREFIX_CHARS).collect();
        format!("{} / ({})...", self.date.format("%Y-%m-%d %H:%M:%S"), prefix)
    }

    fn state(&self) -> &str {
        &self.state
    }

    fn date(&self) -> DateTime<Local> {
        self.date
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_name_truncates_state() {
        let date = Local.with_ymd_and_hms(2024, 3, 1, 12, 30, 5).unwrap();
        let snapshot = Snapshot::at("Preparing for the first shot", date);
        assert_eq!(snapshot.name(), "2024-03-01 12:30:05 / (Preparing f)...");
    }

    #[test]
    fn test_name_keeps_short_state_whole() {
        let date = Local.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let snapshot = Snapshot::at("Shot: 7", date);
        assert_eq!(snapshot.name(), "2024-03-01 00:00:00 / (Shot: 7)...");
    }
}
