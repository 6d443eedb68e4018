use std::thread;
use std::time::Duration;

use rand::Rng;
use tracing::{debug, info, warn};

use super::{Memento, Originator};

/// Keeper of saved mementos, newest last.
///
/// Only the [`Memento`] metadata is visible here; restoring goes through the
/// originator.
#[derive(Debug, Default)]
pub struct Caretaker {
    mementos: Vec<Box<dyn Memento>>,
    backup_delay: Duration,
}

impl Caretaker {
    /// Empty history with no backup delay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pause for `delay` before every backup.
    pub fn with_backup_delay(mut self, delay: Duration) -> Self {
        self.backup_delay = delay;
        self
    }

    /// Save the originator's current state.
    pub fn backup<R: Rng>(&mut self, originator: &Originator<R>) {
        if !self.backup_delay.is_zero() {
            thread::sleep(self.backup_delay);
        }
        let snapshot = originator.save();
        debug!(name = %snapshot.name(), "backup taken");
        self.mementos.push(Box::new(snapshot));
    }

    /// Store a memento built elsewhere.
    pub fn push(&mut self, memento: Box<dyn Memento>) {
        self.mementos.push(memento);
    }

    /// Restore the newest usable memento and return its name.
    ///
    /// Mementos the originator rejects are dropped and the next older one is
    /// tried. Returns `None` once history runs out.
    pub fn undo<R: Rng>(&mut self, originator: &mut Originator<R>) -> Option<String> {
        while let Some(memento) = self.mementos.pop() {
            let name = memento.name();
            match originator.restore(memento.as_ref()) {
                Ok(()) => {
                    info!(name = %name, "undo");
                    return Some(name);
                }
                Err(err) => warn!(error = %err, "discarding memento"),
            }
        }
        debug!("undo with empty history");
        None
    }

    /// Names of stored mementos, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.mementos.iter().map(|memento| memento.name()).collect()
    }

    /// Number of stored mementos.
    pub fn len(&self) -> usize {
        self.mementos.len()
    }

    /// Whether history is empty.
    pub fn is_empty(&self) -> bool {
        self.mementos.is_empty()
    }
}
