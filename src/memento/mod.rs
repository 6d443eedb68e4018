//! Snapshot/restore memento
//!
//! [`Originator`] owns a state string, [`Snapshot`] captures it with a
//! timestamp, and [`Caretaker`] keeps a stack of snapshots behind the
//! metadata-only [`Memento`] trait.

mod caretaker;
mod originator;
mod snapshot;

pub use caretaker::Caretaker;
pub use originator::{Originator, DEFAULT_SHOT_RANGE};
pub use snapshot::{Memento, Snapshot, NAME_PREFIX_CHARS};
