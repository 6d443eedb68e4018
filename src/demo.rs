//! Console demos
//!
//! Each demo returns its output as lines; printing is left to the caller.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::config::{IteratorDemoConfig, MementoDemoConfig};
use crate::memento::{Caretaker, Originator};
use crate::sequencer::WordCollection;
use crate::PatternError;

/// Header printed before the iterator demo's words.
pub const ITERATOR_HEADER: &str = "Even elements first, then odd:";

/// Words from `config` in even/odd order, after a header line.
pub fn iterator_lines(config: &IteratorDemoConfig) -> Vec<String> {
    let collection: WordCollection<&str> = config.words.iter().map(String::as_str).collect();
    info!(words = collection.len(), "running iterator demo");

    let mut lines = Vec::with_capacity(collection.len() + 1);
    lines.push(ITERATOR_HEADER.to_string());
    lines.extend(collection.cursor().map(|word| word.to_string()));
    lines
}

/// Run the memento scenario: initial backup, `shots` shot+backup rounds,
/// history listing, then `undos` undo steps.
pub fn memento_lines(config: &MementoDemoConfig) -> Result<Vec<String>, PatternError> {
    info!(shots = config.shots, undos = config.undos, "running memento demo");

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut originator = Originator::with_rng(config.initial_state.clone(), rng)
        .with_shot_range(config.shot_range.clone())?;
    let mut caretaker = Caretaker::new().with_backup_delay(config.backup_delay);

    let mut lines = vec![format!("Initial state: {}", originator.state())];

    backup(&mut caretaker, &originator, &mut lines);
    for _ in 0..config.shots {
        let state = originator.do_something().to_string();
        lines.push(format!("Character: {}", state));
        backup(&mut caretaker, &originator, &mut lines);
    }

    lines.push(String::new());
    lines.push("Saved snapshots:".to_string());
    lines.extend(caretaker.history());

    for _ in 0..config.undos {
        match caretaker.undo(&mut originator) {
            Some(name) => {
                lines.push(String::new());
                lines.push(format!("Restored snapshot: {}", name));
                lines.push(format!("Current state: {}", originator.state()));
            }
            None => break,
        }
    }

    Ok(lines)
}

fn backup(caretaker: &mut Caretaker, originator: &Originator, lines: &mut Vec<String>) {
    lines.push("Saving snapshot...".to_string());
    lines.push(String::new());
    caretaker.backup(originator);
}
