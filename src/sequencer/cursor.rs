//! Even/odd traversal cursor
//!
//! Explicit state machine: `Even -> Odd -> Done`, one transition each way,
//! never reverting. Position is `None` until the first successful advance.

use tracing::{debug, trace};

use crate::PatternError;

/// Phase of an even/odd traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Yielding indices 0, 2, 4, ...
    Even,

    /// Yielding indices 1, 3, 5, ...
    Odd,

    /// Both passes exhausted
    Done,
}

/// Cursor over a borrowed sequence, even indices first, then odd ones.
///
/// The cursor owns its position and phase exclusively; the sequence itself
/// is never touched.
#[derive(Debug, Clone)]
pub struct Cursor<'a, T> {
    items: &'a [T],
    position: Option<usize>,
    phase: Phase,
}

/// Start a traversal over `sequence`.
///
/// An absent sequence is rejected with [`PatternError::InvalidInput`]; an
/// empty one is fine and simply yields nothing.
pub fn begin<T>(sequence: Option<&[T]>) -> Result<Cursor<'_, T>, PatternError> {
    let items = sequence.ok_or_else(|| {
        PatternError::InvalidInput("no sequence given to traverse".to_string())
    })?;
    Ok(Cursor::new(items))
}

impl<'a, T> Cursor<'a, T> {
    /// Cursor positioned before the first even index
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            position: None,
            phase: Phase::Even,
        }
    }

    /// Move to the next element in even-then-odd order.
    ///
    /// Returns `false` once both passes are exhausted, and keeps returning
    /// `false` on every later call.
    pub fn advance(&mut self) -> bool {
        match self.phase {
            Phase::Even => {
                let next = self.position.map_or(0, |pos| pos + 2);
                if next < self.items.len() {
                    self.position = Some(next);
                    return true;
                }

                debug!(len = self.items.len(), "even pass exhausted, switching to odd pass");
                self.phase = Phase::Odd;
                self.step_to(1)
            }
            Phase::Odd => {
                // In the odd phase the position is always set by the transition
                let next = self.position.map_or(1, |pos| pos + 2);
                self.step_to(next)
            }
            Phase::Done => false,
        }
    }

    fn step_to(&mut self, next: usize) -> bool {
        if next < self.items.len() {
            self.position = Some(next);
            true
        } else {
            trace!(len = self.items.len(), "traversal exhausted");
            self.phase = Phase::Done;
            false
        }
    }

    /// Element under the cursor.
    ///
    /// # Panics
    ///
    /// When called before a successful [`advance`](Self::advance) or after
    /// the traversal is exhausted.
    pub fn current(&self) -> &'a T {
        match self.try_current() {
            Some(item) => item,
            None => panic!(
                "Cursor::current called without a successful advance (position {:?}, phase {:?}, len {})",
                self.position,
                self.phase,
                self.items.len()
            ),
        }
    }

    /// Element under the cursor, if there is one
    pub fn try_current(&self) -> Option<&'a T> {
        if self.phase == Phase::Done {
            return None;
        }
        self.position.and_then(|pos| self.items.get(pos))
    }

    /// Index of the element under the cursor
    pub fn key(&self) -> Option<usize> {
        self.try_current().and(self.position)
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Rewind to index 0 in the even phase.
    ///
    /// Unlike [`new`](Self::new) this lands *on* index 0, not before it: the
    /// next [`advance`](Self::advance) moves to index 2.
    pub fn reset(&mut self) {
        self.position = Some(0);
        self.phase = Phase::Even;
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() {
            self.try_current()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.items.len();
        let remaining = match (self.phase, self.position) {
            (Phase::Done, _) => 0,
            (Phase::Even, None) => n,
            // evens after pos, plus every odd index
            (Phase::Even, Some(pos)) => n.saturating_sub(pos + 1) / 2 + n / 2,
            (Phase::Odd, Some(pos)) => n.saturating_sub(pos + 1) / 2,
            (Phase::Odd, None) => n / 2,
        };
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {}

impl<T> std::iter::FusedIterator for Cursor<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_items_even_then_odd() {
        let items = ["A", "B", "C", "D", "E"];
        let order: Vec<_> = Cursor::new(&items).copied().collect();
        assert_eq!(order, vec!["A", "C", "E", "B", "D"]);
    }

    #[test]
    fn test_phase_transitions() {
        let items = [0, 1, 2];
        let mut cursor = Cursor::new(&items);
        assert_eq!(cursor.phase(), Phase::Even);

        assert!(cursor.advance());
        assert!(cursor.advance());
        assert_eq!(cursor.key(), Some(2));
        assert_eq!(cursor.phase(), Phase::Even);

        assert!(cursor.advance());
        assert_eq!(cursor.key(), Some(1));
        assert_eq!(cursor.phase(), Phase::Odd);

        assert!(!cursor.advance());
        assert_eq!(cursor.phase(), Phase::Done);
        assert_eq!(cursor.key(), None);
    }

    #[test]
    fn test_single_item_yields_only_index_zero() {
        let items = ['x'];
        let mut cursor = Cursor::new(&items);
        assert!(cursor.advance());
        assert_eq!(*cursor.current(), 'x');
        assert!(!cursor.advance());
        assert!(!cursor.advance());
    }

    #[test]
    fn test_reset_lands_on_first_item() {
        let items = [10, 11, 12, 13, 14];
        let mut cursor = Cursor::new(&items);
        while cursor.advance() {}

        cursor.reset();
        assert_eq!(cursor.phase(), Phase::Even);
        assert_eq!(*cursor.current(), 10);

        // index 0 is not yielded again after a reset
        let rest: Vec<_> = cursor.copied().collect();
        assert_eq!(rest, vec![12, 14, 11, 13]);
    }

    #[test]
    fn test_size_hint_tracks_progress() {
        let items = [1, 2, 3, 4, 5, 6, 7];
        let mut cursor = Cursor::new(&items);
        for remaining in (0..=items.len()).rev() {
            assert_eq!(cursor.size_hint(), (remaining, Some(remaining)));
            cursor.next();
        }
    }

    #[test]
    fn test_begin_rejects_missing_sequence() {
        let missing: Option<&[u8]> = None;
        assert!(matches!(begin(missing), Err(PatternError::InvalidInput(_))));
        assert!(begin(Some(&[] as &[u8])).is_ok());
    }

    #[test]
    #[should_panic(expected = "without a successful advance")]
    fn test_current_before_advance_panics() {
        let items = [1];
        let cursor = Cursor::new(&items);
        cursor.current();
    }
}
