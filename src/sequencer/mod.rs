//! Even/odd sequencer
//!
//! Traverses a sequence yielding indices 0, 2, 4, ... first and then
//! 1, 3, 5, ..., keeping relative order inside each pass.
//!
//! Lazy and single-pass: a [`Cursor`] borrows the sequence and walks it at
//! most `len + 1` advances.

mod collection;
mod cursor;

pub use collection::WordCollection;
pub use cursor::{begin, Cursor, Phase};

/// Indices of a length-`len` sequence in even/odd order.
///
/// Same order a [`Cursor`] produces, without needing the items.
pub fn even_odd_indices(len: usize) -> impl Iterator<Item = usize> {
    (0..len).step_by(2).chain((1..len).step_by(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_match_cursor() {
        for len in 0..16 {
            let items: Vec<usize> = (0..len).collect();
            let from_cursor: Vec<usize> = Cursor::new(&items).copied().collect();
            let from_indices: Vec<usize> = even_odd_indices(len).collect();
            assert_eq!(from_cursor, from_indices, "len {}", len);
        }
    }
}
