use super::Cursor;

/// Owned list of items that hands out even/odd cursors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCollection<T> {
    items: Vec<T>,
}

impl<T> WordCollection<T> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item at the end.
    pub fn add_item(&mut self, item: T) {
        self.items.push(item);
    }

    /// Borrow the items in insertion order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Fresh cursor positioned before the first even index.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&self.items)
    }
}

impl<T> From<Vec<T>> for WordCollection<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for WordCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a WordCollection<T> {
    type Item = &'a T;
    type IntoIter = Cursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}
