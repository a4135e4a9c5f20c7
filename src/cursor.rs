//! A cursor over a tree's entries in ascending order.

use super::node::{Arena, Link, Walk};

/// A cursor over a tree's entries in ascending order.
///
/// A cursor starts positioned before the first entry; `move_next` advances it and reports
/// whether it landed on an entry. Unlike `Iter`, a cursor can be rewound with `reset`.
///
/// The cursor borrows the tree, so the tree cannot be modified while the cursor is alive.
pub struct Cursor<'a, K: 'a, V: 'a> {
    arena: &'a Arena<K, V>,
    walk: Walk,
    current: Link,
}

impl<'a, K, V> Cursor<'a, K, V> {
    pub(crate) fn new(arena: &'a Arena<K, V>) -> Self {
        Cursor { arena: arena, walk: Walk::new(arena.root()), current: None }
    }

    /// Advances the cursor to the next entry, returning `false` if there is none.
    ///
    /// Once `move_next` has returned `false`, it keeps returning `false` until the cursor is
    /// reset, and the cursor has no current entry.
    pub fn move_next(&mut self) -> bool {
        self.current = self.walk.next(self.arena);
        self.current.is_some()
    }

    /// Returns the current entry, or `None` if the cursor is not positioned on one.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = rbtree::Tree::new();
    /// tree.insert(1, "a");
    ///
    /// let mut cursor = tree.cursor();
    /// assert_eq!(cursor.current(), None);
    /// cursor.move_next();
    /// assert_eq!(cursor.current(), Some((&1, &"a")));
    /// cursor.move_next();
    /// assert_eq!(cursor.current(), None);
    /// ```
    pub fn current(&self) -> Option<(&'a K, &'a V)> {
        let arena = self.arena;
        self.current.map(|node| arena.key_value(node))
    }

    /// Returns the key of the current entry.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is not positioned on an entry, i.e. if the last call to
    /// `move_next` did not return `true`.
    pub fn key(&self) -> &'a K {
        match self.current() {
            Some((key, _)) => key,
            None => panic!("Cursor::key called without a successful Cursor::move_next"),
        }
    }

    /// Returns the value of the current entry.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is not positioned on an entry, i.e. if the last call to
    /// `move_next` did not return `true`.
    pub fn value(&self) -> &'a V {
        match self.current() {
            Some((_, value)) => value,
            None => panic!("Cursor::value called without a successful Cursor::move_next"),
        }
    }

    /// Moves the cursor back before the first entry.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = rbtree::Tree::new();
    /// tree.insert(1, "a");
    /// tree.insert(2, "b");
    ///
    /// let mut cursor = tree.cursor();
    /// while cursor.move_next() {}
    ///
    /// cursor.reset();
    /// assert!(cursor.move_next());
    /// assert_eq!(cursor.key(), &1);
    /// ```
    pub fn reset(&mut self) {
        self.walk.reset();
        self.current = None;
    }
}
