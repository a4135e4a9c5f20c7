//! An ordered map based on a red-black tree.

use compare::{Compare, Natural};
use std::fmt::{self, Debug};
use std::hash::{self, Hash};
use std::iter;
use std::ops;
use super::channel::Channel;
use super::cursor::Cursor;
use super::node::{Arena, Branches, Dir, Walk};

/// An ordered map based on a red-black tree.
///
/// Nodes are kept in an arena and refer to each other by index, so the tree owns a single
/// allocation of nodes and is `Send` whenever its keys, values and comparator are.
///
/// The behavior of this map is undefined if a key's ordering relative to any other key changes
/// while the key is in the map. This is normally only possible through `Cell`, `RefCell`, or
/// unsafe code.
#[derive(Clone)]
pub struct Tree<K, V, C = Natural<K>> where C: Compare<K> {
    arena: Arena<K, V>,
    cmp: C,
}

impl<K, V> Tree<K, V> where K: Ord {
    /// Creates an empty tree ordered according to the natural order of its keys.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = rbtree::Tree::new();
    ///
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    /// tree.insert(3, "c");
    ///
    /// let mut it = tree.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { Tree::with_cmp(compare::natural()) }
}

impl<K, V, C> Tree<K, V, C> where C: Compare<K> {
    /// Creates an empty tree ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut tree = rbtree::Tree::with_cmp(natural().rev());
    ///
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    /// tree.insert(3, "c");
    ///
    /// let mut it = tree.iter();
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        Tree { arena: Arena::new(), cmp: cmp }
    }

    /// Checks if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = rbtree::Tree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(2, "b");
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.arena.root().is_none() }

    /// Returns the number of entries in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = rbtree::Tree::new();
    /// assert_eq!(tree.len(), 0);
    ///
    /// tree.insert(2, "b");
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.arena.len() }

    /// Returns a reference to the tree's comparator.
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all entries from the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = rbtree::Tree::new();
    ///
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    ///
    /// tree.clear();
    ///
    /// assert_eq!(tree.len(), 0);
    /// assert_eq!(tree.iter().next(), None);
    /// ```
    pub fn clear(&mut self) { self.arena.clear(); }

    /// Inserts an entry into the tree, returning the previous value, if any, associated
    /// with the key.
    ///
    /// An existing key keeps its node and only has its value replaced, so the tree is not
    /// rebalanced and its length does not change.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = rbtree::Tree::new();
    /// assert_eq!(tree.insert(1, "a"), None);
    /// assert_eq!(tree.get(&1), Some(&"a"));
    /// assert_eq!(tree.insert(1, "b"), Some("a"));
    /// assert_eq!(tree.get(&1), Some(&"b"));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.arena.insert(&self.cmp, key, value)
    }

    /// Removes and returns the entry whose key is equal to the given key, returning
    /// `None` if the tree does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = rbtree::Tree::new();
    ///
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    /// tree.insert(3, "c");
    ///
    /// assert_eq!(tree.remove(&1), Some((1, "a")));
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.get(&1), None);
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)> where C: Compare<Q, K> {
        let node = self.arena.find(&self.cmp, key)?;
        Some(self.arena.remove(node))
    }

    /// Checks if the tree contains the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = rbtree::Tree::new();
    /// assert!(!tree.contains_key(&1));
    /// tree.insert(1, "a");
    /// assert!(tree.contains_key(&1));
    /// ```
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, K> {
        self.arena.find(&self.cmp, key).is_some()
    }

    /// Returns a reference to the value associated with the given key, or `None` if the
    /// tree does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = rbtree::Tree::new();
    /// assert_eq!(tree.get(&1), None);
    /// tree.insert(1, "a");
    /// assert_eq!(tree.get(&1), Some(&"a"));
    /// ```
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V> where C: Compare<Q, K> {
        self.arena.find(&self.cmp, key).map(|node| self.arena.key_value(node).1)
    }

    /// Returns a mutable reference to the value associated with the given key, or `None`
    /// if the tree does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = rbtree::Tree::new();
    /// tree.insert(1, "a");
    ///
    /// if let Some(value) = tree.get_mut(&1) { *value = "b"; }
    ///
    /// assert_eq!(tree.get(&1), Some(&"b"));
    /// ```
    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V> where C: Compare<Q, K> {
        let node = self.arena.find(&self.cmp, key)?;
        Some(self.arena.key_value_mut(node).1)
    }

    /// Returns a reference to the tree's minimum key and a reference to its associated
    /// value, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = rbtree::Tree::new();
    /// assert_eq!(tree.min(), None);
    ///
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    /// tree.insert(3, "c");
    ///
    /// assert_eq!(tree.min(), Some((&1, &"a")));
    /// ```
    pub fn min(&self) -> Option<(&K, &V)> {
        self.arena.root().map(|root| self.arena.key_value(self.arena.extremum(root, Dir::Left)))
    }

    /// Returns a reference to the tree's maximum key and a reference to its associated
    /// value, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = rbtree::Tree::new();
    /// assert_eq!(tree.max(), None);
    ///
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    /// tree.insert(3, "c");
    ///
    /// assert_eq!(tree.max(), Some((&3, &"c")));
    /// ```
    pub fn max(&self) -> Option<(&K, &V)> {
        self.arena.root().map(|root| self.arena.key_value(self.arena.extremum(root, Dir::Right)))
    }

    /// Returns an iterator over the tree's entries with immutable references to the values.
    ///
    /// The iterator yields the entries in ascending order according to the tree's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = rbtree::Tree::new();
    ///
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    /// tree.insert(3, "c");
    ///
    /// let mut it = tree.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { arena: &self.arena, walk: Walk::new(self.arena.root()), len: self.len() }
    }

    /// Returns a cursor positioned before the tree's first entry.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = rbtree::Tree::new();
    ///
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    ///
    /// let mut cursor = tree.cursor();
    /// assert!(cursor.move_next());
    /// assert_eq!((cursor.key(), cursor.value()), (&1, &"a"));
    /// assert!(cursor.move_next());
    /// assert_eq!((cursor.key(), cursor.value()), (&2, &"b"));
    /// assert!(!cursor.move_next());
    /// ```
    pub fn cursor(&self) -> Cursor<'_, K, V> { Cursor::new(&self.arena) }

    /// Walks a snapshot of the tree on a worker thread, handing the entries over one at a
    /// time in ascending order.
    ///
    /// See [`Channel`](struct.Channel.html) for the handoff and cancellation contract.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = rbtree::Tree::new();
    ///
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    /// tree.insert(3, "c");
    ///
    /// let entries: Vec<_> = tree.iter_channel().collect();
    /// assert_eq!(entries, [(1, "a"), (2, "b"), (3, "c")]);
    /// ```
    pub fn iter_channel(&self) -> Channel<K, V>
        where K: Clone + Send + 'static, V: Clone + Send + 'static {

        Channel::spawn(self.arena.clone())
    }

    /// Like `iter_channel`, but moves the tree to the worker instead of copying it.
    pub fn into_channel(self) -> Channel<K, V> where K: Send + 'static, V: Send + 'static {
        Channel::spawn(self.arena)
    }

    #[cfg(test)]
    pub(crate) fn arena(&self) -> &Arena<K, V> { &self.arena }
}

impl<K, V, C> Debug for Tree<K, V, C> where K: Debug, V: Debug, C: Compare<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;

        let mut it = self.iter();

        if let Some((k, v)) = it.next() {
            write!(f, "{:?}: {:?}", k, v)?;
            for (k, v) in it { write!(f, ", {:?}: {:?}", k, v)?; }
        }

        write!(f, "}}")
    }
}

impl<K, V, C> Default for Tree<K, V, C> where C: Compare<K> + Default {
    fn default() -> Self { Tree::with_cmp(Default::default()) }
}

impl<K, V, C> Extend<(K, V)> for Tree<K, V, C> where C: Compare<K> {
    fn extend<I: IntoIterator<Item=(K, V)>>(&mut self, it: I) {
        for (k, v) in it { self.insert(k, v); }
    }
}

impl<K, V, C> iter::FromIterator<(K, V)> for Tree<K, V, C> where C: Compare<K> + Default {
    fn from_iter<I: IntoIterator<Item=(K, V)>>(it: I) -> Self {
        let mut tree: Self = Default::default();
        tree.extend(it);
        tree
    }
}

impl<K, V, C> Hash for Tree<K, V, C> where K: Hash, V: Hash, C: Compare<K> {
    fn hash<H: hash::Hasher>(&self, h: &mut H) {
        for e in self.iter() { e.hash(h); }
    }
}

impl<'a, K, V, C, Q: ?Sized> ops::Index<&'a Q> for Tree<K, V, C>
    where C: Compare<K> + Compare<Q, K> {

    type Output = V;
    fn index(&self, key: &Q) -> &V { self.get(key).expect("key not found") }
}

impl<'a, K, V, C> IntoIterator for &'a Tree<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Iter<'a, K, V> { self.iter() }
}

impl<K, V, C> IntoIterator for Tree<K, V, C> where C: Compare<K> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;
    fn into_iter(self) -> IntoIter<K, V> { IntoIter::new(self.arena) }
}

impl<K, V, C> PartialEq for Tree<K, V, C> where V: PartialEq, C: Compare<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(l, r)| {
            self.cmp.compares_eq(l.0, r.0) && l.1 == r.1
        })
    }
}

impl<K, V, C> Eq for Tree<K, V, C> where V: Eq, C: Compare<K> {}

/// An iterator that consumes the tree.
///
/// Entries are moved out of the arena one at a time as the walk reaches them.
#[derive(Clone)]
pub struct IntoIter<K, V> {
    branches: Branches,
    entries: Vec<Option<(K, V)>>,
    walk: Walk,
    len: usize,
}

impl<K, V> IntoIter<K, V> {
    pub(crate) fn new(arena: Arena<K, V>) -> Self {
        let len = arena.len();
        let (root, branches, entries) = arena.into_parts();
        IntoIter { branches: branches, entries: entries, walk: Walk::new(root), len: len }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        let node = self.walk.next(&self.branches)?;
        self.len -= 1;
        self.entries[node].take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.len, Some(self.len)) }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

/// An iterator over the tree's entries with immutable references to the values.
pub struct Iter<'a, K: 'a, V: 'a> {
    arena: &'a Arena<K, V>,
    walk: Walk,
    len: usize,
}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Iter<'a, K, V> {
        Iter { arena: self.arena, walk: self.walk.clone(), len: self.len }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        let arena = self.arena;
        let node = self.walk.next(arena)?;
        self.len -= 1;
        Some(arena.key_value(node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.len, Some(self.len)) }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}
