//! An ordered map based on a red-black tree.
//!
//! `Tree` keeps its entries sorted by key and rebalances itself on every insertion and
//! removal, so lookups and updates take `O(log n)` time. Entries can be traversed in order
//! with a standard iterator (`Tree::iter`), a rewindable cursor (`Tree::cursor`) or from a
//! worker thread over a channel (`Tree::iter_channel`).
//!
//! # Examples
//!
//! ```
//! let mut tree = rbtree::Tree::new();
//!
//! tree.insert(2, "Two");
//! tree.insert(0, "Zero");
//! tree.insert(3, "Three");
//! tree.insert(1, "One");
//!
//! assert_eq!(tree.get(&2), Some(&"Two"));
//! assert_eq!(tree.remove(&2), Some((2, "Two")));
//! assert_eq!(tree.get(&2), None);
//!
//! let values: Vec<_> = tree.iter().map(|e| *e.1).collect();
//! assert_eq!(values, ["Zero", "One", "Three"]);
//! ```

mod balance;
mod channel;
mod cursor;
mod node;
pub mod tree;

#[cfg(feature = "quickcheck")]
mod arbitrary;

#[cfg(feature = "ordered_iter")]
mod ordered;

pub use channel::Channel;
pub use cursor::Cursor;
pub use tree::Tree;
