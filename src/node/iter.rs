use super::{Arena, Handle, Link};

/// Read access to the child links of a tree's nodes.
pub trait Links {
    fn left(&self, node: Handle) -> Link;
    fn right(&self, node: Handle) -> Link;
}

impl<K, V> Links for Arena<K, V> {
    fn left(&self, node: Handle) -> Link { Arena::left(self, node) }
    fn right(&self, node: Handle) -> Link { Arena::right(self, node) }
}

/// The child links of a tree whose entries have been moved out of its arena.
#[derive(Clone)]
pub struct Branches(Vec<(Link, Link)>);

impl Branches {
    pub fn new(branches: Vec<(Link, Link)>) -> Branches { Branches(branches) }
}

impl Links for Branches {
    fn left(&self, node: Handle) -> Link { self.0[node].0 }
    fn right(&self, node: Handle) -> Link { self.0[node].1 }
}

/// An in-order walk driven by an explicit stack of ancestors.
///
/// The walk stores no reference to the tree; each step is handed the links to follow, so
/// the same walk serves borrowed, consuming and threaded traversals.
#[derive(Clone, Debug)]
pub struct Walk {
    root: Link,
    cursor: Link,
    stack: Vec<Handle>,
}

impl Walk {
    pub fn new(root: Link) -> Walk { Walk { root: root, cursor: root, stack: vec![] } }

    /// Returns the next node in order, or `None` once the walk is exhausted.
    pub fn next<L: ?Sized>(&mut self, links: &L) -> Option<Handle> where L: Links {
        while let Some(node) = self.cursor {
            self.stack.push(node);
            self.cursor = links.left(node);
        }

        let node = self.stack.pop()?;
        self.cursor = links.right(node);
        Some(node)
    }

    /// Restarts the walk at the root it was created with.
    pub fn reset(&mut self) {
        self.cursor = self.root;
        self.stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{Branches, Walk};

    //     1
    //    / \
    //   0   3
    //      /
    //     2
    fn branches() -> Branches {
        Branches::new(vec![(None, None), (Some(0), Some(3)), (None, None), (Some(2), None)])
    }

    #[test]
    fn visits_in_order() {
        let branches = branches();
        let mut walk = Walk::new(Some(1));
        let mut seen = vec![];
        while let Some(node) = walk.next(&branches) { seen.push(node); }
        assert_eq!(seen, [0, 1, 2, 3]);
    }

    #[test]
    fn stays_exhausted() {
        let branches = branches();
        let mut walk = Walk::new(Some(1));
        while walk.next(&branches).is_some() {}
        assert_eq!(walk.next(&branches), None);
        assert_eq!(walk.next(&branches), None);
    }

    #[test]
    fn reset_restarts() {
        let branches = branches();
        let mut walk = Walk::new(Some(1));
        assert_eq!(walk.next(&branches), Some(0));
        assert_eq!(walk.next(&branches), Some(1));
        walk.reset();
        assert_eq!(walk.next(&branches), Some(0));
    }

    #[test]
    fn empty() {
        let mut walk = Walk::new(None);
        assert_eq!(walk.next(&Branches::new(vec![])), None);
    }
}
