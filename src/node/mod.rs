mod iter;


use compare::Compare;
use std::cmp::Ordering::*;
use std::mem;
use super::balance;

pub use self::iter::{Branches, Walk};

/// The index of a node in an `Arena`.
pub type Handle = usize;

pub type Link = Option<Handle>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// The side of a parent on which a child hangs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dir {
    Left,
    Right,
}

impl Dir {
    pub fn opposite(self) -> Dir {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

#[derive(Clone)]
pub struct Node<K, V> {
    key: K,
    value: V,
    color: Color,
    parent: Link,
    left: Link,
    right: Link,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V, parent: Link) -> Self {
        Node { key: key, value: value, color: Color::Red, parent: parent, left: None, right: None }
    }

    fn child(&self, dir: Dir) -> Link {
        match dir {
            Dir::Left => self.left,
            Dir::Right => self.right,
        }
    }

    fn child_mut(&mut self, dir: Dir) -> &mut Link {
        match dir {
            Dir::Left => &mut self.left,
            Dir::Right => &mut self.right,
        }
    }
}

/// The nodes of a tree together with its root link.
///
/// Nodes refer to each other by handle. A node's children are owned through the tree
/// structure; its parent link is a back-reference used by rotations and by the fixups to
/// find siblings, uncles and grandparents. The arena never holds an unlinked node: removal
/// moves the last node into the freed slot and re-points the links that referred to it.
#[derive(Clone)]
pub struct Arena<K, V> {
    nodes: Vec<Node<K, V>>,
    root: Link,
}

impl<K, V> Arena<K, V> {
    pub fn new() -> Self { Arena { nodes: Vec::new(), root: None } }

    pub fn len(&self) -> usize { self.nodes.len() }

    pub fn root(&self) -> Link { self.root }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    pub fn key_value(&self, node: Handle) -> (&K, &V) {
        let node = &self.nodes[node];
        (&node.key, &node.value)
    }

    pub fn key_value_mut(&mut self, node: Handle) -> (&K, &mut V) {
        let node = &mut self.nodes[node];
        (&node.key, &mut node.value)
    }

    pub fn parent(&self, node: Handle) -> Link { self.nodes[node].parent }

    pub fn child(&self, node: Handle, dir: Dir) -> Link { self.nodes[node].child(dir) }

    pub fn left(&self, node: Handle) -> Link { self.nodes[node].left }

    pub fn right(&self, node: Handle) -> Link { self.nodes[node].right }

    /// Returns the color of the given link. Nil links are black.
    pub fn color(&self, link: Link) -> Color {
        link.map_or(Color::Black, |node| self.nodes[node].color)
    }

    pub fn is_red(&self, link: Link) -> bool { self.color(link) == Color::Red }

    pub fn set_color(&mut self, node: Handle, color: Color) { self.nodes[node].color = color; }

    /// Returns the side of `parent` on which `node` hangs.
    pub fn dir_of(&self, node: Handle, parent: Handle) -> Dir {
        if self.nodes[parent].left == Some(node) { Dir::Left } else { Dir::Right }
    }

    fn set_child(&mut self, node: Handle, dir: Dir, child: Link) {
        *self.nodes[node].child_mut(dir) = child;
        if let Some(child) = child { self.nodes[child].parent = Some(node); }
    }

    /// Puts `with` in the slot of `node`'s parent (or the root) that holds `node`.
    ///
    /// `node`'s own parent link is left as is.
    pub fn replace(&mut self, node: Handle, with: Link) {
        let parent = self.nodes[node].parent;

        match parent {
            None => self.root = with,
            Some(parent) => {
                let dir = self.dir_of(node, parent);
                *self.nodes[parent].child_mut(dir) = with;
            }
        }

        if let Some(with) = with { self.nodes[with].parent = parent; }
    }

    /// Rotates `node` down in the given direction; its child on the opposite side takes
    /// its place.
    pub fn rotate(&mut self, node: Handle, dir: Dir) {
        let pivot = self.child(node, dir.opposite()).expect("rotation requires a pivot child");
        self.replace(node, Some(pivot));
        let inner = self.child(pivot, dir);
        self.set_child(node, dir.opposite(), inner);
        self.set_child(pivot, dir, Some(node));
    }

    /// Returns the furthest node in the given direction from `node`.
    pub fn extremum(&self, mut node: Handle, dir: Dir) -> Handle {
        while let Some(child) = self.child(node, dir) { node = child; }
        node
    }

    pub fn find<C, Q: ?Sized>(&self, cmp: &C, key: &Q) -> Link where C: Compare<Q, K> {
        let mut link = self.root;

        while let Some(node) = link {
            let node = &self.nodes[node];
            link = match cmp.compare(key, &node.key) {
                Equal => return link,
                Less => node.left,
                Greater => node.right,
            };
        }

        None
    }

    pub fn insert<C>(&mut self, cmp: &C, key: K, value: V) -> Option<V> where C: Compare<K> {
        let mut parent = None;
        let mut dir = Dir::Left;
        let mut link = self.root;

        while let Some(handle) = link {
            let node = &mut self.nodes[handle];
            dir = match cmp.compare(&key, &node.key) {
                Equal => return Some(mem::replace(&mut node.value, value)),
                Less => Dir::Left,
                Greater => Dir::Right,
            };
            parent = Some(handle);
            link = node.child(dir);
        }

        let node = self.nodes.len();
        self.nodes.push(Node::new(key, value, parent));

        match parent {
            None => self.root = Some(node),
            Some(parent) => *self.nodes[parent].child_mut(dir) = Some(node),
        }

        balance::rebalance_insert(self, node);
        None
    }

    /// Removes the entry held by `node` and returns it.
    ///
    /// A node with two children trades entries with its in-order predecessor, which is then
    /// spliced out in its place.
    pub fn remove(&mut self, mut node: Handle) -> (K, V) {
        if let (Some(left), Some(_)) = (self.left(node), self.right(node)) {
            let pred = self.extremum(left, Dir::Right);
            self.swap_entries(node, pred);
            node = pred;
        }

        let child = self.left(node).or(self.right(node));

        // the fixup must see the node where it still hangs
        if self.color(Some(node)) == Color::Black { balance::rebalance_remove(self, node); }

        self.replace(node, child);

        if self.parent(node).is_none() {
            if let Some(child) = child { self.set_color(child, Color::Black); }
        }

        self.free(node)
    }

    fn swap_entries(&mut self, a: Handle, b: Handle) {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.nodes.split_at_mut(hi);
        let (x, y) = (&mut head[lo], &mut tail[0]);
        mem::swap(&mut x.key, &mut y.key);
        mem::swap(&mut x.value, &mut y.value);
    }

    /// Drops an unlinked node from the arena, moving the last node into its slot.
    fn free(&mut self, node: Handle) -> (K, V) {
        let last = self.nodes.len() - 1;
        let Node { key, value, .. } = self.nodes.swap_remove(node);

        if node != last {
            let (parent, left, right) = {
                let moved = &self.nodes[node];
                (moved.parent, moved.left, moved.right)
            };

            match parent {
                None => self.root = Some(node),
                Some(parent) => {
                    let dir = self.dir_of(last, parent);
                    *self.nodes[parent].child_mut(dir) = Some(node);
                }
            }

            for child in [left, right].into_iter().flatten() {
                self.nodes[child].parent = Some(node);
            }
        }

        (key, value)
    }

    /// Splits the arena into its link structure and its entries, indexed by handle.
    pub fn into_parts(self) -> (Link, Branches, Vec<Option<(K, V)>>) {
        let mut branches = Vec::with_capacity(self.nodes.len());
        let mut entries = Vec::with_capacity(self.nodes.len());

        for node in self.nodes {
            branches.push((node.left, node.right));
            entries.push(Some((node.key, node.value)));
        }

        (self.root, Branches::new(branches), entries)
    }
}
