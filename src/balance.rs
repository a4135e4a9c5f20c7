//! Red-black rebalancing after insertion and removal.
//!
//! Both fixups are loops: each iteration classifies the node under repair into one case,
//! carrying the relatives it looked at, and then acts on it. A case either finishes the
//! repair or hands it to a node one level closer to the root (or, after a rotation, to
//! the same node with new relatives).

use log::trace;
use super::node::{Arena, Color, Dir, Handle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Insert {
    /// The node is the root.
    Root,
    /// The node's parent is black.
    BlackParent,
    /// The node's parent and uncle are red.
    RedUncle { parent: Handle, uncle: Handle, grandparent: Handle },
    /// The uncle is black and the node sits on the grandparent's side of its parent.
    InnerGrandchild { parent: Handle, dir: Dir },
    /// The uncle is black and the node continues the direction of its parent.
    OuterGrandchild { parent: Handle, grandparent: Handle, dir: Dir },
}

fn classify_insert<K, V>(arena: &Arena<K, V>, node: Handle) -> Insert {
    let parent = match arena.parent(node) {
        None => return Insert::Root,
        Some(parent) => parent,
    };

    if !arena.is_red(Some(parent)) { return Insert::BlackParent; }

    let grandparent = arena.parent(parent).expect("a red node is never the root");
    let parent_dir = arena.dir_of(parent, grandparent);

    match arena.child(grandparent, parent_dir.opposite()) {
        Some(uncle) if arena.is_red(Some(uncle)) =>
            Insert::RedUncle { parent: parent, uncle: uncle, grandparent: grandparent },
        _ => {
            let dir = arena.dir_of(node, parent);
            if dir == parent_dir {
                Insert::OuterGrandchild { parent: parent, grandparent: grandparent, dir: dir }
            } else {
                Insert::InnerGrandchild { parent: parent, dir: parent_dir }
            }
        }
    }
}

/// Restores the red-black invariants after `node` was linked in as a red leaf.
pub fn rebalance_insert<K, V>(arena: &mut Arena<K, V>, mut node: Handle) {
    loop {
        let case = classify_insert(arena, node);
        trace!("insert fixup at {}: {:?}", node, case);

        match case {
            Insert::Root => {
                arena.set_color(node, Color::Black);
                return;
            }
            Insert::BlackParent => return,
            Insert::RedUncle { parent, uncle, grandparent } => {
                arena.set_color(parent, Color::Black);
                arena.set_color(uncle, Color::Black);
                arena.set_color(grandparent, Color::Red);
                node = grandparent;
            }
            Insert::InnerGrandchild { parent, dir } => {
                // straighten the path; the old parent becomes the outer grandchild
                arena.rotate(parent, dir);
                node = parent;
            }
            Insert::OuterGrandchild { parent, grandparent, dir } => {
                arena.set_color(parent, Color::Black);
                arena.set_color(grandparent, Color::Red);
                arena.rotate(grandparent, dir.opposite());
                return;
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Remove {
    /// The node is the root.
    Root,
    /// The sibling is red.
    RedSibling { parent: Handle, sibling: Handle, dir: Dir },
    /// Parent, sibling and both nephews are black.
    BlackFamily { parent: Handle, sibling: Handle },
    /// The parent is red; sibling and nephews are black.
    RedParent { parent: Handle, sibling: Handle },
    /// The sibling is black, the nephew nearest the node is red and the far one black.
    NearNephew { sibling: Handle, near: Handle, dir: Dir },
    /// The sibling is black and the nephew furthest from the node is red.
    FarNephew { parent: Handle, sibling: Handle, far: Handle, dir: Dir },
}

fn classify_remove<K, V>(arena: &Arena<K, V>, node: Handle) -> Remove {
    let parent = match arena.parent(node) {
        None => return Remove::Root,
        Some(parent) => parent,
    };

    let dir = arena.dir_of(node, parent);
    let sibling = arena.child(parent, dir.opposite())
        .expect("a black non-root node has a sibling");

    if arena.is_red(Some(sibling)) {
        return Remove::RedSibling { parent: parent, sibling: sibling, dir: dir };
    }

    if let Some(far) = arena.child(sibling, dir.opposite()) {
        if arena.is_red(Some(far)) {
            return Remove::FarNephew { parent: parent, sibling: sibling, far: far, dir: dir };
        }
    }

    if let Some(near) = arena.child(sibling, dir) {
        if arena.is_red(Some(near)) {
            return Remove::NearNephew { sibling: sibling, near: near, dir: dir };
        }
    }

    if arena.is_red(Some(parent)) {
        Remove::RedParent { parent: parent, sibling: sibling }
    } else {
        Remove::BlackFamily { parent: parent, sibling: sibling }
    }
}

/// Restores the red-black invariants for the removal of the black node `node`.
///
/// Runs before `node` is spliced out: the paths through `node` are about to lose one black
/// node, and the cases need `node`'s position to find its sibling.
pub fn rebalance_remove<K, V>(arena: &mut Arena<K, V>, mut node: Handle) {
    loop {
        let case = classify_remove(arena, node);
        trace!("remove fixup at {}: {:?}", node, case);

        match case {
            Remove::Root => return,
            Remove::RedSibling { parent, sibling, dir } => {
                arena.set_color(sibling, Color::Black);
                arena.set_color(parent, Color::Red);
                arena.rotate(parent, dir);
            }
            Remove::BlackFamily { parent, sibling } => {
                arena.set_color(sibling, Color::Red);
                node = parent;
            }
            Remove::RedParent { parent, sibling } => {
                arena.set_color(sibling, Color::Red);
                arena.set_color(parent, Color::Black);
                return;
            }
            Remove::NearNephew { sibling, near, dir } => {
                arena.set_color(sibling, Color::Red);
                arena.set_color(near, Color::Black);
                arena.rotate(sibling, dir.opposite());
            }
            Remove::FarNephew { parent, sibling, far, dir } => {
                let parent_color = arena.color(Some(parent));
                arena.set_color(sibling, parent_color);
                arena.set_color(parent, Color::Black);
                arena.set_color(far, Color::Black);
                arena.rotate(parent, dir);
                return;
            }
        }
    }
}
