use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rbtree::Tree;

const NAMES: [&str; 10] = ["Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine"];

fn numbers(keys: &[usize]) -> Tree<usize, &'static str> {
    let mut tree = Tree::new();
    for &key in keys { tree.insert(key, NAMES[key]); }
    tree
}

#[test]
fn sequential_inserts() {
    let tree = numbers(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(tree.len(), 10);
    assert_eq!(tree.get(&5), Some(&"Five"));

    for key in 0..10 { assert_eq!(tree.get(&key), Some(&NAMES[key])); }

    let values: Vec<_> = tree.iter().map(|e| *e.1).collect();
    assert_eq!(values, NAMES);
}

#[test]
fn shuffled_inserts() {
    let tree = numbers(&[2, 0, 3, 1]);

    let mut cursor = tree.cursor();
    let mut values = vec![];
    while cursor.move_next() { values.push(*cursor.value()); }
    assert_eq!(values, ["Zero", "One", "Two", "Three"]);
}

#[test]
fn search() {
    let tree = numbers(&[0, 1, 2, 3]);
    assert_eq!(tree.get(&0), Some(&"Zero"));
    assert_eq!(tree.get(&3), Some(&"Three"));
    assert_eq!(tree.get(&9), None);
}

#[test]
fn remove() {
    let mut tree = numbers(&[0, 1, 2, 3]);
    assert!(tree.remove(&2).is_some());
    assert_eq!(tree.get(&2), None);
    assert_eq!(tree.get(&0), Some(&"Zero"));
    assert_eq!(tree.get(&1), Some(&"One"));
    assert_eq!(tree.get(&3), Some(&"Three"));
    assert_eq!(tree.len(), 3);
}

#[test]
fn remove_absent() {
    let mut tree = numbers(&[0, 1, 2, 3]);
    let before = tree.clone();
    assert_eq!(tree.remove(&7), None);
    assert_eq!(tree.len(), 4);
    assert_eq!(tree, before);
}

#[test]
fn overwrite() {
    let mut tree = Tree::new();
    assert_eq!(tree.insert(1, "One"), None);
    assert_eq!(tree.insert(1, "Uno"), Some("One"));
    assert_eq!(tree.get(&1), Some(&"Uno"));
    assert_eq!(tree.len(), 1);
}

#[test]
fn random_inserts() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut expected = vec![];
    let mut tree = Tree::new();

    for i in 0..100 {
        let key = rng.gen_range(0..1000);
        if !tree.contains_key(&key) {
            tree.insert(key, i);
            expected.push(key);
        }
    }

    expected.sort();
    let keys: Vec<_> = tree.iter().map(|e| *e.0).collect();
    assert_eq!(keys, expected);
}

#[test]
fn random_removes() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut expected = vec![];
    let mut tree = Tree::new();

    for i in 0..100 {
        let key = rng.gen_range(0..1000);
        if tree.insert(key, i).is_none() { expected.push(key); }
    }

    expected.sort();

    let mut i = 0;
    while i < expected.len() {
        if rng.gen_bool(0.5) {
            assert!(tree.remove(&expected[i]).is_some());
            expected.remove(i);
        } else {
            i += 1;
        }
    }

    let keys: Vec<_> = tree.iter().map(|e| *e.0).collect();
    assert_eq!(keys, expected);
    assert_eq!(tree.len(), expected.len());
}

#[test]
fn drain_in_random_order() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut keys: Vec<u32> = (0..1000).collect();
    keys.shuffle(&mut rng);

    let mut tree: Tree<_, _> = keys.iter().map(|&key| (key, key * 2)).collect();
    assert_eq!(tree.len(), 1000);

    keys.shuffle(&mut rng);
    for key in &keys {
        assert_eq!(tree.remove(key), Some((*key, key * 2)));
        assert!(!tree.contains_key(key));
    }

    assert_eq!(tree.len(), 0);
    assert!(tree.is_empty());
    assert_eq!(tree.iter().next(), None);
    assert!(!tree.cursor().move_next());
}

#[test]
fn reuse_after_drain() {
    let mut tree = numbers(&[3, 1, 2]);
    for key in 1..4 { tree.remove(&key); }
    assert!(tree.is_empty());

    tree.insert(5, "Five");
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.min(), Some((&5, &"Five")));
}
