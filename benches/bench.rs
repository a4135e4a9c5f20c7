use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rbtree::Tree;

fn insert_rand(c: &mut Criterion, n: usize) {
    c.bench_function(&format!("insert_rand_{}", n), |b| {
        let mut tree = Tree::new();
        let mut rng = StdRng::seed_from_u64(0);

        for _ in 0..n {
            let i = rng.gen::<usize>() % n;
            tree.insert(i, i);
        }

        b.iter(|| {
            let k = rng.gen::<usize>() % n;
            tree.insert(k, k);
            tree.remove(&k);
        });
    });
}

fn insert_seq(c: &mut Criterion, n: usize) {
    c.bench_function(&format!("insert_seq_{}", n), |b| {
        let mut tree = Tree::new();
        for i in 0..n { tree.insert(i * 2, i * 2); }

        let mut i = 1;
        b.iter(|| {
            tree.insert(i, i);
            tree.remove(&i);
            i = (i + 2) % n;
        });
    });
}

fn find_rand(c: &mut Criterion, n: usize) {
    c.bench_function(&format!("find_rand_{}", n), |b| {
        let mut tree = Tree::new();
        let mut rng = StdRng::seed_from_u64(0);
        let mut keys: Vec<_> = (0..n).map(|_| rng.gen::<usize>() % n).collect();

        for &k in &keys { tree.insert(k, k); }

        keys.shuffle(&mut rng);

        let mut i = 0;
        b.iter(|| {
            let t = tree.get(&keys[i]);
            i = (i + 1) % n;
            black_box(t);
        });
    });
}

fn iter(c: &mut Criterion, n: usize) {
    c.bench_function(&format!("iter_{}", n), |b| {
        let mut tree = Tree::<u32, u32>::new();
        let mut rng = StdRng::seed_from_u64(0);

        for _ in 0..n { tree.insert(rng.gen(), rng.gen()); }

        b.iter(|| {
            for entry in &tree { black_box(entry); }
        });
    });
}

fn drain(c: &mut Criterion, n: usize) {
    c.bench_function(&format!("drain_{}", n), |b| {
        let mut rng = StdRng::seed_from_u64(0);
        let mut keys: Vec<_> = (0..n).collect();
        keys.shuffle(&mut rng);
        let tree: Tree<_, _> = keys.iter().map(|&k| (k, k)).collect();
        keys.shuffle(&mut rng);

        b.iter_batched(|| tree.clone(), |mut tree| {
            for k in &keys { tree.remove(k); }
            tree
        }, BatchSize::SmallInput);
    });
}

fn benches(c: &mut Criterion) {
    insert_rand(c, 100);
    insert_rand(c, 10_000);
    insert_seq(c, 100);
    insert_seq(c, 10_000);
    find_rand(c, 100);
    find_rand(c, 10_000);
    iter(c, 1000);
    iter(c, 100_000);
    drain(c, 10_000);
}

criterion_group!(bench, benches);
criterion_main!(bench);
