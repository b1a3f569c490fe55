use avl_tree::AvlTree;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

fn seeds() -> [u64; 8] {
    [
        0x5eed_c0de_u64,
        0x0000_0000_0000_0001_u64,
        0x0000_0000_00c0_ffee_u64,
        0x0123_4567_89ab_cdef_u64,
        0x1357_9bdf_2468_ace0_u64,
        0x89ab_cdef_0123_4567_u64,
        0xfedc_ba98_7654_3210_u64,
        0xa5a5_5a5a_dead_beef_u64,
    ]
}

#[test]
fn seeded_insert_delete_ladder() {
    for seed in seeds() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        let mut tree = AvlTree::new();
        let mut model: Vec<i64> = Vec::new();

        for step in 0..2_000 {
            let key = rng.gen_range(0..400);
            if rng.gen_bool(0.55) {
                tree.insert(key);
                model.push(key);
            } else {
                let pos = model.iter().position(|&k| k == key);
                assert_eq!(
                    tree.delete(&key),
                    pos.is_some(),
                    "delete result mismatch seed={seed} step={step}"
                );
                if let Some(pos) = pos {
                    model.swap_remove(pos);
                }
            }
            if let Err(e) = tree.assert_valid() {
                panic!("seed={seed} step={step}: {e}");
            }
        }

        model.sort_unstable();
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), model, "seed={seed}");
    }
}

#[test]
fn seeded_drain_to_empty() {
    for seed in seeds() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        let mut tree = AvlTree::new();
        let mut keys: Vec<u32> = (0..500).map(|_| rng.gen()).collect();
        for &k in &keys {
            tree.insert(k);
        }

        while !keys.is_empty() {
            let i = rng.gen_range(0..keys.len());
            let k = keys.swap_remove(i);
            assert!(tree.delete(&k), "seed={seed} key={k}");
            tree.assert_valid().unwrap();
        }

        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
    }
}
