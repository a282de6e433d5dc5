const NUM_OF_OPERATIONS: usize = 20_000;
const KEY_SPACE: u32 = 2_000;

macro_rules! bst_map_tests {
    ($($module_name:ident: $type_name:ident$(,)*)*) => {
        $(
            mod $module_name {
                use bst_maps::$module_name::$type_name;
                use bst_maps::{Error, OrderedMap};
                use rand::Rng;
                use std::collections::BTreeMap;
                use super::{KEY_SPACE, NUM_OF_OPERATIONS};

                #[test]
                fn int_test_map() {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut map = $type_name::new();
                    let mut expected = BTreeMap::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.gen_range(0, KEY_SPACE);
                        let val = rng.next_u32();

                        match rng.gen_range(0, 4) {
                            0 | 1 => {
                                assert_eq!(
                                    map.insert(key, val).map(|pair| pair.1),
                                    expected.insert(key, val),
                                );
                            },
                            2 => {
                                assert_eq!(
                                    map.remove(&key),
                                    expected.remove(&key).map(|val| (key, val)),
                                );
                            },
                            _ => {
                                let old_value = expected.get(&key).cloned();
                                match map.set(&key, val) {
                                    Ok(value) => {
                                        assert_eq!(Some(value), old_value);
                                        expected.insert(key, val);
                                    },
                                    Err(Error::KeyNotFound) => assert_eq!(old_value, None),
                                    Err(err) => panic!("unexpected error: {}", err),
                                }
                            },
                        }

                        assert_eq!(map.len(), expected.len());
                    }

                    assert!(map.is_bst());
                    assert_eq!(map.min(), expected.keys().next());
                    assert_eq!(map.max(), expected.keys().next_back());
                    assert_eq!(
                        map.iter().collect::<Vec<(&u32, &u32)>>(),
                        expected.iter().collect::<Vec<(&u32, &u32)>>(),
                    );

                    for key in 0..KEY_SPACE {
                        assert_eq!(map.get(&key), expected.get(&key));
                        assert_eq!(map.contains_key(&key), expected.contains_key(&key));
                    }
                }

                #[test]
                fn int_test_drain() {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([2, 2, 2, 2]);
                    let mut map = $type_name::new();
                    let mut expected = Vec::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.next_u32();
                        if map.insert(key, key).is_none() {
                            expected.push(key);
                        }
                    }
                    expected.sort();

                    let mut front = 0;
                    let mut back = expected.len();
                    while front < back {
                        if rng.gen::<bool>() {
                            assert_eq!(map.remove_min(), Some((expected[front], expected[front])));
                            front += 1;
                        } else {
                            back -= 1;
                            assert_eq!(map.remove_max(), Some((expected[back], expected[back])));
                        }
                        assert_eq!(map.len(), back - front);
                    }
                    assert!(map.is_empty());
                }

                #[test]
                fn int_test_ordered_map() {
                    fn count<M: OrderedMap<u32, u32>>(map: &mut M, keys: &[u32]) {
                        for key in keys {
                            if map.contains_key(key) {
                                let count = *map.get(key).unwrap();
                                map.set(key, count + 1).unwrap();
                            } else {
                                map.insert(*key, 1);
                            }
                        }
                    }

                    let mut map = $type_name::new();
                    count(&mut map, &[5, 3, 5, 8, 3, 5]);
                    assert_eq!(OrderedMap::len(&map), 3);
                    assert_eq!(
                        map.into_iter().collect::<Vec<(u32, u32)>>(),
                        vec![(3, 2), (5, 3), (8, 1)],
                    );
                }
            }
        )*
    }
}

bst_map_tests!(bst: BstMap, avl_tree: AvlMap);

mod avl_tree_balance {
    use bst_maps::avl_tree::AvlMap;
    use bst_maps::bst::BstMap;
    use rand::Rng;

    #[test]
    fn int_test_balanced_after_every_operation() {
        let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([3, 3, 3, 3]);
        let mut map = AvlMap::new();

        for _ in 0..5_000 {
            let key = rng.gen_range(0, 500u32);
            if rng.gen::<bool>() {
                map.insert(key, key);
            } else {
                map.remove(&key);
            }
            assert!(map.is_balanced());
            assert!(map.is_bst());
        }
    }

    #[test]
    fn int_test_sorted_insert_height() {
        let mut avl = AvlMap::new();
        let mut bst = BstMap::new();
        for key in 0..1_000 {
            avl.insert(key, key);
            bst.insert(key, key);
        }

        assert_eq!(bst.height(), 1_000);
        // an avl tree with n nodes has height below 1.44 * log2(n + 2)
        assert!(avl.height() <= 14);
        assert!(avl.is_balanced());
    }
}
