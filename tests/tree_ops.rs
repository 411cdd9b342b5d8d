use avl_multiset::avl::AvlTree;

#[test]
fn insert_remove_contains_round_trip() {
    let mut tree = AvlTree::new();
    tree.insert_all([30, 15, 8, 1, 5, 10, 20, 35, 21, 3, 21, 40]);

    assert!(tree.contains(&30));
    tree.remove(&30);
    assert!(!tree.contains(&30));

    tree.remove(&20);
    assert!(tree.contains(&10));
    assert!(!tree.contains(&18));
    assert!(tree.contains(&40));
    assert!(!tree.contains(&2));
}

#[test]
fn in_order_is_sorted_and_keeps_duplicates() {
    let mut tree = AvlTree::new();
    tree.insert_all(["pear", "apple", "fig", "apple", "quince"]);

    let keys = tree.in_order();
    assert_eq!(keys, [&"apple", &"apple", &"fig", &"pear", &"quince"]);
    assert_eq!(tree.len(), 5);

    tree.remove(&"apple");
    assert!(tree.contains(&"apple"));
    tree.remove(&"apple");
    assert!(!tree.contains(&"apple"));
    assert_eq!(tree.len(), 3);
}

#[test]
fn final_shape_is_insertion_order_independent() {
    let mut ascending = AvlTree::new();
    ascending.insert_all(1..=64);

    let mut descending = AvlTree::new();
    descending.insert_all((1..=64).rev());

    assert_eq!(ascending.in_order(), descending.in_order());
    for key in 1..=64 {
        assert!(ascending.contains(&key));
        assert!(descending.contains(&key));
    }
}
