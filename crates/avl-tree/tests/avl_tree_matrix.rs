use avl_tree::{
    assert_avl_tree, delete_node, delete_tree, find, height, in_order, insert, len, pre_order,
    Link, Node,
};

fn build(keys: &[i32]) -> Link {
    keys.iter().fold(None, |root, &k| insert(root, k))
}

fn root_key(root: &Link) -> Option<i32> {
    root.as_deref().map(Node::key)
}

#[test]
fn right_right_insert_matrix() {
    let root = build(&[10, 20, 30]);
    let node = root.as_deref().unwrap();
    assert_eq!(node.key(), 20);
    assert_eq!(node.height(), 2);
    assert_eq!(node.left().map(|n| (n.key(), n.height())), Some((10, 1)));
    assert_eq!(node.right().map(|n| (n.key(), n.height())), Some((30, 1)));
    assert_avl_tree(&root).unwrap();
}

#[test]
fn left_left_insert_matrix() {
    let root = build(&[30, 20, 10]);
    assert_eq!(root_key(&root), Some(20));
    assert_eq!(pre_order(&root), vec![20, 10, 30]);
    assert_eq!(height(&root), 2);
    assert_avl_tree(&root).unwrap();
}

#[test]
fn double_rotation_insert_matrix() {
    // left-right at the root
    let root = build(&[30, 10, 20]);
    assert_eq!(pre_order(&root), vec![20, 10, 30]);

    // right-left at the root
    let root = build(&[10, 30, 20]);
    assert_eq!(pre_order(&root), vec![20, 10, 30]);

    let root = build(&[10, 20, 30, 40, 50, 25]);
    assert_eq!(root_key(&root), Some(30));
    assert_eq!(pre_order(&root), vec![30, 20, 10, 25, 40, 50]);
    assert_avl_tree(&root).unwrap();
}

#[test]
fn delete_two_children_matrix() {
    let root = build(&[20, 10, 30]);
    let root = delete_node(root, 20);
    let node = root.as_deref().unwrap();
    assert_eq!(node.key(), 30);
    assert_eq!(node.left().map(Node::key), Some(10));
    assert!(node.right().is_none());
    assert_eq!(node.height(), 2);
    assert_eq!(node.balance(), 1);
    assert_avl_tree(&root).unwrap();
}

#[test]
fn delete_case_selection_matrix() {
    // Heavy child balanced: single rotation.
    let root = delete_node(build(&[20, 10, 30, 5, 15]), 30);
    assert_eq!(pre_order(&root), vec![10, 5, 20, 15]);
    assert_avl_tree(&root).unwrap();

    let root = delete_node(build(&[20, 10, 30, 25, 35]), 10);
    assert_eq!(pre_order(&root), vec![30, 20, 25, 35]);
    assert_avl_tree(&root).unwrap();

    // Heavy child leaning inward: double rotation.
    let root = delete_node(build(&[20, 10, 30, 15]), 30);
    assert_eq!(pre_order(&root), vec![15, 10, 20]);
    assert_avl_tree(&root).unwrap();

    let root = delete_node(build(&[20, 10, 30, 25]), 10);
    assert_eq!(pre_order(&root), vec![25, 20, 30]);
    assert_avl_tree(&root).unwrap();
}

#[test]
fn delete_rebalances_every_ancestor_matrix() {
    let root = build(&[8, 5, 11, 3, 7, 10, 12, 2, 4, 6, 9, 1]);
    assert_eq!(pre_order(&root), vec![8, 5, 3, 2, 1, 4, 7, 6, 11, 10, 9, 12]);
    assert_eq!(height(&root), 5);

    // Rotates at 11, then again at the root.
    let root = delete_node(root, 12);
    assert_eq!(pre_order(&root), vec![5, 3, 2, 1, 4, 8, 7, 6, 10, 9, 11]);
    assert_eq!(height(&root), 4);
    assert_avl_tree(&root).unwrap();
}

#[test]
fn ladder_insert_delete_matrix() {
    let mut root: Link = None;
    for i in 0..300 {
        root = insert(root, i);
        assert_avl_tree(&root).unwrap();
    }
    assert_eq!(len(&root), 300);

    for i in (0..300).step_by(3) {
        root = delete_node(root, i);
        assert_avl_tree(&root).unwrap();
    }
    assert_eq!(len(&root), 200);

    for i in 0..300 {
        assert_eq!(find(&root, i), i % 3 != 0, "key {i}");
    }

    for i in (0..300).rev() {
        root = delete_node(root, i);
        assert_avl_tree(&root).unwrap();
    }
    assert_eq!(root, None);
}

#[test]
fn noop_operations_matrix() {
    let root = build(&[50, 30, 70, 20, 40, 60, 80, 35]);

    let again = insert(root.clone(), 40);
    assert_eq!(again, root);

    let missing = delete_node(root.clone(), 45);
    assert_eq!(missing, root);

    assert_eq!(delete_node(None, 1), None);
}

#[test]
fn negative_and_extreme_keys_matrix() {
    let keys = [i32::MIN, -1, 0, 1, i32::MAX, -500, 500];
    let root = build(&keys);
    assert_eq!(in_order(&root), vec![i32::MIN, -500, -1, 0, 1, 500, i32::MAX]);
    assert!(find(&root, i32::MIN));
    assert!(find(&root, i32::MAX));
    assert_avl_tree(&root).unwrap();
}

#[test]
fn delete_tree_matrix() {
    let root = build(&(1..=64).collect::<Vec<_>>());
    assert_eq!(height(&root), 7);
    assert_eq!(delete_tree(root), 64);
}
