//! Property tests over randomly shaped trees.

use quickcheck_macros::quickcheck;
use twig_dom::{DomTree, ElementData, NodeId};

/// Build a tree from a byte script: `0` closes the current element, odd
/// bytes append a leaf, other bytes open an element and descend.
fn build(script: &[u8]) -> DomTree {
    let mut tree = DomTree::new();
    let mut stack = vec![NodeId::ROOT];
    for &op in script {
        let current = *stack.last().unwrap_or(&NodeId::ROOT);
        match op {
            0 => {
                if stack.len() > 1 {
                    let _ = stack.pop();
                }
            }
            op if op % 2 == 1 => {
                let leaf = ElementData::new(format!("leaf{}", op % 5));
                let _ = tree.append_element(current, leaf);
            }
            op => {
                let node = ElementData::new(format!("node{}", op % 3));
                if let Some(id) = tree.append_element(current, node) {
                    stack.push(id);
                }
            }
        }
    }
    tree
}

#[quickcheck]
fn prop_sibling_links_mirror_children(script: Vec<u8>) -> bool {
    let tree = build(&script);
    (0..tree.len()).map(NodeId).all(|id| {
        let children = tree.children(id);
        let first_ok = children
            .first()
            .is_none_or(|&c| tree.prev_sibling(c).is_none());
        let last_ok = children
            .last()
            .is_none_or(|&c| tree.next_sibling(c).is_none());
        let pairs_ok = children.windows(2).all(|pair| {
            tree.next_sibling(pair[0]) == Some(pair[1])
                && tree.prev_sibling(pair[1]) == Some(pair[0])
        });
        let parents_ok = children.iter().all(|&c| tree.parent(c) == Some(id));
        first_ok && last_ok && pairs_ok && parents_ok
    })
}

#[quickcheck]
fn prop_depth_first_visits_every_element_once(script: Vec<u8>) -> bool {
    let tree = build(&script);
    let mut seen: Vec<NodeId> = tree.depth_first().map(|(id, _)| id).collect();
    seen.sort();
    let expected: Vec<NodeId> = (1..tree.len()).map(NodeId).collect();
    seen == expected
}

#[quickcheck]
fn prop_walk_depth_matches_ancestor_count(script: Vec<u8>) -> bool {
    let tree = build(&script);
    tree.depth_first()
        .all(|(id, depth)| tree.depth(id) == Some(depth))
}

#[quickcheck]
fn prop_find_by_tag_name_is_ordered_subsequence(script: Vec<u8>) -> bool {
    let tree = build(&script);
    let order: Vec<NodeId> = tree.depth_first().map(|(id, _)| id).collect();
    let found = tree.find_by_tag_name("leaf1");
    let expected: Vec<NodeId> = order
        .into_iter()
        .filter(|&id| tree.tag_name(id) == Some("leaf1"))
        .collect();
    found == expected && tree.first_by_tag_name("leaf1") == expected.first().copied()
}
