use crate::avl_tree::node::Node;
use crate::entry::Entry;
use log::{debug, trace};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

pub fn height<T, U>(tree: &Tree<T, U>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

// Lifts the right child of `node` into its place. `node` must have a right child.
fn rotate_left<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    let mut pivot = match node.right.take() {
        Some(pivot) => pivot,
        None => unreachable!(),
    };
    node.right = pivot.left.take();
    node.update();
    pivot.left = Some(node);
    pivot.update();
    pivot
}

// Lifts the left child of `node` into its place. `node` must have a left child.
fn rotate_right<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    let mut pivot = match node.left.take() {
        Some(pivot) => pivot,
        None => unreachable!(),
    };
    node.left = pivot.right.take();
    node.update();
    pivot.right = Some(node);
    pivot.update();
    pivot
}

/// The shape of a node whose subtree heights differ by more than one, named after the path from
/// the node to its tallest grandchild.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Imbalance {
    LeftLeft,
    LeftRight,
    RightRight,
    RightLeft,
}

fn imbalance<T, U>(node: &Node<T, U>) -> Option<Imbalance> {
    let child_balance = |child: &Tree<T, U>| child.as_ref().map_or(0, |child| child.balance());
    match node.balance() {
        factor if factor > 1 => match child_balance(&node.left) {
            child_factor if child_factor < 0 => Some(Imbalance::LeftRight),
            _ => Some(Imbalance::LeftLeft),
        },
        factor if factor < -1 => match child_balance(&node.right) {
            child_factor if child_factor > 0 => Some(Imbalance::RightLeft),
            _ => Some(Imbalance::RightRight),
        },
        _ => None,
    }
}

// Recomputes the height of the root of `tree` and restores the balance invariant with at most two
// rotations. Children must already be balanced with correct heights.
fn balance<T, U>(tree: &mut Tree<T, U>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };
    node.update();

    if let Some(case) = imbalance(&node) {
        debug!("rotating {:?} case with balance factor {}", case, node.balance());
        node = match case {
            Imbalance::LeftLeft => rotate_right(node),
            Imbalance::RightRight => rotate_left(node),
            Imbalance::LeftRight => {
                node.left = node.left.take().map(rotate_left);
                rotate_right(node)
            },
            Imbalance::RightLeft => {
                node.right = node.right.take().map(rotate_right);
                rotate_left(node)
            },
        };
    }

    *tree = Some(node);
}

// precondition: there exists a minimum node in the tree
fn remove_min<T, U>(tree: &mut Tree<T, U>) -> Box<Node<T, U>> {
    let has_left = tree.as_ref().map_or(false, |node| node.left.is_some());
    if has_left {
        let min = match tree {
            Some(ref mut node) => remove_min(&mut node.left),
            None => unreachable!(),
        };
        balance(tree);
        return min;
    }

    match tree.take() {
        Some(mut node) => {
            *tree = node.right.take();
            node
        },
        None => unreachable!(),
    }
}

// precondition: there exists a maximum node in the tree
fn remove_max<T, U>(tree: &mut Tree<T, U>) -> Box<Node<T, U>> {
    let has_right = tree.as_ref().map_or(false, |node| node.right.is_some());
    if has_right {
        let max = match tree {
            Some(ref mut node) => remove_max(&mut node.right),
            None => unreachable!(),
        };
        balance(tree);
        return max;
    }

    match tree.take() {
        Some(mut node) => {
            *tree = node.left.take();
            node
        },
        None => unreachable!(),
    }
}

fn combine_subtrees<T, U>(left_tree: Tree<T, U>, mut right_tree: Tree<T, U>) -> Tree<T, U> {
    trace!("replacing removed node with its in-order successor");
    let mut new_root = remove_min(&mut right_tree);
    new_root.left = left_tree;
    new_root.right = right_tree;
    Some(new_root)
}

pub fn insert<T, U>(tree: &mut Tree<T, U>, new_node: Node<T, U>) -> Option<Entry<T, U>>
where
    T: Ord,
{
    let node = match tree {
        Some(node) => node,
        None => {
            *tree = Some(Box::new(new_node));
            return None;
        },
    };

    let replaced = match new_node.entry.key.cmp(&node.entry.key) {
        Ordering::Less => insert(&mut node.left, new_node),
        Ordering::Greater => insert(&mut node.right, new_node),
        // heights are unchanged when only the entry is swapped
        Ordering::Equal => return Some(mem::replace(&mut node.entry, new_node.entry)),
    };
    balance(tree);
    replaced
}

pub fn remove<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Option<Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let ret = match tree.take() {
        Some(mut node) => match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => {
                let ret = remove(&mut node.left, key);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, key);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => {
                let Node {
                    entry, left, right, ..
                } = *node;
                match (left, right) {
                    (None, right) => *tree = right,
                    (left, None) => *tree = left,
                    (left, right) => *tree = combine_subtrees(left, right),
                }
                Some(entry)
            },
        },
        None => return None,
    };

    balance(tree);
    ret
}

pub fn take_min<T, U>(tree: &mut Tree<T, U>) -> Option<Entry<T, U>> {
    if tree.is_none() {
        return None;
    }
    let node = remove_min(tree);
    let Node { entry, .. } = *node;
    Some(entry)
}

pub fn take_max<T, U>(tree: &mut Tree<T, U>) -> Option<Entry<T, U>> {
    if tree.is_none() {
        return None;
    }
    let node = remove_max(tree);
    let Node { entry, .. } = *node;
    Some(entry)
}

pub fn is_balanced<T, U>(tree: &Tree<T, U>) -> bool {
    match tree {
        None => true,
        Some(ref node) => {
            node.balance().abs() <= 1 && is_balanced(&node.left) && is_balanced(&node.right)
        },
    }
}

pub fn get<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => get(&node.left, key),
            Ordering::Greater => get(&node.right, key),
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn get_mut<'a, T, U, V>(tree: &'a mut Tree<T, U>, key: &V) -> Option<&'a mut Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_mut().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => get_mut(&mut node.left, key),
            Ordering::Greater => get_mut(&mut node.right, key),
            Ordering::Equal => Some(&mut node.entry),
        }
    })
}

pub fn min<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.entry
    })
}

pub fn max<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.entry
    })
}

#[cfg(test)]
mod tests {
    use super::{balance, imbalance, Imbalance, Tree};
    use crate::avl_tree::node::Node;

    fn leaf(key: u32) -> Tree<u32, u32> {
        Some(Box::new(Node::new(key, key)))
    }

    fn branch(key: u32, left: Tree<u32, u32>, right: Tree<u32, u32>) -> Tree<u32, u32> {
        let mut node = Node::new(key, key);
        node.left = left;
        node.right = right;
        node.update();
        Some(Box::new(node))
    }

    fn keys(tree: &Tree<u32, u32>) -> Option<(u32, Option<u32>, Option<u32>)> {
        tree.as_ref().map(|node| {
            (
                node.entry.key,
                node.left.as_ref().map(|node| node.entry.key),
                node.right.as_ref().map(|node| node.entry.key),
            )
        })
    }

    fn case_of(tree: &Tree<u32, u32>) -> Option<Imbalance> {
        tree.as_ref().and_then(|node| imbalance(node))
    }

    #[test]
    fn test_balanced_shapes() {
        assert_eq!(case_of(&leaf(1)), None);
        assert_eq!(case_of(&branch(2, leaf(1), None)), None);
        assert_eq!(case_of(&branch(2, leaf(1), leaf(3))), None);
    }

    #[test]
    fn test_left_left() {
        let mut tree = branch(3, branch(2, leaf(1), None), None);
        assert_eq!(case_of(&tree), Some(Imbalance::LeftLeft));
        balance(&mut tree);
        assert_eq!(keys(&tree), Some((2, Some(1), Some(3))));
        assert_eq!(case_of(&tree), None);
    }

    #[test]
    fn test_left_right() {
        let mut tree = branch(3, branch(1, None, leaf(2)), None);
        assert_eq!(case_of(&tree), Some(Imbalance::LeftRight));
        balance(&mut tree);
        assert_eq!(keys(&tree), Some((2, Some(1), Some(3))));
    }

    #[test]
    fn test_right_right() {
        let mut tree = branch(1, None, branch(2, None, leaf(3)));
        assert_eq!(case_of(&tree), Some(Imbalance::RightRight));
        balance(&mut tree);
        assert_eq!(keys(&tree), Some((2, Some(1), Some(3))));
    }

    #[test]
    fn test_right_left() {
        let mut tree = branch(1, None, branch(3, leaf(2), None));
        assert_eq!(case_of(&tree), Some(Imbalance::RightLeft));
        balance(&mut tree);
        assert_eq!(keys(&tree), Some((2, Some(1), Some(3))));
    }

    #[test]
    fn test_even_child_uses_single_rotation() {
        // left child with equal subtree heights, as left behind by a removal on the right
        let mut tree = branch(4, branch(2, leaf(1), leaf(3)), None);
        assert_eq!(case_of(&tree), Some(Imbalance::LeftLeft));
        balance(&mut tree);
        assert_eq!(keys(&tree), Some((2, Some(1), Some(4))));
        assert_eq!(tree.as_ref().map(|node| node.height), Some(3));
    }
}
