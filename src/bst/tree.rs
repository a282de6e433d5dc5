use crate::bst::node::Node;
use crate::entry::Entry;
use log::trace;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

// Nothing here recurses: a tree built from sorted keys is as tall as it has keys, so every walk
// keeps its position in a cursor or an explicit stack.

pub fn height<T, U>(tree: &Tree<T, U>) -> usize {
    let mut height = 0;
    let mut level: Vec<&Node<T, U>> = tree.iter().map(|node| &**node).collect();
    while !level.is_empty() {
        height += 1;
        level = level
            .into_iter()
            .flat_map(|node| node.left.iter().chain(node.right.iter()))
            .map(|node| &**node)
            .collect();
    }
    height
}

/// Releases every node of the tree without recursing into the children.
pub fn clear<T, U>(tree: &mut Tree<T, U>) {
    let mut stack: Vec<Box<Node<T, U>>> = tree.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

// Returns the slot holding `key`, or the empty slot where `key` belongs.
fn find_slot<'a, T, U, V>(tree: &'a mut Tree<T, U>, key: &V) -> &'a mut Tree<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    loop {
        let ordering = curr.as_ref().map(|node| key.cmp(node.entry.key.borrow()));
        curr = match ordering {
            Some(Ordering::Less) => match curr {
                Some(node) => &mut node.left,
                None => unreachable!(),
            },
            Some(Ordering::Greater) => match curr {
                Some(node) => &mut node.right,
                None => unreachable!(),
            },
            _ => return curr,
        };
    }
}

// precondition: there exists a minimum node in the tree
fn remove_min<T, U>(tree: &mut Tree<T, U>) -> Box<Node<T, U>> {
    let mut curr = tree;
    while curr.as_ref().map_or(false, |node| node.left.is_some()) {
        curr = match curr {
            Some(node) => &mut node.left,
            None => unreachable!(),
        };
    }

    match curr.take() {
        Some(mut node) => {
            *curr = node.right.take();
            node
        },
        None => unreachable!(),
    }
}

// precondition: there exists a maximum node in the tree
fn remove_max<T, U>(tree: &mut Tree<T, U>) -> Box<Node<T, U>> {
    let mut curr = tree;
    while curr.as_ref().map_or(false, |node| node.right.is_some()) {
        curr = match curr {
            Some(node) => &mut node.right,
            None => unreachable!(),
        };
    }

    match curr.take() {
        Some(mut node) => {
            *curr = node.left.take();
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
    let slot = find_slot(tree, &new_node.entry.key);
    match slot {
        Some(node) => Some(mem::replace(&mut node.entry, new_node.entry)),
        None => {
            *slot = Some(Box::new(new_node));
            None
        },
    }
}

pub fn remove<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Option<Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let slot = find_slot(tree, key);
    let node = slot.take()?;
    let Node { entry, left, right } = *node;
    *slot = match (left, right) {
        (None, right) => right,
        (left, None) => left,
        (left, right) => combine_subtrees(left, right),
    };
    Some(entry)
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

pub fn get<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    while let Some(ref node) = *curr {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return Some(&node.entry),
        }
    }
    None
}

pub fn get_mut<'a, T, U, V>(tree: &'a mut Tree<T, U>, key: &V) -> Option<&'a mut Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    find_slot(tree, key).as_mut().map(|node| &mut node.entry)
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
