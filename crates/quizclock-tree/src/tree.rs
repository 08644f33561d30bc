//! Binary search tree used by the walk exercise.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

/// Largest `k` accepted by [`Tree::new`]; `10 * MAX_K` still fits in `i64`.
pub const MAX_K: i64 = i64::MAX / 10;

/// A binary search tree of integers. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    root: Option<Box<Node>>,
}

/// One node: a value with optional left and right subtrees.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    left: Option<Box<Node>>,
    value: i64,
    right: Option<Box<Node>>,
}

impl Node {
    fn leaf(value: i64) -> Self {
        Self {
            left: None,
            value,
            right: None,
        }
    }
}

impl Tree {
    /// A randomly shaped tree holding `k, 2k, ..., 10k`.
    ///
    /// Different calls with the same `k` give differently shaped trees
    /// with identical in-order sequences. Returns `None` when `|k|` exceeds
    /// [`MAX_K`].
    pub fn new<R: Rng + ?Sized>(k: i64, rng: &mut R) -> Option<Self> {
        let mut values = (1..=10)
            .map(|i| k.checked_mul(i))
            .collect::<Option<Vec<i64>>>()?;
        values.shuffle(rng);
        Some(Self::from_values(values))
    }

    /// Build a tree by inserting `values` in the given order.
    pub fn from_values<I: IntoIterator<Item = i64>>(values: I) -> Self {
        let mut tree = Self::default();
        for v in values {
            tree.insert(v);
        }
        tree
    }

    /// Insert `value`; smaller values go left, equal or larger go right.
    pub fn insert(&mut self, value: i64) {
        insert_into(&mut self.root, value);
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// In-order iterator over the tree's values.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }
}

fn insert_into(slot: &mut Option<Box<Node>>, value: i64) {
    match slot {
        None => *slot = Some(Box::new(Node::leaf(value))),
        Some(node) if value < node.value => insert_into(&mut node.left, value),
        Some(node) => insert_into(&mut node.right, value),
    }
}

/// In-order traversal driven by an explicit stack.
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn push_left(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(node.value)
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = i64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        if let Some(left) = &self.left {
            write!(f, "{left} ")?;
        }
        write!(f, "{}", self.value)?;
        if let Some(right) = &self.right {
            write!(f, " {right}")?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Some(node) => fmt::Display::fmt(node, f),
            None => f.write_str("()"),
        }
    }
}
