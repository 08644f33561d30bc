//! quizclock-tree — concurrent in-order walks over binary search trees.
//!
//! [`walk`] streams a tree's values in order over a channel; [`same`] runs
//! two walks side by side and reports whether they produce the same
//! sequence.

pub mod tree;
pub mod walk;

pub use tree::{Tree, MAX_K};
pub use walk::{same, spawn_walk, walk};
