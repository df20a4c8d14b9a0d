//! # BART - a byte-keyed adaptive radix tree
//!
//! An ordered map from arbitrary byte-string keys to values, built as an
//! adaptive radix tree (ART): inner nodes come in four capacity classes
//! (4, 16, 48, and 256 children) and move between them as fan-out changes,
//! shared prefixes are compressed onto the nodes, and lone keys stay single
//! leaves until another key collides with them. Point lookups, ordered
//! walks, and range walks all cost `O(k)` in the key length `k`.
//!
//! ## Quick start
//!
//! ```rust
//! use bart::{Tree, WalkState};
//!
//! let mut tree = Tree::new();
//! tree.put(b"romane", 1);
//! tree.put(b"romanus", 2);
//! tree.put(b"romulus", 3);
//!
//! assert_eq!(tree.get(b"romanus"), Some(&2));
//! assert_eq!(tree.get(b"roman"), None);
//!
//! // Ordered traversal, with early termination under caller control.
//! let mut first_two = Vec::new();
//! tree.walk(|key, value| {
//!     first_two.push((key.to_vec(), *value));
//!     if first_two.len() == 2 { WalkState::Stop } else { WalkState::Continue }
//! });
//! assert_eq!(first_two.len(), 2);
//!
//! // Half-open range walks: start inclusive, end exclusive.
//! let mut in_range = Vec::new();
//! tree.walk_range(Some(b"romane"), Some(b"romulus"), |key, _| {
//!     in_range.push(key.to_vec());
//!     WalkState::Continue
//! });
//! assert_eq!(in_range, vec![b"romane".to_vec(), b"romanus".to_vec()]);
//! ```
//!
//! Keys may be empty and may contain any byte value; ordering is plain
//! lexicographic byte order. Values are opaque to the tree.
//!
//! A `Tree` is a single-owner structure: share it behind a lock if multiple
//! threads need it. Walk callbacks must not mutate the tree (the borrow
//! checker enforces this).

mod mapping;
mod node;
mod path;
mod pretty;
mod range;
mod stats;
mod tree;
mod utils;

pub use stats::Stats;
pub use tree::{Tree, WalkState};
