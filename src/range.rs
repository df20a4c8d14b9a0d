//! Bound tracking for range walks.
//!
//! A range walk carries two of these comparators, one per bound. Each folds
//! in the spine bytes as the walk descends and tracks how the walked path
//! compares to its bound. While the walked bytes still match a prefix of the
//! bound only one edge byte can keep tracking it; every other edge settles
//! the comparison for the entire subtree, after which the remaining bound
//! bytes are irrelevant.

use std::cmp::Ordering;

use crate::node::Node;
use crate::tree::WalkState;

/// How the spine walked so far compares to one fixed bound key.
///
/// `state == Equal` means the walked bytes equal `rest`'s consumed prefix and
/// `rest` holds the unmatched remainder. Any diverging byte settles `state`
/// permanently. An open bound starts pre-settled: `Greater` for a missing
/// start (everything is past it), `Less` for a missing end (nothing reaches
/// it).
#[derive(Clone, Copy)]
pub(crate) struct BoundCmp<'a> {
    rest: &'a [u8],
    state: Ordering,
}

impl<'a> BoundCmp<'a> {
    pub(crate) fn start(bound: Option<&'a [u8]>) -> Self {
        match bound {
            Some(rest) => BoundCmp {
                rest,
                state: Ordering::Equal,
            },
            None => BoundCmp {
                rest: &[],
                state: Ordering::Greater,
            },
        }
    }

    pub(crate) fn end(bound: Option<&'a [u8]>) -> Self {
        match bound {
            Some(rest) => BoundCmp {
                rest,
                state: Ordering::Equal,
            },
            None => BoundCmp {
                rest: &[],
                state: Ordering::Less,
            },
        }
    }

    /// Folds the next spine bytes into the comparison.
    pub(crate) fn advance(&mut self, bytes: &[u8]) {
        if self.state != Ordering::Equal {
            return;
        }
        for &b in bytes {
            match self.rest.split_first() {
                // Walked past the end of the bound: any extension sorts after it.
                None => {
                    self.state = Ordering::Greater;
                    return;
                }
                Some((&r, tail)) => match b.cmp(&r) {
                    Ordering::Equal => self.rest = tail,
                    settled => {
                        self.state = settled;
                        return;
                    }
                },
            }
        }
    }

    /// Walked spine is at or past the bound. Against the start bound this
    /// admits emission; against the end bound it ends the walk.
    pub(crate) fn reached(&self) -> bool {
        match self.state {
            Ordering::Greater => true,
            Ordering::Equal => self.rest.is_empty(),
            Ordering::Less => false,
        }
    }

    /// Smallest edge byte under the current node worth descending: while the
    /// start bound is still being tracked, edges below its next byte lead
    /// only to keys before the range.
    pub(crate) fn min_edge(&self) -> u8 {
        match self.state {
            Ordering::Equal => self.rest.first().copied().unwrap_or(0),
            _ => 0,
        }
    }

    /// Largest edge byte worth descending: while the end bound is still being
    /// tracked, edges above its next byte lead only to keys past the range.
    pub(crate) fn max_edge(&self) -> u8 {
        match self.state {
            Ordering::Equal => self.rest.first().copied().unwrap_or(u8::MAX),
            _ => u8::MAX,
        }
    }
}

/// Pre-order walk restricted to `start <= key < end`, callbacks in ascending
/// key order. Returns `Stop` both on callback request and once the walked
/// spine reaches the end bound; children are visited in ascending edge order,
/// so the first out-of-range subtree ends the whole walk.
pub(crate) fn walk_range_recurse<V, F>(
    node: &Node<V>,
    prefix: &mut Vec<u8>,
    mut start: BoundCmp<'_>,
    mut end: BoundCmp<'_>,
    f: &mut F,
) -> WalkState
where
    F: FnMut(&[u8], &V) -> WalkState,
{
    start.advance(node.path.as_bytes());
    end.advance(node.path.as_bytes());
    if end.reached() {
        return WalkState::Stop;
    }

    let base = prefix.len();
    prefix.extend_from_slice(node.path.as_bytes());
    if start.reached() {
        if let Some(v) = node.value() {
            if f(prefix, v) == WalkState::Stop {
                prefix.truncate(base);
                return WalkState::Stop;
            }
        }
    }
    for (edge, child) in node.children_in(start.min_edge(), end.max_edge()) {
        let mut child_start = start;
        let mut child_end = end;
        child_start.advance(&[edge]);
        child_end.advance(&[edge]);
        prefix.push(edge);
        let state = walk_range_recurse(child, prefix, child_start, child_end, f);
        prefix.pop();
        if state == WalkState::Stop {
            prefix.truncate(base);
            return WalkState::Stop;
        }
    }
    prefix.truncate(base);
    WalkState::Continue
}
