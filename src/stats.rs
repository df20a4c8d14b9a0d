//! Node population counts, harvested by walking the tree.

use crate::node::{Kind, Node};

/// Per-kind node counts plus the number of stored keys.
///
/// Node kinds are a storage decision, so these counts are the only place the
/// grow/shrink machinery is observable. A tree whose keys have all been
/// deleted reports `Stats::default()`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub node4s: usize,
    pub node16s: usize,
    pub node48s: usize,
    pub node256s: usize,
    pub keys: usize,
}

pub(crate) fn collect<V>(node: &Node<V>, stats: &mut Stats) {
    match &node.kind {
        Kind::Leaf => {}
        Kind::Node4(_) => stats.node4s += 1,
        Kind::Node16(_) => stats.node16s += 1,
        Kind::Node48(_) => stats.node48s += 1,
        Kind::Node256(_) => stats.node256s += 1,
    }
    if node.has_value() {
        stats.keys += 1;
    }
    for (_, child) in node.children() {
        collect(child, stats);
    }
}
