//! Diagnostic rendering of the tree structure.
//!
//! Strictly observational: one line per node with its kind tag, hex path, and
//! value, children indented beneath their hex edge byte. Meant for debugging
//! sessions and test failure dumps, not for machine consumption.

use std::fmt::{self, Write};

use crate::node::{Kind, Node};
use crate::tree::Tree;

impl<V: fmt::Debug> Tree<V> {
    /// Streams an indented rendering of the tree into `w`.
    pub fn pretty_print(&self, w: &mut dyn Write) -> fmt::Result {
        match self.root() {
            Some(root) => pretty_node(root, 0, w),
            None => writeln!(w, "(empty)"),
        }
    }
}

fn kind_tag<V>(node: &Node<V>) -> &'static str {
    match node.kind {
        Kind::Leaf => "[leaf]",
        Kind::Node4(_) => "[n4]",
        Kind::Node16(_) => "[n16]",
        Kind::Node48(_) => "[n48]",
        Kind::Node256(_) => "[n256]",
    }
}

fn write_path(path: &[u8], w: &mut dyn Write) -> fmt::Result {
    if path.is_empty() {
        return w.write_str("-");
    }
    w.write_str("0x")?;
    for b in path {
        write!(w, "{b:02X}")?;
    }
    Ok(())
}

fn pretty_node<V: fmt::Debug>(node: &Node<V>, indent: usize, w: &mut dyn Write) -> fmt::Result {
    write!(w, "{} ", kind_tag(node))?;
    write_path(node.path.as_bytes(), w)?;
    if let Some(v) = node.value() {
        write!(w, " value:{v:?}")?;
    }
    writeln!(w)?;
    for (edge, child) in node.children() {
        write!(w, "{:indent$}0x{edge:02X}: ", "", indent = indent + 2)?;
        pretty_node(child, indent + 8, w)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tree::Tree;

    #[test]
    fn renders_structure() {
        let mut tree = Tree::new();
        tree.put(b"aaa", 1);
        tree.put(b"aab", 2);
        let mut out = String::new();
        tree.pretty_print(&mut out).unwrap();
        assert!(out.starts_with("[n4] 0x6161"));
        assert!(out.contains("0x61: [leaf] - value:1"));
        assert!(out.contains("0x62: [leaf] - value:2"));
    }

    #[test]
    fn renders_empty_tree() {
        let tree = Tree::<u32>::new();
        let mut out = String::new();
        tree.pretty_print(&mut out).unwrap();
        assert_eq!(out, "(empty)\n");
    }
}
