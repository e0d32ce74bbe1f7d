//! # Layer 4: Recursive Nodes
//!
//! A [`Node`] is a [`ShapeBox`] plus an ordered list of child nodes. Children
//! are owned, so a tree can never contain a cycle.
//!
//! ```
//! use core::fmt;
//! use tola_erase::{Format, Node, Shape};
//!
//! #[derive(Clone, Shape)]
//! struct Letter(char);
//!
//! impl Format for Letter {
//!     fn format(&self) -> String { self.0.to_string() }
//! }
//!
//! impl fmt::Display for Letter {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
//! }
//!
//! let mut root = Node::new(Letter('a'));
//! root.push_shape(Letter('b')).push_shape(Letter('c'));
//! root.push_shape(Letter('d'));
//!
//! assert_eq!(root.format(), "abcd");
//! assert_eq!(root.node_count(), 4);
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::capability::Shape;
use crate::handle::ShapeBox;

#[derive(Clone, Debug)]
pub struct Node {
    shape: ShapeBox,
    branches: Vec<Node>,
}

impl Node {
    pub fn new<T: Shape>(value: T) -> Self {
        Self::from(ShapeBox::new(value))
    }

    /// Append a child and return it.
    pub fn push(&mut self, child: impl Into<Node>) -> &mut Node {
        let child = child.into();
        log::trace!(
            "`{}` gains branch `{}` ({} nodes)",
            self.shape.type_name(),
            child.shape.type_name(),
            child.node_count()
        );
        let index = self.branches.len();
        self.branches.push(child);
        &mut self.branches[index]
    }

    pub fn push_shape<T: Shape>(&mut self, value: T) -> &mut Node {
        self.push(Node::new(value))
    }

    pub fn shape(&self) -> &ShapeBox {
        &self.shape
    }

    pub fn shape_mut(&mut self) -> &mut ShapeBox {
        &mut self.shape
    }

    pub fn branches(&self) -> &[Node] {
        &self.branches
    }

    pub fn branches_mut(&mut self) -> &mut Vec<Node> {
        &mut self.branches
    }

    pub fn into_shape(self) -> ShapeBox {
        self.shape
    }

    /// Own format followed by the format of every branch, depth first.
    pub fn format(&self) -> String {
        let mut out = self.shape.format();
        for branch in &self.branches {
            out.push_str(&branch.format());
        }
        out
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// Pre-order: a node, then each of its branches in insertion order.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: alloc::vec![self] }
    }

    pub fn of_type<T: Shape>(&self) -> impl Iterator<Item = &Node> {
        self.iter().filter(|node| node.is::<T>())
    }

    /// Every node in the subtree holding a `T`, in pre-order.
    pub fn collect_all<T: Shape>(&self) -> Vec<&Node> {
        let found: Vec<&Node> = self.of_type::<T>().collect();
        log::trace!("collected {} `{}`", found.len(), core::any::type_name::<T>());
        found
    }

    /// Visit every `T` in the subtree, in pre-order, with mutable access.
    pub fn for_each_of_type_mut<T: Shape, F: FnMut(&mut T)>(&mut self, mut f: F) {
        self.visit_mut(&mut f);
    }

    fn visit_mut<T: Shape, F: FnMut(&mut T)>(&mut self, f: &mut F) {
        if let Some(value) = self.shape.downcast_mut::<T>() {
            f(value);
        }
        for branch in &mut self.branches {
            branch.visit_mut(f);
        }
    }

    pub fn node_count(&self) -> usize {
        1 + self.branches.iter().map(Node::node_count).sum::<usize>()
    }

    // ========================================================================
    // Own value
    // ========================================================================

    pub fn is<T: Shape>(&self) -> bool {
        self.shape.is::<T>()
    }

    pub fn downcast_ref<T: Shape>(&self) -> Option<&T> {
        self.shape.downcast_ref::<T>()
    }

    pub fn calculate(&self) -> i32 {
        self.shape.calculate()
    }

    pub fn serialize(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.shape.serialize(out)
    }

    pub fn draw(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.shape.draw(out)
    }

    pub fn print(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.shape.print(out)
    }
}

impl From<ShapeBox> for Node {
    fn from(shape: ShapeBox) -> Self {
        Self { shape, branches: Vec::new() }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.shape, f)
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = &'a Node;
    type IntoIter = PreOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order iterator over a [`Node`] subtree.
pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.branches.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Format;
    use alloc::string::ToString;

    #[derive(Clone)]
    struct Tag(&'static str);

    impl Format for Tag {
        fn format(&self) -> String {
            String::from(self.0)
        }
    }

    impl fmt::Display for Tag {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.0)
        }
    }

    impl Shape for Tag {
        fn profile() -> crate::Profile<Self> {
            crate::resolve!(Tag)
        }
    }

    fn sample() -> Node {
        let mut root = Node::new(Tag("1"));
        let left = root.push_shape(Tag("2"));
        left.push_shape(Tag("3"));
        left.push_shape(Tag("4"));
        root.push_shape(Tag("5"));
        root
    }

    #[test]
    fn test_pre_order() {
        let root = sample();
        let order: Vec<&str> = root.iter().map(|node| node.downcast_ref::<Tag>().unwrap().0).collect();
        assert_eq!(order, ["1", "2", "3", "4", "5"]);
        assert_eq!(root.format(), "12345");
        assert_eq!(root.node_count(), 5);
    }

    #[test]
    fn test_push_returns_child() {
        let mut root = Node::new(Tag("r"));
        root.push_shape(Tag("c")).push_shape(Tag("g"));
        assert_eq!(root.branches().len(), 1);
        assert_eq!(root.branches()[0].branches().len(), 1);
        assert_eq!(root.format(), "rcg");
    }

    #[test]
    fn test_own_operations_do_not_recurse() {
        let root = sample();
        let mut out = String::new();
        root.print(&mut out).unwrap();
        assert_eq!(out, "1");
        assert_eq!(root.to_string(), "1");
    }
}
