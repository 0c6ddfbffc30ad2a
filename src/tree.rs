//! A binary tree and its inorder traversal.
//!
//! A [`Tree`] is either empty (a [`Leaf`][Tree::Leaf]) or a [`Node`] holding a value and two
//! child trees. The tree doesn't have to be a search tree; any shape can be built with
//! [`Tree::node`]. For convenience [`Tree::insert`] and `collect` build a Binary Search Tree.
//!
//! # Examples
//!
//! ```
//! use cs101::tree::{inorder_traversal, Tree};
//!
//! //     1
//! //      \
//! //       2
//! //      /
//! //     3
//! let tree = Tree::node(1, Tree::new(), Tree::node(2, Tree::leaf(3), Tree::new()));
//! assert_eq!(inorder_traversal(&tree), vec![&1, &3, &2]);
//!
//! // Built as a search tree the traversal is sorted.
//! let tree: Tree<_> = vec![5, 3, 8, 1, 4].into_iter().collect();
//! assert_eq!(inorder_traversal(&tree), vec![&1, &3, &4, &5, &8]);
//! ```

use std::iter::FromIterator;
use std::mem;

/// Returns references to the values of `root` in left, root, right order.
pub fn inorder_traversal<T>(root: &Tree<T>) -> Vec<&T> {
    root.inorder().collect()
}

/// A binary tree.
///
/// Traversal, `height`, and drop walk the tree iteratively, but the derived `Debug` recurses, so
/// formatting a very deep (list shaped) tree can overflow the stack.
#[derive(Debug)]
pub enum Tree<T> {
    /// A marker for the empty pointer at the bottom of a subtree.
    Leaf,
    /// A `Node` that has a value and two children (which are both `Tree`s). This enum trivially
    /// wraps the [`Node`] struct.
    Node(Node<T>),
}

/// A `Node` has a value and always has two children although those children may be
/// [`Leaf`][Tree::Leaf]s.
#[derive(Debug)]
pub struct Node<T> {
    value: T,
    left: Box<Tree<T>>,
    right: Box<Tree<T>>,
}

impl<T> Node<T> {
    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The subtree to the left of this node.
    pub fn left(&self) -> &Tree<T> {
        &self.left
    }

    /// The subtree to the right of this node.
    pub fn right(&self) -> &Tree<T> {
        &self.right
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Leaf
    }

    /// Generates a tree with a single node holding `value`.
    pub fn leaf(value: T) -> Self {
        Self::node(value, Self::Leaf, Self::Leaf)
    }

    /// Generates a tree whose root holds `value` with the given subtrees as children.
    pub fn node(value: T, left: Self, right: Self) -> Self {
        Self::Node(Node {
            value,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Inserts `value` keeping the Binary Search Tree invariant, assuming the tree already
    /// satisfies it. Values equal to a node's value go to its right, so duplicates are kept and
    /// an inorder traversal sees them in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cs101::tree::{inorder_traversal, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(inorder_traversal(&tree), vec![&1, &2, &2]);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut cursor = self;
        while let Tree::Node(node) = cursor {
            cursor = if value < node.value {
                &mut *node.left
            } else {
                &mut *node.right
            };
        }

        *cursor = Self::leaf(value);
    }

    /// Returns an iterator over the values of this tree in left, root, right order.
    pub fn inorder(&self) -> Inorder<'_, T> {
        let mut inorder = Inorder { stack: Vec::new() };
        inorder.push_left_spine(self);
        inorder
    }

    /// Returns the root node, if any.
    pub fn root(&self) -> Option<&Node<T>> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => Some(n),
        }
    }

    /// Counts the nodes in this tree.
    pub fn len(&self) -> usize {
        self.inorder().count()
    }

    /// Whether this tree has no nodes.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    /// Gets the number of levels in this tree. An empty tree has a height of 0 and a single node
    /// has a height of 1.
    pub fn height(&self) -> usize {
        // Breadth first, one level at a time, so list shaped trees don't recurse deeply.
        let mut height = 0;
        let mut level: Vec<&Node<T>> = self.root().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|n| n.left.root().into_iter().chain(n.right.root()))
                .collect();
        }

        height
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert(value);
        }

        tree
    }
}

/// Dropping a `Box` based tree recursively overflows the stack for deep trees, so the children
/// are detached onto a heap allocated stack and dropped one node at a time.
impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        if let Self::Node(n) = self {
            stack.push(mem::take(&mut *n.left));
            stack.push(mem::take(&mut *n.right));
        }

        while let Some(mut tree) = stack.pop() {
            if let Self::Node(n) = &mut tree {
                stack.push(mem::take(&mut *n.left));
                stack.push(mem::take(&mut *n.right));
            }
            // `tree` only has `Leaf` children left when it drops here.
        }
    }
}

/// An inorder iterator over a [`Tree`]. See [`Tree::inorder`].
#[derive(Debug)]
pub struct Inorder<'a, T> {
    /// Nodes whose left subtree has been (or is being) visited but whose own value hasn't been
    /// yielded yet. The top of the stack is the next value.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Inorder<'a, T> {
    /// Pushes `tree`'s root, then its left child, and so on down to the leftmost node.
    fn push_left_spine(&mut self, mut tree: &'a Tree<T>) {
        while let Tree::Node(node) = tree {
            self.stack.push(node);
            tree = &node.left;
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);

        Some(&node.value)
    }
}

impl<'a, T> std::iter::FusedIterator for Inorder<'a, T> {}
