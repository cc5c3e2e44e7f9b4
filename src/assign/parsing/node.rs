//! Statement and expression trees.
//!
//! A node is either a leaf (a number or identifier spelling) or an interior node with
//! exactly two children (an operator, or `=` for a statement root). Children are fixed
//! when the parent is built, so trees are assembled bottom-up and never mutated.

use std::fmt;

/// Left-folded chains nest one level per operator, so every walk over a tree
/// (rendering, comparison, cloning and dropping) keeps its own work stack
/// instead of recursing.
#[derive(Debug)]
pub struct Node {
    label: String,
    children: Vec<Node>,
}

impl Node {
    pub fn leaf(label: impl Into<String>) -> Self {
        Node {
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn binary(label: impl Into<String>, left: Node, right: Node) -> Self {
        Node {
            label: label.into(),
            children: vec![left, right],
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of levels in the tree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            pending.extend(node.children.iter().map(|child| (child, level + 1)));
        }
        deepest
    }

    /// Total number of nodes, the root included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter());
        }
        count
    }

    /// Compact prefix form, e.g. `(= x (+ 1 2))`.
    pub fn to_sexpr(&self) -> String {
        let mut out = String::new();
        let mut pending = vec![Piece::Node(self)];
        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Text(text) => out.push_str(text),
                Piece::Node(node) if node.is_leaf() => out.push_str(&node.label),
                Piece::Node(node) => {
                    out.push('(');
                    out.push_str(&node.label);
                    pending.push(Piece::Text(")"));
                    for child in node.children.iter().rev() {
                        pending.push(Piece::Node(child));
                        pending.push(Piece::Text(" "));
                    }
                }
            }
        }
        out
    }

    /// One line per node, indented with one tab per level of depth.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        let mut pending = vec![(self, 0)];
        while let Some((node, level)) = pending.pop() {
            for _ in 0..level {
                out.push('\t');
            }
            out.push_str(&node.label);
            out.push('\n');
            pending.extend(node.children.iter().rev().map(|child| (child, level + 1)));
        }
        out
    }
}

/// Work item for walks that interleave nodes with fixed punctuation.
enum Piece<'a> {
    Node(&'a Node),
    Text(&'static str),
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((left, right)) = pending.pop() {
            if left.label != right.label || left.children.len() != right.children.len() {
                return false;
            }
            pending.extend(left.children.iter().zip(&right.children));
        }
        true
    }
}

impl Eq for Node {}

impl Clone for Node {
    fn clone(&self) -> Self {
        enum Visit<'a> {
            Enter(&'a Node),
            Build(&'a Node),
        }

        let mut pending = vec![Visit::Enter(self)];
        let mut built: Vec<Node> = Vec::new();
        while let Some(visit) = pending.pop() {
            match visit {
                Visit::Enter(node) => {
                    pending.push(Visit::Build(node));
                    pending.extend(node.children.iter().rev().map(Visit::Enter));
                }
                Visit::Build(node) => {
                    let children = built.split_off(built.len() - node.children.len());
                    built.push(Node {
                        label: node.label.clone(),
                        children,
                    });
                }
            }
        }
        built.pop().unwrap_or_else(|| Node::leaf(self.label.clone()))
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.outline())
    }
}
