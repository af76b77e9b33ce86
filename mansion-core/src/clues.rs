//! Collected clues, kept in alphabetical order.
//!
//! [`ClueIndex`] is an unbalanced binary search tree keyed on the clue text.
//! Text that compares strictly less than a node goes left; anything else,
//! including an exact duplicate, goes right. Duplicates therefore pile up along
//! the right side of their first occurrence and come back out next to each
//! other during in-order traversal.

use tracing::debug;

#[derive(Debug, Clone)]
struct ClueNode {
    text: String,
    left: Option<Box<ClueNode>>,
    right: Option<Box<ClueNode>>,
}

impl ClueNode {
    fn new(text: String) -> Self {
        Self {
            text,
            left: None,
            right: None,
        }
    }
}

/// Binary search tree of clue texts.
#[derive(Debug, Clone, Default)]
pub struct ClueIndex {
    root: Option<Box<ClueNode>>,
    len: usize,
}

impl ClueIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `text` in the tree. Never fails and never rebalances.
    pub fn insert(&mut self, text: impl Into<String>) {
        let text = text.into();
        let mut slot = &mut self.root;
        let mut depth = 0;

        while let Some(node) = slot {
            slot = if text < node.text {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }

        debug!(clue = %text, depth, "indexed clue");
        *slot = Some(Box::new(ClueNode::new(text)));
        self.len += 1;
    }

    /// Clue texts in ascending order.
    ///
    /// Each call walks the tree afresh.
    pub fn in_order(&self) -> InOrder<'_> {
        InOrder::new(self.root.as_deref())
    }

    /// Whether a clue with exactly this text has been indexed.
    pub fn contains(&self, text: &str) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if text == node.text {
                return true;
            }
            current = if text < node.text.as_str() {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }
        false
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&ClueNode, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        deepest
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

impl<'a> IntoIterator for &'a ClueIndex {
    type Item = &'a str;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

impl<S: Into<String>> Extend<S> for ClueIndex {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for text in iter {
            self.insert(text);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for ClueIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = ClueIndex::new();
        index.extend(iter);
        index
    }
}

/// In-order walk over a [`ClueIndex`], driven by an explicit stack.
#[derive(Debug, Clone)]
pub struct InOrder<'a> {
    stack: Vec<&'a ClueNode>,
}

impl<'a> InOrder<'a> {
    fn new(root: Option<&'a ClueNode>) -> Self {
        let mut walk = Self { stack: Vec::new() };
        walk.push_left_spine(root);
        walk
    }

    fn push_left_spine(&mut self, mut node: Option<&'a ClueNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.text)
    }
}
