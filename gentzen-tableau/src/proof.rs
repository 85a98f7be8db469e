/*! Defines [`ProofTree`], the record of the states a tableau passes through. */
use std::fmt;

/// Is a tree of sequent labels. Every node is labelled with the state of a tableau branch,
/// written as `positives --> negatives`; a node with two or more children marks a split of the
/// branch and a leaf whose branch closed carries the contradicting state.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ProofTree {
    pub(crate) label: String,
    pub(crate) children: Vec<ProofTree>,
}

impl ProofTree {
    /// Creates a tree with a single node, labelled `label`.
    pub fn new<S: Into<String>>(label: S) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Returns the label of the root.
    #[inline(always)]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the subtrees of the root.
    #[inline(always)]
    pub fn children(&self) -> &[ProofTree] {
        &self.children
    }

    /// Appends `child` to the children of the receiver and returns the node that stands for
    /// `child` in the receiver.
    ///
    /// **Note**: If `child` carries the same label as the receiver, no new node is created:
    /// the children of `child` are moved under the receiver and the receiver itself is returned.
    ///
    /// **Example**:
    /// ```rust
    /// use gentzen_tableau::ProofTree;
    ///
    /// let mut tree = ProofTree::new("P() --> Q()");
    /// tree.join(ProofTree::new("P() --> Q()"));
    /// assert_eq!(0, tree.children().len());
    ///
    /// tree.join(ProofTree::new("P(), Q() --> "));
    /// assert_eq!(1, tree.children().len());
    /// ```
    pub fn join(&mut self, child: ProofTree) -> &mut ProofTree {
        if self.label == child.label {
            self.children.extend(child.children);
            self
        } else {
            self.children.push(child);
            let last = self.children.len() - 1;
            &mut self.children[last]
        }
    }

    /// Returns the number of nodes in the tree.
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(ProofTree::len).sum::<usize>()
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(ProofTree::depth).max().unwrap_or(0)
    }

    /// Returns the leaves of the tree from left to right.
    pub fn leaves(&self) -> Vec<&ProofTree> {
        if self.children.is_empty() {
            vec![self]
        } else {
            self.children.iter().flat_map(ProofTree::leaves).collect()
        }
    }
}

// an indented outline, one node per line
impl fmt::Display for ProofTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        fn write_node(
            tree: &ProofTree,
            level: usize,
            f: &mut fmt::Formatter,
        ) -> Result<(), fmt::Error> {
            writeln!(f, "{}{}", "  ".repeat(level), tree.label)?;
            tree.children
                .iter()
                .try_for_each(|child| write_node(child, level + 1, f))
        }
        write_node(self, 0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProofTree {
        let mut tree = ProofTree::new(" --> P() ∨ Q()");
        let leaf = tree.join(ProofTree::new(" --> P(), Q()"));
        leaf.join(ProofTree::new("R() --> P()"));
        leaf.join(ProofTree::new("R() --> Q()"));
        tree
    }

    #[test]
    fn join_distinct_label() {
        let mut tree = ProofTree::new("a");
        let child = tree.join(ProofTree::new("b"));
        assert_eq!("b", child.label());
        child.join(ProofTree::new("c"));
        assert_eq!(3, tree.len());
        assert_eq!(3, tree.depth());
    }

    #[test]
    fn join_identical_label() {
        let mut tree = ProofTree::new("a");
        let mut child = ProofTree::new("a");
        child.join(ProofTree::new("b"));
        child.join(ProofTree::new("c"));

        let joined = tree.join(child);
        assert_eq!("a", joined.label());
        assert_eq!(3, tree.len());
        assert_eq!(
            vec!["b", "c"],
            tree.children().iter().map(|c| c.label()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn tree_shape() {
        let tree = sample();
        assert_eq!(4, tree.len());
        assert_eq!(3, tree.depth());
        assert_eq!(
            vec!["R() --> P()", "R() --> Q()"],
            tree.leaves().iter().map(|l| l.label()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn tree_to_string() {
        assert_eq!(
            " --> P() ∨ Q()\n   --> P(), Q()\n    R() --> P()\n    R() --> Q()\n",
            sample().to_string()
        );
    }
}
