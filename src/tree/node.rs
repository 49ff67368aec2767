use crate::Feature;
use crate::Label;
use crate::catalog::Record;
use serde::Serialize;

/// A decision tree node. Children are owned exclusively by their parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Node {
    /// Asks whether the item has `feature`.
    Branch {
        feature: Feature,
        yes: Box<Node>,
        no: Box<Node>,
    },
    /// Candidates that survived every question on the way here, in catalog order.
    Leaf { labels: Vec<Label> },
}

impl Node {
    pub fn leaf(labels: Vec<Label>) -> Self {
        Self::Leaf { labels }
    }
    pub fn branch(feature: impl Into<Feature>, yes: Node, no: Node) -> Self {
        Self::Branch {
            feature: feature.into(),
            yes: Box::new(yes),
            no: Box::new(no),
        }
    }
    /// Follows the record's own answers down to the leaf it lands in.
    pub fn locate(&self, record: &Record) -> &Node {
        let mut node = self;
        while let Self::Branch { feature, yes, no } = node {
            node = if record.flag(feature) { &**yes } else { &**no };
        }
        node
    }
    /// Longest root-to-leaf edge count.
    pub fn depth(&self) -> usize {
        self.fold(|_, depth| depth).into_iter().max().unwrap_or(0)
    }
    /// Total number of leaves.
    pub fn leaves(&self) -> usize {
        self.fold(|_, _| ()).len()
    }
    /// Total number of nodes, leaves included.
    pub fn size(&self) -> usize {
        2 * self.leaves() - 1
    }
    /// Pre-order visit of every leaf with its depth.
    fn fold<T>(&self, f: impl Fn(&[Label], usize) -> T) -> Vec<T> {
        let mut out = Vec::new();
        let mut stack = vec![(self, 0)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                Self::Leaf { labels } => out.push(f(labels, depth)),
                Self::Branch { yes, no, .. } => {
                    stack.push((&**no, depth + 1));
                    stack.push((&**yes, depth + 1));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::branch(
            "f1",
            Node::branch("f2", Node::leaf(vec!["C".into()]), Node::leaf(vec!["A".into()])),
            Node::leaf(vec!["B".into()]),
        )
    }

    #[test]
    fn shape() {
        let tree = sample();
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.leaves(), 3);
        assert_eq!(tree.size(), 5);
    }

    #[test]
    fn single_leaf_shape() {
        let tree = Node::leaf(vec![]);
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.size(), 1);
    }

    #[test]
    fn locate_follows_flags() {
        let tree = sample();
        let a = Record::new("A", [("f1", true), ("f2", false)]);
        let b = Record::new("B", [("f1", false), ("f2", true)]);
        assert_eq!(tree.locate(&a), &Node::leaf(vec!["A".into()]));
        assert_eq!(tree.locate(&b), &Node::leaf(vec!["B".into()]));
    }

    #[test]
    fn serialize_tags_variants() {
        let json = serde_json::to_value(Node::leaf(vec!["X".into()])).unwrap();
        assert_eq!(json, serde_json::json!({ "leaf": { "labels": ["X"] } }));
    }
}
