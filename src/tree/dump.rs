use super::Node;

/// Pre-order rendering of a whole tree for debugging.
///
/// Each node gets a hierarchical number: the root is `0`, a yes-child
/// appends `.1` and a no-child appends `.2` to its parent's number.
/// Indentation is two spaces per level.
pub struct Dump<'a>(&'a Node);

impl Node {
    pub fn dump(&self) -> Dump<'_> {
        Dump(self)
    }
}

impl std::fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut stack = vec![(self.0, 0usize, String::from("0"))];
        while let Some((node, depth, number)) = stack.pop() {
            let indent = "  ".repeat(depth);
            match node {
                Node::Branch { feature, yes, no } => {
                    writeln!(f, "{}{} {}?", indent, number, feature)?;
                    stack.push((&**no, depth + 1, format!("{}.2", number)));
                    stack.push((&**yes, depth + 1, format!("{}.1", number)));
                }
                Node::Leaf { labels } => {
                    writeln!(f, "{}{} [{}]", indent, number, labels.join(", "))?;
                }
            }
        }
        Ok(())
    }
}
