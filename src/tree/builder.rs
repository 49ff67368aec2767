use super::Node;
use super::best_split;
use super::partition;
use crate::Feature;
use crate::Label;
use crate::catalog::Catalog;
use crate::catalog::Record;

/// Pending work on the build stack.
enum Task<'r> {
    /// Decide what node covers these records given these remaining features.
    Expand(Vec<&'r Record>, Vec<Feature>),
    /// Both children of this feature are finished; join them.
    Join(Feature),
}

/// Builds the decision tree bottom-up.
///
/// A node becomes a leaf when no features remain, when at most one record
/// reaches it, or when its best feature puts every record on the same side.
/// Otherwise it branches on [`best_split`] and each side continues without
/// that feature. Feature lists are per branch, so a feature consumed on one
/// path is still available on its sibling.
pub fn build(records: &[Record], features: &[Feature]) -> Node {
    let mut tasks = vec![Task::Expand(records.iter().collect(), features.to_vec())];
    let mut done = Vec::<Node>::new();
    while let Some(task) = tasks.pop() {
        match task {
            Task::Join(feature) => {
                let no = done.pop().expect("no child finished before join");
                let yes = done.pop().expect("yes child finished before join");
                done.push(Node::branch(feature, yes, no));
            }
            Task::Expand(records, features) => match expand(&records, &features) {
                None => done.push(Node::leaf(labels(&records))),
                Some((feature, yes, no)) => {
                    let rest = features
                        .iter()
                        .filter(|f| **f != feature)
                        .cloned()
                        .collect::<Vec<Feature>>();
                    tasks.push(Task::Join(feature));
                    tasks.push(Task::Expand(no, rest.clone()));
                    tasks.push(Task::Expand(yes, rest));
                }
            },
        }
    }
    let root = done.pop().expect("build always yields a root");
    log::info!(
        "built tree over {} records: {} nodes, {} leaves, depth {}",
        records.len(),
        root.size(),
        root.leaves(),
        root.depth()
    );
    root
}

/// The chosen feature and its two non-empty sides, or `None` for a leaf.
fn expand<'r>(
    records: &[&'r Record],
    features: &[Feature],
) -> Option<(Feature, Vec<&'r Record>, Vec<&'r Record>)> {
    if records.len() <= 1 {
        return None;
    }
    let feature = best_split(records, features)?;
    let (yes, no) = partition(records, feature);
    if yes.is_empty() || no.is_empty() {
        log::debug!(
            "{} does not separate {} records, stopping",
            feature,
            records.len()
        );
        return None;
    }
    log::debug!("split {} records on {}: {} / {}", records.len(), feature, yes.len(), no.len());
    Some((feature.clone(), yes, no))
}

fn labels(records: &[&Record]) -> Vec<Label> {
    records.iter().map(|r| r.label().to_string()).collect()
}

impl From<&Catalog> for Node {
    fn from(catalog: &Catalog) -> Self {
        build(catalog.records(), catalog.features())
    }
}
