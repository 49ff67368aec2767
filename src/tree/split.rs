use crate::Feature;
use crate::catalog::Record;

/// Picks the feature whose true/false counts over `records` are closest
/// to even, scanning `features` in order and keeping the first minimum.
///
/// This is a balance heuristic, not an information-gain criterion: it only
/// looks at `|ones - zeros|` for each feature in isolation. Returns `None`
/// only when `features` is empty; a feature that splits nothing at all can
/// still be chosen, and callers must handle the one-sided partition.
pub fn best_split<'f>(records: &[&Record], features: &'f [Feature]) -> Option<&'f Feature> {
    let mut best = None;
    for feature in features {
        let diff = imbalance(records, feature);
        match best {
            Some((_, min)) if diff >= min => {}
            _ => best = Some((feature, diff)),
        }
    }
    best.map(|(feature, _)| feature)
}

/// `|ones - zeros|` for one feature.
pub fn imbalance(records: &[&Record], feature: &str) -> usize {
    let ones = records.iter().filter(|r| r.flag(feature)).count();
    let zeros = records.len() - ones;
    ones.abs_diff(zeros)
}

/// Splits `records` into (yes, no) by `feature`, preserving order.
pub fn partition<'r>(records: &[&'r Record], feature: &str) -> (Vec<&'r Record>, Vec<&'r Record>) {
    records.iter().copied().partition(|r| r.flag(feature))
}
