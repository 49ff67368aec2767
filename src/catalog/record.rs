use crate::Feature;
use crate::Label;
use std::collections::HashMap;

/// One labeled item and its boolean feature flags.
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    label: Label,
    flags: HashMap<Feature, bool>,
}

impl Record {
    pub fn new<I, F>(label: impl Into<Label>, flags: I) -> Self
    where
        I: IntoIterator<Item = (F, bool)>,
        F: Into<Feature>,
    {
        Self {
            label: label.into(),
            flags: flags.into_iter().map(|(f, b)| (f.into(), b)).collect(),
        }
    }
    pub fn label(&self) -> &str {
        &self.label
    }
    /// Absent features read as false.
    pub fn flag(&self, feature: &str) -> bool {
        self.flags.get(feature).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_feature_is_false() {
        let record = Record::new("Alien", [("scary", true)]);
        assert!(record.flag("scary"));
        assert!(!record.flag("funny"));
    }
}
