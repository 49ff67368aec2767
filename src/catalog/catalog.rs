use super::Record;
use crate::Arbitrary;
use crate::Feature;
use anyhow::Context;
use std::path::Path;

/// Ordered feature names plus the records that carry them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    features: Vec<Feature>,
    records: Vec<Record>,
}

impl Catalog {
    pub fn new(features: Vec<Feature>, records: Vec<Record>) -> Self {
        Self { features, records }
    }
    pub fn features(&self) -> &[Feature] {
        &self.features
    }
    pub fn records(&self) -> &[Record] {
        &self.records
    }
    pub fn len(&self) -> usize {
        self.records.len()
    }
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Reads and validates a comma-separated catalog from disk.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read catalog {}", path.display()))?;
        let catalog = Self::parse(&text).with_context(|| format!("parse {}", path.display()))?;
        log::info!(
            "loaded {} records with {} features from {}",
            catalog.len(),
            catalog.features().len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Random catalog with `n` records over `k` features named `f0..fk`.
    pub fn sample(n: usize, k: usize) -> Self {
        let features = (0..k).map(|i| format!("f{}", i)).collect::<Vec<Feature>>();
        let records = (0..n)
            .map(|i| {
                Record::new(
                    format!("r{}", i),
                    features.iter().map(|f| (f.clone(), rand::random::<bool>())),
                )
            })
            .collect::<Vec<Record>>();
        Self::new(features, records)
    }
}

impl Arbitrary for Catalog {
    fn random() -> Self {
        let n = rand::random_range(0..48);
        let k = rand::random_range(0..10);
        Self::sample(n, k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_requested_shape() {
        let catalog = Catalog::sample(7, 3);
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.features(), ["f0", "f1", "f2"]);
        assert_eq!(catalog.records()[6].label(), "r6");
    }

    #[test]
    fn load_missing_file_names_path() {
        let err = Catalog::load("does/not/exist.csv").unwrap_err();
        assert!(format!("{:#}", err).contains("does/not/exist.csv"));
    }
}
