//! Runtime configuration from the environment.
//!
//! - `TWENTYQ_DATA`: catalog path, default [`crate::DEFAULT_DATA`]
//! - `TWENTYQ_SUBJECT`: noun used in questions, default [`crate::DEFAULT_SUBJECT`]
use crate::DEFAULT_DATA;
use crate::DEFAULT_SUBJECT;
use std::path::PathBuf;

pub const DATA_VAR: &str = "TWENTYQ_DATA";
pub const SUBJECT_VAR: &str = "TWENTYQ_SUBJECT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data: PathBuf,
    pub subject: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: PathBuf::from(DEFAULT_DATA),
            subject: DEFAULT_SUBJECT.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
    /// Blank values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v: &String| !v.trim().is_empty());
        let defaults = Self::default();
        let config = Self {
            data: get(DATA_VAR).map(PathBuf::from).unwrap_or(defaults.data),
            subject: get(SUBJECT_VAR)
                .map(|s| s.trim().to_string())
                .unwrap_or(defaults.subject),
        };
        log::debug!("{:?}", config);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_unset() {
        assert_eq!(Config::from_lookup(|_| None), Config::default());
    }

    #[test]
    fn overrides() {
        let vars = HashMap::from([
            (DATA_VAR, "/tmp/films.csv".to_string()),
            (SUBJECT_VAR, " film ".to_string()),
        ]);
        let config = Config::from_lookup(|k| vars.get(k).cloned());
        assert_eq!(config.data, PathBuf::from("/tmp/films.csv"));
        assert_eq!(config.subject, "film");
    }

    #[test]
    fn blank_is_unset() {
        let config = Config::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config, Config::default());
    }
}
