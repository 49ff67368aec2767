use super::Outcome;
use super::Respondent;
use std::collections::VecDeque;

/// Replays a fixed list of replies and records everything it was told.
#[derive(Debug, Default, Clone)]
pub struct Script {
    replies: VecDeque<String>,
    asked: Vec<String>,
    revealed: Vec<Outcome>,
}

impl Script {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
    /// Every question asked so far, in order, including repeats.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
    pub fn revealed(&self) -> &[Outcome] {
        &self.revealed
    }
    pub fn remaining(&self) -> usize {
        self.replies.len()
    }
}

impl Respondent for Script {
    fn ask(&mut self, question: &str) -> anyhow::Result<String> {
        self.asked.push(question.to_string());
        self.replies
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script ran out of replies at {:?}", question))
    }
    fn reveal(&mut self, outcome: &Outcome) {
        self.revealed.push(outcome.clone());
    }
}
