use super::Answer;
use super::Outcome;
use super::Respondent;
use crate::DEFAULT_SUBJECT;
use crate::Feature;
use crate::Guesses;
use crate::Label;
use crate::REPLAY_PROMPT;
use crate::tree::Node;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Where a round currently stands.
enum Turn<'t> {
    /// At a branch: ask about the feature, then follow yes or no.
    Ask(&'t Feature, &'t Node, &'t Node),
    /// At a leaf: guess one of the survivors, if any.
    Guess(&'t [Label]),
    Over(Outcome),
}

impl<'t> From<&'t Node> for Turn<'t> {
    fn from(node: &'t Node) -> Self {
        match node {
            Node::Branch { feature, yes, no } => Self::Ask(feature, yes, no),
            Node::Leaf { labels } => Self::Guess(labels),
        }
    }
}

/// Plays rounds of twenty questions against a read-only tree.
/// Every round starts at the root with the question counter at zero.
pub struct Session<'t> {
    root: &'t Node,
    subject: String,
    guesses: Guesses,
}

impl<'t> Session<'t> {
    pub fn new(root: &'t Node) -> Self {
        Self {
            root,
            subject: DEFAULT_SUBJECT.to_string(),
            guesses: 0,
        }
    }
    /// Noun used in questions, as in "Is your <subject> ...?".
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }
    /// Questions answered so far in the current round.
    pub fn guesses(&self) -> Guesses {
        self.guesses
    }

    /// Plays rounds until the respondent declines to play again.
    pub fn run<P, R>(&mut self, player: &mut P, rng: &mut R) -> anyhow::Result<Vec<Outcome>>
    where
        P: Respondent + ?Sized,
        R: Rng + ?Sized,
    {
        let mut outcomes = Vec::new();
        loop {
            let outcome = self.play(player, rng)?;
            log::info!("round {} over: {}", outcomes.len() + 1, outcome);
            player.reveal(&outcome);
            outcomes.push(outcome);
            match Self::confirm(player, REPLAY_PROMPT)? {
                Answer::Yes => continue,
                Answer::No => return Ok(outcomes),
            }
        }
    }

    /// Plays a single round from the root.
    pub fn play<P, R>(&mut self, player: &mut P, rng: &mut R) -> anyhow::Result<Outcome>
    where
        P: Respondent + ?Sized,
        R: Rng + ?Sized,
    {
        self.guesses = 0;
        let mut turn = Turn::from(self.root);
        loop {
            turn = match turn {
                Turn::Over(outcome) => return Ok(outcome),
                Turn::Ask(feature, yes, no) => match self.question(player, feature)? {
                    Answer::Yes => Turn::from(yes),
                    Answer::No => Turn::from(no),
                },
                Turn::Guess(labels) => match labels.choose(rng) {
                    None => Turn::Over(self.stumped(labels)),
                    Some(label) => match self.question(player, label)? {
                        Answer::Yes => Turn::Over(Outcome::Found {
                            label: label.clone(),
                            guesses: self.guesses,
                        }),
                        Answer::No => Turn::Over(self.stumped(labels)),
                    },
                },
            }
        }
    }

    fn stumped(&self, candidates: &[Label]) -> Outcome {
        Outcome::Stumped {
            guesses: self.guesses,
            candidates: candidates.to_vec(),
        }
    }

    /// Asks about one feature or candidate; counts once per valid answer.
    fn question<P>(&mut self, player: &mut P, topic: &str) -> anyhow::Result<Answer>
    where
        P: Respondent + ?Sized,
    {
        let question = format!("Is your {} {}?", self.subject, topic);
        let answer = Self::confirm(player, &question)?;
        self.guesses += 1;
        Ok(answer)
    }

    /// Repeats the same question until the reply parses.
    fn confirm<P>(player: &mut P, question: &str) -> anyhow::Result<Answer>
    where
        P: Respondent + ?Sized,
    {
        loop {
            match Answer::try_from(player.ask(question)?.as_str()) {
                Ok(answer) => return Ok(answer),
                Err(e) => log::debug!("{}, asking again", e),
            }
        }
    }
}
