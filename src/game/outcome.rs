use crate::Guesses;
use crate::Label;

/// How one round ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The guess at the leaf was confirmed.
    Found { label: Label, guesses: Guesses },
    /// The guess was rejected, or the leaf had nobody left to guess.
    /// `candidates` is every label that survived to the leaf.
    Stumped {
        guesses: Guesses,
        candidates: Vec<Label>,
    },
}

impl Outcome {
    pub fn guesses(&self) -> Guesses {
        match self {
            Self::Found { guesses, .. } | Self::Stumped { guesses, .. } => *guesses,
        }
    }
    pub fn is_win(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Found { label, guesses } => {
                write!(f, "Got it! It was {} ({} guesses)", label, guesses)
            }
            Self::Stumped {
                guesses,
                candidates,
            } => {
                write!(f, "Congratulations, you stumped me after {} guesses!", guesses)?;
                match candidates.is_empty() {
                    true => Ok(()),
                    false => write!(f, " I was down to: {}", candidates.join(", ")),
                }
            }
        }
    }
}
