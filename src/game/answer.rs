/// A valid reply to a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Answer {
    Yes,
    No,
}

impl TryFrom<&str> for Answer {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            _ => Err(anyhow::anyhow!("expected yes or no, found {:?}", s)),
        }
    }
}

impl From<bool> for Answer {
    fn from(b: bool) -> Self {
        if b { Self::Yes } else { Self::No }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yes => write!(f, "yes"),
            Self::No => write!(f, "no"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_insensitive() {
        for s in ["yes", "YES", "Yes", " yEs\n"] {
            assert_eq!(Answer::try_from(s).unwrap(), Answer::Yes);
        }
        for s in ["no", "NO", "nO "] {
            assert_eq!(Answer::try_from(s).unwrap(), Answer::No);
        }
    }

    #[test]
    fn anything_else_is_rejected() {
        for s in ["", "y", "n", "maybe", "yes please", "nope"] {
            assert!(Answer::try_from(s).is_err());
        }
    }

    #[test]
    fn display_parses_back() {
        for answer in [Answer::Yes, Answer::No] {
            assert_eq!(Answer::try_from(answer.to_string().as_str()).unwrap(), answer);
        }
    }
}
