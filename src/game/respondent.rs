use super::Outcome;

/// Whoever answers the questions of a [`super::Session`].
pub trait Respondent {
    /// Poses `question` and returns the raw reply. Errors end the session;
    /// unparseable replies do not and are simply asked again.
    fn ask(&mut self, question: &str) -> anyhow::Result<String>;
    /// Announces the result of a round.
    fn reveal(&mut self, _: &Outcome) {}
}
