use crate::quiz::{Mode, Question, Verdict};

#[cfg(test)]
pub mod mock;
pub mod scoreboard;
pub mod terminal;

pub use self::scoreboard::{Scoreboard, ScoreboardHandle};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    AnswerReveal(Verdict),
    AnswerScored { correct: bool },
    DatasetLoaded(usize),
    ModeChanged(Mode),
    QuestionBegins(Question),
}

/// Receives everything the session wants shown to the learner.
pub trait QuizOutput {
    fn say(&self, message: &Message);
}
