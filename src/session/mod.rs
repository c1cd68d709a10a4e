use anyhow::*;
use log::info;
use rand::Rng;

use crate::dataset::DatasetIndex;
use crate::output::{Message, QuizOutput};
use crate::quiz::{evaluate, generate_question, AnswerRecord, Mode, Question, Verdict};
use crate::settings::Settings;


#[derive(Debug)]
enum Phase {
    Idle,
    QuestionActive(Question),
    Answered(Question, Verdict),
}

impl Phase {
    fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::QuestionActive(_) => "question",
            Phase::Answered(..) => "answered",
        }
    }
}

pub struct Session<O: QuizOutput> {
    index: DatasetIndex,
    settings: Settings,
    mode: Mode,
    current_phase: Phase,
    // Set only while a verdict is being announced. `&mut self` already rules
    // out re-entry, so outside callers always observe it cleared.
    busy: bool,
    output: O,
}

impl<O: QuizOutput> Session<O> {
    pub fn new(index: DatasetIndex, settings: Settings, mode: Mode, output: O) -> Self {
        Session {
            index,
            settings,
            mode,
            current_phase: Phase::Idle,
            busy: false,
            output,
        }
    }

    fn set_current_phase(&mut self, phase: Phase) {
        info!("Entering session phase: {} ({})", phase.name(), self.mode);
        self.current_phase = phase;
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn index(&self) -> &DatasetIndex {
        &self.index
    }

    /// The question awaiting an answer, if any.
    pub fn active_question(&self) -> Option<&Question> {
        match &self.current_phase {
            Phase::QuestionActive(question) => Some(question),
            _ => None,
        }
    }

    pub fn last_verdict(&self) -> Option<&Verdict> {
        match &self.current_phase {
            Phase::Answered(_, verdict) => Some(verdict),
            _ => None,
        }
    }

    pub fn next_question<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        if self.busy {
            return Err(anyhow!("Cannot move on while an answer is being scored"));
        }
        match self.current_phase {
            Phase::QuestionActive(_) => Err(anyhow!(
                "Answer the current question before moving to the next one"
            )),
            Phase::Idle | Phase::Answered(..) => self.begin_question(rng),
        }
    }

    fn begin_question<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let question = generate_question(&self.index, self.mode, &self.settings, rng)?;
        self.present_question(question);
        Ok(())
    }

    fn present_question(&mut self, question: Question) {
        info!(
            "Drew {} ({}, {})",
            question.entry().shabda,
            question.entry().vibhakti,
            question.vacana()
        );
        self.output.say(&Message::QuestionBegins(question.clone()));
        self.set_current_phase(Phase::QuestionActive(question));
    }

    /// Switching discards any in-flight question and starts a fresh one in
    /// the new mode, unless the session has not started yet. If no question
    /// can be drawn in the new mode, the session is left untouched.
    pub fn switch_mode<R: Rng + ?Sized>(&mut self, mode: Mode, rng: &mut R) -> Result<()> {
        if self.busy {
            return Err(anyhow!("Cannot switch mode while an answer is being scored"));
        }
        if mode == self.mode {
            return Ok(());
        }
        let question = match self.current_phase {
            Phase::Idle => None,
            Phase::QuestionActive(_) | Phase::Answered(..) => {
                Some(generate_question(&self.index, mode, &self.settings, rng)?)
            }
        };
        self.mode = mode;
        self.output.say(&Message::ModeChanged(mode));
        if let Some(question) = question {
            self.present_question(question);
        }
        Ok(())
    }

    pub fn submit(&mut self, answer: &AnswerRecord) -> Result<Verdict> {
        if self.busy {
            return Err(anyhow!("An answer is already being scored"));
        }
        let verdict = match &self.current_phase {
            Phase::QuestionActive(question) => evaluate(question, answer)?,
            Phase::Answered(..) => return Err(anyhow!("This question has already been answered")),
            Phase::Idle => return Err(anyhow!("There is no active question")),
        };

        self.busy = true;
        self.output.say(&Message::AnswerReveal(verdict.clone()));
        self.output.say(&Message::AnswerScored {
            correct: verdict.correct,
        });
        if let Phase::QuestionActive(question) =
            std::mem::replace(&mut self.current_phase, Phase::Idle)
        {
            self.set_current_phase(Phase::Answered(question, verdict.clone()));
        }
        self.busy = false;

        Ok(verdict)
    }

    pub fn reset(&mut self) -> Result<()> {
        if self.busy {
            return Err(anyhow!("Cannot reset while an answer is being scored"));
        }
        self.set_current_phase(Phase::Idle);
        Ok(())
    }

    /// Swaps in a freshly loaded dataset; the session restarts from idle.
    pub fn replace_dataset(&mut self, index: DatasetIndex) -> Result<()> {
        self.reset()?;
        self.output
            .say(&Message::DatasetLoaded(index.entries().len()));
        self.index = index;
        Ok(())
    }
}
