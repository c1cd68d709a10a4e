use std::collections::BTreeSet;
use thiserror::Error;

use crate::dataset::{normalize, Vacana};
use crate::quiz::{ForwardQuestion, Mode, Question, ReverseQuestion};


const NO_ANSWER: &str = "—";

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("a {answer} answer cannot be scored against a {question} question")]
    ModeMismatch { question: Mode, answer: Mode },
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PropertySelection {
    pub shabda: String,
    pub linga: String,
    pub anta: String,
    pub vacana: Vacana,
    pub vibhaktis: Vec<String>,
}

/// What the learner submitted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AnswerRecord {
    Form(String),
    Properties(PropertySelection),
}

impl AnswerRecord {
    pub fn mode(&self) -> Mode {
        match self {
            AnswerRecord::Form(_) => Mode::PropertiesToForm,
            AnswerRecord::Properties(_) => Mode::FormToProperties,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Verdict {
    pub correct: bool,
    pub details: Vec<String>,
}

pub fn evaluate(question: &Question, answer: &AnswerRecord) -> Result<Verdict, EvaluationError> {
    match (question, answer) {
        (Question::Forward(question), AnswerRecord::Form(form)) => {
            Ok(evaluate_form(question, form))
        }
        (Question::Reverse(question), AnswerRecord::Properties(selection)) => {
            Ok(evaluate_properties(question, selection))
        }
        _ => Err(EvaluationError::ModeMismatch {
            question: question.mode(),
            answer: answer.mode(),
        }),
    }
}

fn evaluate_form(question: &ForwardQuestion, form: &str) -> Verdict {
    let normalized = normalize(form);
    let correct = question.variants.accepts(&normalized);
    let shown = if normalized.is_empty() {
        NO_ANSWER
    } else {
        normalized.as_str()
    };
    Verdict {
        correct,
        details: vec![
            format!("भवतः उत्तरम्: {} (Your answer)", shown),
            format!(
                "सम्मत-उत्तरम्: {} (Accepted form/s)",
                question.variants.display_joined()
            ),
        ],
    }
}

/// The whole syncretism set must be named; a correct subset is still wrong.
fn evaluate_properties(question: &ReverseQuestion, selection: &PropertySelection) -> Verdict {
    let primary = &question.primary_combo;
    let required = question.equivalence_class.vibhaktis();
    let selected: BTreeSet<String> = selection.vibhaktis.iter().cloned().collect();

    let correct = selection.shabda == primary.shabda
        && selection.linga == primary.linga
        && selection.anta == primary.anta
        && selection.vacana == primary.vacana
        && selected == required;

    let join = |values: &BTreeSet<String>| {
        if values.is_empty() {
            NO_ANSWER.to_owned()
        } else {
            values.iter().map(String::as_str).collect::<Vec<_>>().join(" / ")
        }
    };

    Verdict {
        correct,
        details: vec![
            format!("शब्दः — {} (Base word)", primary.shabda),
            format!("लिङ्गम् — {} (Gender)", primary.linga),
            format!("अन्तः — {} (Stem ending)", primary.anta),
            format!("भवतः विभक्तयः — {} (Your selected cases)", join(&selected)),
            format!("सम्मत विभक्तयः — {} (All valid cases)", join(&required)),
            format!("वचनम् — {}", primary.vacana.label()),
        ],
    }
}
