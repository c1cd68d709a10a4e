use anyhow::anyhow;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::dataset::{Attribute, DatasetError, DatasetIndex, Entry, Vacana, VariantSet};
use crate::settings::Settings;

pub mod answer;
pub mod combo;
pub mod pool;

pub use self::answer::{evaluate, AnswerRecord, EvaluationError, PropertySelection, Verdict};
pub use self::combo::{resolve_equivalence_class, Combo, EquivalenceClass};
pub use self::pool::build_option_pool;


#[derive(Debug, Error)]
pub enum QuestionGenerationError {
    #[error("there are no entries to draw a question from")]
    NoEntries,
    #[error("no entry with a populated number was found in {attempts} draws")]
    NoPopulatedVacana { attempts: usize },
    #[error("{shabda} ({vibhakti}, {vacana}) has no usable forms")]
    NoVariants {
        shabda: String,
        vibhakti: String,
        vacana: Vacana,
    },
    #[error(transparent)]
    Inconsistent(#[from] DatasetError),
}

/// Quiz direction.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mode {
    /// Word, gender, stem, case and number are given; the learner types the form.
    PropertiesToForm,
    /// A form is given; the learner identifies every cell it could belong to.
    FormToProperties,
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Mode::PropertiesToForm => "properties-to-form",
            Mode::FormToProperties => "form-to-properties",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "properties-to-form" | "properties" | "forward" => Ok(Mode::PropertiesToForm),
            "form-to-properties" | "forms" | "form" | "reverse" => Ok(Mode::FormToProperties),
            other => Err(anyhow!(
                "Unknown mode {:?}, expected properties-to-form or form-to-properties",
                other
            )),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ForwardQuestion {
    pub entry: Entry,
    pub vacana: Vacana,
    pub variants: VariantSet,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OptionPools {
    pub shabda: Vec<String>,
    pub linga: Vec<String>,
    pub anta: Vec<String>,
    pub vibhakti: Vec<String>,
    pub vacana: Vec<Vacana>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReverseQuestion {
    pub entry: Entry,
    pub vacana: Vacana,
    pub variants: VariantSet,
    pub equivalence_class: EquivalenceClass,
    pub options: OptionPools,
    pub primary_combo: Combo,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Question {
    Forward(ForwardQuestion),
    Reverse(ReverseQuestion),
}

impl Question {
    pub fn mode(&self) -> Mode {
        match self {
            Question::Forward(_) => Mode::PropertiesToForm,
            Question::Reverse(_) => Mode::FormToProperties,
        }
    }

    pub fn entry(&self) -> &Entry {
        match self {
            Question::Forward(q) => &q.entry,
            Question::Reverse(q) => &q.entry,
        }
    }

    pub fn vacana(&self) -> Vacana {
        match self {
            Question::Forward(q) => q.vacana,
            Question::Reverse(q) => q.vacana,
        }
    }
}

pub fn generate_question<R: Rng + ?Sized>(
    index: &DatasetIndex,
    mode: Mode,
    settings: &Settings,
    rng: &mut R,
) -> Result<Question, QuestionGenerationError> {
    let (entry, vacana) = draw_seed(index.entries(), settings.max_draw_attempts, rng)?;
    let variants = entry.variants(vacana);
    if variants.is_empty() {
        return Err(QuestionGenerationError::NoVariants {
            shabda: entry.shabda.clone(),
            vibhakti: entry.vibhakti.clone(),
            vacana,
        });
    }

    let question = match mode {
        Mode::PropertiesToForm => Question::Forward(ForwardQuestion {
            entry: entry.clone(),
            vacana,
            variants,
        }),
        Mode::FormToProperties => {
            Question::Reverse(build_reverse_question(index, entry, vacana, variants, settings, rng)?)
        }
    };
    Ok(question)
}

/// Picks a random entry and one of its populated numbers, redrawing entries
/// that have none, up to `max_attempts` draws in total.
pub fn draw_seed<'a, R: Rng + ?Sized>(
    entries: &'a [Entry],
    max_attempts: usize,
    rng: &mut R,
) -> Result<(&'a Entry, Vacana), QuestionGenerationError> {
    for attempt in 1..=max_attempts {
        let entry = entries
            .choose(rng)
            .ok_or(QuestionGenerationError::NoEntries)?;
        if let Some(vacana) = entry.populated_vacanas().choose(rng) {
            return Ok((entry, *vacana));
        }
        debug!(
            "Draw {}: {} ({}) has no populated number, redrawing",
            attempt, entry.shabda, entry.vibhakti
        );
    }
    Err(QuestionGenerationError::NoPopulatedVacana {
        attempts: max_attempts,
    })
}

fn build_reverse_question<R: Rng + ?Sized>(
    index: &DatasetIndex,
    entry: &Entry,
    vacana: Vacana,
    variants: VariantSet,
    settings: &Settings,
    rng: &mut R,
) -> Result<ReverseQuestion, QuestionGenerationError> {
    let equivalence_class = resolve_equivalence_class(index, entry, vacana, &variants);
    let primary_combo = equivalence_class
        .find_primary(entry, vacana)
        .cloned()
        .ok_or_else(|| DatasetError::MissingPrimaryCombo {
            shabda: entry.shabda.clone(),
            vibhakti: entry.vibhakti.clone(),
            vacana,
            form: variants.display_joined(),
        })?;

    let mut pool = |attribute: Attribute, desired_size: usize| {
        build_option_pool(
            index.unique_values(attribute),
            &equivalence_class.values(attribute),
            desired_size,
            &mut *rng,
        )
    };
    let vibhakti_size = settings
        .max_vibhakti_options
        .min(index.unique_values(Attribute::Vibhakti).len());
    let options = OptionPools {
        shabda: pool(Attribute::Shabda, settings.shabda_options),
        linga: pool(Attribute::Linga, settings.linga_options),
        anta: pool(Attribute::Anta, settings.anta_options),
        vibhakti: pool(Attribute::Vibhakti, vibhakti_size),
        vacana: Vacana::ALL.to_vec(),
    };

    Ok(ReverseQuestion {
        entry: entry.clone(),
        vacana,
        variants,
        equivalence_class,
        options,
        primary_combo,
    })
}
