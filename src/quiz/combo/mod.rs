use itertools::Itertools;
use log::debug;
use std::collections::BTreeSet;

use crate::dataset::{Attribute, DatasetIndex, Entry, Vacana, VariantSet};

#[cfg(test)]
mod tests;

/// One grammatical cell: a word in a given case and number.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Combo {
    pub shabda: String,
    pub linga: String,
    pub anta: String,
    pub vibhakti: String,
    pub vacana: Vacana,
}

impl Combo {
    pub fn new(entry: &Entry, vacana: Vacana) -> Self {
        Combo {
            shabda: entry.shabda.clone(),
            linga: entry.linga.clone(),
            anta: entry.anta.clone(),
            vibhakti: entry.vibhakti.clone(),
            vacana,
        }
    }

    pub fn attribute(&self, attribute: Attribute) -> &str {
        match attribute {
            Attribute::Shabda => &self.shabda,
            Attribute::Linga => &self.linga,
            Attribute::Anta => &self.anta,
            Attribute::Vibhakti => &self.vibhakti,
        }
    }
}

/// Every cell of a paradigm spelled the same way as a seed cell.
/// Never empty, and always holds the seed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EquivalenceClass {
    combos: Vec<Combo>,
}

impl EquivalenceClass {
    pub fn combos(&self) -> &[Combo] {
        &self.combos
    }

    pub fn len(&self) -> usize {
        self.combos.len()
    }

    pub fn contains(&self, combo: &Combo) -> bool {
        self.combos.contains(combo)
    }

    /// Distinct values of an attribute, in class order. An empty Linga or
    /// Anta is kept since the learner has to be able to pick it.
    pub fn values(&self, attribute: Attribute) -> Vec<String> {
        self.combos
            .iter()
            .map(|combo| combo.attribute(attribute))
            .unique()
            .map(str::to_owned)
            .collect()
    }

    pub fn vibhaktis(&self) -> BTreeSet<String> {
        self.values(Attribute::Vibhakti).into_iter().collect()
    }

    pub fn find_primary(&self, entry: &Entry, vacana: Vacana) -> Option<&Combo> {
        self.combos
            .iter()
            .find(|combo| combo.vibhakti == entry.vibhakti && combo.vacana == vacana)
    }
}

/// Collects every cell of the seed's paradigm, in the seed's number, whose
/// spellings share at least one normalized form with the seed's.
pub fn resolve_equivalence_class(
    index: &DatasetIndex,
    seed: &Entry,
    vacana: Vacana,
    seed_variants: &VariantSet,
) -> EquivalenceClass {
    let mut combos: Vec<Combo> = index
        .entries()
        .iter()
        .filter(|candidate| candidate.shares_paradigm(seed))
        .filter(|candidate| candidate.variants(vacana).intersects(seed_variants))
        .map(|candidate| Combo::new(candidate, vacana))
        .unique()
        .collect();

    if combos.is_empty() {
        combos.push(Combo::new(seed, vacana));
    }

    debug!(
        "Form {:?} of {} resolves to {} cell(s)",
        seed_variants.display_joined(),
        seed.shabda,
        combos.len()
    );

    EquivalenceClass { combos }
}
