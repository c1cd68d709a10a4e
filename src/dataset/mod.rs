use itertools::Itertools;
use log::{info, warn};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

pub mod variants;

pub use variants::{normalize, VariantSet};

#[cfg(test)]
pub mod fixtures;

const BYTE_ORDER_MARK: char = '\u{feff}';

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("could not read dataset: {0}")]
    Io(#[from] io::Error),
    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("dataset appears empty after parsing")]
    Empty,
    #[error("form {form:?} of {shabda} ({vibhakti}, {vacana}) does not resolve to its own case")]
    MissingPrimaryCombo {
        shabda: String,
        vibhakti: String,
        vacana: Vacana,
        form: String,
    },
}

/// Grammatical number.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Vacana {
    Eka,
    Dvi,
    Bahu,
}

impl Vacana {
    pub const ALL: [Vacana; 3] = [Vacana::Eka, Vacana::Dvi, Vacana::Bahu];

    pub fn key(self) -> &'static str {
        match self {
            Vacana::Eka => "Eka",
            Vacana::Dvi => "Dvi",
            Vacana::Bahu => "Bahu",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Vacana::Eka => "एकवचनम् (Singular)",
            Vacana::Dvi => "द्विवचनम् (Dual)",
            Vacana::Bahu => "बहुवचनम् (Plural)",
        }
    }
}

impl fmt::Display for Vacana {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Entry attributes that carry a per-dataset set of distinct values.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Attribute {
    Shabda,
    Linga,
    Anta,
    Vibhakti,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawEntry {
    #[serde(rename = "Shabda")]
    pub shabda: String,
    #[serde(rename = "Linga")]
    pub linga: String,
    #[serde(rename = "Anta")]
    pub anta: String,
    #[serde(rename = "Vibhakti")]
    pub vibhakti: String,
    #[serde(rename = "Eka")]
    pub eka: String,
    #[serde(rename = "Dvi")]
    pub dvi: String,
    #[serde(rename = "Bahu")]
    pub bahu: String,
}

/// One dataset row: a word in one case, with a raw form field per number.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Entry {
    pub shabda: String,
    pub linga: String,
    pub anta: String,
    pub vibhakti: String,
    pub eka: String,
    pub dvi: String,
    pub bahu: String,
}

impl Entry {
    pub fn form(&self, vacana: Vacana) -> &str {
        match vacana {
            Vacana::Eka => &self.eka,
            Vacana::Dvi => &self.dvi,
            Vacana::Bahu => &self.bahu,
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

    pub fn populated_vacanas(&self) -> Vec<Vacana> {
        Vacana::ALL
            .iter()
            .copied()
            .filter(|vacana| !self.form(*vacana).trim().is_empty())
            .collect()
    }

    pub fn variants(&self, vacana: Vacana) -> VariantSet {
        VariantSet::extract(self.form(vacana))
    }

    pub fn shares_paradigm(&self, other: &Entry) -> bool {
        self.shabda == other.shabda && self.linga == other.linga && self.anta == other.anta
    }

    pub fn is_valid(&self) -> bool {
        !self.shabda.is_empty() && !self.vibhakti.is_empty() && !self.populated_vacanas().is_empty()
    }
}

impl From<RawEntry> for Entry {
    fn from(raw_entry: RawEntry) -> Self {
        Entry {
            shabda: raw_entry.shabda.trim().to_owned(),
            linga: raw_entry.linga.trim().to_owned(),
            anta: raw_entry.anta.trim().to_owned(),
            vibhakti: raw_entry.vibhakti.trim().to_owned(),
            eka: raw_entry.eka.trim().to_owned(),
            dvi: raw_entry.dvi.trim().to_owned(),
            bahu: raw_entry.bahu.trim().to_owned(),
        }
    }
}

/// Parses CSV text into entries without any validity filtering.
pub fn parse_entries(text: &str) -> Result<Vec<Entry>, DatasetError> {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = csv_reader.headers()?.clone();
    let mut entries = Vec::new();
    for record in csv_reader.records() {
        let mut record = record?;
        // Missing trailing columns read as empty.
        while record.len() < headers.len() {
            record.push_field("");
        }
        record.truncate(headers.len());
        let raw_entry: RawEntry = record.deserialize(Some(&headers))?;
        entries.push(raw_entry.into());
    }
    Ok(entries)
}

/// Validated entries plus the distinct values observed per attribute.
/// Immutable once built; a reload builds a new index.
#[derive(Clone, Debug)]
pub struct DatasetIndex {
    entries: Vec<Entry>,
    shabdas: Vec<String>,
    lingas: Vec<String>,
    antas: Vec<String>,
    vibhaktis: Vec<String>,
}

impl DatasetIndex {
    pub fn new(entries: Vec<Entry>) -> Result<DatasetIndex, DatasetError> {
        let total = entries.len();
        let entries: Vec<Entry> = entries.into_iter().filter(Entry::is_valid).collect();
        if entries.len() < total {
            warn!(
                "Dropped {} dataset rows missing a word, a case or every number",
                total - entries.len()
            );
        }
        if entries.is_empty() {
            return Err(DatasetError::Empty);
        }

        let distinct = |attribute: Attribute| -> Vec<String> {
            entries
                .iter()
                .map(|entry| entry.attribute(attribute))
                .filter(|value| !value.is_empty())
                .unique()
                .map(str::to_owned)
                .collect()
        };
        let shabdas = distinct(Attribute::Shabda);
        let lingas = distinct(Attribute::Linga);
        let antas = distinct(Attribute::Anta);
        let vibhaktis = distinct(Attribute::Vibhakti);

        info!(
            "Dataset indexed: {} entries, {} words, {} cases",
            entries.len(),
            shabdas.len(),
            vibhaktis.len()
        );

        Ok(DatasetIndex {
            entries,
            shabdas,
            lingas,
            antas,
            vibhaktis,
        })
    }

    pub fn from_csv(text: &str) -> Result<DatasetIndex, DatasetError> {
        DatasetIndex::new(parse_entries(text)?)
    }

    pub fn open(source: &Path) -> Result<DatasetIndex, DatasetError> {
        info!("Loading dataset from {}", source.display());
        let text = fs::read_to_string(source)?;
        DatasetIndex::from_csv(&text)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn unique_values(&self, attribute: Attribute) -> &[String] {
        match attribute {
            Attribute::Shabda => &self.shabdas,
            Attribute::Linga => &self.lingas,
            Attribute::Anta => &self.antas,
            Attribute::Vibhakti => &self.vibhaktis,
        }
    }
}
