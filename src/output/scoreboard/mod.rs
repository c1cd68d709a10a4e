use parking_lot::RwLock;
use std::sync::Arc;


const DEVANAGARI_ZERO: u32 = 0x0966;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Scoreboard {
    correct: u32,
    total: u32,
}

impl Scoreboard {
    pub fn record(&mut self, correct: bool) {
        if correct {
            self.correct += 1;
        }
        self.total += 1;
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Rounded to the nearest whole percent, halves up.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (200 * self.correct + self.total) / (2 * self.total)
    }

    pub fn render(&self) -> String {
        format!(
            "सम्यक् {} / {} | {}%",
            to_devanagari_digits(self.correct),
            to_devanagari_digits(self.total),
            to_devanagari_digits(self.percent())
        )
    }
}

pub type ScoreboardHandle = Arc<RwLock<Scoreboard>>;

pub fn to_devanagari_digits(value: u32) -> String {
    value
        .to_string()
        .chars()
        .map(|digit| {
            digit
                .to_digit(10)
                .and_then(|d| std::char::from_u32(DEVANAGARI_ZERO + d))
                .unwrap_or(digit)
        })
        .collect()
}
