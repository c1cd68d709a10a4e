use log::debug;

use crate::output::{Message, QuizOutput, ScoreboardHandle};
use crate::quiz::{Mode, Question};


pub struct TerminalOutput {
    scoreboard: ScoreboardHandle,
}

impl TerminalOutput {
    pub fn new(scoreboard: ScoreboardHandle) -> Self {
        TerminalOutput { scoreboard }
    }
}

fn numbered<T: AsRef<str>>(values: &[T]) -> String {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| match value.as_ref() {
            "" => format!("{}) —", index + 1),
            value => format!("{}) {}", index + 1, value),
        })
        .collect::<Vec<_>>()
        .join("   ")
}

fn render_question(question: &Question) -> Vec<String> {
    match question {
        Question::Forward(q) => vec![
            "गुणात् रूपम् | Form from properties".to_owned(),
            format!("  शब्दः (Base word): {}", q.entry.shabda),
            format!("  लिङ्गम् (Gender): {}", q.entry.linga),
            format!("  अन्तः (Stem ending): {}", q.entry.anta),
            format!("  विभक्तिः (Case): {}", q.entry.vibhakti),
            format!("  वचनम् (Number): {}", q.vacana.label()),
            "रूपम् लिखत (Type the form):".to_owned(),
        ],
        Question::Reverse(q) => {
            let vacana_labels: Vec<&str> = q.options.vacana.iter().map(|v| v.label()).collect();
            vec![
                "रूपात् गुणाः | Properties from form".to_owned(),
                format!("  दत्तं रूपम् (Given form): {}", q.variants.display_joined()),
                format!("  शब्दः (Base word): {}", numbered(&q.options.shabda)),
                format!("  लिङ्गम् (Gender): {}", numbered(&q.options.linga)),
                format!("  अन्तः (Stem ending): {}", numbered(&q.options.anta)),
                format!("  विभक्तयः (All matching cases): {}", numbered(&q.options.vibhakti)),
                format!("  वचनम् (Number): {}", numbered(&vacana_labels)),
            ]
        }
    }
}

fn render_mode(mode: Mode) -> String {
    match mode {
        Mode::PropertiesToForm => "Mode: properties → form".to_owned(),
        Mode::FormToProperties => "Mode: form → properties".to_owned(),
    }
}

pub fn render(message: &Message) -> Vec<String> {
    match message {
        Message::QuestionBegins(question) => render_question(question),
        Message::AnswerReveal(verdict) => {
            let status = if verdict.correct {
                "साधु! सम्यक् उत्तरम्। (Excellent, that is correct.)"
            } else {
                "दोषः। पुनः अभ्यासः आवश्यकः। (Not quite, keep practicing.)"
            };
            let mut lines = vec![status.to_owned()];
            lines.extend(verdict.details.iter().map(|line| format!("  {}", line)));
            lines.push("अन्यः प्रश्नः | :next for the next question".to_owned());
            lines
        }
        Message::AnswerScored { .. } => vec![],
        Message::DatasetLoaded(entries) => vec![format!("Loaded {} entries.", entries)],
        Message::ModeChanged(mode) => vec![render_mode(*mode)],
    }
}

impl QuizOutput for TerminalOutput {
    fn say(&self, message: &Message) {
        if let Message::AnswerScored { correct } = message {
            let mut scoreboard = self.scoreboard.write();
            scoreboard.record(*correct);
            debug!("Score: {}/{}", scoreboard.correct(), scoreboard.total());
            println!("{}", scoreboard.render());
        }
        for line in render(message) {
            println!("{}", line);
        }
    }
}
