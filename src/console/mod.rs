use anyhow::{anyhow, Context, Error, Result};
use itertools::Itertools;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::dataset::Vacana;
use crate::quiz::{AnswerRecord, Mode, PropertySelection, Question, ReverseQuestion};


const COMMAND_PREFIX: char = ':';

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Answer(AnswerRecord),
    Next,
    SwitchMode(Mode),
    Load(PathBuf),
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim().trim_start_matches(COMMAND_PREFIX);
    let mut words = line.splitn(2, char::is_whitespace);
    let name = words.next().unwrap_or_default().to_lowercase();
    let argument = words.next().unwrap_or_default().trim();
    match name.as_str() {
        "next" | "n" => Ok(Command::Next),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        "mode" | "m" => Ok(Command::SwitchMode(argument.parse()?)),
        "load" | "l" if !argument.is_empty() => Ok(Command::Load(PathBuf::from(argument))),
        "load" | "l" => Err(anyhow!("Usage: :load <path to csv>")),
        other => Err(anyhow!("Unknown command :{}", other)),
    }
}

/// Parses a 1-based option number into an index.
pub fn parse_choice(input: &str, count: usize) -> Result<usize> {
    let number: usize = input
        .trim()
        .parse()
        .with_context(|| format!("{:?} is not an option number", input.trim()))?;
    if number == 0 || number > count {
        return Err(anyhow!("Pick a number between 1 and {}", count));
    }
    Ok(number - 1)
}

/// Parses comma or space separated option numbers; at least one is required.
pub fn parse_choices(input: &str, count: usize) -> Result<Vec<usize>> {
    let choices: Vec<usize> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| parse_choice(token, count))
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .unique()
        .collect();
    if choices.is_empty() {
        return Err(anyhow!(
            "कृपया दत्तस्य रूपस्य सर्वाः सम्भवन्त्यः विभक्तयः चिनोतु। (Select every matching case.)"
        ));
    }
    Ok(choices)
}

enum Prompted<T> {
    Value(T),
    Command(Command),
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn report(&mut self, error: &Error) -> Result<()> {
        writeln!(self.output, "{:#}", error)?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{} ", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    /// Re-prompts until `parse` accepts the line or a command is typed.
    fn prompt<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T>,
    ) -> Result<Prompted<T>> {
        loop {
            let line = match self.read_line(prompt)? {
                Some(line) => line,
                None => return Ok(Prompted::Command(Command::Quit)),
            };
            let parsed = if line.starts_with(COMMAND_PREFIX) {
                parse_command(&line).map(Prompted::Command)
            } else {
                parse(&line).map(Prompted::Value)
            };
            match parsed {
                Ok(prompted) => return Ok(prompted),
                Err(e) => self.report(&e)?,
            }
        }
    }

    /// Reads the next command; with a question active, plain input answers it.
    pub fn read_command(&mut self, question: Option<&Question>) -> Result<Command> {
        match question {
            None => loop {
                match self.prompt(">", |_| Err(anyhow!("Type :next, :mode, :load or :quit")))? {
                    Prompted::Command(command) => return Ok(command),
                    Prompted::Value(()) => (),
                }
            },
            Some(Question::Forward(_)) => {
                let answer = self.prompt(">", |line| {
                    if line.is_empty() {
                        return Err(anyhow!("रूपम् लिखत (Type the form), or :next / :mode / :quit"));
                    }
                    Ok(AnswerRecord::Form(line.to_owned()))
                })?;
                Ok(match answer {
                    Prompted::Value(answer) => Command::Answer(answer),
                    Prompted::Command(command) => command,
                })
            }
            Some(Question::Reverse(question)) => self.read_properties(question),
        }
    }

    fn read_properties(&mut self, question: &ReverseQuestion) -> Result<Command> {
        macro_rules! ask {
            ($console:expr, $prompt:expr, $parse:expr) => {
                match $console.prompt($prompt, $parse)? {
                    Prompted::Value(value) => value,
                    Prompted::Command(command) => return Ok(command),
                }
            };
        }
        fn pick(values: &[String], line: &str) -> Result<String> {
            Ok(values[parse_choice(line, values.len())?].clone())
        }
        let options = &question.options;

        let shabda = ask!(self, "शब्दः (Base word) #", |line| pick(&options.shabda, line));
        let linga = ask!(self, "लिङ्गम् (Gender) #", |line| pick(&options.linga, line));
        let anta = ask!(self, "अन्तः (Stem ending) #", |line| pick(&options.anta, line));
        let vibhaktis = ask!(self, "विभक्तयः (Cases) #,#", |line| {
            let choices = parse_choices(line, options.vibhakti.len())?;
            Ok(choices
                .into_iter()
                .map(|choice| options.vibhakti[choice].clone())
                .collect::<Vec<_>>())
        });
        let vacana: Vacana = ask!(self, "वचनम् (Number) #", |line| {
            Ok(options.vacana[parse_choice(line, options.vacana.len())?])
        });

        Ok(Command::Answer(AnswerRecord::Properties(PropertySelection {
            shabda,
            linga,
            anta,
            vacana,
            vibhaktis,
        })))
    }
}
