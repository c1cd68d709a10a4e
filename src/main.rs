use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use parking_lot::RwLock;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

mod console;
mod dataset;
mod output;
mod quiz;
mod session;
mod settings;

use crate::console::{Command, Console};
use crate::dataset::DatasetIndex;
use crate::output::terminal::TerminalOutput;
use crate::output::{Scoreboard, ScoreboardHandle};
use crate::quiz::{Mode, QuestionGenerationError};
use crate::session::Session;
use crate::settings::{resolve_dataset_path, Settings, DATASET_ENV_VAR};

#[derive(Parser)]
#[command(name = "shabda-quiz", version, about = "Sanskrit noun declension practice")]
struct Cli {
    /// Dataset CSV with Shabda,Linga,Anta,Vibhakti,Eka,Dvi,Bahu columns
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// properties-to-form or form-to-properties
    #[arg(long, default_value = "properties-to-form")]
    mode: Mode,

    /// Seed for a reproducible sequence of questions
    #[arg(long)]
    seed: Option<u64>,
}

fn load_dataset(path: &Path) -> Result<DatasetIndex> {
    DatasetIndex::open(path).with_context(|| {
        format!(
            "Could not load the dataset from {} (pass --dataset or set {})",
            path.display(),
            DATASET_ENV_VAR
        )
    })
}

/// Errors from the session are shown to the learner, except when no
/// question can be drawn at all.
fn recoverable<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.downcast_ref::<QuestionGenerationError>().is_some() => Err(e),
        Err(e) => {
            println!("{:#}", e);
            Ok(None)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let path = resolve_dataset_path(cli.dataset)?;
    let index = load_dataset(&path)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let scoreboard: ScoreboardHandle = Arc::new(RwLock::new(Scoreboard::default()));
    let output = TerminalOutput::new(scoreboard.clone());
    let mut session = Session::new(index, Settings::default(), cli.mode, output);
    session.next_question(&mut rng)?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    loop {
        let command = console.read_command(session.active_question())?;
        info!("Command: {:?}", command);
        match command {
            Command::Quit => break,
            Command::Answer(answer) => {
                recoverable(session.submit(&answer))?;
            }
            Command::Next => {
                recoverable(session.next_question(&mut rng))?;
            }
            Command::SwitchMode(mode) => {
                recoverable(session.switch_mode(mode, &mut rng))?;
            }
            Command::Load(path) => match load_dataset(&path) {
                Ok(index) => {
                    session.replace_dataset(index)?;
                    info!(
                        "Quizzing over {} entries from {}",
                        session.index().entries().len(),
                        path.display()
                    );
                    session.next_question(&mut rng)?;
                }
                Err(e) => console.report(&e)?,
            },
        }
    }

    println!("{}", scoreboard.read().render());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Cli::parse()) {
        error!("{:#}", e);
        eprintln!("{:#}", e);
        process::exit(1);
    }
}
