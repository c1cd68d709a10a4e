use anyhow::*;
use directories_next::BaseDirs;
use std::env;
use std::path::PathBuf;

pub const DATASET_ENV_VAR: &str = "SHABDA_DATASET";
const DATASET_FILE_NAME: &str = "shabda.csv";

#[derive(Clone, Debug)]
pub struct Settings {
    pub max_draw_attempts: usize,
    pub shabda_options: usize,
    pub linga_options: usize,
    pub anta_options: usize,
    pub max_vibhakti_options: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            max_draw_attempts: 20,
            shabda_options: 4,
            linga_options: 4,
            anta_options: 4,
            max_vibhakti_options: 6,
        }
    }
}

fn get_data_dir() -> Result<PathBuf> {
    let mut dir = BaseDirs::new()
        .context("could not locate system directories")?
        .data_dir()
        .to_path_buf();
    dir.push("shabda-quiz");
    Ok(dir)
}

/// Dataset location: explicit path first, then the environment, then the
/// per-user data directory.
pub fn resolve_dataset_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    if let Some(path) = env::var_os(DATASET_ENV_VAR) {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    let mut path = get_data_dir()?;
    path.push(DATASET_FILE_NAME);
    Ok(path)
}
