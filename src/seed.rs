//! Initial task data.
//!
//! The seed is a JSON array of task records. It is read once at startup and
//! never written back.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::task::TaskList;

const SAMPLE_TASKS: &str = include_str!("../data/sample_tasks.json");

/// Where the initial task list came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    File(PathBuf),
    Sample,
}

impl SeedSource {
    pub fn label(&self) -> String {
        match self {
            SeedSource::File(path) => path.display().to_string(),
            SeedSource::Sample => "bundled sample".to_string(),
        }
    }
}

/// Pick the seed source: explicit override, then config, then the sample.
pub fn resolve(config: &Config, override_path: Option<&Path>) -> SeedSource {
    override_path
        .map(Path::to_path_buf)
        .or_else(|| config.seed.path.clone())
        .map(SeedSource::File)
        .unwrap_or(SeedSource::Sample)
}

pub fn load_source(source: &SeedSource) -> Result<TaskList> {
    match source {
        SeedSource::File(path) => load(path),
        SeedSource::Sample => sample(),
    }
}

pub fn load(path: &Path) -> Result<TaskList> {
    if !path.exists() {
        return Err(Error::SeedNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    let tasks = parse(&content)?;
    debug!(path = %path.display(), tasks = tasks.len(), "seed loaded");
    Ok(tasks)
}

pub fn sample() -> Result<TaskList> {
    parse(SAMPLE_TASKS)
}

pub fn parse(content: &str) -> Result<TaskList> {
    let tasks: TaskList = serde_json::from_str(content)
        .map_err(|err| Error::InvalidSeed(format!("expected a JSON array of tasks: {err}")))?;
    if let Some(id) = tasks.duplicate_id() {
        return Err(Error::InvalidSeed(format!("duplicate task id {id}")));
    }
    Ok(tasks)
}
