//! Task id generation.
//!
//! The generator never hands out an id at or below the highest id it has
//! observed, so ids stay unique for the lifetime of a store even when two
//! adds land within the same clock tick. Once the id space above the
//! highest observed id is used up, [`IdGenerator::next_id`] returns `None`
//! and the caller must find a free id itself.

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::task::TaskId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// `last + 1`
    #[default]
    Sequential,
    /// Wall-clock milliseconds, bumped past `last` on collision.
    Clock,
}

impl IdStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            IdStrategy::Sequential => "sequential",
            IdStrategy::Clock => "clock",
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "sequential" => Ok(IdStrategy::Sequential),
            "clock" => Ok(IdStrategy::Clock),
            other => Err(Error::InvalidConfig(format!(
                "ids.strategy: invalid strategy '{other}' (expected sequential|clock)"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IdGenerator {
    strategy: IdStrategy,
    last: u64,
}

impl IdGenerator {
    pub fn new(strategy: IdStrategy) -> Self {
        Self { strategy, last: 0 }
    }

    /// Record an id that already exists so it is never handed out again.
    pub fn observe(&mut self, id: TaskId) {
        self.last = self.last.max(id.get());
    }

    /// Next id above everything observed, or `None` when `u64::MAX` has
    /// already been seen.
    pub fn next_id(&mut self) -> Option<TaskId> {
        let floor = self.last.checked_add(1)?;
        let candidate = match self.strategy {
            IdStrategy::Sequential => floor,
            IdStrategy::Clock => clock_millis().max(floor),
        };
        self.last = candidate;
        Some(TaskId::new(candidate))
    }
}

fn clock_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}
