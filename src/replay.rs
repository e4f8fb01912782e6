//! Scripted store operations.
//!
//! A replay script is JSON lines, one operation per line:
//!
//! ```text
//! {"op":"add","title":"Buy milk","description":"2% milk"}
//! {"op":"toggle","id":6,"flag":"urgent"}
//! {"op":"remove","id":2}
//! ```

use std::io::BufRead;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::store::TaskStore;
use crate::task::{TaskFlag, TaskId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Add {
        title: String,
        #[serde(default)]
        description: String,
    },
    Remove {
        id: TaskId,
    },
    Toggle {
        id: TaskId,
        flag: TaskFlag,
    },
}

impl Operation {
    pub fn apply(&self, store: &mut TaskStore) {
        match self {
            Operation::Add { title, description } => {
                store.add(title.clone(), description.clone());
            }
            Operation::Remove { id } => {
                store.remove(*id);
            }
            Operation::Toggle { id, flag } => {
                store.toggle(*id, *flag);
            }
        }
    }
}

/// Parse a script. Blank lines are skipped; line numbers in errors are 1-based.
pub fn parse_script<R: BufRead>(reader: R) -> Result<Vec<Operation>> {
    let mut operations = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let operation = serde_json::from_str(&line).map_err(|err| Error::InvalidReplay {
            line: idx + 1,
            message: err.to_string(),
        })?;
        operations.push(operation);
    }
    Ok(operations)
}

/// Apply every operation in order and return how many ran.
pub fn run(store: &mut TaskStore, operations: &[Operation]) -> usize {
    for operation in operations {
        operation.apply(store);
    }
    operations.len()
}
