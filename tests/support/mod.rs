#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const SEED: &str = r#"[
  {"id": 1, "title": "Buy groceries", "description": "Eggs, bread", "isCompleted": false, "isUrgent": true},
  {"id": 2, "title": "Book dentist", "description": "", "isCompleted": false, "isUrgent": false},
  {"id": 3, "title": "Pay bill", "description": "", "isCompleted": true, "isUrgent": true},
  {"id": 4, "title": "Water plants", "description": "", "isCompleted": false, "isUrgent": false}
]"#;

/// Scratch directory used as the working directory of the binary.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_file(&self, rel_path: &str, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.dir.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn write_seed(&self) -> std::io::Result<PathBuf> {
        self.write_file("tasks.json", SEED)
    }

    pub fn todo_cmd(&self) -> Command {
        let mut cmd = todo_cmd();
        cmd.current_dir(self.path());
        cmd
    }
}

pub fn todo_cmd() -> Command {
    let mut cmd = Command::cargo_bin("todo").expect("binary");
    cmd.env_remove("TODO_CONFIG")
        .env_remove("TODO_SEED")
        .env_remove("RUST_LOG");
    cmd
}
