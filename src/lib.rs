//! todo-board - Todo Board Library
//!
//! An in-memory to-do list split into three lanes: urgent, normal and
//! completed.
//!
//! # Core Concepts
//!
//! - **Task records**: id, title, description and two independent flags
//!   (`is_completed`, `is_urgent`)
//! - **Task store**: owns the current list; `add`, `remove` and `toggle`
//!   each install a new list and never fail
//! - **Lanes**: pending-urgent, pending-normal and completed views that
//!   partition the list without reordering it
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `config`: Configuration loading from `.todo.toml`
//! - `error`: Error types and result aliases
//! - `id`: Task id generation
//! - `output`: Human and JSON output envelopes
//! - `replay`: JSON-lines scripts of store operations
//! - `seed`: Initial task data
//! - `store`: The task store
//! - `task`: Task records and the immutable task list
//! - `ui`: Interactive terminal board
//! - `view`: Lane filters

pub mod cli;
pub mod config;
pub mod error;
pub mod id;
pub mod output;
pub mod replay;
pub mod seed;
pub mod store;
pub mod task;
pub mod ui;
pub mod view;

pub use error::{Error, Result};
pub use store::TaskStore;
pub use task::{TaskFlag, TaskId, TaskList, TaskRecord};
