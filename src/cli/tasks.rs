//! todo list/count/replay command implementations.

use std::fs::File;
use std::io::{self, BufReader};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::replay;
use crate::task::TaskRecord;
use crate::view::{Board, Lane, LaneCounts};

use super::Context;

pub struct ListOptions {
    pub lane: Option<Lane>,
    pub verbose: bool,
    pub json: bool,
    pub quiet: bool,
}

pub struct CountOptions {
    pub lane: Option<Lane>,
    pub json: bool,
    pub quiet: bool,
}

pub struct ReplayOptions {
    pub script: String,
    pub verbose: bool,
    pub json: bool,
    pub quiet: bool,
}

pub fn run_list(ctx: Context, options: ListOptions) -> Result<()> {
    let tasks = ctx.store.tasks();
    let board = Board::new(tasks);
    let output = BoardOutput::new(&board, options.lane);

    let mut human = HumanOutput::new("Tasks");
    human.push_summary("Source", ctx.source.label());
    push_board(&mut human, &board, options.lane, options.verbose);
    for warning in &ctx.warnings {
        human.push_warning(warning.as_str());
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "list",
        &output,
        Some(&human),
    )
}

pub fn run_count(ctx: Context, options: CountOptions) -> Result<()> {
    let tasks = ctx.store.tasks();
    let counts = Board::new(tasks).counts();
    let total = match options.lane {
        Some(lane) => counts.get(lane),
        None => counts.total(),
    };

    if options.json {
        let output = CountOutput {
            total,
            lane: options.lane,
            lanes: counts,
        };
        return emit_success(
            OutputOptions {
                json: true,
                quiet: options.quiet,
            },
            "count",
            &output,
            None,
        );
    }

    if !options.quiet {
        println!("{total}");
    }
    Ok(())
}

pub fn run_replay(mut ctx: Context, options: ReplayOptions) -> Result<()> {
    let operations = if options.script.trim() == "-" {
        replay::parse_script(io::stdin().lock())?
    } else {
        let path = std::path::Path::new(&options.script);
        if !path.exists() {
            return Err(Error::InvalidArgument(format!(
                "replay script not found: {}",
                path.display()
            )));
        }
        replay::parse_script(BufReader::new(File::open(path)?))?
    };

    let applied = replay::run(&mut ctx.store, &operations);
    let tasks = ctx.store.tasks();
    let board = Board::new(tasks);

    let output = ReplayOutput {
        applied,
        board: BoardOutput::new(&board, None),
    };

    let mut human = HumanOutput::new("Replay complete");
    human.push_summary("Source", ctx.source.label());
    human.push_summary("Operations", applied.to_string());
    push_board(&mut human, &board, None, options.verbose);
    for warning in &ctx.warnings {
        human.push_warning(warning.as_str());
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "replay",
        &output,
        Some(&human),
    )
}

fn push_board(human: &mut HumanOutput, board: &Board<'_>, only: Option<Lane>, verbose: bool) {
    let counts = board.counts();
    human.push_summary("Total", counts.total().to_string());
    for lane in Lane::ALL {
        if only.is_some_and(|selected| selected != lane) {
            continue;
        }
        let items = board
            .lane(lane)
            .iter()
            .map(|task| format_task_line(task, verbose))
            .collect();
        human.push_section(format!("{} ({})", lane.title(), counts.get(lane)), items);
    }
}

fn format_task_line(task: &TaskRecord, verbose: bool) -> String {
    let mut line = format!("[{}] {}", task.id, task.title);
    if task.is_completed && task.is_urgent {
        line.push_str(" (urgent)");
    }
    if verbose && !task.description.is_empty() {
        line.push_str(&format!(" - {}", task.description));
    }
    line
}

#[derive(Serialize)]
struct BoardOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    urgent: Option<&'a [&'a TaskRecord]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    normal: Option<&'a [&'a TaskRecord]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    completed: Option<&'a [&'a TaskRecord]>,
}

impl<'a> BoardOutput<'a> {
    fn new(board: &'a Board<'a>, only: Option<Lane>) -> Self {
        let pick = |lane: Lane| {
            if only.map_or(true, |selected| selected == lane) {
                Some(board.lane(lane))
            } else {
                None
            }
        };
        Self {
            urgent: pick(Lane::Urgent),
            normal: pick(Lane::Normal),
            completed: pick(Lane::Completed),
        }
    }
}

#[derive(Serialize)]
struct CountOutput {
    total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    lane: Option<Lane>,
    lanes: LaneCounts,
}

#[derive(Serialize)]
struct ReplayOutput<'a> {
    applied: usize,
    board: BoardOutput<'a>,
}
