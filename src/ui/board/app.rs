use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::debug;

use crate::config::BoardConfig;
use crate::error::{Error, Result};
use crate::store::TaskStore;
use crate::task::{TaskFlag, TaskId, TaskRecord};
use crate::view::{self, Board, Lane, LaneCounts};

use super::editor::{EditorAction, EditorState};
use super::view as render;

const EVENT_POLL_MS: u64 = 250;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StatusKind {
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub(crate) struct DeleteConfirmState {
    pub(crate) task_id: TaskId,
    pub(crate) title: String,
}

pub struct AppState {
    store: TaskStore,
    config: BoardConfig,
    focus: Lane,
    selected: [usize; 3],
    pub(crate) editor: Option<EditorState>,
    pub(crate) delete_confirm: Option<DeleteConfirmState>,
    status: Option<(String, StatusKind)>,
    viewport_width: u16,
}

impl AppState {
    pub fn new(store: TaskStore, config: BoardConfig) -> Self {
        Self {
            store,
            config,
            focus: Lane::Normal,
            selected: [0; 3],
            editor: None,
            delete_confirm: None,
            status: None,
            viewport_width: 0,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn focus(&self) -> Lane {
        self.focus
    }

    pub(crate) fn selected_index(&self, lane: Lane) -> usize {
        self.selected[lane.index()]
    }

    pub fn board(&self) -> Board<'_> {
        Board::new(self.store.tasks())
    }

    pub fn counts(&self) -> LaneCounts {
        self.board().counts()
    }

    pub fn selected_task(&self) -> Option<&TaskRecord> {
        view::in_lane(self.store.tasks(), self.focus)
            .get(self.selected_index(self.focus))
            .copied()
    }

    pub(crate) fn is_narrow(&self) -> bool {
        self.viewport_width < self.config.narrow_width
    }

    pub(crate) fn update_viewport(&mut self, width: u16) {
        self.viewport_width = width;
    }

    pub(crate) fn status_line(&self) -> Option<(&str, StatusKind)> {
        self.status
            .as_ref()
            .map(|(message, kind)| (message.as_str(), *kind))
    }

    pub(crate) fn footer_hint(&self) -> &'static str {
        if self.editor.is_some() {
            "tab next field  enter save  esc cancel"
        } else if self.delete_confirm.is_some() {
            "y confirm  n cancel"
        } else {
            "a add  u urgent  c complete  d delete  h/l lane  j/k move  q quit"
        }
    }

    fn set_info(&mut self, message: String) {
        self.status = Some((message, StatusKind::Info));
    }

    fn set_error(&mut self, message: String) {
        self.status = Some((message, StatusKind::Error));
    }

    /// Handle one key press. Returns true when the board should close.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }

        if let Some(confirm) = self.delete_confirm.take() {
            match key.code {
                KeyCode::Char('y') | KeyCode::Enter => self.delete(confirm.task_id),
                KeyCode::Char('n') | KeyCode::Char('q') | KeyCode::Esc => {
                    self.set_info("cancelled".to_string());
                }
                _ => self.delete_confirm = Some(confirm),
            }
            return false;
        }

        if let Some(mut editor) = self.editor.take() {
            match editor.handle_key(key) {
                EditorAction::None => self.editor = Some(editor),
                EditorAction::Cancel => self.set_info("cancelled".to_string()),
                EditorAction::Submit => match editor.build_submit() {
                    Ok(submit) => self.add(submit.title, submit.description),
                    Err(err) => {
                        editor.set_error(err);
                        self.editor = Some(editor);
                    }
                },
            }
            return false;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('a') => {
                self.status = None;
                self.editor = Some(EditorState::new_task());
            }
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => {
                self.focus = self.focus.prev()
            }
            KeyCode::Char('j') | KeyCode::Down => self.move_selection(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection(-1),
            KeyCode::Char('g') | KeyCode::Home => self.selected[self.focus.index()] = 0,
            KeyCode::Char('G') | KeyCode::End => {
                let len = self.lane_len(self.focus);
                self.selected[self.focus.index()] = len.saturating_sub(1);
            }
            KeyCode::Char('u') => self.toggle_selected(TaskFlag::Urgent),
            KeyCode::Char('c') | KeyCode::Char(' ') => self.toggle_selected(TaskFlag::Completed),
            KeyCode::Char('d') | KeyCode::Delete => self.request_delete(),
            _ => {}
        }
        false
    }

    fn lane_len(&self, lane: Lane) -> usize {
        self.counts().get(lane)
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.lane_len(self.focus);
        if len == 0 {
            return;
        }
        let idx = self.focus.index();
        let next = (self.selected[idx] as isize + delta).clamp(0, len as isize - 1);
        self.selected[idx] = next as usize;
    }

    fn clamp_selection(&mut self) {
        for lane in Lane::ALL {
            let len = self.lane_len(lane);
            let idx = lane.index();
            self.selected[idx] = self.selected[idx].min(len.saturating_sub(1));
        }
    }

    fn add(&mut self, title: String, description: String) {
        self.store.add(title, description);
        if let Some(task) = self.store.tasks().as_slice().last() {
            let lane = Lane::of(task);
            let message = format!("added {}", task.title);
            self.focus = lane;
            self.selected[lane.index()] = self.lane_len(lane).saturating_sub(1);
            self.set_info(message);
        }
    }

    fn toggle_selected(&mut self, flag: TaskFlag) {
        let Some(id) = self.selected_task().map(|task| task.id) else {
            self.set_error("no task selected".to_string());
            return;
        };
        self.store.toggle(id, flag);
        self.clamp_selection();
        let message = match self.store.get(id) {
            Some(task) if task.flag(flag) => format!("marked {}", flag),
            Some(_) => format!("cleared {}", flag),
            None => String::new(),
        };
        self.set_info(message);
    }

    fn request_delete(&mut self) {
        let Some(task) = self.selected_task() else {
            self.set_error("no task selected".to_string());
            return;
        };
        let confirm = DeleteConfirmState {
            task_id: task.id,
            title: task.title.clone(),
        };
        if self.config.confirm_delete {
            self.delete_confirm = Some(confirm);
        } else {
            self.delete(confirm.task_id);
        }
    }

    fn delete(&mut self, id: TaskId) {
        self.store.remove(id);
        self.clamp_selection();
        self.set_info(format!("deleted task {id}"));
    }
}

/// Run the interactive board until the user quits.
pub fn run(store: TaskStore, config: BoardConfig) -> Result<()> {
    let mut app = AppState::new(store, config);
    run_terminal(&mut app)?;
    debug!(tasks = app.store().len(), "board closed");
    Ok(())
}

fn run_terminal(app: &mut AppState) -> Result<()> {
    enable_raw_mode().map_err(terminal_error)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(terminal_error)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(terminal_error)?;
    let size = terminal.size().map_err(terminal_error)?;
    app.update_viewport(size.width);

    let result = run_loop(&mut terminal, app);

    disable_raw_mode().map_err(terminal_error)?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(terminal_error)?;
    terminal.show_cursor().map_err(terminal_error)?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    let mut dirty = true;
    loop {
        if dirty {
            terminal
                .draw(|frame| {
                    app.update_viewport(frame.size().width);
                    render::render(frame, app);
                })
                .map_err(terminal_error)?;
            dirty = false;
        }

        if event::poll(Duration::from_millis(EVENT_POLL_MS)).map_err(terminal_error)? {
            match event::read().map_err(terminal_error)? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key) {
                        break;
                    }
                    dirty = true;
                }
                Event::Resize(width, _) => {
                    app.update_viewport(width);
                    dirty = true;
                }
                _ => {}
            }
        }
    }
    Ok(())
}

fn terminal_error(err: io::Error) -> Error {
    Error::Terminal(err.to_string())
}
