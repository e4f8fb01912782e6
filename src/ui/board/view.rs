use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::task::TaskRecord;
use crate::view::{Board, Lane};

use super::app::{AppState, DeleteConfirmState, StatusKind};
use super::editor::EditorState;

const LABEL_WIDTH: usize = 12;
const COLOR_TEXT: Color = Color::Rgb(234, 236, 239);
const COLOR_MUTED: Color = Color::Rgb(160, 165, 172);
const COLOR_MUTED_DARK: Color = Color::Rgb(118, 124, 130);
const COLOR_BG_MUTED: Color = Color::Rgb(52, 56, 60);
const COLOR_INFO: Color = Color::Rgb(116, 198, 219);
const COLOR_WARNING: Color = Color::Rgb(244, 200, 98);
const COLOR_ERROR: Color = Color::Rgb(255, 107, 107);
const COLOR_SUCCESS: Color = Color::Rgb(126, 210, 146);
const COLOR_ACCENT: Color = Color::Rgb(122, 170, 255);

pub fn render(frame: &mut Frame, app: &AppState) {
    let area = frame.size();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(4),
            ]
            .as_ref(),
        )
        .split(area);

    let board = app.board();
    render_header(frame, app, &board, chunks[0]);

    if app.is_narrow() {
        render_lane(frame, app, &board, app.focus(), chunks[1]);
    } else {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                [
                    Constraint::Ratio(1, 3),
                    Constraint::Ratio(1, 3),
                    Constraint::Ratio(1, 3),
                ]
                .as_ref(),
            )
            .split(chunks[1]);
        for lane in Lane::ALL {
            render_lane(frame, app, &board, lane, columns[lane.index()]);
        }
    }

    render_footer(frame, app, chunks[2]);

    if let Some(editor) = app.editor.as_ref() {
        render_editor_modal(frame, area, editor);
    }
    if let Some(state) = app.delete_confirm.as_ref() {
        render_delete_confirm_modal(frame, area, state);
    }
}

fn render_header(frame: &mut Frame, app: &AppState, board: &Board<'_>, area: Rect) {
    let counts = board.counts();
    let mut spans = vec![Span::styled(
        "Todo Board",
        Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
    )];
    for lane in Lane::ALL {
        spans.push(Span::styled("  ", Style::default().fg(COLOR_MUTED_DARK)));
        let text = format!("{} ({})", lane.title(), counts.get(lane));
        let style = if lane == app.focus() {
            Style::default()
                .fg(lane_color(lane))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(COLOR_MUTED)
        };
        spans.push(Span::styled(text, style));
    }

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(COLOR_BG_MUTED)),
    );
    frame.render_widget(widget, area);
}

fn render_lane(frame: &mut Frame, app: &AppState, board: &Board<'_>, lane: Lane, area: Rect) {
    let tasks = board.lane(lane);
    let focused = lane == app.focus();
    let selected = app.selected_index(lane);
    let width = area.width.saturating_sub(2) as usize;
    let visible = area.height.saturating_sub(2) as usize;
    let offset = if focused && visible > 0 && selected >= visible {
        selected + 1 - visible
    } else {
        0
    };

    let mut lines: Vec<Line<'static>> = Vec::new();
    if tasks.is_empty() {
        lines.push(Line::from(Span::styled(
            "(empty)",
            Style::default().fg(COLOR_MUTED_DARK),
        )));
    }
    for (idx, task) in tasks.iter().enumerate().skip(offset).take(visible.max(1)) {
        lines.push(render_task_row(task, focused && idx == selected, width));
    }

    let border = if focused {
        Style::default().fg(lane_color(lane))
    } else {
        Style::default().fg(COLOR_BG_MUTED)
    };
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!("{} ({})", lane.title(), tasks.len())),
    );
    frame.render_widget(widget, area);
}

fn render_task_row(task: &TaskRecord, selected: bool, width: usize) -> Line<'static> {
    let marker = if task.is_completed { "[x] " } else { "[ ] " };
    let mut spans = vec![Span::styled(marker, Style::default().fg(COLOR_MUTED))];
    let urgent_tag = task.is_completed && task.is_urgent;
    let tag_width = if urgent_tag { 2 } else { 0 };
    let title_width = width.saturating_sub(marker.len() + tag_width);
    let mut title_style = if task.is_completed {
        Style::default()
            .fg(COLOR_MUTED)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(COLOR_TEXT)
    };
    if selected {
        title_style = title_style.add_modifier(Modifier::REVERSED);
    }
    spans.push(Span::styled(truncate_text(&task.title, title_width), title_style));
    if urgent_tag {
        spans.push(Span::styled(" !", Style::default().fg(COLOR_ERROR)));
    }
    Line::from(spans)
}

fn render_footer(frame: &mut Frame, app: &AppState, area: Rect) {
    let hint_span = Span::styled(app.footer_hint(), Style::default().fg(COLOR_INFO));
    let line = if let Some((status, kind)) = app.status_line() {
        let status_style = match kind {
            StatusKind::Error => Style::default()
                .fg(COLOR_ERROR)
                .add_modifier(Modifier::BOLD),
            StatusKind::Info => Style::default().fg(COLOR_WARNING),
        };
        Line::from(vec![
            hint_span,
            Span::raw("  |  "),
            Span::styled(status.to_string(), status_style),
        ])
    } else {
        Line::from(hint_span)
    };

    let detail = match app.selected_task() {
        Some(task) if !task.description.trim().is_empty() => Line::from(vec![
            Span::styled(format!("#{} ", task.id), Style::default().fg(COLOR_ACCENT)),
            Span::styled(task.description.clone(), Style::default().fg(COLOR_TEXT)),
        ]),
        Some(task) => Line::from(vec![
            Span::styled(format!("#{} ", task.id), Style::default().fg(COLOR_ACCENT)),
            Span::styled("no description", Style::default().fg(COLOR_MUTED_DARK)),
        ]),
        None => Line::from(""),
    };

    let widget = Paragraph::new(vec![detail, line])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(COLOR_BG_MUTED)),
        );
    frame.render_widget(widget, area);
}

fn render_editor_modal(frame: &mut Frame, area: Rect, editor: &EditorState) {
    let content_width = area.width.saturating_sub(8).min(72);
    let modal = centered_rect(content_width, 9, area);
    frame.render_widget(Clear, modal);

    let value_width = (content_width as usize).saturating_sub(LABEL_WIDTH + 4);
    let mut lines: Vec<Line<'static>> = Vec::new();
    for (idx, field) in editor.fields().iter().enumerate() {
        let active = idx == editor.active_index();
        let label_style = if active {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_MUTED)
        };
        let value = if active {
            format!("{}_", tail_text(&field.value, value_width.saturating_sub(1)))
        } else if field.value.is_empty() && field.required {
            "<required>".to_string()
        } else {
            truncate_text(&field.value, value_width)
        };
        let value_style = if field.value.is_empty() && !active {
            Style::default().fg(COLOR_MUTED_DARK)
        } else {
            Style::default().fg(COLOR_TEXT)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<width$}", field.label, width = LABEL_WIDTH), label_style),
            Span::styled(value, value_style),
        ]));
    }
    lines.push(Line::from(""));
    if let Some(error) = editor.error() {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(COLOR_ERROR),
        )));
    } else {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "tab next  enter save  ctrl-u clear  esc cancel",
        Style::default().fg(COLOR_MUTED_DARK),
    )));

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("New Task"))
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, modal);
}

fn render_delete_confirm_modal(frame: &mut Frame, area: Rect, state: &DeleteConfirmState) {
    let content_width = area.width.saturating_sub(8).min(64);
    let modal = centered_rect(content_width, 7, area);
    frame.render_widget(Clear, modal);

    let title_width = (content_width as usize).saturating_sub(10);
    let lines = vec![
        Line::from(Span::styled(
            "Delete task?",
            Style::default()
                .fg(COLOR_ERROR)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("#{} ", state.task_id), Style::default().fg(COLOR_ACCENT)),
            Span::styled(
                truncate_text(&state.title, title_width),
                Style::default().fg(COLOR_TEXT),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "y/enter confirm  n/esc cancel",
            Style::default().fg(COLOR_MUTED_DARK),
        )),
    ];

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Delete Task"))
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, modal);
}

fn lane_color(lane: Lane) -> Color {
    match lane {
        Lane::Urgent => COLOR_ERROR,
        Lane::Normal => COLOR_INFO,
        Lane::Completed => COLOR_SUCCESS,
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

fn truncate_text(value: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let count = value.chars().count();
    if count <= width {
        return value.to_string();
    }
    if width <= 3 {
        return value.chars().take(width).collect();
    }
    let mut out: String = value.chars().take(width - 3).collect();
    out.push_str("...");
    out
}

/// Last `width` characters, so the cursor end of a long input stays visible.
fn tail_text(value: &str, width: usize) -> String {
    let count = value.chars().count();
    if count <= width {
        return value.to_string();
    }
    value.chars().skip(count - width).collect()
}
