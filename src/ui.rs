//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::{App, NoticeLevel};
use crate::config::{DrawMode, UiSettings};

/// Key bindings in the order they are shown in the footer.
const CONTROLS: [(&str, &str); 7] = [
    ("d/enter/space", "draw"),
    ("r", "reset pool"),
    ("u", "used tracks"),
    ("a", "all tracks"),
    ("m", "draw mode"),
    ("i", "image"),
    ("q/esc", "quit"),
];

const LEFT_PAD: Padding = Padding {
    left: 1,
    right: 0,
    top: 0,
    bottom: 0,
};

/// Render the controls help text.
fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{}] {}", k, v))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Build the status box text.
fn status_text(app: &App) -> String {
    let mut parts: Vec<String> = vec![
        app.status_line(),
        format!("Mode: {}", app.mode.label()),
        format!("Dir: {}", app.library_dir.display()),
    ];
    if let Some(notice) = &app.notice {
        parts.push(notice.text.clone());
    } else if app.mode == DrawMode::Pool && app.pool.is_exhausted() {
        parts.push("Pool empty: press r to reset".to_string());
    }
    parts.join(" • ")
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(frame: &mut Frame, app: &mut App, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" trackdraw ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Status box
    let status_style = match app.notice.as_ref().map(|n| n.level) {
        Some(NoticeLevel::Warning) => Style::default().fg(Color::Yellow),
        _ => Style::default(),
    };
    let status = Paragraph::new(status_text(app))
        .style(status_style)
        .block(Block::bordered().padding(LEFT_PAD).title(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[1]);

    if app.has_tracks() {
        draw_main(frame, app, chunks[2]);
    } else {
        draw_empty_library(frame, app, chunks[2]);
    }

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(LEFT_PAD),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}

/// Track lists on the left, the drawn track on the right.
fn draw_main(frame: &mut Frame, app: &mut App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
        .split(area);

    draw_lists(frame, app, columns[0]);
    draw_current(frame, app, columns[1]);
}

fn draw_lists(frame: &mut Frame, app: &App, area: Rect) {
    let status = app.pool.status();
    let used = status.used;
    let used_title = format!(" [u] used tracks ({}) ", used.len());
    let all_title = format!(" [a] all tracks ({}) ", app.pool.all_tracks().len());

    // Collapsed lists take a single bordered line, like a closed expander.
    let constraints = match (app.show_used, app.show_all) {
        (true, true) => [Constraint::Percentage(50), Constraint::Percentage(50)],
        (true, false) => [Constraint::Min(3), Constraint::Length(2)],
        (false, true) => [Constraint::Length(2), Constraint::Min(3)],
        (false, false) => [Constraint::Length(2), Constraint::Length(2)],
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let used_block = Block::default().borders(Borders::TOP).title(used_title);
    if app.show_used {
        let items: Vec<ListItem> = if used.is_empty() {
            vec![ListItem::new(Line::from("Nothing drawn yet.").italic())]
        } else {
            used.iter()
                .enumerate()
                .map(|(i, t)| ListItem::new(format!("{:>2}. {}", i + 1, t.name)))
                .collect()
        };
        // Keep the newest draw in view once the list outgrows its panel.
        let mut state = ListState::default();
        if !used.is_empty() {
            state.select(Some(used.len() - 1));
        }
        let list = List::new(items)
            .block(used_block)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_stateful_widget(list, rows[0], &mut state);
    } else {
        frame.render_widget(used_block, rows[0]);
    }

    let all_block = Block::default().borders(Borders::TOP).title(all_title);
    if app.show_all {
        let available = app.pool.available();
        let tracks = app.tracks_by_name();
        let selected = app
            .current()
            .and_then(|current| tracks.iter().position(|t| *t == current));
        let items: Vec<ListItem> = tracks
            .iter()
            .map(|t| {
                let item = ListItem::new(format!("• {}", t.name));
                // Drawn tracks are dimmed until the pool is reset.
                if available.contains(*t) {
                    item
                } else {
                    item.style(Style::default().add_modifier(Modifier::DIM))
                }
            })
            .collect();
        let mut state = ListState::default();
        state.select(selected);
        let list = List::new(items)
            .block(all_block)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_stateful_widget(list, rows[1], &mut state);
    } else {
        frame.render_widget(all_block, rows[1]);
    }
}

fn draw_current(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" selected track ")
        .padding(LEFT_PAD);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(track) = app.current().cloned() else {
        let placeholder = Paragraph::new(vec![
            Line::from(""),
            Line::from("Ready to roll?").bold(),
            Line::from(""),
            Line::from("Press d to draw a random track."),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(placeholder, inner);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let title = Paragraph::new(Line::from(track.name.clone()).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, rows[0]);

    if !app.show_image {
        let path = Paragraph::new(track.image_path.display().to_string())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(path, rows[1]);
    } else if let Some(err) = app.preview.error() {
        let err = Paragraph::new(format!("Error loading image: {err}"))
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true });
        frame.render_widget(err, rows[1]);
    } else {
        let image_area = rows[1];
        let lines = app
            .preview
            .lines(image_area.width, image_area.height)
            .to_vec();
        frame.render_widget(Paragraph::new(lines), image_area);
    }

    let caption = Paragraph::new(Line::from(vec![
        Span::raw("Track: "),
        Span::raw(track.name).italic(),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(caption, rows[2]);
}

fn draw_empty_library(frame: &mut Frame, app: &App, area: Rect) {
    let headline = match &app.library_error {
        Some(err) => format!("{err}. Make sure the folder exists and is readable."),
        None => format!(
            "No track images found. Add images to {}.",
            app.library_dir.display()
        ),
    };

    let body = Paragraph::new(vec![
        Line::from(headline).fg(Color::Yellow),
        Line::from(""),
        Line::from("Supported formats: JPG, JPEG, PNG, GIF, BMP, WEBP"),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" no tracks ")
            .padding(LEFT_PAD),
    )
    .wrap(Wrap { trim: true });
    frame.render_widget(body, area);
}
