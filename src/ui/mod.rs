//! Terminal rendering. Consumes an immutable [`Snapshot`] per frame; the
//! simulation never depends on anything in here.

mod play_field;

use crate::game_loop::Snapshot;
use crate::game_state::Screen;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Layout areas for the playing screen.
struct GameLayout {
    /// Play field area, left side.
    content: Rect,
    /// Two status lines under the field.
    status_bar: Rect,
    /// Info panel, right side.
    info_panel: Rect,
}

/// Top-level draw dispatch.
pub fn draw(frame: &mut Frame, snap: &Snapshot) {
    let area = frame.size();
    match snap.screen {
        Screen::Menu => render_menu(frame, area, snap),
        Screen::Playing | Screen::Paused | Screen::GameOver | Screen::Win => {
            let layout = create_game_layout(frame, area);
            play_field::render_play_field(frame, layout.content, snap);
            play_field::render_info_panel(frame, layout.info_panel, snap);
            render_status_bar_content(frame, layout.status_bar, snap);

            match snap.screen {
                Screen::Paused => render_pause_overlay(frame, area),
                Screen::GameOver => render_end_overlay(frame, area, snap, false),
                Screen::Win => render_end_overlay(frame, area, snap, true),
                _ => {}
            }
        }
    }
}

/// Outer border plus the content / status-bar / info-panel split.
fn create_game_layout(frame: &mut Frame, area: Rect) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Slither ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightGreen));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(24), Constraint::Length(20)])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(12), Constraint::Length(2)])
        .split(h_chunks[0]);

    GameLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// Two-line status bar: status message plus key hints.
fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }
        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    match snap.screen {
        Screen::Paused => render_status_bar(
            frame,
            area,
            "Paused",
            Color::Yellow,
            &[("[P]", "Resume"), ("[Q]", "Quit")],
        ),
        Screen::GameOver | Screen::Win => render_status_bar(
            frame,
            area,
            "Game over",
            Color::DarkGray,
            &[("[Space]", "Menu"), ("[Q]", "Quit")],
        ),
        _ => render_status_bar(
            frame,
            area,
            "Slither!",
            Color::Green,
            &[
                ("[Arrows]", "Move"),
                ("[P]", "Pause"),
                ("[M]", "Mute"),
                ("[Q]", "Quit"),
            ],
        ),
    }
}

/// Centered modal with a colored border.
fn render_modal(frame: &mut Frame, area: Rect, color: Color, title: &str, lines: Vec<Line>) {
    let modal_width = 40u16.min(area.width);
    let modal_height = (lines.len() as u16 + 2).min(area.height);
    let x = area.x + (area.width.saturating_sub(modal_width)) / 2;
    let y = area.y + (area.height.saturating_sub(modal_height)) / 2;
    let modal_area = Rect::new(x, y, modal_width, modal_height);

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .title(title.to_string());
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

fn render_menu(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightGreen));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mute_hint = if snap.muted { "Sound: off" } else { "Sound: on" };
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "S L I T H E R",
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("High score: {}", snap.high_score),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            mute_hint,
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Space] Start   [M] Mute   [Q] Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let content_height = lines.len() as u16;
    let y = inner.y + (inner.height.saturating_sub(content_height)) / 2;
    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, Rect::new(inner.x, y, inner.width, content_height));
}

fn render_pause_overlay(frame: &mut Frame, area: Rect) {
    render_modal(
        frame,
        area,
        Color::Yellow,
        " Paused ",
        vec![
            Line::from(""),
            Line::from(Span::styled("Game paused", Style::default().fg(Color::White))),
            Line::from(Span::styled(
                "[P] Resume",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
        ],
    );
}

fn render_end_overlay(frame: &mut Frame, area: Rect, snap: &Snapshot, won: bool) {
    let (color, title, message) = if won {
        (
            Color::Green,
            " Victory ",
            "The board is full. A perfect game!",
        )
    } else {
        (Color::Red, " Game Over ", "The snake has fallen.")
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        Line::from(Span::styled(
            format!("Score: {}   Level: {}", snap.score, snap.level),
            Style::default().fg(Color::Cyan),
        )),
    ];
    if snap.new_record {
        lines.push(Line::from(Span::styled(
            format!("New record! {}", snap.high_score),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            format!("High score: {}", snap.high_score),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Space] Menu",
        Style::default().fg(Color::DarkGray),
    )));

    render_modal(frame, area, color, title, lines);
}
