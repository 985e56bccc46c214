//! Play field rendering using half-block pixels.
//!
//! Each grid cell maps to a colored pixel; pairs of vertical pixels are
//! packed into one terminal row using the `▀` (upper half block) character
//! with fg=top, bg=bottom colors, which roughly squares the cells.

use crate::constants::GRID_SIZE;
use crate::game_loop::Snapshot;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const BORDER_H: char = '\u{2500}'; // ─
const BORDER_V: char = '\u{2502}'; // │
const BORDER_TL: char = '\u{250C}'; // ┌
const BORDER_TR: char = '\u{2510}'; // ┐
const BORDER_BL: char = '\u{2514}'; // └
const BORDER_BR: char = '\u{2518}'; // ┘
const HALF_TOP: char = '\u{2580}'; // ▀ — fg fills top half, bg fills bottom

const HEAD_COLOR: Color = Color::Rgb(100, 255, 100);
const BODY_BRIGHT: (f64, f64, f64) = (50.0, 220.0, 50.0);
const BODY_DIM: (f64, f64, f64) = (20.0, 80.0, 20.0);
const EMPTY_BG: Color = Color::Rgb(12, 12, 18);
const BORDER_COLOR: Color = Color::Rgb(80, 80, 80);

/// Gradient color for a body segment: bright at the head, dim at the tail.
fn body_color(index: usize, snake_len: usize) -> Color {
    let t = index as f64 / (snake_len - 1).max(1) as f64;
    let r = (BODY_BRIGHT.0 * (1.0 - t) + BODY_DIM.0 * t) as u8;
    let g = (BODY_BRIGHT.1 * (1.0 - t) + BODY_DIM.1 * t) as u8;
    let b = (BODY_BRIGHT.2 * (1.0 - t) + BODY_DIM.2 * t) as u8;
    Color::Rgb(r, g, b)
}

/// Food color modulated by the pulse animation (0..1).
fn food_color(pulse: f32) -> Color {
    let g = (60.0 + pulse * 60.0) as u8;
    let b = (30.0 + pulse * 40.0) as u8;
    Color::Rgb(255, g, b)
}

/// Field origin displacement for the death shake. The intensity decays
/// linearly in the session; here it just picks a jitter column offset.
fn shake_offset(shake: f32) -> i16 {
    if shake <= 0.0 {
        return 0;
    }
    // Alternate left/right as the intensity decays.
    let phase = (shake * 8.0) as i16;
    let magnitude = if shake > 0.5 { 1 } else { 0 };
    if phase % 2 == 0 {
        magnitude
    } else {
        -magnitude
    }
}

/// Render the play field. Tolerates `round == None` (between games the
/// screen is a menu, but a resize race can still draw an empty field).
pub fn render_play_field(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    if area.height < 3 || area.width < 5 {
        return;
    }

    let grid = GRID_SIZE as usize;

    // ── Build color grid (game coordinates) ─────────────────────
    let mut pixels: Vec<Vec<Option<Color>>> = vec![vec![None; grid]; grid];

    if let Some(round) = &snap.round {
        if let Some(food) = round.food {
            let (fx, fy) = (food.x as usize, food.y as usize);
            if fx < grid && fy < grid {
                pixels[fy][fx] = Some(food_color(snap.pulse));
            }
        }

        let snake_len = round.body.len();
        for (i, seg) in round.body.iter().enumerate() {
            let (sx, sy) = (seg.x as usize, seg.y as usize);
            if sx < grid && sy < grid {
                pixels[sy][sx] = Some(if i == 0 {
                    HEAD_COLOR
                } else {
                    body_color(i, snake_len)
                });
            }
        }
    }

    // ── Layout ──────────────────────────────────────────────────
    let content_rows = grid.div_ceil(2); // 2 game rows per terminal row
    let render_w = ((grid + 2) as u16).min(area.width);
    let inner_w = render_w as usize - 2;

    let centered_x = area.x + (area.width.saturating_sub(render_w)) / 2;
    let max_x = (area.x + area.width).saturating_sub(render_w);
    let x_off = (centered_x as i16 + shake_offset(snap.shake))
        .clamp(area.x as i16, max_x as i16) as u16;
    let y_off = area.y;

    // ── Top border with the score ───────────────────────────────
    {
        let score_val = snap.score.to_string();
        let label = "Score: ";
        let score_full_len = label.len() + score_val.len();
        let pad_before = inner_w.saturating_sub(score_full_len + 1);
        let pad_after = inner_w.saturating_sub(pad_before + score_full_len);

        let mut spans: Vec<Span> = Vec::new();
        spans.push(Span::styled(
            BORDER_TL.to_string(),
            Style::default().fg(BORDER_COLOR),
        ));
        if pad_before > 0 {
            let s: String = std::iter::repeat(BORDER_H).take(pad_before).collect();
            spans.push(Span::styled(s, Style::default().fg(BORDER_COLOR)));
        }
        spans.push(Span::styled(label, Style::default().fg(BORDER_COLOR)));
        spans.push(Span::styled(score_val, Style::default().fg(Color::White)));
        if pad_after > 0 {
            let s: String = std::iter::repeat(BORDER_H).take(pad_after).collect();
            spans.push(Span::styled(s, Style::default().fg(BORDER_COLOR)));
        }
        spans.push(Span::styled(
            BORDER_TR.to_string(),
            Style::default().fg(BORDER_COLOR),
        ));

        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_off, y_off, render_w, 1),
        );
    }

    // ── Content rows, two grid rows per terminal row ────────────
    let empty_row: Vec<Option<Color>> = vec![None; grid];
    for term_row in 0..content_rows {
        let top_gy = term_row * 2;
        let bot_gy = term_row * 2 + 1;
        let top_row = if top_gy < grid { &pixels[top_gy] } else { &empty_row };
        let bot_row = if bot_gy < grid { &pixels[bot_gy] } else { &empty_row };

        let mut spans: Vec<Span> = Vec::new();
        spans.push(Span::styled(
            BORDER_V.to_string(),
            Style::default().fg(BORDER_COLOR),
        ));

        // Batch consecutive cells with the same style into one span.
        let mut cur_fg = Color::Reset;
        let mut cur_bg = Color::Reset;
        let mut cur_text = String::new();
        for (&top_c, &bot_c) in top_row.iter().zip(bot_row.iter()) {
            let fg = top_c.unwrap_or(EMPTY_BG);
            let bg = bot_c.unwrap_or(EMPTY_BG);
            if fg != cur_fg || bg != cur_bg {
                if !cur_text.is_empty() {
                    spans.push(Span::styled(
                        std::mem::take(&mut cur_text),
                        Style::default().fg(cur_fg).bg(cur_bg),
                    ));
                }
                cur_fg = fg;
                cur_bg = bg;
            }
            cur_text.push(HALF_TOP);
        }
        if !cur_text.is_empty() {
            spans.push(Span::styled(
                cur_text,
                Style::default().fg(cur_fg).bg(cur_bg),
            ));
        }

        spans.push(Span::styled(
            BORDER_V.to_string(),
            Style::default().fg(BORDER_COLOR),
        ));

        let row_y = y_off + 1 + term_row as u16;
        if row_y < area.y + area.height {
            frame.render_widget(
                Paragraph::new(Line::from(spans)),
                Rect::new(x_off, row_y, render_w, 1),
            );
        }
    }

    // ── Bottom border ───────────────────────────────────────────
    let bot_y = y_off + 1 + content_rows as u16;
    if bot_y < area.y + area.height {
        let mut s = String::new();
        s.push(BORDER_BL);
        for _ in 0..inner_w {
            s.push(BORDER_H);
        }
        s.push(BORDER_BR);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                s,
                Style::default().fg(BORDER_COLOR),
            ))),
            Rect::new(x_off, bot_y, render_w, 1),
        );
    }
}

/// Right-hand info panel: score, level, high score, record flag.
pub fn render_info_panel(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    let block = ratatui::widgets::Block::default()
        .title(" Info ")
        .borders(ratatui::widgets::Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                snap.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Level: ", Style::default().fg(Color::DarkGray)),
            Span::styled(snap.level.to_string(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("Best:  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                snap.high_score.to_string(),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    if snap.new_record {
        lines.push(Line::from(Span::styled(
            "New record!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    }
    if snap.muted {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Muted",
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
