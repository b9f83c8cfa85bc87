//! Hangman screen - draws the engine's derived state, never mutates it
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine},
        Block, Borders, Paragraph, Wrap,
    },
    Frame,
};

use crate::core::surface::{DisplayList, DrawOp, Point, Surface};
use crate::hangman::HangmanEngine;

/// Vertical spacing of the scanlines used to fill rectangles
const FILL_STEP: f64 = 2.0;
const ARC_SEGMENTS: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
    Won,
    Lost,
}

/// One-line message shown under the board, the terminal's stand-in for an alert dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }

    fn style(&self) -> Style {
        match self.kind {
            NoticeKind::Info => Style::default().fg(Color::White),
            NoticeKind::Error => Style::default().fg(Color::Red),
            NoticeKind::Won => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            NoticeKind::Lost => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }
}

/// Everything the play screen needs for one frame
pub struct PlayView<'a> {
    pub engine: &'a HangmanEngine,
    pub surface: &'a DisplayList,
    pub input: &'a str,
    pub notice: Option<&'a Notice>,
}

pub struct HangmanRenderer;

impl HangmanRenderer {
    pub fn render(frame: &mut Frame, view: &PlayView) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Input
                Constraint::Length(3), // Notice
            ])
            .split(frame.area());

        let header = Paragraph::new("HANGMAN")
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(header, chunks[0]);

        let board = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[1]);

        Self::render_gallows(frame, view.surface, board[0]);
        Self::render_word(frame, view.engine, board[1]);
        Self::render_input(frame, view, chunks[2]);

        let notice = view
            .notice
            .map(|n| Paragraph::new(n.text.as_str()).style(n.style()))
            .unwrap_or_else(|| Paragraph::new(""))
            .block(Block::default().borders(Borders::ALL).title("Messages"))
            .wrap(Wrap { trim: true });
        frame.render_widget(notice, chunks[3]);
    }

    fn render_gallows(frame: &mut Frame, surface: &DisplayList, area: Rect) {
        let canvas = Canvas::default()
            .block(Block::default().borders(Borders::ALL).title("Gallows"))
            .marker(Marker::Braille)
            .x_bounds([0.0, surface.width()])
            .y_bounds([0.0, surface.height()])
            .paint(|ctx| paint(ctx, surface, Color::White));
        frame.render_widget(canvas, area);
    }

    fn render_word(frame: &mut Frame, engine: &HangmanEngine, area: Rect) {
        let tries = engine.remaining_guesses() as usize;
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                engine.word_display(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(engine.guesses_display()),
            Line::from(""),
            Line::from(vec![
                Span::raw(format!("Tries left: {} ", tries)),
                Span::styled("❤".repeat(tries), Style::default().fg(Color::Red)),
            ]),
        ];

        let panel = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Word"))
            .alignment(Alignment::Center);
        frame.render_widget(panel, area);
    }

    fn render_input(frame: &mut Frame, view: &PlayView, area: Rect) {
        let (text, hint) = if view.engine.is_over() {
            (String::new(), "[R] New round  [Q] Quit")
        } else {
            (format!("> {}", view.input), "Type a letter, Enter to guess, Esc to quit")
        };

        let input = Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(hint));
        frame.render_widget(input, area);

        if !view.engine.is_over() {
            // Border + "> " prefix
            let x = area.x + 3 + view.input.chars().count() as u16;
            frame.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
        }
    }
}

/// Replay a display list onto a ratatui canvas. Surface y grows downwards,
/// canvas y grows upwards, hence the flip.
fn paint(ctx: &mut Context, surface: &DisplayList, color: Color) {
    let height = surface.height();
    let flip = |p: Point| Point::new(p.x, height - p.y);
    let mut segment = |a: Point, b: Point| {
        let (a, b) = (flip(a), flip(b));
        ctx.draw(&CanvasLine::new(a.x, a.y, b.x, b.y, color));
    };

    for op in surface.ops() {
        match op {
            DrawOp::FillRect { x, y, width, height } => {
                let mut row = *y;
                while row <= y + height {
                    segment(Point::new(*x, row), Point::new(x + width, row));
                    row += FILL_STEP;
                }
            }
            DrawOp::StrokeArc { cx, cy, radius, start_angle, end_angle } => {
                let points = arc_points(Point::new(*cx, *cy), *radius, *start_angle, *end_angle);
                for pair in points.windows(2) {
                    segment(pair[0], pair[1]);
                }
            }
            DrawOp::StrokePath(points) => {
                for pair in points.windows(2) {
                    segment(pair[0], pair[1]);
                }
            }
            // A braille canvas has no way to erase a sub-region.
            DrawOp::Clear { .. } => {}
        }
    }
}

fn arc_points(center: Point, radius: f64, start: f64, end: f64) -> Vec<Point> {
    let sweep = end - start;
    (0..=ARC_SEGMENTS)
        .map(|i| {
            let angle = start + sweep * i as f64 / ARC_SEGMENTS as f64;
            Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect()
}
