//! Timer view
//!
//! Shows the time since the waters broke, colored by warning level.

use chrono::Local;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::WarningLevel;
use crate::services::ElapsedTimeMonitor;
use crate::tui::app::App;
use crate::tui::layout::centered;

pub fn level_color(level: WarningLevel) -> Color {
    match level {
        WarningLevel::None => Color::Green,
        WarningLevel::Elevated => Color::Yellow,
        WarningLevel::Critical => Color::Red,
    }
}

/// Render the timer view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Since the waters broke ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = match app.reading {
        None => vec![
            Line::from("Timer not started."),
            Line::from(""),
            Line::from(Span::styled(
                "Press 's' when the waters break",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        Some(reading) if !reading.elapsed.started => vec![
            Line::from("00:00:00"),
            Line::from(Span::styled(
                "Start time is in the future",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        Some(reading) => {
            let color = level_color(reading.level);
            let mut lines = vec![
                Line::from(Span::styled(
                    reading.elapsed.to_string(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(reading.level.advice(), Style::default().fg(color))),
            ];

            let started = ElapsedTimeMonitor::from_settings(&app.storage.settings)
                .ok()
                .flatten()
                .and_then(|m| m.reference_time());
            if let Some(started) = started {
                let format = app.settings.datetime_format();
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("Started {}", started.with_timezone(&Local).format(&format)),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines
        }
    };

    let height = lines.len() as u16;
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered(inner, inner.width, height));
}
