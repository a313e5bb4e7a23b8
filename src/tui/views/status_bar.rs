//! Status bar view
//!
//! Shows the due date countdown, the latest status message and key hints.

use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::services::DueDateService;
use crate::tui::app::{ActiveView, App};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![];

    let status = DueDateService::new(app.storage)
        .status(Local::now().date_naive())
        .ok()
        .flatten();
    if let Some(status) = status {
        spans.push(Span::styled(
            format!(" {} ", status.gestational_age),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::raw(format!("{} days to due date", status.days_remaining)));
        spans.push(Span::raw(" │ "));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::styled(message.as_str(), Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(" │ "));
    }

    let hints = match app.active_view {
        ActiveView::Timer => "s:start  Tab:switch  q:quit",
        ActiveView::Checklist => "j/k:move  Space:toggle  Tab:switch  q:quit",
        ActiveView::Contacts => "j/k:move  Enter:call  Tab:switch  q:quit",
    };
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
