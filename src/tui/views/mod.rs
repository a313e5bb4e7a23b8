//! TUI Views module
//!
//! Contains the main views (timer, checklist, contacts) as well as the view
//! tabs and the status bar.

pub mod checklist;
pub mod contacts;
pub mod status_bar;
pub mod timer;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

use super::app::{ActiveView, App};
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    render_tabs(frame, app, layout.tabs);

    match app.active_view {
        ActiveView::Timer => timer::render(frame, app, layout.main),
        ActiveView::Checklist => checklist::render(frame, app, layout.main),
        ActiveView::Contacts => contacts::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = ActiveView::ALL
        .iter()
        .map(|view| Line::from(format!(" {} {} ", view.index() + 1, view.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Birthwatch ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        )
        .select(app.active_view.index())
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}
