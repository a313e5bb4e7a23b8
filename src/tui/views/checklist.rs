//! Checklist view

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::tui::app::App;

/// Render the checklist view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let tasks = app.tasks();
    let done = tasks.iter().filter(|t| t.done).count();

    let block = Block::default()
        .title(format!(" Checklist ({}/{}) ", done, tasks.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let items: Vec<ListItem> = tasks
        .iter()
        .map(|task| {
            let (mark, style) = if task.done {
                ("[x] ", Style::default().fg(Color::DarkGray))
            } else {
                ("[ ] ", Style::default())
            };
            ListItem::new(Line::from(vec![
                Span::styled(mark, style),
                Span::styled(task.label.clone(), style),
                Span::styled(
                    format!("  {}", task.group),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if !tasks.is_empty() {
        state.select(Some(app.selected_task_index.min(tasks.len() - 1)));
    }

    frame.render_stateful_widget(list, area, &mut state);
}
