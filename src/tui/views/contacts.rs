//! Contacts view

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::services::ContactService;
use crate::tui::app::App;

/// Render the contacts view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let contacts = ContactService::new(app.storage).list().unwrap_or_default();

    let block = Block::default()
        .title(" Emergency contacts ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let header = Row::new(vec![
        Cell::from("Role"),
        Cell::from("Name"),
        Cell::from("Phone"),
    ])
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = contacts
        .iter()
        .map(|c| {
            Row::new(vec![
                Cell::from(c.role.label()),
                Cell::from(c.name.clone().unwrap_or_default()),
                Cell::from(c.phone.clone().unwrap_or_else(|| "(not set)".to_string())),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Min(20),
        Constraint::Length(20),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    state.select(Some(app.selected_contact_index));

    frame.render_stateful_widget(table, area, &mut state);
}
