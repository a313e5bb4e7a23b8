//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the active
//! view.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveView, App};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.on_tick(Instant::now());
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let now = Instant::now();

    // Global keys (work everywhere)
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return Ok(());
        }
        KeyCode::Tab => {
            app.switch_view(app.active_view.next(), now);
            return Ok(());
        }
        KeyCode::Char('1') => {
            app.switch_view(ActiveView::Timer, now);
            return Ok(());
        }
        KeyCode::Char('2') => {
            app.switch_view(ActiveView::Checklist, now);
            return Ok(());
        }
        KeyCode::Char('3') => {
            app.switch_view(ActiveView::Contacts, now);
            return Ok(());
        }
        _ => {}
    }

    match app.active_view {
        ActiveView::Timer => handle_timer_key(app, key),
        ActiveView::Checklist => handle_checklist_key(app, key),
        ActiveView::Contacts => handle_contacts_key(app, key),
    }

    Ok(())
}

fn handle_timer_key(app: &mut App, key: KeyEvent) {
    if let KeyCode::Char('s') = key.code {
        app.start_timer_now();
    }
}

fn handle_checklist_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            let count = app.tasks().len();
            app.move_down(count);
        }
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected_task(),
        _ => {}
    }
}

fn handle_contacts_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(crate::models::ContactRole::ALL.len()),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Enter | KeyCode::Char('d') => app.dial_selected_contact(),
        _ => {}
    }
}
