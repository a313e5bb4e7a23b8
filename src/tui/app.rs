//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! The timer view polls the monitor only while it is the active view.

use std::time::Instant;

use crate::config::settings::Settings;
use crate::launch::Launcher;
use crate::models::{Reading, Task};
use crate::services::{
    ChecklistService, Clock, ContactService, ElapsedTimeMonitor, PollTimer, SystemClock,
};
use crate::storage::Storage;

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Timer,
    Checklist,
    Contacts,
}

impl ActiveView {
    pub const ALL: [ActiveView; 3] = [ActiveView::Timer, ActiveView::Checklist, ActiveView::Contacts];

    pub fn title(self) -> &'static str {
        match self {
            ActiveView::Timer => "Timer",
            ActiveView::Checklist => "Checklist",
            ActiveView::Contacts => "Contacts",
        }
    }

    pub fn index(self) -> usize {
        match self {
            ActiveView::Timer => 0,
            ActiveView::Checklist => 1,
            ActiveView::Contacts => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    launcher: &'a dyn Launcher,

    clock: Box<dyn Clock + 'a>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Drives timer refreshes while the timer view is visible
    pub poll_timer: PollTimer,

    /// Latest timer reading; `None` until the timer is started
    pub reading: Option<Reading>,

    /// Selected task index in the checklist view
    pub selected_task_index: usize,

    /// Selected contact index in the contacts view
    pub selected_contact_index: usize,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance on the system clock
    pub fn new(storage: &'a Storage, settings: &'a Settings, launcher: &'a dyn Launcher) -> Self {
        Self::with_clock(storage, settings, launcher, Box::new(SystemClock))
    }

    pub fn with_clock(
        storage: &'a Storage,
        settings: &'a Settings,
        launcher: &'a dyn Launcher,
        clock: Box<dyn Clock + 'a>,
    ) -> Self {
        let mut app = Self {
            storage,
            settings,
            launcher,
            clock,
            should_quit: false,
            active_view: ActiveView::default(),
            poll_timer: PollTimer::new(settings.tick_rate()),
            reading: None,
            selected_task_index: 0,
            selected_contact_index: 0,
            status_message: None,
        };
        app.poll_timer.start(Instant::now());
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Switch views, starting or stopping timer polling as the timer view
    /// becomes visible or hidden
    pub fn switch_view(&mut self, view: ActiveView, now: Instant) {
        if view == self.active_view {
            return;
        }

        if self.active_view == ActiveView::Timer {
            self.poll_timer.stop();
        }
        self.active_view = view;
        if view == ActiveView::Timer {
            self.poll_timer.start(now);
        }
    }

    /// Handle a tick from the event loop
    pub fn on_tick(&mut self, now: Instant) {
        if self.poll_timer.poll_due(now) {
            self.refresh_timer();
        }
    }

    /// Recompute the timer reading from storage
    pub fn refresh_timer(&mut self) {
        self.reading = match ElapsedTimeMonitor::from_settings(&self.storage.settings) {
            Ok(Some(monitor)) => Some(monitor.poll_clock(self.clock.as_ref())),
            Ok(None) => None,
            Err(e) => {
                self.set_status(e.to_string());
                None
            }
        };
    }

    /// Record that the waters broke now, unless already recorded
    pub fn start_timer_now(&mut self) {
        match self.storage.settings.water_broke_at() {
            Ok(Some(_)) => self.set_status("Timer already running"),
            Ok(None) => {
                match self.storage.settings.set_water_broke_at(self.clock.now_ms()) {
                    Ok(()) => self.set_status("Timer started"),
                    Err(e) => self.set_status(e.to_string()),
                }
                self.refresh_timer();
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    pub fn tasks(&self) -> Vec<Task> {
        ChecklistService::new(self.storage).list().unwrap_or_default()
    }

    /// Toggle the selected task; an out-of-range selection is ignored
    pub fn toggle_selected_task(&mut self) {
        let service = ChecklistService::new(self.storage);
        if let Ok(task) = service.toggle_task(self.selected_task_index) {
            self.set_status(task.to_string());
        }
    }

    /// Dial the selected contact
    pub fn dial_selected_contact(&mut self) {
        let service = ContactService::new(self.storage);
        let contacts = service.list().unwrap_or_default();
        let Some(contact) = contacts.get(self.selected_contact_index) else {
            return;
        };

        match service.dial(contact.role, self.launcher) {
            Ok(uri) => self.set_status(format!("Calling {}", uri)),
            Err(e) => self.set_status(e.to_string()),
        }
    }

    /// Move selection up in the active list
    pub fn move_up(&mut self) {
        let index = self.selected_index_mut();
        *index = index.saturating_sub(1);
    }

    /// Move selection down in the active list of `count` items
    pub fn move_down(&mut self, count: usize) {
        let index = self.selected_index_mut();
        if *index + 1 < count {
            *index += 1;
        }
    }

    fn selected_index_mut(&mut self) -> &mut usize {
        match self.active_view {
            ActiveView::Contacts => &mut self.selected_contact_index,
            _ => &mut self.selected_task_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BirthwatchPaths;
    use crate::launch::RecordingLauncher;
    use crate::models::{ContactRole, WarningLevel};
    use crate::services::FixedClock;
    use crate::storage::initialize_storage;
    use tempfile::TempDir;

    const HOUR_MS: i64 = 3_600_000;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BirthwatchPaths::with_base_dir(temp_dir.path().to_path_buf());
        initialize_storage(&paths).unwrap();
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_poll_timer_follows_timer_view() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let launcher = RecordingLauncher::new();
        let mut app = App::new(&storage, &settings, &launcher);
        let now = Instant::now();

        assert!(app.poll_timer.is_running());
        app.switch_view(ActiveView::Checklist, now);
        assert!(!app.poll_timer.is_running());
        app.switch_view(ActiveView::Timer, now);
        assert!(app.poll_timer.is_running());
    }

    #[test]
    fn test_tick_refreshes_reading() {
        let (_temp_dir, storage) = create_test_storage();
        storage.settings.set_water_broke_at(0).unwrap();
        let settings = Settings::default();
        let launcher = RecordingLauncher::new();
        let clock = FixedClock::new(19 * HOUR_MS);
        let mut app = App::with_clock(&storage, &settings, &launcher, Box::new(clock));

        assert!(app.reading.is_none());
        app.on_tick(Instant::now());

        let reading = app.reading.unwrap();
        assert_eq!(reading.elapsed.hours, 19);
        assert_eq!(reading.level, WarningLevel::Elevated);
    }

    #[test]
    fn test_no_refresh_while_hidden() {
        let (_temp_dir, storage) = create_test_storage();
        storage.settings.set_water_broke_at(0).unwrap();
        let settings = Settings::default();
        let launcher = RecordingLauncher::new();
        let mut app = App::new(&storage, &settings, &launcher);

        app.switch_view(ActiveView::Contacts, Instant::now());
        app.on_tick(Instant::now());
        assert!(app.reading.is_none());
    }

    #[test]
    fn test_start_timer_now() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let launcher = RecordingLauncher::new();
        let clock = FixedClock::new(42 * HOUR_MS);
        let mut app = App::with_clock(&storage, &settings, &launcher, Box::new(clock));

        app.start_timer_now();
        assert_eq!(storage.settings.water_broke_at().unwrap(), Some(42 * HOUR_MS));
        assert_eq!(app.reading.unwrap().elapsed.total_seconds(), 0);

        app.start_timer_now();
        assert_eq!(app.status_message.as_deref(), Some("Timer already running"));
    }

    #[test]
    fn test_toggle_out_of_range_is_ignored() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let launcher = RecordingLauncher::new();
        let mut app = App::new(&storage, &settings, &launcher);

        app.selected_task_index = 10_000;
        let before = app.tasks();
        app.toggle_selected_task();
        assert_eq!(app.tasks(), before);
    }

    #[test]
    fn test_toggle_selected_task() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let launcher = RecordingLauncher::new();
        let mut app = App::new(&storage, &settings, &launcher);

        app.switch_view(ActiveView::Checklist, Instant::now());
        let count = app.tasks().len();
        app.move_down(count);
        app.toggle_selected_task();

        assert!(app.tasks()[1].done);
        assert!(!app.tasks()[0].done);
    }

    #[test]
    fn test_dial_selected_contact() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .settings
            .set_contact_phone(ContactRole::Hospital, Some("555 0100"))
            .unwrap();
        let settings = Settings::default();
        let launcher = RecordingLauncher::new();
        let mut app = App::new(&storage, &settings, &launcher);

        app.switch_view(ActiveView::Contacts, Instant::now());
        app.dial_selected_contact();

        assert_eq!(launcher.launched(), vec!["tel:555 0100"]);
    }

    #[test]
    fn test_move_bounds() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let launcher = RecordingLauncher::new();
        let mut app = App::new(&storage, &settings, &launcher);

        app.switch_view(ActiveView::Contacts, Instant::now());
        app.move_up();
        assert_eq!(app.selected_contact_index, 0);
        for _ in 0..10 {
            app.move_down(4);
        }
        assert_eq!(app.selected_contact_index, 3);
    }
}
