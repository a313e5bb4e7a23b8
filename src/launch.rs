//! Hand-off to the platform dialer
//!
//! Contacts are dialed by opening a `tel:` URI with whatever handler the
//! system has registered.

use std::cell::RefCell;

use crate::error::{BirthwatchError, BirthwatchResult};

/// Opens URIs outside the application
pub trait Launcher {
    fn launch(&self, uri: &str) -> BirthwatchResult<()>;
}

/// Opens URIs with the system handler
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, uri: &str) -> BirthwatchResult<()> {
        open::that(uri).map_err(|e| BirthwatchError::Launch(format!("{}: {}", uri, e)))
    }
}

/// Records URIs instead of opening them
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    launched: RefCell<Vec<String>>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn launched(&self) -> Vec<String> {
        self.launched.borrow().clone()
    }
}

impl Launcher for RecordingLauncher {
    fn launch(&self, uri: &str) -> BirthwatchResult<()> {
        self.launched.borrow_mut().push(uri.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_launcher() {
        let launcher = RecordingLauncher::new();
        launcher.launch("tel:123").unwrap();
        launcher.launch("tel:456").unwrap();
        assert_eq!(launcher.launched(), vec!["tel:123", "tel:456"]);
    }
}
