//! Emergency contact service
//!
//! Contacts live in the `contacts` settings namespace. Edits follow the same
//! rule as the setup wizard: a blank value leaves the stored one alone.

use crate::error::{BirthwatchError, BirthwatchResult};
use crate::launch::Launcher;
use crate::models::{ContactRole, EmergencyContact};
use crate::storage::Storage;

/// Service for emergency contacts
pub struct ContactService<'a> {
    storage: &'a Storage,
}

impl<'a> ContactService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Every role in display order, set or not
    pub fn list(&self) -> BirthwatchResult<Vec<EmergencyContact>> {
        ContactRole::ALL
            .iter()
            .map(|role| self.storage.settings.contact(*role))
            .collect()
    }

    pub fn get(&self, role: ContactRole) -> BirthwatchResult<EmergencyContact> {
        self.storage.settings.contact(role)
    }

    /// Update a contact; blank fields keep their stored values
    pub fn set(
        &self,
        role: ContactRole,
        name: Option<&str>,
        phone: Option<&str>,
    ) -> BirthwatchResult<EmergencyContact> {
        self.storage.settings.set_contact_name(role, name)?;
        self.storage.settings.set_contact_phone(role, phone)?;
        self.storage.settings.contact(role)
    }

    /// Open the dialer for a contact
    ///
    /// Returns the `tel:` URI that was launched.
    pub fn dial(&self, role: ContactRole, launcher: &dyn Launcher) -> BirthwatchResult<String> {
        let contact = self.storage.settings.contact(role)?;
        let uri = contact
            .dial_uri()
            .ok_or_else(|| BirthwatchError::contact_not_found(role.label()))?;

        launcher.launch(&uri)?;
        Ok(uri)
    }
}
