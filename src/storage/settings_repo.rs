//! Typed access to the settings namespaces
//!
//! `SettingsRepository` is the one interface the timer, the wizard and the
//! contact list use to read and write persisted settings. It wraps any
//! `KeyValueStore`, so tests substitute a `MemoryStore`.

use chrono::NaiveDate;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::BirthwatchResult;
use crate::models::pregnancy::parse_date;
use crate::models::wizard::non_blank;
use crate::models::{ContactRole, EmergencyContact};

use super::kv::{KeyValueStore, MemoryStore, Namespace, Value};

const DUE_DATE: &str = "due_date";
const WATER_BROKE_AT: &str = "water_broke_at";
const CHILDREN_NOTE: &str = "note";
const WIZARD_COMPLETED: &str = "completed";

/// Typed settings accessors, one group per namespace
pub struct SettingsRepository {
    store: Box<dyn KeyValueStore>,
    audit: Option<AuditLogger>,
}

impl SettingsRepository {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store, audit: None }
    }

    /// Repository over a fresh `MemoryStore`
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    /// Record every change in the given audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    // General

    /// Stored due date; a malformed stored value reads as unset
    pub fn due_date(&self) -> BirthwatchResult<Option<NaiveDate>> {
        Ok(self
            .store
            .get_string(Namespace::General, DUE_DATE)?
            .and_then(|s| parse_date(&s)))
    }

    pub fn set_due_date(&self, date: NaiveDate) -> BirthwatchResult<()> {
        self.put(
            Namespace::General,
            DUE_DATE,
            date.format("%Y-%m-%d").to_string().into(),
        )
    }

    /// Epoch milliseconds at which the waters broke
    pub fn water_broke_at(&self) -> BirthwatchResult<Option<i64>> {
        self.store.get_long(Namespace::General, WATER_BROKE_AT)
    }

    pub fn set_water_broke_at(&self, epoch_ms: i64) -> BirthwatchResult<()> {
        self.put(Namespace::General, WATER_BROKE_AT, epoch_ms.into())
    }

    /// Returns whether a value was cleared
    pub fn clear_water_broke_at(&self) -> BirthwatchResult<bool> {
        self.clear(Namespace::General, WATER_BROKE_AT)
    }

    // Contacts

    pub fn contact_phone(&self, role: ContactRole) -> BirthwatchResult<Option<String>> {
        self.store.get_string(Namespace::Contacts, &role.phone_key())
    }

    /// Store a phone number; blank input keeps the existing value
    ///
    /// Returns whether anything was written.
    pub fn set_contact_phone(&self, role: ContactRole, phone: Option<&str>) -> BirthwatchResult<bool> {
        self.put_non_blank(Namespace::Contacts, &role.phone_key(), phone)
    }

    pub fn contact_name(&self, role: ContactRole) -> BirthwatchResult<Option<String>> {
        self.store.get_string(Namespace::Contacts, &role.name_key())
    }

    /// Store a display name; blank input keeps the existing value
    pub fn set_contact_name(&self, role: ContactRole, name: Option<&str>) -> BirthwatchResult<bool> {
        self.put_non_blank(Namespace::Contacts, &role.name_key(), name)
    }

    pub fn contact(&self, role: ContactRole) -> BirthwatchResult<EmergencyContact> {
        Ok(EmergencyContact {
            role,
            name: self.contact_name(role)?,
            phone: self.contact_phone(role)?,
        })
    }

    // Children

    pub fn children_note(&self) -> BirthwatchResult<Option<String>> {
        self.store.get_string(Namespace::Children, CHILDREN_NOTE)
    }

    /// Store the note; blank input keeps the existing value
    pub fn set_children_note(&self, note: Option<&str>) -> BirthwatchResult<bool> {
        self.put_non_blank(Namespace::Children, CHILDREN_NOTE, note)
    }

    // Wizard

    pub fn wizard_completed(&self) -> BirthwatchResult<bool> {
        Ok(self
            .store
            .get_bool(Namespace::Wizard, WIZARD_COMPLETED)?
            .unwrap_or(false))
    }

    pub fn set_wizard_completed(&self) -> BirthwatchResult<()> {
        self.put(Namespace::Wizard, WIZARD_COMPLETED, true.into())
    }

    /// Reopen the wizard; answers already given are kept
    pub fn reset_wizard(&self) -> BirthwatchResult<bool> {
        self.clear(Namespace::Wizard, WIZARD_COMPLETED)
    }

    fn put_non_blank(&self, namespace: Namespace, key: &str, value: Option<&str>) -> BirthwatchResult<bool> {
        match non_blank(value) {
            Some(v) => {
                self.put(namespace, key, v.into())?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Write a value, auditing it if it changed
    fn put(&self, namespace: Namespace, key: &str, value: Value) -> BirthwatchResult<()> {
        let before = self.store.get(namespace, key)?;
        if before.as_ref() == Some(&value) {
            return Ok(());
        }

        self.store.set(namespace, key, value.clone())?;
        self.log_change(namespace, key, before.as_ref(), Some(&value))
    }

    fn clear(&self, namespace: Namespace, key: &str) -> BirthwatchResult<bool> {
        let before = self.store.remove(namespace, key)?;
        if before.is_some() {
            self.log_change(namespace, key, before.as_ref(), None)?;
        }
        Ok(before.is_some())
    }

    fn log_change(
        &self,
        namespace: Namespace,
        key: &str,
        before: Option<&Value>,
        after: Option<&Value>,
    ) -> BirthwatchResult<()> {
        let Some(logger) = &self.audit else {
            return Ok(());
        };

        let entity_type = if namespace == Namespace::Wizard {
            EntityType::Wizard
        } else {
            EntityType::Setting
        };
        let entry = AuditEntry::change(
            entity_type,
            format!("{}/{}", namespace, key),
            None,
            before,
            after,
        );
        logger.log(&entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_are_unset() {
        let repo = SettingsRepository::in_memory();
        assert_eq!(repo.due_date().unwrap(), None);
        assert_eq!(repo.water_broke_at().unwrap(), None);
        assert_eq!(repo.children_note().unwrap(), None);
        assert!(!repo.wizard_completed().unwrap());
    }

    #[test]
    fn test_due_date_round_trip() {
        let repo = SettingsRepository::in_memory();
        let date = NaiveDate::from_ymd_opt(2026, 2, 21).unwrap();
        repo.set_due_date(date).unwrap();
        assert_eq!(repo.due_date().unwrap(), Some(date));
    }

    #[test]
    fn test_malformed_due_date_reads_unset() {
        let repo = SettingsRepository::in_memory();
        repo.store()
            .set(Namespace::General, "due_date", "next spring".into())
            .unwrap();
        assert_eq!(repo.due_date().unwrap(), None);
    }

    #[test]
    fn test_blank_phone_keeps_existing() {
        let repo = SettingsRepository::in_memory();
        assert!(repo.set_contact_phone(ContactRole::Partner, Some("12345")).unwrap());
        assert!(!repo.set_contact_phone(ContactRole::Partner, Some("   ")).unwrap());
        assert!(!repo.set_contact_phone(ContactRole::Partner, None).unwrap());
        assert_eq!(
            repo.contact_phone(ContactRole::Partner).unwrap().as_deref(),
            Some("12345")
        );
    }

    #[test]
    fn test_values_are_trimmed() {
        let repo = SettingsRepository::in_memory();
        repo.set_children_note(Some("  Grandma comes over \n")).unwrap();
        assert_eq!(repo.children_note().unwrap().as_deref(), Some("Grandma comes over"));
    }

    #[test]
    fn test_contact_assembles_fields() {
        let repo = SettingsRepository::in_memory();
        repo.set_contact_name(ContactRole::Hospital, Some("City Maternity")).unwrap();
        repo.set_contact_phone(ContactRole::Hospital, Some("+1 555 0100")).unwrap();

        let contact = repo.contact(ContactRole::Hospital).unwrap();
        assert_eq!(contact.display_name(), "City Maternity");
        assert_eq!(contact.phone.as_deref(), Some("+1 555 0100"));
    }

    #[test]
    fn test_wizard_flag() {
        let repo = SettingsRepository::in_memory();
        repo.set_wizard_completed().unwrap();
        assert!(repo.wizard_completed().unwrap());
        assert!(repo.reset_wizard().unwrap());
        assert!(!repo.wizard_completed().unwrap());
        assert!(!repo.reset_wizard().unwrap());
    }

    #[test]
    fn test_changes_are_audited_once() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let repo = SettingsRepository::in_memory().with_audit(logger.clone());

        repo.set_water_broke_at(1000).unwrap();
        repo.set_water_broke_at(1000).unwrap();
        repo.set_water_broke_at(2000).unwrap();
        repo.clear_water_broke_at().unwrap();

        let entries = logger.read_all().unwrap();
        let ops: Vec<_> = entries.iter().map(|e| e.operation).collect();
        assert_eq!(ops, vec![Operation::Create, Operation::Update, Operation::Delete]);
        assert_eq!(entries[0].entity_id, "general/water_broke_at");
    }

    #[test]
    fn test_wizard_change_uses_wizard_entity() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let repo = SettingsRepository::in_memory().with_audit(logger.clone());

        repo.set_wizard_completed().unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries[0].entity_type, EntityType::Wizard);
        assert_eq!(entries[0].entity_id, "wizard/completed");
    }

    #[test]
    fn test_retry_after_failed_write_reaches_disk() {
        use crate::config::paths::BirthwatchPaths;
        use crate::storage::JsonFileStore;

        let temp_dir = TempDir::new().unwrap();
        let paths = BirthwatchPaths::with_base_dir(temp_dir.path().to_path_buf());
        let repo = SettingsRepository::new(Box::new(JsonFileStore::open(&paths).unwrap()));

        std::fs::write(paths.data_dir(), "not a directory").unwrap();
        assert!(repo.set_water_broke_at(1000).is_err());
        assert_eq!(repo.water_broke_at().unwrap(), None);

        std::fs::remove_file(paths.data_dir()).unwrap();
        repo.set_water_broke_at(1000).unwrap();

        let reopened = SettingsRepository::new(Box::new(JsonFileStore::open(&paths).unwrap()));
        assert_eq!(reopened.water_broke_at().unwrap(), Some(1000));
    }
}
