//! Emergency contact display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::EmergencyContact;

#[derive(Tabled)]
struct ContactRow {
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Phone")]
    phone: String,
}

/// Format contacts as a table; unset values show as `-`
pub fn format_contact_list(contacts: &[EmergencyContact]) -> String {
    let rows: Vec<ContactRow> = contacts
        .iter()
        .map(|c| ContactRow {
            role: c.role.key().to_string(),
            name: c.name.clone().unwrap_or_else(|| "-".to_string()),
            phone: c.phone.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    Table::new(rows).with(Style::psql()).to_string()
}
