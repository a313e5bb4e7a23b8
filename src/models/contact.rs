//! Emergency contact model
//!
//! The contact list is a fixed set of roles; only name and phone are editable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Who a contact is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactRole {
    Hospital,
    Doctor,
    Midwife,
    Partner,
}

impl ContactRole {
    /// All roles in display order
    pub const ALL: [ContactRole; 4] = [
        ContactRole::Hospital,
        ContactRole::Doctor,
        ContactRole::Midwife,
        ContactRole::Partner,
    ];

    /// Key prefix used in the contacts namespace
    pub fn key(self) -> &'static str {
        match self {
            ContactRole::Hospital => "hospital",
            ContactRole::Doctor => "doctor",
            ContactRole::Midwife => "midwife",
            ContactRole::Partner => "partner",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactRole::Hospital => "Hospital",
            ContactRole::Doctor => "Doctor",
            ContactRole::Midwife => "Midwife",
            ContactRole::Partner => "Partner",
        }
    }

    pub fn phone_key(self) -> String {
        format!("{}_phone", self.key())
    }

    pub fn name_key(self) -> String {
        format!("{}_name", self.key())
    }
}

impl fmt::Display for ContactRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ContactRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ContactRole::ALL
            .iter()
            .copied()
            .find(|role| role.key() == lower)
            .ok_or_else(|| {
                format!(
                    "Unknown contact '{}'. Expected one of: hospital, doctor, midwife, partner",
                    s
                )
            })
    }
}

/// A contact as shown in the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub role: ContactRole,
    pub name: Option<String>,
    pub phone: Option<String>,
}

impl EmergencyContact {
    /// Name to show, falling back to the role label
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.role.label())
    }

    /// `tel:` URI for the dialer, if a phone number is set
    ///
    /// The stored number is passed through as entered.
    pub fn dial_uri(&self) -> Option<String> {
        self.phone.as_deref().map(|phone| format!("tel:{}", phone))
    }
}
