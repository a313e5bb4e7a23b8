//! Setup wizard steps and the answers captured along the way

use serde::{Deserialize, Serialize};
use std::fmt;

/// The steps of the setup wizard, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Welcome,
    DueDate,
    Hospital,
    Contacts,
    Children,
    Done,
}

/// Number of steps in the wizard
pub const TOTAL_STEPS: usize = 6;

impl WizardStep {
    /// All steps in wizard order
    pub const ALL: [WizardStep; TOTAL_STEPS] = [
        WizardStep::Welcome,
        WizardStep::DueDate,
        WizardStep::Hospital,
        WizardStep::Contacts,
        WizardStep::Children,
        WizardStep::Done,
    ];

    /// Step at a zero-based position
    pub fn from_position(position: usize) -> Option<Self> {
        Self::ALL.get(position).copied()
    }

    /// Zero-based position of this step
    pub fn position(self) -> usize {
        match self {
            WizardStep::Welcome => 0,
            WizardStep::DueDate => 1,
            WizardStep::Hospital => 2,
            WizardStep::Contacts => 3,
            WizardStep::Children => 4,
            WizardStep::Done => 5,
        }
    }

    /// One-based ordinal for "step k of N"
    pub fn ordinal(self) -> usize {
        self.position() + 1
    }

    pub fn is_last(self) -> bool {
        self.position() + 1 == TOTAL_STEPS
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Welcome => "Welcome",
            WizardStep::DueDate => "Due Date",
            WizardStep::Hospital => "Hospital",
            WizardStep::Contacts => "Emergency Contacts",
            WizardStep::Children => "Children",
            WizardStep::Done => "All Set",
        }
    }

    /// Draft fields this step edits
    pub fn fields(self) -> &'static [StepField] {
        match self {
            WizardStep::Welcome | WizardStep::Done => &[],
            WizardStep::DueDate => &[StepField::DueDate],
            WizardStep::Hospital => &[StepField::HospitalName, StepField::HospitalPhone],
            WizardStep::Contacts => &[
                StepField::PartnerPhone,
                StepField::DoctorPhone,
                StepField::MidwifePhone,
            ],
            WizardStep::Children => &[StepField::ChildrenNote],
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} of {}: {}", self.ordinal(), TOTAL_STEPS, self.title())
    }
}

/// One editable field of the wizard draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepField {
    DueDate,
    HospitalName,
    HospitalPhone,
    PartnerPhone,
    DoctorPhone,
    MidwifePhone,
    ChildrenNote,
}

impl StepField {
    pub fn label(self) -> &'static str {
        match self {
            StepField::DueDate => "Due date (YYYY-MM-DD)",
            StepField::HospitalName => "Hospital name",
            StepField::HospitalPhone => "Hospital phone",
            StepField::PartnerPhone => "Partner phone",
            StepField::DoctorPhone => "Doctor phone",
            StepField::MidwifePhone => "Midwife phone",
            StepField::ChildrenNote => "Who looks after the children",
        }
    }
}

/// Answers captured by the wizard; every field may be unset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepData {
    pub due_date: Option<String>,
    pub hospital_name: Option<String>,
    pub hospital_phone: Option<String>,
    pub partner_phone: Option<String>,
    pub doctor_phone: Option<String>,
    pub midwife_phone: Option<String>,
    pub children_note: Option<String>,
}

impl StepData {
    pub fn get(&self, field: StepField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: StepField, value: Option<String>) {
        *self.slot_mut(field) = value;
    }

    fn slot(&self, field: StepField) -> &Option<String> {
        match field {
            StepField::DueDate => &self.due_date,
            StepField::HospitalName => &self.hospital_name,
            StepField::HospitalPhone => &self.hospital_phone,
            StepField::PartnerPhone => &self.partner_phone,
            StepField::DoctorPhone => &self.doctor_phone,
            StepField::MidwifePhone => &self.midwife_phone,
            StepField::ChildrenNote => &self.children_note,
        }
    }

    fn slot_mut(&mut self, field: StepField) -> &mut Option<String> {
        match field {
            StepField::DueDate => &mut self.due_date,
            StepField::HospitalName => &mut self.hospital_name,
            StepField::HospitalPhone => &mut self.hospital_phone,
            StepField::PartnerPhone => &mut self.partner_phone,
            StepField::DoctorPhone => &mut self.doctor_phone,
            StepField::MidwifePhone => &mut self.midwife_phone,
            StepField::ChildrenNote => &mut self.children_note,
        }
    }
}

/// Trimmed value, or `None` for blank input
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
