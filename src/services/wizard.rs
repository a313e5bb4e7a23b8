//! Setup wizard flow
//!
//! A strictly linear sequence of data-entry steps with a one-way completion
//! gate. The host renders `current_step()` and drives the flow with `next()`
//! and `back()`.
//!
//! ## Persistence
//!
//! - Answers are committed when the user moves *forward* past a step.
//! - Blank answers never overwrite stored values.
//! - Going back discards unconfirmed edits on the step being left.
//! - `finish()` sets the completion flag; a completed wizard is never shown
//!   again (`open` returns `WizardEntry::Skip`).

use crate::config::settings::HospitalPreset;
use crate::error::BirthwatchResult;
use crate::models::pregnancy::parse_date;
use crate::models::wizard::non_blank;
use crate::models::{ContactRole, StepData, StepField, WizardStep, TOTAL_STEPS};
use crate::storage::SettingsRepository;

/// Where the flow stands after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Step {
        step: WizardStep,
        ordinal: usize,
        total: usize,
    },
    Completed,
}

impl FlowState {
    fn at(step: WizardStep) -> Self {
        FlowState::Step {
            step,
            ordinal: step.ordinal(),
            total: TOTAL_STEPS,
        }
    }
}

/// Result of opening the wizard
pub enum WizardEntry<'a> {
    /// Setup was already completed; go straight to the main experience
    Skip,
    /// Setup is needed; run this flow
    Run(WizardFlow<'a>),
}

/// The wizard state machine
pub struct WizardFlow<'a> {
    settings: &'a SettingsRepository,
    step: WizardStep,
    /// Answers as edited on screen
    draft: StepData,
    /// Answers as last persisted
    committed: StepData,
    /// Fields whose last commit was rejected as malformed
    rejected: Vec<StepField>,
    completed: bool,
}

impl<'a> WizardFlow<'a> {
    /// Open the wizard, resuming with any answers stored earlier
    pub fn open(settings: &'a SettingsRepository) -> BirthwatchResult<WizardEntry<'a>> {
        if settings.wizard_completed()? {
            return Ok(WizardEntry::Skip);
        }

        let committed = stored_answers(settings)?;
        Ok(WizardEntry::Run(Self {
            settings,
            step: WizardStep::Welcome,
            draft: committed.clone(),
            committed,
            rejected: Vec::new(),
            completed: false,
        }))
    }

    pub fn current_step(&self) -> WizardStep {
        self.step
    }

    pub fn position(&self) -> usize {
        self.step.position()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn state(&self) -> FlowState {
        if self.completed {
            FlowState::Completed
        } else {
            FlowState::at(self.step)
        }
    }

    /// Current draft answers
    pub fn data(&self) -> &StepData {
        &self.draft
    }

    /// Fields rejected by the most recent commit (e.g. a malformed date)
    pub fn rejected_fields(&self) -> &[StepField] {
        &self.rejected
    }

    /// Edit a draft answer; nothing is persisted until `next()`
    pub fn set_field(&mut self, field: StepField, value: impl Into<String>) {
        self.draft.set(field, Some(value.into()));
    }

    /// Fill the hospital answers from a preset
    ///
    /// Like any edit, the auto-filled values are discarded if the user goes
    /// back without confirming.
    pub fn select_hospital(&mut self, preset: &HospitalPreset) {
        self.draft.set(StepField::HospitalName, Some(preset.name.clone()));
        self.draft.set(StepField::HospitalPhone, Some(preset.phone.clone()));
    }

    /// Commit the current step and advance; finishes on the last step
    pub fn next(&mut self) -> BirthwatchResult<FlowState> {
        if self.completed {
            return Ok(FlowState::Completed);
        }

        if self.step.is_last() {
            return self.finish();
        }

        self.commit(self.step)?;
        self.go_to(self.step.position() + 1);
        Ok(self.state())
    }

    /// Step back without persisting; no-op on the first step
    pub fn back(&mut self) -> FlowState {
        if self.completed || self.step.position() == 0 {
            return self.state();
        }

        self.revert(self.step);
        self.go_to(self.step.position() - 1);
        self.state()
    }

    /// Commit the final step and close the wizard for good
    pub fn finish(&mut self) -> BirthwatchResult<FlowState> {
        if self.completed {
            return Ok(FlowState::Completed);
        }

        self.commit(self.step)?;
        self.settings.set_wizard_completed()?;
        self.completed = true;
        Ok(FlowState::Completed)
    }

    /// Move to a position; out-of-range requests are ignored
    fn go_to(&mut self, position: usize) -> bool {
        match WizardStep::from_position(position) {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    fn commit(&mut self, step: WizardStep) -> BirthwatchResult<()> {
        self.rejected.clear();

        for &field in step.fields() {
            let Some(value) = non_blank(self.draft.get(field)).map(str::to_string) else {
                continue;
            };

            let stored = match field {
                StepField::DueDate => match parse_date(&value) {
                    Some(date) => {
                        self.settings.set_due_date(date)?;
                        Some(date.format("%Y-%m-%d").to_string())
                    }
                    None => {
                        self.rejected.push(field);
                        None
                    }
                },
                StepField::HospitalName => {
                    self.settings.set_contact_name(ContactRole::Hospital, Some(&value))?;
                    Some(value)
                }
                StepField::HospitalPhone => {
                    self.settings.set_contact_phone(ContactRole::Hospital, Some(&value))?;
                    Some(value)
                }
                StepField::PartnerPhone => {
                    self.settings.set_contact_phone(ContactRole::Partner, Some(&value))?;
                    Some(value)
                }
                StepField::DoctorPhone => {
                    self.settings.set_contact_phone(ContactRole::Doctor, Some(&value))?;
                    Some(value)
                }
                StepField::MidwifePhone => {
                    self.settings.set_contact_phone(ContactRole::Midwife, Some(&value))?;
                    Some(value)
                }
                StepField::ChildrenNote => {
                    self.settings.set_children_note(Some(&value))?;
                    Some(value)
                }
            };

            if stored.is_some() {
                self.committed.set(field, stored);
            }
        }

        // Blank or rejected fields show the stored answer again
        self.revert(step);
        Ok(())
    }

    fn revert(&mut self, step: WizardStep) {
        for &field in step.fields() {
            self.draft
                .set(field, self.committed.get(field).map(str::to_string));
        }
    }
}

fn stored_answers(settings: &SettingsRepository) -> BirthwatchResult<StepData> {
    Ok(StepData {
        due_date: settings
            .due_date()?
            .map(|d| d.format("%Y-%m-%d").to_string()),
        hospital_name: settings.contact_name(ContactRole::Hospital)?,
        hospital_phone: settings.contact_phone(ContactRole::Hospital)?,
        partner_phone: settings.contact_phone(ContactRole::Partner)?,
        doctor_phone: settings.contact_phone(ContactRole::Doctor)?,
        midwife_phone: settings.contact_phone(ContactRole::Midwife)?,
        children_note: settings.children_note()?,
    })
}
