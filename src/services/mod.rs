//! Service layer for Birthwatch
//!
//! The service layer provides the application logic on top of the storage
//! layer: the labor timer, the setup wizard, the checklist, contacts and the
//! due date.

pub mod checklist;
pub mod clock;
pub mod contacts;
pub mod due_date;
pub mod monitor;
pub mod ticker;
pub mod wizard;

pub use checklist::ChecklistService;
pub use clock::{Clock, FixedClock, SystemClock};
pub use contacts::ContactService;
pub use due_date::{DueDateService, DueDateStatus};
pub use monitor::ElapsedTimeMonitor;
pub use ticker::PollTimer;
pub use wizard::{FlowState, WizardEntry, WizardFlow};
