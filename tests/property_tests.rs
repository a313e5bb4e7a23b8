//! # Property-Based Tests
//!
//! Invariants of the labor timer and the setup wizard, checked with proptest.

use birthwatch::models::{StepField, WarningLevel, WizardStep, TOTAL_STEPS};
use birthwatch::services::{ElapsedTimeMonitor, FlowState, WizardEntry, WizardFlow};
use birthwatch::storage::SettingsRepository;
use proptest::collection::vec;
use proptest::prelude::*;

const HOUR_MS: i64 = 3_600_000;

fn open(settings: &SettingsRepository) -> WizardFlow<'_> {
    match WizardFlow::open(settings).expect("open") {
        WizardEntry::Run(flow) => flow,
        WizardEntry::Skip => panic!("wizard unexpectedly skipped"),
    }
}

#[derive(Debug, Clone)]
enum Command {
    Next,
    Back,
    Edit(String),
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::Next),
        Just(Command::Back),
        "[ 0-9]{0,6}".prop_map(Command::Edit),
    ]
}

// =============================================================================
// MONITOR
// =============================================================================

proptest! {
    /// The warning level never goes down as time passes.
    #[test]
    fn level_is_monotonic(reference in any::<i64>(), a in any::<i64>(), b in any::<i64>()) {
        let monitor = ElapsedTimeMonitor::new(reference);
        let (early, late) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(monitor.poll(early).level <= monitor.poll(late).level);
    }

    /// Minutes and seconds stay in range and the reading matches the hours.
    #[test]
    fn reading_is_well_formed(reference in -HOUR_MS * 1000..HOUR_MS * 1000, offset in 0i64..HOUR_MS * 100) {
        let monitor = ElapsedTimeMonitor::new(reference);
        let reading = monitor.poll(reference + offset);

        prop_assert!(reading.elapsed.started);
        prop_assert!(reading.elapsed.minutes < 60);
        prop_assert!(reading.elapsed.seconds < 60);
        prop_assert_eq!(reading.elapsed.total_seconds() as i64, offset / 1000);
        prop_assert_eq!(reading.level, WarningLevel::from_hours(reading.elapsed.hours));
    }

    /// Before the reference instant the timer reads zero with no warning.
    #[test]
    fn before_reference_is_quiet(reference in any::<i64>(), back in 1i64..i64::MAX) {
        let now = reference.saturating_sub(back);
        prop_assume!(now < reference);

        let reading = ElapsedTimeMonitor::new(reference).poll(now);
        prop_assert!(!reading.elapsed.started);
        prop_assert_eq!(reading.elapsed.total_seconds(), 0);
        prop_assert_eq!(reading.level, WarningLevel::None);
    }
}

// =============================================================================
// WIZARD
// =============================================================================

proptest! {
    /// Any sequence of commands keeps the position in range, and completion
    /// is permanent.
    #[test]
    fn wizard_position_stays_in_range(commands in vec(command(), 0..60)) {
        let settings = SettingsRepository::in_memory();
        let mut flow = open(&settings);
        let mut completed = false;

        for command in commands {
            let state = match command {
                Command::Next => flow.next().expect("next"),
                Command::Back => flow.back(),
                Command::Edit(value) => {
                    for &field in flow.current_step().fields() {
                        flow.set_field(field, value.clone());
                    }
                    flow.state()
                }
            };

            prop_assert!(flow.position() < TOTAL_STEPS);
            if completed {
                prop_assert_eq!(state, FlowState::Completed);
            }
            completed = flow.is_completed();
            prop_assert_eq!(completed, settings.wizard_completed().expect("read"));
        }
    }

    /// A stored phone number survives any number of blank answers.
    #[test]
    fn blank_answers_never_erase(phone in "[0-9]{3,10}", blanks in vec("[ ]{0,4}", 1..5)) {
        let settings = SettingsRepository::in_memory();
        let mut flow = open(&settings);
        while flow.current_step() != WizardStep::Contacts {
            flow.next().expect("next");
        }

        flow.set_field(StepField::PartnerPhone, phone.clone());
        flow.next().expect("next");

        for blank in blanks {
            flow.back();
            flow.set_field(StepField::PartnerPhone, blank);
            flow.next().expect("next");
        }

        prop_assert_eq!(
            settings.contact_phone(birthwatch::models::ContactRole::Partner).expect("read"),
            Some(phone)
        );
    }
}
