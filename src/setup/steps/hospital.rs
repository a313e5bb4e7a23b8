//! Hospital step
//!
//! Offers the configured presets first. Picking one fills both hospital
//! fields and moves on; otherwise the fields are prompted one by one.

use std::io::{BufRead, Write};

use crate::config::settings::HospitalPreset;
use crate::error::BirthwatchResult;
use crate::models::WizardStep;
use crate::services::wizard::WizardFlow;
use crate::setup::wizard::Prompter;

use super::{nav_command, prompt_fields, Nav};

pub fn run<R: BufRead, W: Write>(
    flow: &mut WizardFlow<'_>,
    presets: &[HospitalPreset],
    prompter: &mut Prompter<R, W>,
) -> BirthwatchResult<Nav> {
    prompter.say("Where will the baby be born?")?;

    if !presets.is_empty() {
        for (i, preset) in presets.iter().enumerate() {
            prompter.say(&format!("  {}. {} ({})", i + 1, preset.name, preset.phone))?;
        }

        let Some(input) =
            prompter.prompt_string("Choose a hospital by number, or press Enter to type one: ")?
        else {
            return Ok(Nav::Quit);
        };
        if let Some(nav) = nav_command(&input) {
            return Ok(nav);
        }

        if let Some(preset) = input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| presets.get(i))
        {
            flow.select_hospital(preset);
            prompter.say(&format!("Selected {}.", preset.name))?;
            return Ok(Nav::Next);
        }
    }

    prompt_fields(WizardStep::Hospital.fields(), flow, prompter)
}
