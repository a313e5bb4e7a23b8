//! Setup wizard steps
//!
//! Each step prints its intro and collects draft answers into the flow.
//! Persistence is left to the flow itself.

pub mod hospital;

use std::io::{BufRead, Write};

use crate::config::settings::HospitalPreset;
use crate::error::BirthwatchResult;
use crate::models::{StepField, WizardStep};
use crate::services::wizard::WizardFlow;

use super::wizard::Prompter;

/// What the user asked for at the end of a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Next,
    Back,
    Quit,
}

/// Interpret navigation keywords; `None` means ordinary input
pub(crate) fn nav_command(input: &str) -> Option<Nav> {
    match input {
        "<" => Some(Nav::Back),
        "q" | "quit" => Some(Nav::Quit),
        _ => None,
    }
}

/// Run one step against the prompter
pub fn run_step<R: BufRead, W: Write>(
    step: WizardStep,
    flow: &mut WizardFlow<'_>,
    presets: &[HospitalPreset],
    prompter: &mut Prompter<R, W>,
) -> BirthwatchResult<Nav> {
    match step {
        WizardStep::Welcome => {
            prompter.say("Let's get the essentials ready before labor begins.")?;
            prompter.say("Press Enter to keep a value, '<' to go back, 'q' to stop.")?;
            confirm(prompter, "Press Enter to begin: ")
        }
        WizardStep::DueDate => {
            prompter.say("When is the baby due?")?;
            prompt_fields(step.fields(), flow, prompter)
        }
        WizardStep::Hospital => hospital::run(flow, presets, prompter),
        WizardStep::Contacts => {
            prompter.say("Who should be called when it starts?")?;
            prompt_fields(step.fields(), flow, prompter)
        }
        WizardStep::Children => {
            prompter.say("Who will look after the children?")?;
            prompt_fields(step.fields(), flow, prompter)
        }
        WizardStep::Done => {
            summarize(flow, prompter)?;
            confirm(prompter, "Press Enter to finish: ")
        }
    }
}

/// Wait for Enter or a navigation keyword
fn confirm<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    prompt: &str,
) -> BirthwatchResult<Nav> {
    match prompter.prompt_string(prompt)? {
        None => Ok(Nav::Quit),
        Some(input) => Ok(nav_command(&input).unwrap_or(Nav::Next)),
    }
}

/// Prompt for each field, showing the current answer as the default
pub(crate) fn prompt_fields<R: BufRead, W: Write>(
    fields: &[StepField],
    flow: &mut WizardFlow<'_>,
    prompter: &mut Prompter<R, W>,
) -> BirthwatchResult<Nav> {
    for &field in fields {
        let prompt = match flow.data().get(field) {
            Some(current) => format!("{} [{}]: ", field.label(), current),
            None => format!("{}: ", field.label()),
        };

        let Some(input) = prompter.prompt_string(&prompt)? else {
            return Ok(Nav::Quit);
        };
        if let Some(nav) = nav_command(&input) {
            return Ok(nav);
        }
        flow.set_field(field, input);
    }
    Ok(Nav::Next)
}

fn summarize<R: BufRead, W: Write>(
    flow: &WizardFlow<'_>,
    prompter: &mut Prompter<R, W>,
) -> BirthwatchResult<()> {
    prompter.say("Here is what you entered:")?;
    for step in WizardStep::ALL {
        for &field in step.fields() {
            let value = flow.data().get(field).unwrap_or("(not set)");
            prompter.say(&format!("  {:<30} {}", field.label(), value))?;
        }
    }
    Ok(())
}
