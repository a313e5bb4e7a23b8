//! Setup wizard orchestration
//!
//! Drives a `WizardFlow` from a line-based terminal. Each step prompts for
//! its fields; `<` goes back a step and `q` stops without finishing.

use std::io::{self, BufRead, Write};

use crate::config::settings::HospitalPreset;
use crate::error::{BirthwatchError, BirthwatchResult};
use crate::services::wizard::{FlowState, WizardEntry, WizardFlow};
use crate::storage::SettingsRepository;

use super::steps::{self, Nav};

/// Result of running the setup wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupResult {
    /// Whether setup is now complete
    pub completed: bool,
    /// Whether setup had already been completed before this run
    pub skipped: bool,
}

/// Line-based input and output for the wizard
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line
    pub fn say(&mut self, line: &str) -> BirthwatchResult<()> {
        writeln!(self.output, "{}", line).map_err(|e| BirthwatchError::Io(e.to_string()))
    }

    /// Prompt for a line of input; `None` at end of input
    pub fn prompt_string(&mut self, prompt: &str) -> BirthwatchResult<Option<String>> {
        write!(self.output, "{}", prompt).map_err(|e| BirthwatchError::Io(e.to_string()))?;
        self.output
            .flush()
            .map_err(|e| BirthwatchError::Io(e.to_string()))?;

        let mut input = String::new();
        let read = self
            .input
            .read_line(&mut input)
            .map_err(|e| BirthwatchError::Io(e.to_string()))?;

        if read == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// The interactive setup wizard
pub struct SetupWizard {
    presets: Vec<HospitalPreset>,
}

impl SetupWizard {
    pub fn new(presets: Vec<HospitalPreset>) -> Self {
        Self { presets }
    }

    /// Run the wizard on stdin/stdout
    pub fn run(&self, settings: &SettingsRepository) -> BirthwatchResult<SetupResult> {
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout());
        self.run_with(settings, &mut prompter)
    }

    /// Run the wizard against any line-based terminal
    pub fn run_with<R: BufRead, W: Write>(
        &self,
        settings: &SettingsRepository,
        prompter: &mut Prompter<R, W>,
    ) -> BirthwatchResult<SetupResult> {
        let mut flow = match WizardFlow::open(settings)? {
            WizardEntry::Skip => {
                return Ok(SetupResult {
                    completed: true,
                    skipped: true,
                })
            }
            WizardEntry::Run(flow) => flow,
        };

        loop {
            let step = flow.current_step();
            prompter.say("")?;
            prompter.say(&step.to_string())?;
            prompter.say(&"=".repeat(step.to_string().len()))?;

            match steps::run_step(step, &mut flow, &self.presets, prompter)? {
                Nav::Quit => {
                    prompter.say("Setup paused. Run 'birthwatch setup' to continue.")?;
                    return Ok(SetupResult {
                        completed: false,
                        skipped: false,
                    });
                }
                Nav::Back => {
                    flow.back();
                }
                Nav::Next => {
                    let state = flow.next()?;
                    for field in flow.rejected_fields() {
                        prompter.say(&format!("  {} not understood; left unchanged.", field.label()))?;
                    }
                    if state == FlowState::Completed {
                        prompter.say("Setup complete!")?;
                        return Ok(SetupResult {
                            completed: true,
                            skipped: false,
                        });
                    }
                }
            }
        }
    }
}
