use anyhow::Result;
use clap::{Parser, Subcommand};

use birthwatch::cli::{
    handle_checklist_command, handle_contact_command, handle_due_command, handle_timer_command,
    ChecklistCommands, ContactCommands, DueCommands, TimerCommands,
};
use birthwatch::config::{paths::BirthwatchPaths, settings::Settings};
use birthwatch::launch::SystemLauncher;
use birthwatch::setup::SetupWizard;
use birthwatch::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "birthwatch",
    version,
    about = "Labor timer, hospital bag checklist and emergency contacts",
    long_about = "Birthwatch keeps the essentials for the last weeks of pregnancy in \
                  the terminal: a timer that warns when too long has passed since the \
                  waters broke, the hospital bag checklist, and one-key calls to the \
                  hospital, doctor, midwife and partner."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the setup wizard
    Setup {
        /// Run the wizard again even if it was completed
        #[arg(long)]
        reset: bool,
    },

    /// Labor timer commands
    #[command(subcommand)]
    Timer(TimerCommands),

    /// Due date commands
    #[command(subcommand)]
    Due(DueCommands),

    /// Checklist commands
    #[command(subcommand)]
    Checklist(ChecklistCommands),

    /// Emergency contact commands
    #[command(subcommand)]
    Contacts(ContactCommands),

    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Show current configuration and paths, writing defaults on first use
    Config,

    /// Show recent changes from the audit log
    Log {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BirthwatchPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    initialize_storage(&paths)?;
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Setup { reset }) => {
            if reset {
                storage.settings.reset_wizard()?;
            }
            let result = SetupWizard::new(settings.hospital_presets.clone()).run(&storage.settings)?;
            if result.skipped {
                println!("Setup already completed. Use 'birthwatch setup --reset' to run it again.");
            }
        }
        Some(Commands::Timer(cmd)) => {
            handle_timer_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Due(cmd)) => {
            handle_due_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Checklist(cmd)) => {
            handle_checklist_command(&storage, cmd)?;
        }
        Some(Commands::Contacts(cmd)) => {
            handle_contact_command(&storage, &SystemLauncher, cmd)?;
        }
        Some(Commands::Tui) => {
            let result = SetupWizard::new(settings.hospital_presets.clone()).run(&storage.settings)?;
            if result.completed {
                birthwatch::tui::run_tui(&storage, &settings, &SystemLauncher)?;
            }
        }
        Some(Commands::Config) => {
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }

            println!("Birthwatch Configuration");
            println!("========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Date format:      {}", settings.date_format);
            println!("  Time format:      {}", settings.time_format);
            println!("  Tick rate:        {} ms", settings.tick_rate().as_millis());
            println!("  Hospital presets: {}", settings.hospital_presets.len());
            println!(
                "  Setup completed:  {}",
                if storage.settings.wizard_completed()? { "yes" } else { "no" }
            );
        }
        Some(Commands::Log { limit }) => {
            let entries = storage.audit().read_recent(limit)?;
            if entries.is_empty() {
                println!("No changes recorded yet.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
        None => {
            println!("Birthwatch - labor timer, checklist and contacts");
            println!();
            if !storage.settings.wizard_completed()? {
                println!("Run 'birthwatch setup' to get started.");
            }
            println!("Run 'birthwatch --help' for usage information.");
            println!("Run 'birthwatch tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
