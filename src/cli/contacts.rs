//! Emergency contact CLI commands

use clap::Subcommand;

use crate::display::format_contact_list;
use crate::error::BirthwatchResult;
use crate::launch::Launcher;
use crate::models::ContactRole;
use crate::services::ContactService;
use crate::storage::Storage;

/// Contact subcommands
#[derive(Subcommand)]
pub enum ContactCommands {
    /// Show all contacts
    List,
    /// Update a contact; omitted or blank values keep what is stored
    Set {
        /// hospital, doctor, midwife or partner
        role: ContactRole,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        phone: Option<String>,
    },
    /// Call a contact with the system dialer
    Dial {
        /// hospital, doctor, midwife or partner
        role: ContactRole,
    },
}

pub fn handle_contact_command(
    storage: &Storage,
    launcher: &dyn Launcher,
    cmd: ContactCommands,
) -> BirthwatchResult<()> {
    let service = ContactService::new(storage);

    match cmd {
        ContactCommands::List => {
            println!("{}", format_contact_list(&service.list()?));
        }
        ContactCommands::Set { role, name, phone } => {
            let contact = service.set(role, name.as_deref(), phone.as_deref())?;
            println!(
                "{}: {} {}",
                role.label(),
                contact.display_name(),
                contact.phone.as_deref().unwrap_or("(no phone)")
            );
        }
        ContactCommands::Dial { role } => {
            let uri = service.dial(role, launcher)?;
            println!("Calling {} ({})", role.label(), uri);
        }
    }

    Ok(())
}
