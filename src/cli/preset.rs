//! Filter preset CLI commands

use clap::Subcommand;

use super::filter::FilterArgs;
use crate::display::{format_preset_details, format_preset_list};
use crate::error::ExpenseResult;
use crate::services::PresetService;
use crate::storage::Storage;

/// Preset subcommands
#[derive(Subcommand, Debug)]
pub enum PresetCommands {
    /// Save the given filter flags under a name
    Save {
        /// Preset name
        name: String,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List saved presets
    List,

    /// Show a preset's filters
    Show {
        /// Preset name or ID
        preset: String,
    },

    /// Delete a preset
    Delete {
        /// Preset name or ID
        preset: String,
    },
}

/// Handle preset commands
pub fn handle_preset_command(storage: &Storage, cmd: PresetCommands) -> ExpenseResult<()> {
    let service = PresetService::new(storage);

    match cmd {
        PresetCommands::Save { name, filters } => {
            let preset = service.save(&name, filters.to_spec()?)?;
            println!("Saved preset '{}' ({})", preset.name, preset.id);
            println!("  {}", preset.filters.describe());
        }
        PresetCommands::List => {
            println!("{}", format_preset_list(&service.list()?));
        }
        PresetCommands::Show { preset } => {
            print!("{}", format_preset_details(&service.find(&preset)?));
        }
        PresetCommands::Delete { preset } => {
            let removed = service.delete(&preset)?;
            println!("Deleted preset '{}'", removed.name);
        }
    }

    Ok(())
}
