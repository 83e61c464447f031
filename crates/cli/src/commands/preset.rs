//! The `preset` commands.

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use vf_displayer_core::{PresetStore, Storage, StyleSettings};

use crate::args::StyleArgs;

#[derive(Debug, Subcommand)]
pub enum PresetCommands {
    /// List saved presets
    List,
    /// Print a preset's style as JSON
    Show { name: String },
    /// Save a style as a preset, replacing any preset with the same name
    Save {
        name: String,
        /// Start from an existing preset instead of the default style
        #[arg(long)]
        from: Option<String>,
        #[command(flatten)]
        style: StyleArgs,
    },
    /// Remove every preset with this name
    Remove { name: String },
}

impl PresetCommands {
    pub fn run(self, storage: impl Storage) -> Result<()> {
        let mut store = PresetStore::open(storage);

        match self {
            PresetCommands::List => {
                if store.list().is_empty() {
                    println!("No presets saved");
                }
                for preset in store.list() {
                    println!("{}", preset.name);
                }
            }
            PresetCommands::Show { name } => {
                let preset = store
                    .load(&name)
                    .with_context(|| format!("No preset named '{name}'"))?;
                println!("{}", serde_json::to_string_pretty(&preset.style)?);
            }
            PresetCommands::Save { name, from, style } => {
                let base = match from {
                    Some(from) => store
                        .load(&from)
                        .with_context(|| format!("No preset named '{from}'"))?
                        .style
                        .clone(),
                    None => StyleSettings::default(),
                };
                if !store.save(&name, base.with_edits(style.edits()))? {
                    bail!("Preset name must not be empty");
                }
                println!("Preset saved successfully!");
            }
            PresetCommands::Remove { name } => {
                let removed = store.remove(&name)?;
                if removed == 0 {
                    bail!("No preset named '{name}'");
                }
                println!("Preset removed successfully!");
            }
        }
        Ok(())
    }
}
