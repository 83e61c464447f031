//! CLI definitions and command dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use vf_displayer_core::FileStorage;

use crate::commands::{
    axes::list_axes,
    generate::{GenerateArgs, generate},
    preset::PresetCommands,
};

#[derive(Parser)]
#[command(name = "vf-displayer")]
#[command(about = "Build embeddable variable font demos with sliders for each axis")]
pub struct Cli {
    /// Directory holding saved presets [default: platform config dir]
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the HTML and JavaScript for a displayer
    Generate(GenerateArgs),
    /// List the variation axes declared by fonts (files or URLs)
    Axes {
        #[arg(required = true)]
        fonts: Vec<String>,
    },
    /// Manage saved style presets
    #[command(subcommand)]
    Preset(PresetCommands),
}

impl Cli {
    pub fn storage(&self) -> FileStorage {
        match &self.data_dir {
            Some(dir) => FileStorage::new(dir),
            None => FileStorage::in_config_dir(),
        }
    }

    pub fn run(self) -> Result<()> {
        let storage = self.storage();
        match self.command {
            Commands::Generate(args) => generate(args, storage)?,
            Commands::Axes { fonts } => list_axes(&fonts)?,
            Commands::Preset(preset) => preset.run(storage)?,
        }
        Ok(())
    }
}
