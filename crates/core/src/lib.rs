//! Variable font displayer core - axis registry, style presets, and snippet generation.

pub mod axes;
pub mod config;
pub mod error;
pub mod font;
pub mod js;
pub mod preset;
pub mod snippet;
pub mod state;
pub mod style;

pub use axes::{AxisDefinition, AxisRegistry, NewAxis};
pub use error::{Error, Result};
pub use font::{DefaultFetcher, FontFetcher};
pub use font_axes::{FontAxis, read_axes};
pub use preset::{FileStorage, MemoryStorage, Preset, PresetStore, Storage};
pub use snippet::{GeneratedSnippet, SnippetInput, container_id, demo_page, generate};
pub use state::{Action, Displayer, DisplayerState, Effect};
pub use style::{StyleEdit, StyleSettings};
