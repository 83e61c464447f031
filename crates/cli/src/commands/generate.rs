//! The `generate` command.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Args;
use log::warn;
use vf_displayer_core::{
    Action, DefaultFetcher, Displayer, FontFetcher, GeneratedSnippet, Storage,
    config::{DEFAULT_FONT_SIZE, DEFAULT_FONT_URL, FONT_SIZE_MAX, FONT_SIZE_MIN},
    demo_page, read_axes,
    snippet::font_name,
};

use crate::{
    args::{AxisArg, CopyTarget, StyleArgs, parse_axis},
    clipboard::copy_to_clipboard,
    io::write_optional,
};

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// URL the generated code loads the font from
    #[arg(long, default_value = DEFAULT_FONT_URL)]
    pub font_url: String,
    /// Initial font size in pixels
    #[arg(
        long,
        default_value_t = DEFAULT_FONT_SIZE,
        value_parser = clap::value_parser!(u32).range(FONT_SIZE_MIN as i64..=FONT_SIZE_MAX as i64)
    )]
    pub font_size: u32,
    /// Axis to expose, as ID[:NAME]:MIN:MAX[=VALUE]
    #[arg(short, long = "axis", value_parser = parse_axis)]
    pub axes: Vec<AxisArg>,
    /// Fetch the font and expose every visible axis it declares
    #[arg(long)]
    pub import_axes: bool,
    /// Start from a saved preset
    #[arg(short, long)]
    pub preset: Option<String>,
    #[command(flatten)]
    pub style: StyleArgs,
    /// Write the HTML fragment here
    #[arg(long)]
    pub html_out: Option<PathBuf>,
    /// Write the script here
    #[arg(long)]
    pub js_out: Option<PathBuf>,
    /// Write a standalone demo page here
    #[arg(long)]
    pub page_out: Option<PathBuf>,
    /// Copy one of the outputs to the clipboard
    #[arg(long, value_enum)]
    pub copy: Option<CopyTarget>,
}

/// Drive a displayer through the requested actions and generate its code.
pub fn build_snippet<S: Storage>(
    args: &GenerateArgs,
    storage: S,
    fetcher: &impl FontFetcher,
) -> Result<GeneratedSnippet> {
    let mut displayer = Displayer::new(storage);
    displayer.dispatch(Action::SetFontUrl(args.font_url.clone()));
    displayer.dispatch(Action::SetFontSize(args.font_size));

    if args.import_axes
        && let Some(data) = displayer.load_font(fetcher)
    {
        match read_axes(&data) {
            Ok(axes) => {
                for axis in axes.iter().filter(|a| !a.hidden) {
                    displayer.dispatch(Action::AddAxis(axis.into()));
                    displayer.dispatch(Action::SetAxisValue {
                        id: axis.tag.clone(),
                        value: axis.default,
                    });
                }
            }
            Err(e) => warn!("Could not read axes from {}: {e}", args.font_url),
        }
    }

    for AxisArg { axis, value } in &args.axes {
        let id = axis.id.clone();
        if displayer.state().registry.contains(&id) {
            warn!("Axis {id} is already declared, keeping the first definition");
        } else {
            displayer.dispatch(Action::AddAxis(axis.clone()));
        }
        if let Some(value) = *value {
            let Some(def) = displayer.state().registry.get(&id) else {
                continue;
            };
            let clamped = value.clamp(def.min, def.max);
            if clamped != value {
                warn!("Value {value} for axis {id} is outside {}..{}, using {clamped}", def.min, def.max);
            }
            displayer.dispatch(Action::SetAxisValue { id, value: clamped });
        }
    }

    if let Some(name) = &args.preset {
        if displayer.presets().load(name).is_none() {
            bail!("No preset named '{name}'");
        }
        displayer.dispatch(Action::LoadPreset(name.clone()));
    }

    let edits = args.style.edits();
    if !edits.is_empty() {
        displayer.dispatch_all(edits.into_iter().map(Action::EditStyle));
        displayer.dispatch(Action::ApplyStyle);
    }

    Ok(displayer.generate().clone())
}

pub fn generate(args: GenerateArgs, storage: impl Storage) -> Result<()> {
    let snippet = build_snippet(&args, storage, &DefaultFetcher)?;

    let wrote_html = write_optional(args.html_out.as_deref(), &snippet.html)?;
    let wrote_js = write_optional(args.js_out.as_deref(), &snippet.js)?;
    let page = demo_page(&snippet, font_name(&args.font_url));
    let wrote_page = write_optional(args.page_out.as_deref(), &page)?;

    if !(wrote_html || wrote_js || wrote_page) {
        println!("<!-- HTML -->");
        println!("{}", snippet.html);
        println!();
        println!("// JavaScript");
        print!("{}", snippet.js);
    }

    match args.copy {
        Some(CopyTarget::Html) => {
            if copy_to_clipboard(&snippet.html) {
                println!("Copied HTML to clipboard");
            }
        }
        Some(CopyTarget::Js) => {
            if copy_to_clipboard(&snippet.js) {
                println!("Copied JavaScript to clipboard");
            }
        }
        None => {}
    }

    Ok(())
}
