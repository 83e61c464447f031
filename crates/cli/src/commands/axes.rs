//! The `axes` command: list the variation axes fonts declare.

use anyhow::{Result, bail};
use vf_displayer_core::{DefaultFetcher, FontAxis, FontFetcher, js::number, read_axes};

/// Render axes as an aligned table.
pub fn format_axes(axes: &[FontAxis]) -> String {
    let name_width = axes.iter().map(|a| a.name.chars().count()).max().unwrap_or(0).max(4);
    let mut out = format!(
        "  {:<4}  {:<name_width$}  {:>8}  {:>8}  {:>8}\n",
        "TAG", "NAME", "MIN", "DEFAULT", "MAX"
    );
    for axis in axes {
        let hidden = if axis.hidden { "  (hidden)" } else { "" };
        out.push_str(&format!(
            "  {:<4}  {:<name_width$}  {:>8}  {:>8}  {:>8}{hidden}\n",
            axis.tag,
            axis.name,
            number(axis.min),
            number(axis.default),
            number(axis.max),
        ));
    }
    out
}

fn describe(font: &str, fetcher: &impl FontFetcher) -> Result<String> {
    let data = fetcher.fetch(font)?;
    let axes = read_axes(&data)?;
    Ok(format_axes(&axes))
}

pub fn list_axes(fonts: &[String]) -> Result<()> {
    let mut failures = Vec::new();

    for font in fonts {
        println!("{font}");
        match describe(font, &DefaultFetcher) {
            Ok(table) => print!("{table}"),
            Err(e) => {
                eprintln!("Error: {e:?}");
                failures.push(font.as_str());
            }
        }
    }

    if !failures.is_empty() {
        bail!("Could not read axes from {} of {} fonts", failures.len(), fonts.len());
    }
    Ok(())
}
