//! Shared argument types and parsers.

use clap::{Args, ValueEnum};
use vf_displayer_core::{NewAxis, StyleEdit};

/// An axis given on the command line, with an optional starting value.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisArg {
    pub axis: NewAxis,
    pub value: Option<f64>,
}

/// Parse `ID[:NAME]:MIN:MAX[=VALUE]`, e.g. `wght:Weight:100:900=700`.
pub fn parse_axis(s: &str) -> Result<AxisArg, String> {
    let (spec, value) = match s.split_once('=') {
        Some((spec, value)) => {
            let value = finite(value)
                .ok_or_else(|| format!("Invalid value '{value}' in axis '{s}'"))?;
            (spec, Some(value))
        }
        None => (s, None),
    };

    let parts: Vec<&str> = spec.split(':').collect();
    let [id, name @ .., min, max] = parts.as_slice() else {
        return Err(format!("Invalid axis format '{s}', expected ID[:NAME]:MIN:MAX[=VALUE]"));
    };
    if id.is_empty() {
        return Err(format!("Missing axis id in '{s}'"));
    }

    let min = finite(min).ok_or_else(|| format!("Invalid minimum '{min}' for axis '{id}'"))?;
    let max = finite(max).ok_or_else(|| format!("Invalid maximum '{max}' for axis '{id}'"))?;
    if min > max {
        return Err(format!("Minimum {min} exceeds maximum {max} for axis '{id}'"));
    }

    Ok(AxisArg { axis: NewAxis::new(*id, name.join(":"), min, max), value })
}

/// A number usable in `font-variation-settings`; `NaN` and infinities are rejected.
fn finite(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Which generated output to copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CopyTarget {
    Html,
    Js,
}

/// Style overrides applied on top of the defaults or a loaded preset.
#[derive(Debug, Clone, Default, Args)]
pub struct StyleArgs {
    /// Knob corner radius in percent (100 = round)
    #[arg(long)]
    pub knob_roundness: Option<f64>,
    #[arg(long)]
    pub knob_color: Option<String>,
    /// Slider track thickness in pixels
    #[arg(long)]
    pub line_weight: Option<f64>,
    #[arg(long)]
    pub line_color: Option<String>,
    #[arg(long)]
    pub knob_height: Option<f64>,
    #[arg(long)]
    pub knob_width: Option<f64>,
    /// Sample text shown in the widget
    #[arg(long)]
    pub initial_text: Option<String>,
    #[arg(long)]
    pub text_color: Option<String>,
    #[arg(long)]
    pub background_color: Option<String>,
}

impl StyleArgs {
    pub fn edits(&self) -> Vec<StyleEdit> {
        let StyleArgs {
            knob_roundness,
            knob_color,
            line_weight,
            line_color,
            knob_height,
            knob_width,
            initial_text,
            text_color,
            background_color,
        } = self.clone();

        [
            knob_roundness.map(StyleEdit::KnobRoundness),
            knob_color.map(StyleEdit::KnobColor),
            line_weight.map(StyleEdit::LineWeight),
            line_color.map(StyleEdit::LineColor),
            knob_height.map(StyleEdit::KnobHeight),
            knob_width.map(StyleEdit::KnobWidth),
            initial_text.map(StyleEdit::InitialText),
            text_color.map(StyleEdit::TextColor),
            background_color.map(StyleEdit::BackgroundColor),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
