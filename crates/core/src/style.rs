//! Visual style of the generated widget.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_TEXT;

/// Style settings for the slider knobs, track, and text.
///
/// Field names on the wire match the presets saved by earlier versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    /// Knob corner radius as a percentage (100 = circle).
    #[serde(rename = "roundness")]
    pub knob_roundness_pct: f64,
    #[serde(rename = "color")]
    pub knob_color: String,
    #[serde(rename = "lineWeight")]
    pub line_weight_px: f64,
    #[serde(rename = "lineColor")]
    pub line_color: String,
    #[serde(rename = "knobHeight")]
    pub knob_height_px: f64,
    #[serde(rename = "knobWidth")]
    pub knob_width_px: f64,
    #[serde(rename = "initialText")]
    pub initial_text: String,
    #[serde(rename = "textColor")]
    pub text_color: String,
    #[serde(rename = "backgroundColor")]
    pub background_color: String,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            knob_roundness_pct: 100.0,
            knob_color: "#FDFC9A".into(),
            line_weight_px: 3.0,
            line_color: "#D3D3D3".into(),
            knob_height_px: 20.0,
            knob_width_px: 20.0,
            initial_text: DEFAULT_TEXT.into(),
            text_color: "#FFFFFF".into(),
            background_color: "#25264F".into(),
        }
    }
}

/// A single edit to a draft style.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleEdit {
    KnobRoundness(f64),
    KnobColor(String),
    LineWeight(f64),
    LineColor(String),
    KnobHeight(f64),
    KnobWidth(f64),
    InitialText(String),
    TextColor(String),
    BackgroundColor(String),
}

impl StyleSettings {
    pub fn edit(&mut self, edit: StyleEdit) {
        match edit {
            StyleEdit::KnobRoundness(v) => self.knob_roundness_pct = v,
            StyleEdit::KnobColor(v) => self.knob_color = v,
            StyleEdit::LineWeight(v) => self.line_weight_px = v,
            StyleEdit::LineColor(v) => self.line_color = v,
            StyleEdit::KnobHeight(v) => self.knob_height_px = v,
            StyleEdit::KnobWidth(v) => self.knob_width_px = v,
            StyleEdit::InitialText(v) => self.initial_text = v,
            StyleEdit::TextColor(v) => self.text_color = v,
            StyleEdit::BackgroundColor(v) => self.background_color = v,
        }
    }

    /// Apply a sequence of edits, returning the edited style.
    pub fn with_edits(mut self, edits: impl IntoIterator<Item = StyleEdit>) -> Self {
        for edit in edits {
            self.edit(edit);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_legacy_field_names() {
        let json = serde_json::to_value(StyleSettings::default()).unwrap();
        assert_eq!(json["roundness"], 100.0);
        assert_eq!(json["color"], "#FDFC9A");
        assert_eq!(json["lineWeight"], 3.0);
        assert_eq!(json["backgroundColor"], "#25264F");
        assert_eq!(json["initialText"], DEFAULT_TEXT);
    }

    #[test]
    fn reads_integer_fields_and_fills_missing() {
        let style: StyleSettings =
            serde_json::from_str(r##"{"roundness": 40, "color": "#000000"}"##).unwrap();
        assert_eq!(style.knob_roundness_pct, 40.0);
        assert_eq!(style.knob_color, "#000000");
        assert_eq!(style.line_color, StyleSettings::default().line_color);
    }

    #[test]
    fn edits_touch_one_field() {
        let style = StyleSettings::default()
            .with_edits([StyleEdit::KnobWidth(32.0), StyleEdit::TextColor("#111111".into())]);
        assert_eq!(style.knob_width_px, 32.0);
        assert_eq!(style.text_color, "#111111");
        assert_eq!(style.knob_height_px, 20.0);
    }
}
