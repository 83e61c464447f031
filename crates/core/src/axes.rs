//! Axis registry: the variation axes exposed as sliders and their current values.

use font_axes::FontAxis;
use indexmap::IndexMap;
use log::debug;

use crate::js::number;

/// A variation axis the user chose to expose.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisDefinition {
    pub id: String,
    pub display_name: String,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

/// Request to add an axis to the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAxis {
    pub id: String,
    pub display_name: String,
    pub min: f64,
    pub max: f64,
}

impl NewAxis {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, min: f64, max: f64) -> Self {
        Self { id: id.into(), display_name: display_name.into(), min, max }
    }
}

impl From<&FontAxis> for NewAxis {
    fn from(axis: &FontAxis) -> Self {
        Self::new(axis.tag.clone(), axis.name.clone(), axis.min, axis.max)
    }
}

/// Ordered axis definitions plus a parallel map of current values.
///
/// Both maps keep insertion order, which is the order sliders are emitted in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisRegistry {
    axes: IndexMap<String, AxisDefinition>,
    values: IndexMap<String, f64>,
}

impl AxisRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an axis whose current value starts at `min`.
    ///
    /// Empty or already registered ids are ignored, as are bounds that would
    /// break `min <= default <= max`. Returns whether the axis was added.
    pub fn add_axis(&mut self, axis: NewAxis) -> bool {
        let NewAxis { id, display_name, min, max } = axis;

        if id.is_empty() || self.axes.contains_key(&id) {
            debug!("ignoring axis {id:?}: empty or already present");
            return false;
        }
        if !min.is_finite() || !max.is_finite() || min > max {
            debug!("ignoring axis {id:?}: invalid range {min}..{max}");
            return false;
        }

        let display_name = if display_name.is_empty() { id.clone() } else { display_name };
        self.values.insert(id.clone(), min);
        self.axes.insert(id.clone(), AxisDefinition { id, display_name, min, max, default: min });
        true
    }

    /// Remove an axis and its value. Returns the removed definition, if any.
    pub fn remove_axis(&mut self, id: &str) -> Option<AxisDefinition> {
        self.values.shift_remove(id);
        self.axes.shift_remove(id)
    }

    /// Store the current value of a registered axis.
    ///
    /// The value is not clamped; keeping it within `[min, max]` is up to the caller.
    pub fn set_value(&mut self, id: &str, value: f64) -> bool {
        match self.values.get_mut(id) {
            Some(current) => {
                *current = value;
                true
            }
            None => {
                debug!("ignoring value for unknown axis {id:?}");
                false
            }
        }
    }

    pub fn value(&self, id: &str) -> Option<f64> {
        self.values.get(id).copied()
    }

    pub fn get(&self, id: &str) -> Option<&AxisDefinition> {
        self.axes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.axes.contains_key(id)
    }

    /// Axis definitions with their current values, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&AxisDefinition, f64)> {
        self.axes
            .values()
            .map(|axis| (axis, self.values.get(&axis.id).copied().unwrap_or(axis.default)))
    }

    pub fn len(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Drop every axis. Axis ids only make sense for the font they were declared for.
    pub fn reset(&mut self) {
        self.axes.clear();
        self.values.clear();
    }

    /// The `font-variation-settings` value for the current axis values.
    ///
    /// `"wght" 700, "wdth" 85`
    pub fn variation_settings(&self) -> String {
        self.iter()
            .map(|(axis, value)| format!("\"{}\" {}", axis.id, number(value)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weight() -> NewAxis {
        NewAxis::new("wght", "Weight", 100.0, 900.0)
    }

    #[test]
    fn add_starts_at_min() {
        let mut registry = AxisRegistry::new();
        assert!(registry.add_axis(weight()));

        let axis = registry.get("wght").unwrap();
        assert_eq!(axis.default, 100.0);
        assert_eq!(registry.value("wght"), Some(100.0));
    }

    #[test]
    fn add_ignores_empty_and_duplicate_ids() {
        let mut registry = AxisRegistry::new();
        assert!(!registry.add_axis(NewAxis::new("", "Nothing", 0.0, 1.0)));
        assert!(registry.add_axis(weight()));
        assert!(!registry.add_axis(NewAxis::new("wght", "Again", 1.0, 2.0)));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("wght").unwrap().display_name, "Weight");
    }

    #[test]
    fn add_rejects_inverted_range() {
        let mut registry = AxisRegistry::new();
        assert!(!registry.add_axis(NewAxis::new("wdth", "Width", 200.0, 50.0)));
        assert!(!registry.add_axis(NewAxis::new("opsz", "", f64::NAN, 10.0)));
        assert!(registry.is_empty());
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let mut registry = AxisRegistry::new();
        registry.add_axis(NewAxis::new("GRAD", "", -200.0, 150.0));
        assert_eq!(registry.get("GRAD").unwrap().display_name, "GRAD");
    }

    #[test]
    fn add_then_remove_restores_previous_state() {
        let mut registry = AxisRegistry::new();
        registry.add_axis(NewAxis::new("wdth", "Width", 50.0, 200.0));
        registry.set_value("wdth", 75.0);
        let before = registry.clone();

        registry.add_axis(weight());
        let removed = registry.remove_axis("wght").unwrap();

        assert_eq!(removed.id, "wght");
        assert_eq!(registry, before);
        assert_eq!(registry.variation_settings(), before.variation_settings());
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut registry = AxisRegistry::new();
        registry.add_axis(weight());
        assert!(registry.remove_axis("slnt").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn set_value_reads_back() {
        let mut registry = AxisRegistry::new();
        registry.add_axis(weight());

        for value in [100.0, 350.5, 700.0, 900.0] {
            assert!(registry.set_value("wght", value));
            assert_eq!(registry.value("wght"), Some(value));
        }
        assert!(!registry.set_value("ital", 1.0));
    }

    #[test]
    fn variation_settings_keeps_insertion_order() {
        let mut registry = AxisRegistry::new();
        registry.add_axis(NewAxis::new("wdth", "Width", 50.0, 200.0));
        registry.add_axis(weight());
        registry.add_axis(NewAxis::new("slnt", "Slant", -15.0, 0.0));
        registry.set_value("wght", 700.0);
        registry.set_value("slnt", -7.5);

        assert_eq!(registry.variation_settings(), r#""wdth" 50, "wght" 700, "slnt" -7.5"#);
    }

    #[test]
    fn reset_clears_everything() {
        let mut registry = AxisRegistry::new();
        registry.add_axis(weight());
        registry.reset();

        assert!(registry.is_empty());
        assert_eq!(registry.value("wght"), None);
        assert_eq!(registry.variation_settings(), "");
    }

    #[test]
    fn converts_font_axis() {
        let axis = FontAxis {
            tag: "wght".into(),
            name: "Weight".into(),
            min: 100.0,
            default: 400.0,
            max: 900.0,
            hidden: false,
        };
        assert_eq!(NewAxis::from(&axis), weight());
    }
}
