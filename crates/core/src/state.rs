//! Displayer state and its reducer.
//!
//! [`DisplayerState::apply`] is the pure part: every action maps the state to a
//! new state and may hand back an [`Effect`] that touches the preset store.
//! [`Displayer`] runs those effects and is what front ends dispatch through.

use log::{debug, error, info, warn};

use crate::{
    axes::{AxisRegistry, NewAxis},
    config::{DEFAULT_FONT_SIZE, DEFAULT_FONT_URL, DEFAULT_TEXT},
    font::FontFetcher,
    preset::{Preset, PresetStore, Storage},
    snippet::{GeneratedSnippet, SnippetInput, generate},
    style::{StyleEdit, StyleSettings},
};

pub const NOTICE_STYLE_APPLIED: &str = "Style applied successfully!";
pub const NOTICE_STYLE_RESET: &str = "Global style reset and applied!";
pub const NOTICE_PRESET_SAVED: &str = "Preset saved successfully!";
pub const NOTICE_PRESET_LOADED: &str = "Preset loaded successfully!";
pub const NOTICE_PRESET_REMOVED: &str = "Preset removed successfully!";

/// A user intent.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetFontUrl(String),
    /// The font finished loading, successfully or not.
    FontLoaded(std::result::Result<(), String>),
    SetFontSize(u32),
    SetText(String),
    AddAxis(NewAxis),
    RemoveAxis(String),
    SetAxisValue { id: String, value: f64 },
    ResetAxes,
    EditStyle(StyleEdit),
    ApplyStyle,
    ResetStyle,
    SavePreset(String),
    LoadPreset(String),
    RemovePreset(String),
    GenerateCode,
    ResetCode,
}

/// Side effect requested by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SavePreset { name: String, style: StyleSettings },
    LoadPreset(String),
    RemovePreset(String),
}

/// Everything the displayer shows and generates from.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayerState {
    pub font_url: String,
    pub font_size: u32,
    /// Text shown in the preview.
    pub text: String,
    pub registry: AxisRegistry,
    /// Style being edited.
    pub draft: StyleSettings,
    /// Style the preview and generated code use.
    pub applied: StyleSettings,
    pub selected_preset: Option<String>,
    /// Last generated code. Not refreshed on input changes.
    pub snippet: Option<GeneratedSnippet>,
    pub notice: Option<&'static str>,
}

impl Default for DisplayerState {
    fn default() -> Self {
        Self {
            font_url: DEFAULT_FONT_URL.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            text: DEFAULT_TEXT.to_string(),
            registry: AxisRegistry::new(),
            draft: StyleSettings::default(),
            applied: StyleSettings::default(),
            selected_preset: None,
            snippet: None,
            notice: None,
        }
    }
}

impl DisplayerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action. Preset actions are returned as effects.
    pub fn apply(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::SetFontUrl(url) => {
                if url != self.font_url {
                    self.font_url = url;
                    self.registry.reset();
                }
            }
            Action::FontLoaded(result) => {
                if let Err(e) = result {
                    error!("Error loading font {}: {e}", self.font_url);
                }
                self.registry.reset();
            }
            Action::SetFontSize(size) => self.font_size = size,
            Action::SetText(text) => self.text = text,
            Action::AddAxis(axis) => {
                self.registry.add_axis(axis);
            }
            Action::RemoveAxis(id) => {
                self.registry.remove_axis(&id);
            }
            Action::SetAxisValue { id, value } => {
                self.registry.set_value(&id, value);
            }
            Action::ResetAxes => self.registry.reset(),
            Action::EditStyle(edit) => self.draft.edit(edit),
            Action::ApplyStyle => {
                self.applied = self.draft.clone();
                self.text = self.draft.initial_text.clone();
                self.notice = Some(NOTICE_STYLE_APPLIED);
            }
            Action::ResetStyle => {
                self.draft = StyleSettings::default();
                self.applied = StyleSettings::default();
                self.text = self.draft.initial_text.clone();
                self.notice = Some(NOTICE_STYLE_RESET);
            }
            Action::SavePreset(name) => {
                if name.is_empty() {
                    debug!("ignoring preset save without a name");
                    return None;
                }
                return Some(Effect::SavePreset { name, style: self.draft.clone() });
            }
            Action::LoadPreset(name) => return Some(Effect::LoadPreset(name)),
            Action::RemovePreset(name) => return Some(Effect::RemovePreset(name)),
            Action::GenerateCode => {
                self.generate();
            }
            Action::ResetCode => self.snippet = None,
        }
        None
    }

    /// Copy a preset's style into both the draft and the applied snapshot.
    pub fn load_preset(&mut self, preset: &Preset) {
        self.draft = preset.style.clone();
        self.applied = preset.style.clone();
        self.text = preset.style.initial_text.clone();
        self.selected_preset = Some(preset.name.clone());
        self.notice = Some(NOTICE_PRESET_LOADED);
    }

    pub fn snippet_input(&self) -> SnippetInput<'_> {
        SnippetInput {
            font_url: &self.font_url,
            font_size: self.font_size,
            registry: &self.registry,
            style: &self.applied,
        }
    }

    /// Regenerate the code from the current state and keep it.
    pub fn generate(&mut self) -> &GeneratedSnippet {
        let snippet = generate(&self.snippet_input());
        self.snippet.insert(snippet)
    }
}

/// State plus the preset store it persists to.
#[derive(Debug)]
pub struct Displayer<S> {
    state: DisplayerState,
    presets: PresetStore<S>,
}

impl<S: Storage> Displayer<S> {
    /// Start with default state and presets read from `storage`.
    pub fn new(storage: S) -> Self {
        Self { state: DisplayerState::new(), presets: PresetStore::open(storage) }
    }

    pub fn state(&self) -> &DisplayerState {
        &self.state
    }

    pub fn presets(&self) -> &PresetStore<S> {
        &self.presets
    }

    /// Apply an action and run whatever effect it produced.
    ///
    /// Never fails: persistence errors are logged and the in-memory state kept.
    pub fn dispatch(&mut self, action: Action) {
        self.state.notice = None;
        if let Some(effect) = self.state.apply(action) {
            self.run(effect);
        }
    }

    /// Apply several actions in order.
    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = Action>) {
        for action in actions {
            self.dispatch(action);
        }
    }

    /// Fetch the current font, then reset the registry whatever the outcome.
    ///
    /// Returns the font bytes on success.
    pub fn load_font(&mut self, fetcher: &impl FontFetcher) -> Option<Vec<u8>> {
        let result = fetcher.fetch(&self.state.font_url);
        let outcome = result.as_ref().map(|_| ()).map_err(|e| e.to_string());
        self.dispatch(Action::FontLoaded(outcome));
        result.ok()
    }

    /// Generate code for the current state and return it.
    pub fn generate(&mut self) -> &GeneratedSnippet {
        self.state.notice = None;
        self.state.generate()
    }

    fn run(&mut self, effect: Effect) {
        match effect {
            Effect::SavePreset { name, style } => match self.presets.save(&name, style) {
                Ok(true) => {
                    info!("saved preset {name:?}");
                    self.state.notice = Some(NOTICE_PRESET_SAVED);
                }
                Ok(false) => {}
                Err(e) => warn!("failed to persist preset {name:?}: {e}"),
            },
            Effect::LoadPreset(name) => match self.presets.load(&name) {
                Some(preset) => self.state.load_preset(preset),
                None => debug!("no preset named {name:?}"),
            },
            Effect::RemovePreset(name) => {
                self.state.selected_preset = None;
                match self.presets.remove(&name) {
                    Ok(0) => debug!("no preset named {name:?} to remove"),
                    Ok(removed) => {
                        info!("removed {removed} preset(s) named {name:?}");
                        self.state.notice = Some(NOTICE_PRESET_REMOVED);
                    }
                    Err(e) => warn!("failed to persist removal of preset {name:?}: {e}"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::PRESET_SLOT_KEY,
        error::{Error, Result},
        preset::MemoryStorage,
    };

    #[test]
    fn apply_style_copies_draft() {
        let mut state = DisplayerState::new();
        state.apply(Action::EditStyle(StyleEdit::KnobColor("#000000".into())));
        state.apply(Action::EditStyle(StyleEdit::InitialText("Hello".into())));
        assert_eq!(state.applied, StyleSettings::default());

        state.apply(Action::ApplyStyle);
        assert_eq!(state.applied.knob_color, "#000000");
        assert_eq!(state.text, "Hello");
        assert_eq!(state.notice, Some(NOTICE_STYLE_APPLIED));
    }

    #[test]
    fn reset_style_restores_defaults() {
        let mut state = DisplayerState::new();
        state.apply(Action::EditStyle(StyleEdit::LineWeight(9.0)));
        state.apply(Action::ApplyStyle);
        state.apply(Action::ResetStyle);

        assert_eq!(state.draft, StyleSettings::default());
        assert_eq!(state.applied, StyleSettings::default());
        assert_eq!(state.text, DEFAULT_TEXT);
    }

    #[test]
    fn font_url_change_resets_axes() {
        let mut state = DisplayerState::new();
        state.apply(Action::AddAxis(NewAxis::new("wght", "Weight", 100.0, 900.0)));

        state.apply(Action::SetFontUrl(DEFAULT_FONT_URL.into()));
        assert_eq!(state.registry.len(), 1);

        state.apply(Action::SetFontUrl("https://example.com/Other.woff2".into()));
        assert!(state.registry.is_empty());
    }

    #[test]
    fn font_load_resets_axes_either_way() {
        let mut state = DisplayerState::new();
        state.apply(Action::AddAxis(NewAxis::new("wght", "Weight", 100.0, 900.0)));
        state.apply(Action::FontLoaded(Ok(())));
        assert!(state.registry.is_empty());

        state.apply(Action::AddAxis(NewAxis::new("wght", "Weight", 100.0, 900.0)));
        state.apply(Action::FontLoaded(Err("network down".into())));
        assert!(state.registry.is_empty());
    }

    #[test]
    fn generated_code_is_stale_until_regenerated() {
        let mut state = DisplayerState::new();
        state.apply(Action::GenerateCode);
        let before = state.snippet.clone().unwrap();

        state.apply(Action::SetFontSize(64));
        assert_eq!(state.snippet.as_ref(), Some(&before));

        state.apply(Action::GenerateCode);
        assert_ne!(state.snippet.as_ref(), Some(&before));

        state.apply(Action::ResetCode);
        assert!(state.snippet.is_none());
        assert_eq!(state.font_size, 64);
    }

    #[test]
    fn generated_code_uses_applied_style_not_draft() {
        let mut state = DisplayerState::new();
        state.apply(Action::EditStyle(StyleEdit::KnobColor("#C0FFEE".into())));
        state.apply(Action::GenerateCode);
        assert!(!state.snippet.as_ref().unwrap().js.contains("#C0FFEE"));

        state.apply(Action::ApplyStyle);
        state.apply(Action::GenerateCode);
        assert!(state.snippet.as_ref().unwrap().js.contains("#C0FFEE"));
    }

    #[test]
    fn save_without_name_has_no_effect() {
        let mut state = DisplayerState::new();
        assert_eq!(state.apply(Action::SavePreset(String::new())), None);
        assert!(matches!(
            state.apply(Action::SavePreset("x".into())),
            Some(Effect::SavePreset { .. })
        ));
    }

    #[test]
    fn preset_round_trip() {
        let mut displayer = Displayer::new(MemoryStorage::new());
        let edits = [
            StyleEdit::KnobRoundness(10.0),
            StyleEdit::KnobColor("#111111".into()),
            StyleEdit::LineWeight(5.0),
            StyleEdit::LineColor("#222222".into()),
            StyleEdit::KnobHeight(30.0),
            StyleEdit::KnobWidth(12.0),
            StyleEdit::InitialText("Variable".into()),
            StyleEdit::TextColor("#333333".into()),
            StyleEdit::BackgroundColor("#444444".into()),
        ];
        let saved = StyleSettings::default().with_edits(edits.clone());

        displayer.dispatch_all(edits.into_iter().map(Action::EditStyle));
        displayer.dispatch(Action::SavePreset("mine".into()));
        assert_eq!(displayer.state().notice, Some(NOTICE_PRESET_SAVED));

        displayer.dispatch(Action::ResetStyle);
        displayer.dispatch(Action::LoadPreset("mine".into()));

        let state = displayer.state();
        assert_eq!(state.draft, saved);
        assert_eq!(state.applied, saved);
        assert_eq!(state.text, "Variable");
        assert_eq!(state.selected_preset.as_deref(), Some("mine"));
        assert_eq!(state.notice, Some(NOTICE_PRESET_LOADED));
    }

    #[test]
    fn load_missing_preset_is_noop() {
        let mut displayer = Displayer::new(MemoryStorage::new());
        let before = displayer.state().clone();
        displayer.dispatch(Action::LoadPreset("ghost".into()));
        assert_eq!(displayer.state(), &before);
    }

    #[test]
    fn remove_clears_selection() {
        let mut displayer = Displayer::new(MemoryStorage::new());
        displayer.dispatch(Action::SavePreset("mine".into()));
        displayer.dispatch(Action::LoadPreset("mine".into()));
        displayer.dispatch(Action::RemovePreset("mine".into()));

        assert!(displayer.presets().load("mine").is_none());
        assert_eq!(displayer.state().selected_preset, None);
        assert_eq!(displayer.state().notice, Some(NOTICE_PRESET_REMOVED));
    }

    struct ReadOnly;

    /// Reads from the wrapped storage, refuses every write.
    struct ReadOnlyAfter(MemoryStorage);

    impl Storage for ReadOnlyAfter {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.0.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            ReadOnly.set(key, value)
        }
    }

    impl Storage for ReadOnly {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<()> {
            Err(Error::Io {
                path: key.into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            })
        }
    }

    #[test]
    fn storage_failure_keeps_memory_state() {
        let mut displayer = Displayer::new(ReadOnly);
        displayer.dispatch(Action::SavePreset("mine".into()));

        assert_eq!(displayer.presets().list().len(), 1);
        assert_eq!(displayer.state().notice, None);
    }

    #[test]
    fn load_font_resets_on_failure() {
        let mut displayer = Displayer::new(MemoryStorage::new());
        displayer.dispatch(Action::AddAxis(NewAxis::new("wght", "Weight", 100.0, 900.0)));

        let failing = |_url: &str| -> Result<Vec<u8>> {
            Err(Error::Io {
                path: "missing.ttf".into(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
        };
        assert!(displayer.load_font(&failing).is_none());
        assert!(displayer.state().registry.is_empty());

        displayer.dispatch(Action::AddAxis(NewAxis::new("wght", "Weight", 100.0, 900.0)));
        let ok = |_url: &str| -> Result<Vec<u8>> { Ok(vec![1, 2, 3]) };
        assert_eq!(displayer.load_font(&ok), Some(vec![1, 2, 3]));
        assert!(displayer.state().registry.is_empty());
    }

    #[test]
    fn remove_notice_only_on_success() {
        let mut displayer = Displayer::new(MemoryStorage::new());
        displayer.dispatch(Action::RemovePreset("ghost".into()));
        assert_eq!(displayer.state().notice, None);

        let mut storage = MemoryStorage::new();
        let slot = serde_json::to_string(&[Preset {
            name: "mine".into(),
            style: StyleSettings::default(),
        }])
        .unwrap();
        storage.set(PRESET_SLOT_KEY, &slot).unwrap();
        let mut displayer = Displayer::new(ReadOnlyAfter(storage));
        displayer.dispatch(Action::LoadPreset("mine".into()));
        displayer.dispatch(Action::RemovePreset("mine".into()));

        assert_eq!(displayer.state().selected_preset, None);
        assert_eq!(displayer.state().notice, None);
    }

    #[test]
    fn generate_matches_generate_code_action() {
        let mut displayer = Displayer::new(MemoryStorage::new());
        displayer.dispatch(Action::AddAxis(NewAxis::new("wght", "Weight", 100.0, 900.0)));
        let direct = displayer.generate().clone();

        let mut state = displayer.state().clone();
        state.apply(Action::ResetCode);
        state.apply(Action::GenerateCode);
        assert_eq!(state.snippet, Some(direct));
    }
}
