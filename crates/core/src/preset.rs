//! Named style presets persisted to a durable key-value slot.

use std::{
    collections::HashMap,
    fs::{create_dir_all, read_to_string, write},
    io::ErrorKind,
    path::PathBuf,
};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    config::{APP_DIR_NAME, PRESET_SLOT_KEY},
    error::{Error, Result},
    style::StyleSettings,
};

/// A named style snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub style: StyleSettings,
}

/// A durable string slot store.
pub trait Storage {
    /// Read a slot. `Ok(None)` when it was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite a slot.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// One JSON file per slot inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage under the platform config directory, e.g. `~/.config/vf-displayer`.
    pub fn in_config_dir() -> Self {
        Self::new(Self::default_dir())
    }

    pub fn default_dir() -> PathBuf {
        dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR_NAME)
    }

    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        match read_to_string(&path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(Error::Io { path, source }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        create_dir_all(&self.dir)
            .map_err(|source| Error::Io { path: self.dir.clone(), source })?;
        let path = self.slot_path(key);
        write(&path, value).map_err(|source| Error::Io { path, source })
    }
}

/// Volatile storage, for tests and one-off sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The saved presets, mirrored in memory and written through to storage.
#[derive(Debug)]
pub struct PresetStore<S> {
    storage: S,
    presets: Vec<Preset>,
}

impl<S: Storage> PresetStore<S> {
    /// Load the preset collection once from the durable slot.
    ///
    /// A missing, unreadable, or malformed slot yields an empty collection.
    pub fn open(storage: S) -> Self {
        let presets = match storage.get(PRESET_SLOT_KEY) {
            Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_else(|e| {
                warn!("ignoring malformed preset slot: {e}");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("failed to read preset slot: {e}");
                Vec::new()
            }
        };
        debug!("loaded {} presets", presets.len());
        Self { storage, presets }
    }

    pub fn list(&self) -> &[Preset] {
        &self.presets
    }

    /// First preset with the given name.
    pub fn load(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Save `style` under `name` and rewrite the slot.
    ///
    /// An empty name is ignored and returns `Ok(false)`. A name that is already
    /// taken has its first entry replaced in place.
    pub fn save(&mut self, name: &str, style: StyleSettings) -> Result<bool> {
        if name.is_empty() {
            debug!("ignoring preset save without a name");
            return Ok(false);
        }

        match self.presets.iter_mut().find(|p| p.name == name) {
            Some(existing) => existing.style = style,
            None => self.presets.push(Preset { name: name.to_string(), style }),
        }
        self.persist()?;
        Ok(true)
    }

    /// Remove every preset named `name` and rewrite the slot.
    ///
    /// Returns how many entries were removed.
    pub fn remove(&mut self, name: &str) -> Result<usize> {
        let before = self.presets.len();
        self.presets.retain(|p| p.name != name);
        let removed = before - self.presets.len();
        self.persist()?;
        Ok(removed)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.presets)?;
        self.storage.set(PRESET_SLOT_KEY, &json)
    }
}
