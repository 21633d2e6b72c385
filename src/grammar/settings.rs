use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::SettingsError;
use crate::structural::{Load, LoadPanel, Structure};

/// Mesh size used when the settings file does not name one.
pub const DEFAULT_MESH_SIZE: usize = 1;

fn default_mesh_size() -> usize {
    DEFAULT_MESH_SIZE
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSettings {
    #[serde(default = "default_mesh_size")]
    mesh_size: usize,
    #[serde(default)]
    space: Vec<RawSpace>,
    #[serde(default)]
    floor: Vec<RawPair>,
    #[serde(default)]
    wall: Vec<RawPair>,
    load_panel: Option<LoadPanel>,
    #[serde(default)]
    load: Vec<Load>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSpace {
    #[serde(rename = "type")]
    space_type: String,
    structure: Structure,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPair {
    types: [String; 2],
    structure: Structure,
}

/// Structures keyed by an ordered pair of types.
///
/// `[a, b]` also answers lookups for `[b, a]` until `[b, a]` is given
/// explicitly.
#[derive(Debug, Clone, Default)]
struct PairTable {
    entries: HashMap<(String, String), Structure>,
    explicit: HashSet<(String, String)>,
}

impl PairTable {
    fn insert(
        &mut self,
        table: &'static str,
        first: &str,
        second: &str,
        structure: Structure,
        path: &Path,
    ) -> Result<(), SettingsError> {
        let key = (first.to_owned(), second.to_owned());
        if self.explicit.contains(&key) {
            return Err(SettingsError::DuplicateEntry {
                table,
                key: format!("{first} - {second}"),
                path: path.to_path_buf(),
            });
        }
        let mirrored = (second.to_owned(), first.to_owned());
        if !self.explicit.contains(&mirrored) {
            self.entries.insert(mirrored, structure.clone());
        }
        self.entries.insert(key.clone(), structure);
        self.explicit.insert(key);
        Ok(())
    }

    fn get(&self, first: &str, second: &str) -> Option<&Structure> {
        self.entries.get(&(first.to_owned(), second.to_owned()))
    }
}

/// Structural type settings: which structure each space type, floor type
/// pair and wall type pair receives, plus the loads and mesh size handed to
/// the structural model.
#[derive(Debug, Clone)]
pub struct SdSettings {
    path: PathBuf,
    spaces: HashMap<String, Structure>,
    floors: PairTable,
    walls: PairTable,
    mesh_size: usize,
    load_panel: Option<LoadPanel>,
    loads: Vec<Load>,
}

impl SdSettings {
    /// Empty settings attributed to `path` in error messages.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            spaces: HashMap::new(),
            floors: PairTable::default(),
            walls: PairTable::default(),
            mesh_size: DEFAULT_MESH_SIZE,
            load_panel: None,
            loads: Vec::new(),
        }
    }

    /// Reads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Read`] if the file cannot be read, and the
    /// errors of [`SdSettings::from_toml_str`] otherwise.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Parses TOML settings; `path` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Deserialize`] for malformed TOML, unknown
    /// keys or unknown structure types, and [`SettingsError::DuplicateEntry`]
    /// when a space type or type pair is defined twice.
    pub fn from_toml_str(text: &str, path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        let raw: RawSettings = toml::from_str(text).map_err(|source| SettingsError::Deserialize {
            path: path.clone(),
            source,
        })?;

        let mut settings = Self::new(path);
        settings.set_mesh_size(raw.mesh_size);
        for space in raw.space {
            settings.insert_space(&space.space_type, space.structure)?;
        }
        for floor in raw.floor {
            let [a, b] = &floor.types;
            settings.insert_floor(a, b, floor.structure)?;
        }
        for wall in raw.wall {
            let [a, b] = &wall.types;
            settings.insert_wall(a, b, wall.structure)?;
        }
        if let Some(panel) = raw.load_panel {
            settings.set_load_panel(panel);
        }
        for load in raw.load {
            settings.add_load(load);
        }
        Ok(settings)
    }

    /// # Errors
    ///
    /// Returns [`SettingsError::DuplicateEntry`] if the type already has settings.
    pub fn insert_space(&mut self, space_type: &str, structure: Structure) -> Result<(), SettingsError> {
        if self.spaces.contains_key(space_type) {
            return Err(SettingsError::DuplicateEntry {
                table: "space",
                key: space_type.to_owned(),
                path: self.path.clone(),
            });
        }
        self.spaces.insert(space_type.to_owned(), structure);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`SettingsError::DuplicateEntry`] if the pair was given before.
    pub fn insert_floor(&mut self, first: &str, second: &str, structure: Structure) -> Result<(), SettingsError> {
        self.floors.insert("floor", first, second, structure, &self.path)
    }

    /// # Errors
    ///
    /// Returns [`SettingsError::DuplicateEntry`] if the pair was given before.
    pub fn insert_wall(&mut self, first: &str, second: &str, structure: Structure) -> Result<(), SettingsError> {
        self.walls.insert("wall", first, second, structure, &self.path)
    }

    pub fn set_mesh_size(&mut self, mesh_size: usize) {
        self.mesh_size = mesh_size;
    }

    pub fn set_load_panel(&mut self, panel: LoadPanel) {
        self.load_panel = Some(panel);
    }

    pub fn add_load(&mut self, load: Load) {
        self.loads.push(load);
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn space(&self, space_type: &str) -> Option<&Structure> {
        self.spaces.get(space_type)
    }

    #[must_use]
    pub fn floor(&self, first: &str, second: &str) -> Option<&Structure> {
        self.floors.get(first, second)
    }

    #[must_use]
    pub fn wall(&self, first: &str, second: &str) -> Option<&Structure> {
        self.walls.get(first, second)
    }

    #[must_use]
    pub fn mesh_size(&self) -> usize {
        self.mesh_size
    }

    #[must_use]
    pub fn load_panel(&self) -> Option<&LoadPanel> {
        self.load_panel.as_ref()
    }

    #[must_use]
    pub fn loads(&self) -> &[Load] {
        &self.loads
    }
}
