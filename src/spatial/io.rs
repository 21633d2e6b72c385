//! Reading and writing the line-based spatial text format.
//!
//! Each space is one `R,`-prefixed record (see [`Space`]'s `FromStr`).
//! Blank lines and lines with any other prefix are skipped.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use super::{MsBuilding, Space};
use crate::error::{ArchistructError, InputError, Result};

/// Source label used when a building is parsed from memory.
const IN_MEMORY: &str = "<memory>";

fn is_space_record(line: &str) -> bool {
    line.starts_with("R,") || line.starts_with("r,")
}

fn parse_building(text: &str, path: &Path) -> Result<MsBuilding> {
    let mut building = MsBuilding::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || !is_space_record(line) {
            continue;
        }
        let space = line.parse::<Space>().map_err(|reason| InputError::Parse {
            path: path.to_path_buf(),
            line_number: index + 1,
            line: line.to_owned(),
            reason,
        })?;
        building.add_space(&space)?;
    }
    debug!(path = %path.display(), spaces = building.len(), "parsed spatial design");
    Ok(building)
}

impl MsBuilding {
    /// Reads a building from a spatial text file.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Open`] if the file cannot be read,
    /// [`InputError::Parse`] for a malformed record, or a spatial error if
    /// two records share an id.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| InputError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        parse_building(&text, path)
    }

    /// Writes the building in the spatial text format.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Write`] if the file cannot be written.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_string()).map_err(|source| InputError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }
}

impl FromStr for MsBuilding {
    type Err = ArchistructError;

    fn from_str(s: &str) -> Result<Self> {
        parse_building(s, Path::new(IN_MEMORY))
    }
}
