use std::path::PathBuf;

use thiserror::Error;

use crate::spatial::SpaceId;

/// Top-level error type for the archistruct crate.
#[derive(Debug, Error)]
pub enum ArchistructError {
    #[error(transparent)]
    Spatial(#[from] SpatialError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Conformal(#[from] ConformalError),

    #[error(transparent)]
    Grammar(#[from] GrammarError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Input(#[from] InputError),
}

/// Errors raised by edits on a spatial (MS) building.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("{operation}: axis {axis} does not exist (expected 0, 1 or 2)")]
    InvalidAxis { operation: &'static str, axis: usize },

    #[error("{operation}: axis {axis} was given more than once")]
    DuplicateAxis { operation: &'static str, axis: usize },

    #[error("cannot split space {space} into fewer than two parts (divisor = {divisor})")]
    InvalidDivisor { space: SpaceId, divisor: u32 },

    #[error("scale factor {factor} for axis {axis} must be positive and finite")]
    InvalidScaleFactor { axis: usize, factor: f64 },

    #[error("snap-on grid size {size} for axis {axis} must be positive and finite")]
    InvalidGridSize { axis: usize, size: f64 },

    #[error("space not found: {0}")]
    SpaceNotFound(String),

    #[error("space id {0} is already used in this building")]
    DuplicateSpaceId(SpaceId),

    #[error("no space ids left above {last}")]
    IdsExhausted { last: SpaceId },
}

/// Errors raised while converting between the spatial and the grid model.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("cannot convert a building without spaces")]
    EmptyModel,

    #[error("space {space} does not occupy any grid cell")]
    EmptyMask { space: SpaceId },

    #[error("bitmask of space {space} has {found} cells, grid has {expected}")]
    MaskLength {
        space: SpaceId,
        expected: usize,
        found: usize,
    },

    #[error("space id {0} appears in more than one grid row")]
    DuplicateSpaceId(SpaceId),
}

/// Errors related to the conformal decomposition arena.
#[derive(Debug, Error)]
pub enum ConformalError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),
}

/// Whether a rectangle lookup was made in the floor or the wall table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceContext {
    Floor,
    Wall,
}

impl std::fmt::Display for SurfaceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Floor => f.write_str("floor"),
            Self::Wall => f.write_str("wall"),
        }
    }
}

/// Fatal lookup failures of a grammar run.
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error(
        "no type settings for \"{space_type}\" (space); has it been specified in \"{}\"?",
        .path.display()
    )]
    MissingSpaceSettings { space_type: String, path: PathBuf },

    #[error(
        "no type settings for \"{first}\" - \"{second}\" ({context}); has it been specified in \"{}\"?",
        .path.display()
    )]
    MissingSurfaceSettings {
        first: String,
        second: String,
        context: SurfaceContext,
        path: PathBuf,
    },
}

/// Errors raised while reading structural type settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read settings file \"{}\"", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings in \"{}\": {source}", .path.display())]
    Deserialize {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{table} settings for \"{key}\" are defined twice in \"{}\"", .path.display())]
    DuplicateEntry {
        table: &'static str,
        key: String,
        path: PathBuf,
    },
}

/// File level errors for the spatial text format.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("could not open \"{}\"", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write \"{}\"", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line_number}: could not parse \"{line}\": {reason}", .path.display())]
    Parse {
        path: PathBuf,
        line_number: usize,
        line: String,
        #[source]
        reason: SpaceParseError,
    },
}

/// Errors in a single space record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpaceParseError {
    #[error("expected at least {expected} fields, found {found}")]
    MissingFields { expected: usize, found: usize },

    #[error("field {field} is not a valid {kind}: \"{value}\"")]
    InvalidField {
        field: &'static str,
        kind: &'static str,
        value: String,
    },

    #[error("{field} must not be negative")]
    NegativeExtent { field: &'static str },

    #[error("record does not start with an R prefix")]
    MissingPrefix,
}

/// Convenience type alias for results using [`ArchistructError`].
pub type Result<T> = std::result::Result<T, ArchistructError>;
