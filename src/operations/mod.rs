//! Geometric edits on a spatial (MS) building.

pub mod modification;
pub mod transform;

pub use modification::SplitSpace;
pub use transform::{Scale, SetZZero, SnapOn, Translate};
