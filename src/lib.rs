pub mod conformal;
pub mod convert;
pub mod discrete;
pub mod error;
pub mod grammar;
pub mod math;
pub mod operations;
pub mod spatial;
pub mod structural;

pub use error::{ArchistructError, Result};
