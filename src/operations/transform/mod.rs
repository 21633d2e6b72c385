mod scale;
mod snap;
mod translate;

pub use scale::Scale;
pub use snap::SnapOn;
pub use translate::{SetZZero, Translate};
