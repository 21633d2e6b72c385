//! Per-primitive rules: each pairs one conformal primitive with the
//! structure resolved for it and knows how to write itself into an
//! [`SdModel`](crate::structural::SdModel).
//!
//! Rules copy the geometry they need when they are created, so applying
//! them cannot fail.

mod cuboid;
mod line;
mod rectangle;
mod vertex;

pub use cuboid::CuboidRule;
pub use line::LineRule;
pub use rectangle::RectangleRule;
pub use vertex::VertexRule;
