use std::fmt;
use std::str::FromStr;

use crate::error::SpaceParseError;
use crate::math::{approx_eq, Point3, Vector3, AXES};

/// Space type given to records that do not name one.
pub const DEFAULT_SPACE_TYPE: &str = "A";

/// Identifier of a space, unique within one building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpaceId(pub u32);

impl fmt::Display for SpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An axis-aligned, box-shaped space.
///
/// The box is half-open: `[origin, origin + extent)` on every axis.
#[derive(Debug, Clone)]
pub struct Space {
    id: SpaceId,
    origin: Point3,
    extent: Vector3,
    space_type: String,
    surface_type: Option<String>,
}

impl Space {
    /// Creates a space of the default type.
    #[must_use]
    pub fn new(id: SpaceId, origin: Point3, extent: Vector3) -> Self {
        Self {
            id,
            origin,
            extent,
            space_type: DEFAULT_SPACE_TYPE.to_owned(),
            surface_type: None,
        }
    }

    /// Sets the semantic space type.
    #[must_use]
    pub fn with_space_type(mut self, space_type: impl Into<String>) -> Self {
        self.space_type = space_type.into();
        self
    }

    /// Sets the surface type shared by all faces of this space.
    #[must_use]
    pub fn with_surface_type(mut self, surface_type: impl Into<String>) -> Self {
        self.surface_type = Some(surface_type.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> SpaceId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: SpaceId) {
        self.id = id;
    }

    /// Returns the lower corner of the box.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the box dimensions (width, depth, height).
    #[must_use]
    pub fn extent(&self) -> &Vector3 {
        &self.extent
    }

    /// Returns the upper (exclusive) corner of the box.
    #[must_use]
    pub fn far_corner(&self) -> Point3 {
        self.origin + self.extent
    }

    /// Replaces the box by `[origin, far)`.
    pub(crate) fn set_corners(&mut self, origin: Point3, far: Point3) {
        self.origin = origin;
        self.extent = far - origin;
    }

    pub(crate) fn translate(&mut self, displacement: &Vector3) {
        self.origin += displacement;
    }

    #[must_use]
    pub fn space_type(&self) -> &str {
        &self.space_type
    }

    #[must_use]
    pub fn surface_type(&self) -> Option<&str> {
        self.surface_type.as_deref()
    }

    /// Surface type used for rectangle lookups; falls back to the space type.
    #[must_use]
    pub fn effective_surface_type(&self) -> &str {
        self.surface_type.as_deref().unwrap_or(&self.space_type)
    }

    #[must_use]
    pub fn volume(&self) -> f64 {
        self.extent.x * self.extent.y * self.extent.z
    }

    /// Half-open containment test on all three axes.
    #[must_use]
    pub fn contains(&self, point: &Point3) -> bool {
        let far = self.far_corner();
        (0..AXES).all(|k| point[k] >= self.origin[k] && point[k] < far[k])
    }
}

impl PartialEq for Space {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.space_type == other.space_type
            && self.surface_type == other.surface_type
            && (0..AXES).all(|k| {
                approx_eq(self.origin[k], other.origin[k])
                    && approx_eq(self.extent[k], other.extent[k])
            })
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "R,{},{},{},{},{},{},{},{}",
            self.id,
            self.extent.x,
            self.extent.y,
            self.extent.z,
            self.origin.x,
            self.origin.y,
            self.origin.z,
            self.space_type
        )?;
        if let Some(surface) = &self.surface_type {
            write!(f, ",{surface}")?;
        }
        Ok(())
    }
}

const COORD_FIELDS: [&str; 6] = ["width", "depth", "height", "x", "y", "z"];

fn parse_number(field: &'static str, value: &str) -> Result<f64, SpaceParseError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| SpaceParseError::InvalidField {
            field,
            kind: "number",
            value: value.to_owned(),
        })
}

impl FromStr for Space {
    type Err = SpaceParseError;

    /// Parses `R,<id>,<w>,<d>,<h>,<x>,<y>,<z>[,<space type>[,<surface type>]]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let rest = s
            .strip_prefix("R,")
            .or_else(|| s.strip_prefix("r,"))
            .ok_or(SpaceParseError::MissingPrefix)?;
        let fields: Vec<&str> = rest.split(',').map(str::trim).collect();
        if fields.len() < 7 {
            return Err(SpaceParseError::MissingFields {
                expected: 7,
                found: fields.len(),
            });
        }

        let id = fields[0]
            .parse::<u32>()
            .map_err(|_| SpaceParseError::InvalidField {
                field: "id",
                kind: "space id",
                value: fields[0].to_owned(),
            })?;

        let mut values = [0.0; 6];
        for (slot, (name, raw)) in values.iter_mut().zip(COORD_FIELDS.iter().zip(&fields[1..7])) {
            *slot = parse_number(*name, raw)?;
        }
        for (name, value) in COORD_FIELDS.iter().zip(&values).take(AXES) {
            if *value < 0.0 {
                return Err(SpaceParseError::NegativeExtent { field: *name });
            }
        }

        let mut space = Space::new(
            SpaceId(id),
            Point3::new(values[3], values[4], values[5]),
            Vector3::new(values[0], values[1], values[2]),
        );
        if let Some(space_type) = fields.get(7).filter(|t| !t.is_empty()) {
            space.space_type = (*space_type).to_owned();
        }
        if let Some(surface_type) = fields.get(8).filter(|t| !t.is_empty()) {
            space.surface_type = Some((*surface_type).to_owned());
        }
        Ok(space)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn unit_box(id: u32) -> Space {
        Space::new(
            SpaceId(id),
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 1.0),
        )
    }

    #[test]
    fn parse_full_record() {
        let space: Space = "R, 4, 3000, 4000, 2500, 0, 3000, 0, office, glass"
            .parse()
            .unwrap();
        assert_eq!(space.id(), SpaceId(4));
        assert_eq!(space.extent(), &Vector3::new(3000.0, 4000.0, 2500.0));
        assert_eq!(space.origin(), &Point3::new(0.0, 3000.0, 0.0));
        assert_eq!(space.space_type(), "office");
        assert_eq!(space.surface_type(), Some("glass"));
    }

    #[test]
    fn parse_lowercase_prefix_defaults_type() {
        let space: Space = "r,1,1,1,1,0,0,0".parse().unwrap();
        assert_eq!(space.space_type(), DEFAULT_SPACE_TYPE);
        assert_eq!(space.effective_surface_type(), DEFAULT_SPACE_TYPE);
    }

    #[test]
    fn parse_rejects_short_record() {
        let err = "R,1,2,3".parse::<Space>().unwrap_err();
        assert_eq!(
            err,
            SpaceParseError::MissingFields {
                expected: 7,
                found: 3
            }
        );
    }

    #[test]
    fn parse_rejects_bad_number_and_negative_extent() {
        assert!(matches!(
            "R,1,a,1,1,0,0,0".parse::<Space>(),
            Err(SpaceParseError::InvalidField { field: "width", .. })
        ));
        assert!(matches!(
            "R,1,1,-1,1,0,0,0".parse::<Space>(),
            Err(SpaceParseError::NegativeExtent { field: "depth" })
        ));
        assert!(matches!(
            "X,1,1,1,1,0,0,0".parse::<Space>(),
            Err(SpaceParseError::MissingPrefix)
        ));
    }

    #[test]
    fn display_parses_back() {
        let space = Space::new(
            SpaceId(7),
            Point3::new(1.0, 2.0, 3.0),
            Vector3::new(4.0, 5.0, 6.0),
        )
        .with_space_type("B")
        .with_surface_type("C");
        assert_eq!(space.to_string(), "R,7,4,5,6,1,2,3,B,C");
        assert_eq!(space.to_string().parse::<Space>().unwrap(), space);
    }

    #[test]
    fn containment_is_half_open() {
        let space = unit_box(1);
        assert!(space.contains(&Point3::new(0.0, 0.0, 0.0)));
        assert!(space.contains(&Point3::new(0.5, 0.999, 0.2)));
        assert!(!space.contains(&Point3::new(1.0, 0.5, 0.5)));
        assert!(!space.contains(&Point3::new(0.5, 0.5, -0.1)));
    }

    #[test]
    fn equality_tolerates_rounding_noise_only() {
        let a = unit_box(1);
        let mut b = unit_box(1);
        b.set_corners(Point3::new(1e-9, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        assert_eq!(a, b);
        assert_ne!(a, unit_box(2));
        assert_ne!(a, unit_box(1).with_space_type("B"));
    }
}
