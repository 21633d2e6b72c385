use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::{debug, warn};

use super::{
    ConformalModel, CuboidData, LineData, LineId, RectangleData, VertexData, VertexId,
    EXTERIOR_TYPE,
};
use crate::convert::grid_lines;
use crate::error::Result;
use crate::math::{Point3, AXES, TOLERANCE};
use crate::spatial::{MsBuilding, Space};

type GridPoint = [usize; AXES];

/// Index of the grid line at `value`.
fn line_index(lines: &[f64], value: f64) -> usize {
    lines.partition_point(|&x| x < value - TOLERANCE)
}

/// Incremental construction state shared by all faces.
struct Builder<'a> {
    lines: &'a [Vec<f64>; AXES],
    corners: HashSet<GridPoint>,
    vertex_ids: HashMap<GridPoint, VertexId>,
    line_ids: HashMap<(usize, GridPoint), LineId>,
    model: ConformalModel,
}

impl Builder<'_> {
    fn point(&self, g: GridPoint) -> Point3 {
        Point3::new(self.lines[0][g[0]], self.lines[1][g[1]], self.lines[2][g[2]])
    }

    fn vertex(&mut self, g: GridPoint) -> VertexId {
        if let Some(&id) = self.vertex_ids.get(&g) {
            return id;
        }
        let data = VertexData::new(self.point(g), self.corners.contains(&g));
        let id = self.model.add_vertex(data);
        self.vertex_ids.insert(g, id);
        id
    }

    /// The line from grid point `a` to grid point `b`, which differ on one axis.
    fn line(&mut self, a: GridPoint, b: GridPoint) -> LineId {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let axis = (0..AXES).find(|&k| lo[k] != hi[k]).unwrap_or(0);
        if let Some(&id) = self.line_ids.get(&(axis, lo)) {
            return id;
        }
        let start = self.vertex(lo);
        let end = self.vertex(hi);
        let id = self.model.add_line(LineData::new(start, end));
        self.line_ids.insert((axis, lo), id);
        id
    }
}

/// Linear cell index on a grid with `sizes` cells per axis.
fn cell_index(sizes: [usize; AXES], idx: GridPoint) -> usize {
    (idx[0] * sizes[1] + idx[1]) * sizes[2] + idx[2]
}

/// Grid index range `[lo, hi)` covered by a space.
fn cell_range(lines: &[Vec<f64>; AXES], space: &Space) -> (GridPoint, GridPoint) {
    let origin = space.origin();
    let far = space.far_corner();
    (
        std::array::from_fn(|k| line_index(&lines[k], origin[k])),
        std::array::from_fn(|k| line_index(&lines[k], far[k])),
    )
}

/// Assigns every grid cell to the first space covering it.
///
/// Also returns each distinct pair of spaces (by index) that claimed a
/// common cell, the earlier space first.
fn cell_owners(
    building: &MsBuilding,
    lines: &[Vec<f64>; AXES],
) -> (Vec<Option<usize>>, BTreeSet<(usize, usize)>) {
    let sizes: [usize; AXES] = std::array::from_fn(|k| lines[k].len() - 1);
    let mut owner: Vec<Option<usize>> = vec![None; sizes.iter().product()];
    let mut overlaps = BTreeSet::new();
    for (index, space) in building.spaces().iter().enumerate() {
        let (lo, hi) = cell_range(lines, space);
        for i in lo[0]..hi[0] {
            for j in lo[1]..hi[1] {
                for k in lo[2]..hi[2] {
                    let slot = cell_index(sizes, [i, j, k]);
                    if let Some(other) = owner[slot] {
                        overlaps.insert((other, index));
                    } else {
                        owner[slot] = Some(index);
                    }
                }
            }
        }
    }
    (owner, overlaps)
}

fn side_types(space: Option<&Space>) -> (String, String) {
    space.map_or_else(
        || (EXTERIOR_TYPE.to_owned(), EXTERIOR_TYPE.to_owned()),
        |s| {
            (
                s.space_type().to_owned(),
                s.effective_surface_type().to_owned(),
            )
        },
    )
}

impl ConformalModel {
    /// Decomposes a spatial design on the grid spanned by all box boundaries.
    ///
    /// Produces one cuboid per space, one rectangle per grid face that
    /// touches a space, the grid edges bounding those rectangles and the
    /// grid points at their ends.
    ///
    /// # Errors
    ///
    /// Returns an error for a building without spaces.
    pub fn from_building(building: &MsBuilding) -> Result<Self> {
        let lines = grid_lines(building)?;
        let sizes: [usize; AXES] = std::array::from_fn(|k| lines[k].len() - 1);
        let cell = |idx: GridPoint| cell_index(sizes, idx);

        let (owner, overlaps) = cell_owners(building, &lines);
        for (first, second) in overlaps {
            warn!(
                space = %building.spaces()[second].id(),
                other = %building.spaces()[first].id(),
                "overlapping spaces; shared cells kept by the first"
            );
        }

        let mut corners: HashSet<GridPoint> = HashSet::new();
        let mut model = ConformalModel::new();
        for space in building.spaces() {
            let (lo, hi) = cell_range(&lines, space);
            for bits in 0..8 {
                corners.insert(std::array::from_fn(|k| {
                    if bits & (1 << k) == 0 {
                        lo[k]
                    } else {
                        hi[k]
                    }
                }));
            }

            model.add_cuboid(CuboidData {
                space: space.id(),
                space_type: space.space_type().to_owned(),
                min: *space.origin(),
                max: space.far_corner(),
                in_space: true,
            });
        }

        let mut builder = Builder {
            lines: &lines,
            corners,
            vertex_ids: HashMap::new(),
            line_ids: HashMap::new(),
            model,
        };

        for a in 0..AXES {
            let b = (a + 1) % AXES;
            let c = (a + 2) % AXES;
            for p in 0..=sizes[a] {
                for u in 0..sizes[b] {
                    for v in 0..sizes[c] {
                        let at = |pa: usize, pb: usize, pc: usize| {
                            let mut g = [0; AXES];
                            g[a] = pa;
                            g[b] = pb;
                            g[c] = pc;
                            g
                        };
                        let below = (p > 0).then(|| owner[cell(at(p - 1, u, v))]).flatten();
                        let above = (p < sizes[a]).then(|| owner[cell(at(p, u, v))]).flatten();
                        if below.is_none() && above.is_none() {
                            continue;
                        }

                        let g = [at(p, u, v), at(p, u + 1, v), at(p, u + 1, v + 1), at(p, u, v + 1)];
                        let corner_ids = g.map(|point| builder.vertex(point));
                        let line_ids = [
                            builder.line(g[0], g[1]),
                            builder.line(g[1], g[2]),
                            builder.line(g[2], g[3]),
                            builder.line(g[3], g[0]),
                        ];

                        let sides = [below, above].map(|o| o.map(|i| &building.spaces()[i]));
                        let (neg_space, neg_surface) = side_types(sides[0]);
                        let (pos_space, pos_surface) = side_types(sides[1]);
                        builder.model.add_rectangle(RectangleData {
                            corners: corner_ids,
                            lines: line_ids,
                            normal_axis: a,
                            spaces: sides.map(|s| s.map(Space::id)),
                            space_types: (neg_space, pos_space),
                            surface_types: (neg_surface, pos_surface),
                        })?;
                    }
                }
            }
        }

        let model = builder.model;
        let [cuboids, rectangles, lines, vertices] = model.counts();
        debug!(cuboids, rectangles, lines, vertices, "built conformal model");
        Ok(model)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;
    use crate::spatial::SpaceId;

    fn space(id: u32, origin: [f64; 3], extent: [f64; 3], space_type: &str) -> Space {
        Space::new(
            SpaceId(id),
            Point3::new(origin[0], origin[1], origin[2]),
            Vector3::new(extent[0], extent[1], extent[2]),
        )
        .with_space_type(space_type)
    }

    fn two_rooms() -> MsBuilding {
        MsBuilding::from_spaces([
            space(1, [0.0, 0.0, 0.0], [3.0, 3.0, 3.0], "office"),
            space(2, [3.0, 0.0, 0.0], [3.0, 3.0, 3.0], "storage"),
        ])
        .unwrap()
    }

    #[test]
    fn two_abutting_rooms() {
        let model = ConformalModel::from_building(&two_rooms()).unwrap();
        // 2 cuboids, 11 faces, 20 edges, 12 corners
        assert_eq!(model.counts(), [2, 11, 20, 12]);
        assert!(model.vertices().all(|(_, v)| v.is_space_corner));

        let shared: Vec<_> = model
            .rectangles()
            .filter(|(_, r)| r.spaces == [Some(SpaceId(1)), Some(SpaceId(2))])
            .collect();
        assert_eq!(shared.len(), 1);
        let (_, wall) = shared[0];
        assert!(wall.is_wall() && !wall.is_floor());
        assert!(wall.is_space_separating());
        assert_eq!(wall.space_types, ("office".to_owned(), "storage".to_owned()));
        for &line in &wall.lines {
            assert_eq!(model.line(line).unwrap().rectangles.len(), 3);
        }
    }

    #[test]
    fn exterior_faces_use_exterior_type() {
        let model = ConformalModel::from_building(&two_rooms()).unwrap();
        let floors: Vec<_> = model.rectangles().filter(|(_, r)| r.is_floor()).collect();
        assert_eq!(floors.len(), 4);
        let ground = floors
            .iter()
            .find(|(_, r)| r.spaces == [None, Some(SpaceId(1))])
            .unwrap();
        assert_eq!(ground.1.space_types, ("E".to_owned(), "office".to_owned()));
        assert_eq!(ground.1.surface_types, ("E".to_owned(), "office".to_owned()));
    }

    #[test]
    fn faces_inside_a_space_do_not_separate() {
        // the small room splits the big one's grid into two cells along y
        let building = MsBuilding::from_spaces([
            space(1, [0.0, 0.0, 0.0], [2.0, 4.0, 2.0], "hall"),
            space(2, [2.0, 0.0, 0.0], [2.0, 2.0, 2.0], "room").with_surface_type("glass"),
        ])
        .unwrap();
        let model = ConformalModel::from_building(&building).unwrap();
        let internal: Vec<_> = model
            .rectangles()
            .filter(|(_, r)| !r.is_space_separating())
            .collect();
        assert_eq!(internal.len(), 1);
        assert_eq!(internal[0].1.spaces, [Some(SpaceId(1)), Some(SpaceId(1))]);

        let shared = model
            .rectangles()
            .find(|(_, r)| r.spaces == [Some(SpaceId(1)), Some(SpaceId(2))])
            .unwrap();
        assert_eq!(shared.1.surface_types, ("hall".to_owned(), "glass".to_owned()));

        // the midpoint of the hall's long side is not a corner of any space
        let mid = model
            .vertices()
            .find(|(_, v)| v.point == Point3::new(0.0, 2.0, 0.0))
            .unwrap();
        assert!(!mid.1.is_space_corner);
    }

    #[test]
    fn cuboid_corners_span_the_space() {
        let model = ConformalModel::from_building(&two_rooms()).unwrap();
        let (_, second) = model.cuboids().nth(1).unwrap();
        assert_eq!(second.space, SpaceId(2));
        let corners = second.corners();
        assert_eq!(corners[0], Point3::new(3.0, 0.0, 0.0));
        assert_eq!(corners[6], Point3::new(6.0, 3.0, 3.0));
    }

    #[test]
    fn overlapping_spaces_are_reported_once_per_pair() {
        // the third room adds grid lines so the first two share six cells
        let building = MsBuilding::from_spaces([
            space(1, [0.0, 0.0, 0.0], [4.0, 4.0, 2.0], "A"),
            space(2, [1.0, 1.0, 0.0], [4.0, 4.0, 2.0], "A"),
            space(3, [2.0, 10.0, 0.0], [1.0, 1.0, 1.0], "A"),
        ])
        .unwrap();
        let lines = grid_lines(&building).unwrap();
        let (owner, overlaps) = cell_owners(&building, &lines);
        assert_eq!(overlaps.into_iter().collect::<Vec<_>>(), vec![(0, 1)]);

        // shared cells stay with the first room
        let sizes: [usize; AXES] = std::array::from_fn(|k| lines[k].len() - 1);
        let x = line_index(&lines[0], 2.0);
        let y = line_index(&lines[1], 1.0);
        assert_eq!(owner[cell_index(sizes, [x, y, 0])], Some(0));
        assert!(ConformalModel::from_building(&building).is_ok());
    }
}
