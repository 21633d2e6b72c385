use slotmap::SecondaryMap;
use tracing::{debug, info};

use super::rules::{CuboidRule, LineRule, RectangleRule, VertexRule};
use super::{Grammar, GrammarOptions, SdSettings};
use crate::conformal::{CuboidId, LineId, RectangleData, RectangleId, VertexId};
use crate::error::{GrammarError, Result, SurfaceContext};
use crate::structural::{SdModel, Structure};

impl Grammar {
    /// Runs the volume grammar against in-memory settings.
    ///
    /// Cuboids take the structure of their space type. Space-separating
    /// rectangles take the structure of their floor or wall type pair and
    /// carry the loads. Lines bounding those rectangles become beams or
    /// trusses when a neighbouring rectangle is one. Space corners become
    /// nodes. The model is returned only if every lookup succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`GrammarError::MissingSpaceSettings`] or
    /// [`GrammarError::MissingSurfaceSettings`] when a type or type pair has
    /// no settings.
    pub fn run(&self, settings: &SdSettings, options: &GrammarOptions) -> Result<SdModel> {
        let model = self.model();

        let mut cuboid_rules: SecondaryMap<CuboidId, CuboidRule> = SecondaryMap::new();
        for (id, cuboid) in model.cuboids() {
            if !cuboid.in_space {
                continue;
            }
            let structure = settings.space(&cuboid.space_type).ok_or_else(|| {
                GrammarError::MissingSpaceSettings {
                    space_type: cuboid.space_type.clone(),
                    path: settings.path().to_path_buf(),
                }
            })?;
            let mut rule = CuboidRule::new(cuboid);
            if !structure.is_none() {
                rule.assign_structure(structure.clone());
            }
            cuboid_rules.insert(id, rule);
        }
        debug!(rules = cuboid_rules.len(), "resolved cuboids");

        let mut rectangle_rules: SecondaryMap<RectangleId, RectangleRule> = SecondaryMap::new();
        for (id, rectangle) in model.rectangles() {
            if !rectangle.is_space_separating() {
                continue;
            }
            let structure = surface_structure(settings, rectangle, options)?;
            let mut rule = RectangleRule::new(model, rectangle)?;
            if !structure.is_none() {
                rule.assign_structure(structure.clone());
            }
            if let Some(panel) = settings.load_panel() {
                rule.assign_load_panel(panel.clone());
            }
            rule.add_loads(settings.loads());
            rectangle_rules.insert(id, rule);
        }
        debug!(rules = rectangle_rules.len(), "resolved rectangles");

        let mut line_rules: SecondaryMap<LineId, LineRule> = SecondaryMap::new();
        for (id, _) in &rectangle_rules {
            for &line_id in &model.rectangle(id)?.lines {
                if !line_rules.contains_key(line_id) {
                    line_rules.insert(line_id, LineRule::new(model, model.line(line_id)?)?);
                }
            }
        }
        for (line_id, rule) in &mut line_rules {
            let candidates: Vec<Structure> = model
                .line(line_id)?
                .rectangles
                .iter()
                .filter_map(|&r| rectangle_rules.get(r))
                .map(|r| r.structure().clone())
                .collect();
            rule.assign_structure(&candidates);
        }
        debug!(rules = line_rules.len(), "resolved lines");

        let mut vertex_rules: SecondaryMap<VertexId, VertexRule> = SecondaryMap::new();
        for (id, vertex) in model.vertices() {
            if vertex.is_space_corner {
                vertex_rules.insert(id, VertexRule::new(vertex));
            }
        }
        debug!(rules = vertex_rules.len(), "resolved vertices");

        let mut sd = SdModel::new();
        for (_, rule) in &vertex_rules {
            rule.apply(&mut sd);
        }
        for (_, rule) in &line_rules {
            rule.apply(&mut sd);
        }
        for (_, rule) in &rectangle_rules {
            rule.apply(&mut sd);
        }
        for (_, rule) in &cuboid_rules {
            rule.apply(&mut sd);
        }
        sd.set_mesh_size(settings.mesh_size());

        info!(
            points = sd.points().len(),
            components = sd.components().len(),
            mesh_size = sd.mesh_size(),
            "built structural design"
        );
        Ok(sd)
    }
}

fn surface_structure<'s>(
    settings: &'s SdSettings,
    rectangle: &RectangleData,
    options: &GrammarOptions,
) -> std::result::Result<&'s Structure, GrammarError> {
    let (first, second) = if options.use_surface_types {
        &rectangle.surface_types
    } else {
        &rectangle.space_types
    };
    let (found, context) = if rectangle.is_floor() {
        (settings.floor(first, second), SurfaceContext::Floor)
    } else {
        (settings.wall(first, second), SurfaceContext::Wall)
    };
    found.ok_or_else(|| GrammarError::MissingSurfaceSettings {
        first: first.clone(),
        second: second.clone(),
        context,
        path: settings.path().to_path_buf(),
    })
}
