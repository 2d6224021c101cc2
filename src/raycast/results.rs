use crate::direction::{BlockFace, Direction};
use crate::entity::Entity;
use crate::raycast::utils::reflect;
use crate::types::{Block, Location, Material};

/// Outcome of a [`LineTrace`](crate::raycast::LineTrace).
///
/// Impact fields are `None` unless impact tracking was requested and an
/// impact-worthy cell was found.
#[derive(Debug, Clone, PartialEq)]
pub struct LineTraceResults {
    pub start: Location,
    pub end: Location,
    /// Every sample point, in walk order.
    pub trace_points: Vec<Location>,
    /// Samples walked before the first impact.
    pub pre_impact_points: Vec<Location>,
    /// Samples walked from the first impact onward.
    pub post_impact_points: Vec<Location>,
    /// Touched cells, each recorded once in first-touch order.
    pub blocks: Vec<Block>,
    /// Touched entities, each recorded once in first-touch order.
    pub entities: Vec<Entity>,
    /// First impact-worthy cell.
    pub first_block: Option<Block>,
    pub start_block: Option<Block>,
    pub end_block: Option<Block>,
    /// Direction of travel into the first impact-worthy cell that differed
    /// from the previous sample's cell.
    pub direction: Option<Direction>,
    pub impact_point: Option<Location>,
    /// Impact point oriented along the struck face's outward normal.
    pub impact_normal: Option<Location>,
    pub impact_normal_direction: Option<Direction>,
    pub hit: bool,
}

impl LineTraceResults {
    /// Result of a trace that sampled nothing.
    pub fn empty(start: Location, end: Location) -> Self {
        Self {
            start,
            end,
            trace_points: Vec::new(),
            pre_impact_points: Vec::new(),
            post_impact_points: Vec::new(),
            blocks: Vec::new(),
            entities: Vec::new(),
            first_block: None,
            start_block: None,
            end_block: None,
            direction: None,
            impact_point: None,
            impact_normal: None,
            impact_normal_direction: None,
            hit: false,
        }
    }

    pub fn impact_point_or_end(&self) -> Location {
        self.impact_point.unwrap_or(self.end)
    }

    /// Material of the first impact-worthy cell, air if nothing was hit.
    pub fn hit_material(&self) -> Material {
        self.first_block
            .map(|b| b.material)
            .unwrap_or(Material::Air)
    }

    pub fn non_air_blocks(&self) -> Vec<Block> {
        self.blocks_filter_out(&[Material::Air])
    }

    /// Touched cells whose material is in `filter`.
    pub fn blocks_filtered(&self, filter: &[Material]) -> Vec<Block> {
        self.blocks
            .iter()
            .filter(|b| filter.contains(&b.material))
            .copied()
            .collect()
    }

    /// Touched cells whose material is not in `filter`.
    pub fn blocks_filter_out(&self, filter: &[Material]) -> Vec<Block> {
        self.blocks
            .iter()
            .filter(|b| !filter.contains(&b.material))
            .copied()
            .collect()
    }

    /// Face of the struck cell that the trace entered through.
    pub fn block_face(&self) -> Option<BlockFace> {
        self.direction.and_then(|d| d.opposite().block_face())
    }

    /// Impact point oriented along the incoming ray mirrored off the struck
    /// face.
    pub fn reflection(&self) -> Option<Location> {
        let impact = self.impact_point?;
        let normal = self.direction?.opposite().vector();
        let incoming = (self.end.position - self.start.position).normalize_or_zero();
        Some(impact.with_direction(reflect(incoming, normal)))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::{DVec3, IVec3};

    use super::*;
    use crate::types::WorldId;

    fn results_with_blocks() -> LineTraceResults {
        let start = Location::new(WorldId(1), 0.5, 0.5, 0.5);
        let end = Location::new(WorldId(1), 0.5, -1.5, 2.5);
        let mut results = LineTraceResults::empty(start, end);
        results.blocks = vec![
            Block::new(IVec3::new(0, 0, 0), Material::Air),
            Block::new(IVec3::new(0, 0, 1), Material::Water),
            Block::new(IVec3::new(0, -1, 2), Material::Stone),
        ];
        results
    }

    #[test]
    fn empty_results_fall_back_to_end_and_air() {
        let results = results_with_blocks();
        assert_eq!(results.impact_point_or_end(), results.end);
        assert_eq!(results.hit_material(), Material::Air);
        assert_eq!(results.block_face(), None);
        assert_eq!(results.reflection(), None);
    }

    #[test]
    fn block_filters() {
        let results = results_with_blocks();
        assert_eq!(results.non_air_blocks().len(), 2);
        let liquids = results.blocks_filtered(&[Material::Water, Material::Lava]);
        assert_eq!(liquids, vec![Block::new(IVec3::new(0, 0, 1), Material::Water)]);
        let solid = results.blocks_filter_out(&[Material::Air, Material::Water]);
        assert_eq!(solid[0].material, Material::Stone);
    }

    #[test]
    fn reflection_mirrors_about_the_entry_face() {
        let mut results = results_with_blocks();
        let impact = Location::new(WorldId(1), 0.5, -0.5, 2.0);
        results.impact_point = Some(impact);
        results.first_block = Some(results.blocks[2]);
        results.direction = Some(Direction::South);
        results.hit = true;

        assert_eq!(results.hit_material(), Material::Stone);
        assert_eq!(results.block_face(), Some(BlockFace::North));
        let reflected = results.reflection().expect("reflection expected");
        assert_eq!(reflected.position, impact.position);
        let expected = DVec3::new(0.0, -1.0, -1.0).normalize();
        assert_relative_eq!(reflected.direction().x, expected.x, epsilon = 1e-9);
        assert_relative_eq!(reflected.direction().y, expected.y, epsilon = 1e-9);
        assert_relative_eq!(reflected.direction().z, expected.z, epsilon = 1e-9);
    }
}
