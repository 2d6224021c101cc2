//! Sampling line tracer.
//!
//! A trace walks `points_per_block * ceil(distance)` evenly spaced samples
//! from start to end. Each sample is tested against the cell containing it
//! and, when requested, the hit boxes of nearby entities. The first cell that
//! passes the material filters is the impact; the exact impact point is found
//! by intersecting the step that entered it with the boundary of the cell the
//! step left.

use std::collections::HashSet;

use glam::IVec3;

use crate::direction::Direction;
use crate::entity::{Entity, EntityId, hit_check};
use crate::grid::VoxelWorld;
use crate::iterators::{PointsAlongLine, lerp_vector};
use crate::math::Ease;
use crate::raycast::utils::entry_ratio;
use crate::raycast::{LineTraceResults, Tracker};
use crate::types::{Aabb, Block, ENTITY_SEARCH_MARGIN, Location, MAX_TRACE_SAMPLES, Material};

#[derive(Debug, Clone)]
pub struct LineTrace {
    start: Location,
    end: Option<Location>,
    distance: f64,
    points_per_block: u32,
    origin_entity: Option<EntityId>,

    blocks_check: bool,
    entities_check: bool,
    impact_check: bool,
    first_block_check: bool,
    first_entity_check: bool,

    ignore_materials: HashSet<Material>,
    ignore_blocks: HashSet<IVec3>,
    ignore_entities: HashSet<EntityId>,
    /// When non-empty, only these materials count as impacts.
    get_first_materials: HashSet<Material>,
}

impl LineTrace {
    fn with_parts(
        start: Location,
        end: Option<Location>,
        distance: f64,
        points_per_block: u32,
        origin_entity: Option<EntityId>,
    ) -> Self {
        Self {
            start,
            end,
            distance,
            points_per_block,
            origin_entity,
            blocks_check: false,
            entities_check: false,
            impact_check: false,
            first_block_check: false,
            first_entity_check: false,
            ignore_materials: HashSet::new(),
            ignore_blocks: HashSet::new(),
            ignore_entities: HashSet::new(),
            get_first_materials: HashSet::new(),
        }
    }

    /// Trace the segment from `start` to `end`.
    pub fn between(start: Location, end: Location, points_per_block: u32) -> Self {
        let distance = start.distance(&end);
        Self::with_parts(start, Some(end), distance, points_per_block, None)
    }

    /// Trace `distance` units from `start` along its orientation.
    pub fn along(start: Location, distance: f64, points_per_block: u32) -> Self {
        Self::with_parts(start, None, distance, points_per_block, None)
    }

    /// Trace from an entity's eyes along its orientation.
    pub fn from_entity<W: VoxelWorld + ?Sized>(
        entity: &Entity,
        world: &W,
        distance: f64,
        points_per_block: u32,
    ) -> Self {
        Self::with_parts(
            entity.eye_location(world),
            None,
            distance,
            points_per_block,
            Some(entity.id),
        )
    }

    /// Enable what `tracker` records. Trackers accumulate.
    pub fn track(mut self, tracker: Tracker) -> Self {
        match tracker {
            Tracker::Blocks => self.blocks_check = true,
            Tracker::Entities => self.entities_check = true,
            Tracker::Impact => self.impact_check = true,
            Tracker::FirstBlock => self.first_block_check = true,
            Tracker::FirstEntity => self.first_entity_check = true,
            Tracker::All => {
                self.blocks_check = true;
                self.entities_check = true;
                self.impact_check = true;
                self.first_block_check = true;
                self.first_entity_check = true;
            }
        }
        self
    }

    /// Enable every tracker in `trackers`.
    pub fn track_all(self, trackers: impl IntoIterator<Item = Tracker>) -> Self {
        trackers.into_iter().fold(self, Self::track)
    }

    /// Never record or hit-test `entity`.
    pub fn ignore_entity(mut self, entity: EntityId) -> Self {
        self.ignore_entities.insert(entity);
        self
    }

    pub fn ignore_entities(mut self, entities: impl IntoIterator<Item = EntityId>) -> Self {
        self.ignore_entities.extend(entities);
        self
    }

    /// Skip the cell at `cell`: it is neither recorded nor an impact.
    pub fn ignore_block(mut self, cell: IVec3) -> Self {
        self.ignore_blocks.insert(cell);
        self
    }

    pub fn ignore_blocks(mut self, cells: impl IntoIterator<Item = IVec3>) -> Self {
        self.ignore_blocks.extend(cells);
        self
    }

    /// Cells of `material` are recorded but never count as impacts.
    pub fn ignore_material(mut self, material: Material) -> Self {
        self.ignore_materials.insert(material);
        self
    }

    pub fn ignore_materials(mut self, materials: impl IntoIterator<Item = Material>) -> Self {
        self.ignore_materials.extend(materials);
        self
    }

    /// Restrict impacts to `materials`. Repeated calls widen the set.
    pub fn get_first(mut self, materials: impl IntoIterator<Item = Material>) -> Self {
        self.get_first_materials.extend(materials);
        self
    }

    /// Skip the cell the trace starts in.
    pub fn ignore_start_block(self) -> Self {
        let cell = self.start.block();
        self.ignore_block(cell)
    }

    /// Skip the entity the trace was started from, if any.
    pub fn ignore_origin_entity(self) -> Self {
        match self.origin_entity {
            Some(id) => self.ignore_entity(id),
            None => self,
        }
    }

    /// First point of the segment.
    pub fn start(&self) -> &Location {
        &self.start
    }

    /// End of the segment, either given or derived from the start's
    /// orientation.
    pub fn end(&self) -> Location {
        self.end
            .unwrap_or_else(|| self.start.add(self.start.direction() * self.distance))
    }

    /// Length of the segment.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// `points_per_block * ceil(distance)`, or `None` when the distance is
    /// not finite or the count exceeds [`MAX_TRACE_SAMPLES`].
    fn sample_count(&self) -> Option<usize> {
        if !self.distance.is_finite() {
            return None;
        }
        let blocks = self.distance.ceil().max(0.0);
        if blocks > MAX_TRACE_SAMPLES as f64 {
            return None;
        }
        (self.points_per_block as usize)
            .checked_mul(blocks as usize)
            .filter(|&count| count <= MAX_TRACE_SAMPLES)
    }

    fn tracks_only_impact(&self) -> bool {
        !self.blocks_check
            && !self.entities_check
            && !self.first_block_check
            && !self.first_entity_check
    }

    fn is_impact_worthy(&self, block: &Block) -> bool {
        !self.ignore_materials.contains(&block.material)
            && (self.get_first_materials.is_empty()
                || self.get_first_materials.contains(&block.material))
            && !self.ignore_blocks.contains(&block.position)
    }

    pub fn trace<W: VoxelWorld + ?Sized>(&self, world: &W) -> LineTraceResults {
        let end = self.end();
        let Some(world_id) = self.start.world else {
            log::debug!("line trace from {} has no world, skipping", self.start.position);
            return LineTraceResults::empty(self.start, end);
        };

        let Some(total_points) = self.sample_count() else {
            log::debug!(
                "line trace from {} over distance {} is not walkable, skipping",
                self.start.position,
                self.distance
            );
            return LineTraceResults::empty(self.start, end);
        };
        let trace_points: Vec<Location> =
            PointsAlongLine::new(self.start.position, end.position, total_points)
                .map(|p| self.start.moved_to(p))
                .collect();

        let mut results = LineTraceResults::empty(self.start, end);
        let Some(first) = trace_points.first().copied() else {
            return results;
        };
        results.start_block = Some(world.block_at(self.start.block()));
        results.end_block = Some(world.block_at(end.block()));

        let candidates: Vec<&Entity> = if self.entities_check || self.first_entity_check {
            let region =
                Aabb::new(self.start.position, end.position).expand_by(ENTITY_SEARCH_MARGIN);
            world
                .entities_near(&region)
                .into_iter()
                .filter(|e| !self.ignore_entities.contains(&e.id))
                .collect()
        } else {
            Vec::new()
        };

        let mut seen_blocks: HashSet<IVec3> = HashSet::new();
        let mut seen_entities: HashSet<EntityId> = HashSet::new();
        let mut last_cell = self.start.block();
        let mut last_location = first;
        let mut direction_set = false;

        for location in &trace_points {
            let cell = location.block();
            let block = world.block_at(cell);

            let wants_block =
                self.blocks_check || (self.first_block_check && results.blocks.is_empty());
            if wants_block && !self.ignore_blocks.contains(&cell) && seen_blocks.insert(cell) {
                results.blocks.push(block);
            }

            if self.entities_check || (self.first_entity_check && results.entities.is_empty()) {
                for entity in &candidates {
                    if seen_entities.contains(&entity.id) {
                        continue;
                    }
                    if hit_check(location, entity, world) {
                        seen_entities.insert(entity.id);
                        results.entities.push((*entity).clone());
                        if !self.entities_check {
                            break;
                        }
                    }
                }
            }

            if self.impact_check && self.is_impact_worthy(&block) {
                results.hit = true;
                if results.first_block.is_none() {
                    results.first_block = Some(block);

                    let face = Direction::from_delta(last_cell, cell).unwrap_or(Direction::SelfDir);
                    let ratio = entry_ratio(face, last_location.position, location.position);
                    let point = lerp_vector(
                        last_location.position,
                        location.position,
                        ratio,
                        Ease::Linear,
                        None,
                    );
                    let impact = Location::at(world_id, point);
                    let normal = face.opposite();
                    results.impact_point = Some(impact);
                    results.impact_normal = Some(impact.with_direction(normal.vector()));
                    results.impact_normal_direction = Some(normal);
                    log::trace!(
                        "line trace impact at {} in cell {} entering {:?}",
                        point,
                        cell,
                        face
                    );
                }

                if !direction_set && last_cell != cell {
                    direction_set = true;
                    results.direction = Direction::from_delta(last_cell, cell);
                }

                if self.tracks_only_impact() {
                    results.end_block = Some(block);
                    break;
                }
            }

            if results.hit {
                results.post_impact_points.push(*location);
            } else {
                results.pre_impact_points.push(*location);
            }

            last_cell = cell;
            last_location = *location;
        }

        log::trace!(
            "line trace walked {} samples, {} blocks, {} entities, hit={}",
            trace_points.len(),
            results.blocks.len(),
            results.entities.len(),
            results.hit
        );
        results.trace_points = trace_points;
        results
    }
}
