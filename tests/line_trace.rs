use std::path::{Path, PathBuf};

use approx::assert_abs_diff_eq;
use glam::IVec3;

use voxel_trace::{
    Direction, EntityId, LineTrace, Location, Material, Tracker, VoxelWorld, WorldId, load_world,
};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn at(x: f64, y: f64, z: f64) -> Location {
    Location::new(WorldId(1), x, y, z)
}

#[test]
fn segment_through_single_wall_cell() {
    let world = load_world(fixture("wall.yaml")).expect("world should load");

    let results = LineTrace::between(at(0.0, 0.0, 0.0), at(0.0, 0.0, 10.0), 8)
        .track_all([Tracker::Impact, Tracker::Blocks, Tracker::Entities])
        .ignore_material(Material::Air)
        .trace(&world);

    assert!(results.hit);
    let impact = results.impact_point.expect("impact expected");
    assert_abs_diff_eq!(impact.z(), 5.0, epsilon = 0.5);
    assert_eq!(results.impact_normal_direction, Some(Direction::North));
    assert_eq!(results.first_block.map(|b| b.position), Some(IVec3::new(0, 0, 5)));

    assert!(!results.pre_impact_points.is_empty());
    assert!(!results.post_impact_points.is_empty());
    assert!(results.pre_impact_points.iter().all(|p| p.z() < 5.0));
    assert!(results.post_impact_points.iter().all(|p| p.z() > 5.0));

    let ids: Vec<_> = results.entities.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![EntityId(10)]);
    assert_eq!(results.non_air_blocks().len(), 1);
    assert_eq!(results.blocks_filtered(&[Material::Stone]).len(), 1);
}

#[test]
fn impact_fields_stay_empty_without_impact_tracking() {
    let world = load_world(fixture("wall.yaml")).expect("world should load");

    for trackers in [
        vec![Tracker::Blocks],
        vec![Tracker::Entities],
        vec![Tracker::FirstBlock, Tracker::FirstEntity],
    ] {
        let results = LineTrace::between(at(0.0, 0.0, 0.0), at(0.0, 0.0, 10.0), 8)
            .track_all(trackers)
            .trace(&world);
        assert!(!results.hit);
        assert!(results.impact_point.is_none());
        assert!(results.impact_normal.is_none());
        assert!(results.impact_normal_direction.is_none());
        assert_eq!(results.pre_impact_points.len(), results.trace_points.len());
    }
}

#[test]
fn first_block_with_entities_walks_the_whole_segment() {
    let world = load_world(fixture("wall.yaml")).expect("world should load");

    let results = LineTrace::between(at(0.0, 0.0, 0.0), at(0.0, 0.0, 10.0), 8)
        .track(Tracker::FirstBlock)
        .track(Tracker::Entities)
        .trace(&world);

    assert_eq!(results.blocks.len(), 1);
    assert_eq!(results.blocks[0].position, IVec3::ZERO);
    assert_eq!(results.entities.len(), 1);
    assert_eq!(results.trace_points.len(), 80);
    assert_eq!(results.pre_impact_points.len(), 80);
}

#[test]
fn sneaking_player_traces_from_lowered_eyes() {
    let world = load_world(fixture("wall.yaml")).expect("world should load");
    let player = world
        .entities
        .iter()
        .find(|e| e.id == EntityId(11))
        .expect("player in fixture");

    let trace = LineTrace::from_entity(player, &world, 6.0, 8)
        .track(Tracker::Entities)
        .ignore_origin_entity();
    assert_abs_diff_eq!(trace.start().y(), 1.5 * 0.85, epsilon = 1e-12);
    // Yaw 90 faces -Z.
    assert_abs_diff_eq!(trace.end().z(), 3.5 - 6.0, epsilon = 1e-9);

    let results = trace.trace(&world);
    assert!(results.entities.is_empty());
    assert_eq!(world.block_at(results.end.block()).material, Material::Air);
}
