use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use glam::IVec3;

use voxel_trace::types::{Location, MapInfo, Material, WorldId};
use voxel_trace::{Trajectory, TrajectoryConfig, VoxelGrid, WorldSnapshot};

const WORLD: WorldId = WorldId(1);

fn bench_trajectory(c: &mut Criterion) {
    let field = build_field();
    let config = TrajectoryConfig::with_velocity(16.75).expect("valid velocity");
    let launches = build_launches();

    c.bench_function("trajectory_trace_field", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for launch in &launches {
                let results = Trajectory::from_config(*launch, &config).trace(&field);
                hits += usize::from(results.hit);
            }
            black_box(hits);
        });
    });

    c.bench_function("trajectory_trace_dense_sampling", |b| {
        let dense = TrajectoryConfig {
            points_per_block: 32,
            ..config.clone()
        };
        b.iter(|| {
            let mut points = 0usize;
            for launch in &launches {
                let results = Trajectory::from_config(*launch, &dense).trace(&field);
                points += results.trace_points.len();
            }
            black_box(points);
        });
    });

    c.bench_function("trajectory_build_and_trace", |b| {
        b.iter_batched(
            || launches.clone(),
            |launches| {
                let total: f64 = launches
                    .iter()
                    .map(|launch| Trajectory::from_config(*launch, &config).trace(&field))
                    .map(|results| results.rough_length())
                    .sum();
                black_box(total);
            },
            BatchSize::SmallInput,
        );
    });
}

/// 128 x 64 x 128 world with a dirt floor whose top face is at y = 4.
fn build_field() -> WorldSnapshot {
    let info = MapInfo {
        width: 128,
        height: 64,
        depth: 128,
        origin: IVec3::new(-64, 0, -64),
    };
    let mut grid = VoxelGrid::filled(info, Material::Air).expect("grid should build");
    grid.fill_region(IVec3::new(-64, 0, -64), IVec3::new(63, 3, 63), Material::Dirt);
    WorldSnapshot::new(WORLD, grid, Vec::new())
}

fn build_launches() -> Vec<Location> {
    let mut launches = Vec::new();
    for i in 0..32 {
        let yaw = i as f64 * 11.25;
        let pitch = -10.0 + (i % 8) as f64 * 10.0;
        launches.push(Location::new(WORLD, 0.5, 6.5, 0.5).with_rotation(yaw, pitch));
    }
    launches
}

criterion_group!(benches, bench_trajectory);
criterion_main!(benches);
