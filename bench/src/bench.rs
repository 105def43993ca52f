use water_volume_mesh::{
    compile_water_mesh, FaceFlags, Placement, ShapeDescriptor, VolumeConfig, VoxelGrid, WaterMeshBuffer,
    WaterVolume, GRID_X, GRID_Y, GRID_Z,
};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_empty_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("bench_empty_grid");
    let grid = VoxelGrid::new();
    let config = VolumeConfig::default();

    let mut buffer = WaterMeshBuffer::new();
    compile_water_mesh(&grid, &config, [0.0; 3], &mut buffer);

    group.bench_with_input(
        BenchmarkId::from_parameter(format!("quads={}", buffer.num_quads())),
        &(),
        |b, _| {
            b.iter(|| compile_water_mesh(&grid, &config, [0.0; 3], &mut buffer));
        },
    );
    group.finish();
}

fn bench_full_box(c: &mut Criterion) {
    let mut group = c.benchmark_group("bench_full_box");
    let dimensions = [GRID_X as f32, GRID_Y as f32, GRID_Z as f32];

    for include_faces in [FaceFlags::NONE, FaceFlags::ALL] {
        let config = VolumeConfig::new(1.0, include_faces, FaceFlags::ALL);
        let mut volume = WaterVolume::new(config, ShapeDescriptor::Box { dimensions });
        let quads = volume.rebuild().num_quads();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("sides={}/quads={}", include_faces.bits(), quads)),
            &(),
            |b, _| {
                b.iter(|| volume.rebuild().num_quads());
            },
        );
    }
    group.finish();
}

fn bench_terraced_placements(c: &mut Criterion) {
    let mut group = c.benchmark_group("bench_terraced_placements");

    // Staircase of overlapping pools, lots of exposed edges and inner corners.
    let placements = (0..40)
        .map(|i| {
            let i = i as f32;
            Placement::new([i * 2.0, (i / 4.0).floor(), (i * 7.0) % 60.0], [6.0, 3.0, 9.0])
        })
        .collect();
    let mut volume = WaterVolume::new(VolumeConfig::default(), ShapeDescriptor::Transforms(placements));
    let quads = volume.rebuild().num_quads();

    group.bench_with_input(
        BenchmarkId::from_parameter(format!("quads={quads}")),
        &(),
        |b, _| {
            b.iter(|| volume.rebuild().num_quads());
        },
    );
    group.finish();
}

fn bench_height_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("bench_height_queries");
    let mut volume = WaterVolume::new(
        VolumeConfig::default(),
        ShapeDescriptor::Box {
            dimensions: [64.0, 1.0, 64.0],
        },
    );
    volume.rebuild();

    group.bench_with_input(BenchmarkId::from_parameter("columns=4096"), &(), |b, _| {
        b.iter(|| {
            let mut found = 0;
            for x in 0..64 {
                for z in 0..64 {
                    if volume.query_height([x as f32 + 0.5, 0.0, z as f32 + 0.5]).is_some() {
                        found += 1;
                    }
                }
            }
            found
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_empty_grid,
    bench_full_box,
    bench_terraced_placements,
    bench_height_queries
);
criterion_main!(benches);
