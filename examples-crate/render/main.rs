use water_volume_mesh::{
    float_position, FaceFlags, Placement, ShapeDescriptor, VolumeConfig, WaterMeshBuffer, WaterVolume,
    WaveParams,
};

use bevy::{
    pbr::wireframe::{WireframeConfig, WireframePlugin},
    prelude::*,
    render::{
        mesh::Indices,
        render_asset::RenderAssetUsages,
        render_resource::{PrimitiveTopology, WgpuFeatures},
        settings::{RenderCreation, WgpuSettings},
        RenderPlugin,
    },
};

/// Matches the displacement of the water material in a real game; here it only drives the floating cube.
const WAVES: WaveParams = WaveParams {
    frequency: 0.6,
    scale: 0.15,
    speed: 1.5,
};

#[derive(Resource)]
struct Volumes(Vec<WaterVolume>);

#[derive(Component)]
struct Floating;

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins.set(RenderPlugin {
                render_creation: RenderCreation::Automatic(WgpuSettings {
                    features: WgpuFeatures::POLYGON_MODE_LINE,
                    ..Default::default()
                }),
                ..Default::default()
            }),
            WireframePlugin,
        ))
        .insert_resource(Volumes(build_volumes()))
        .add_systems(Startup, setup)
        .add_systems(Update, float_system)
        .run();
}

fn build_volumes() -> Vec<WaterVolume> {
    // Two boxes side by side: their top-face UVs continue across the seam.
    let left = WaterVolume::new(
        VolumeConfig::new(1.0, FaceFlags::ALL, FaceFlags::ALL),
        ShapeDescriptor::Box {
            dimensions: [8.0, 2.0, 8.0],
        },
    );
    let right = WaterVolume::new(
        VolumeConfig::new(1.0, FaceFlags::ALL, FaceFlags::ALL),
        ShapeDescriptor::Box {
            dimensions: [8.0, 2.0, 8.0],
        },
    )
    .with_origin([8.0, 0.0, 0.0]);

    // A terraced pool with inner corners to show the diagonal foam.
    let pool = WaterVolume::new(
        VolumeConfig::new(0.5, FaceFlags::NEG_X | FaceFlags::POS_Z, FaceFlags::ALL),
        ShapeDescriptor::Transforms(vec![
            Placement::new([0.0, 0.0, 0.0], [6.0, 1.0, 3.0]),
            Placement::new([0.0, 0.0, 3.0], [3.0, 1.0, 3.0]),
            Placement::new([3.5, 0.0, 3.5], [2.0, 2.0, 2.0]),
        ]),
    )
    .with_origin([0.0, 0.0, -10.0]);

    vec![left, right, pool]
}

fn setup(
    mut commands: Commands,
    mut volumes: ResMut<Volumes>,
    mut wireframe_config: ResMut<WireframeConfig>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    wireframe_config.global = true;

    commands.spawn(PointLightBundle {
        transform: Transform::from_translation(Vec3::new(10.0, 20.0, 10.0)),
        point_light: PointLight {
            range: 200.0,
            intensity: 2_000_000.0,
            ..Default::default()
        },
        ..Default::default()
    });
    commands.spawn(Camera3dBundle {
        transform: Transform::from_translation(Vec3::new(-8.0, 14.0, 18.0))
            .looking_at(Vec3::new(8.0, 0.0, -2.0), Vec3::Y),
        ..Default::default()
    });

    let material = materials.add(StandardMaterial {
        base_color: Color::rgb(0.6, 0.8, 1.0),
        perceptual_roughness: 0.2,
        ..Default::default()
    });

    for volume in volumes.0.iter_mut() {
        let [x, y, z] = volume.origin();
        let mesh = meshes.add(render_mesh(volume.mesh()));
        commands.spawn(PbrBundle {
            mesh,
            material: material.clone(),
            transform: Transform::from_translation(Vec3::new(x, y, z)),
            ..Default::default()
        });
    }

    commands.spawn((
        PbrBundle {
            mesh: meshes.add(Cuboid::new(0.5, 0.5, 0.5)),
            material: materials.add(Color::rgb(0.9, 0.4, 0.1)),
            transform: Transform::from_translation(Vec3::new(4.0, 5.0, 4.0)),
            ..Default::default()
        },
        Floating,
    ));
}

fn render_mesh(buffer: &WaterMeshBuffer) -> Mesh {
    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, buffer.positions.clone())
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, buffer.normals.clone())
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, buffer.tex_coords.clone())
        .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, buffer.colors.clone())
        .with_inserted_indices(Indices::U32(buffer.indices.clone()))
}

fn float_system(time: Res<Time>, volumes: Res<Volumes>, mut floating: Query<&mut Transform, With<Floating>>) {
    for mut transform in floating.iter_mut() {
        let [_, y, _] = float_position(
            &volumes.0[0],
            Some(&WAVES),
            transform.translation.to_array(),
            time.elapsed_seconds(),
        );
        transform.translation.y = y;
    }
}
