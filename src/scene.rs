use glam::{Mat4, Vec3};
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, PI};

use crate::disc::{self, DiscParams};
use crate::mesh::GridMesh;

pub const FLATBREAD_SIZE: f32 = 8.0;
pub const GROUND_SIZE: f32 = 20.0;
pub const GROUND_HEIGHT: f32 = -0.2;

/// Ambient term plus one shadow-casting directional light.
#[derive(Debug, Clone, Copy)]
pub struct Lighting {
    pub ambient_intensity: f32,
    pub sun_color: Vec3,
    pub sun_intensity: f32,
    pub sun_position: Vec3,
}

impl Lighting {
    /// Light-space matrix for the shadow pass: an orthographic frustum
    /// wide enough to cover the flatbread and the ground around it.
    pub fn sun_view_proj(&self) -> Mat4 {
        let eye = self.sun_position.normalize() * 20.0;
        let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
        let proj = Mat4::orthographic_rh(-12.0, 12.0, -12.0, 12.0, 0.1, 40.0);
        proj * view
    }

    /// Unit vector pointing from the scene towards the light.
    pub fn sun_direction(&self) -> Vec3 {
        self.sun_position.normalize()
    }
}

/// Scalar material inputs for one object.
#[derive(Debug, Clone, Copy)]
pub struct MaterialParams {
    pub displacement_scale: f32,
    pub roughness: f32,
    pub metalness: f32,
    /// Whether this object samples the loaded material maps or the
    /// neutral fallback set.
    pub textured: bool,
}

pub struct SceneObject {
    pub mesh: GridMesh,
    pub transform: Mat4,
    pub material: MaterialParams,
    pub casts_shadow: bool,
}

/// Everything the renderer needs, built once at startup and read-only
/// afterwards.
pub struct Scene {
    pub objects: Vec<SceneObject>,
    pub lighting: Lighting,
}

/// Assemble the flatbread scene: the deformed disc, its underside, and a
/// ground plane to catch the shadow.
pub fn build(params: &DiscParams, segments: u32, rng: &mut impl Rng) -> Scene {
    let mut top = GridMesh::plane(FLATBREAD_SIZE, FLATBREAD_SIZE, segments, segments);
    disc::generate(&mut top, params, rng);

    // The underside is a rigid 180° copy of the deformed top. The two rims
    // are left unwelded; a merged, stitched mesh is out of scope.
    let mut bottom = top.clone();
    bottom.rotate_x(PI);

    // Lay the disc plane flat onto the x-z ground plane.
    let lay_flat = Mat4::from_rotation_x(-FRAC_PI_2);

    let flatbread_material = MaterialParams {
        displacement_scale: 0.35,
        roughness: 0.8,
        metalness: 0.0,
        textured: true,
    };

    let ground = GridMesh::plane(GROUND_SIZE, GROUND_SIZE, 1, 1);
    let ground_transform = Mat4::from_translation(Vec3::new(0.0, GROUND_HEIGHT, 0.0))
        * Mat4::from_rotation_x(-FRAC_PI_2);

    let objects = vec![
        SceneObject {
            mesh: top,
            transform: lay_flat,
            material: flatbread_material,
            casts_shadow: true,
        },
        SceneObject {
            mesh: bottom,
            transform: lay_flat,
            material: flatbread_material,
            casts_shadow: true,
        },
        SceneObject {
            mesh: ground,
            transform: ground_transform,
            material: MaterialParams {
                displacement_scale: 0.0,
                roughness: 0.9,
                metalness: 0.0,
                textured: false,
            },
            casts_shadow: false,
        },
    ];

    let lighting = Lighting {
        ambient_intensity: 0.5,
        sun_color: Vec3::ONE,
        sun_intensity: 1.5,
        sun_position: Vec3::new(3.0, 7.0, 5.0),
    };

    Scene { objects, lighting }
}
