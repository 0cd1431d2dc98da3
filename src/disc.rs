use rand::Rng;

use crate::mesh::GridMesh;

/// Parameters for the irregular disc deformation.
#[derive(Debug, Clone, Copy)]
pub struct DiscParams {
    /// Nominal disc radius. Vertices beyond it get sunk.
    pub radius: f32,
    /// Half-width of the per-vertex random radius perturbation. Keep this
    /// small relative to `radius`; values approaching it would sink the
    /// whole grid. Not validated, caller responsibility.
    pub irregularity: f32,
    /// How far below the plane out-of-radius vertices are pushed.
    pub sink_depth: f32,
}

impl Default for DiscParams {
    fn default() -> Self {
        Self {
            radius: 4.0,
            irregularity: 0.1,
            sink_depth: 0.2,
        }
    }
}

/// Deform a flat grid into an irregular, rounded-edge disc.
///
/// For every vertex the planar distance to the origin is compared against
/// a per-vertex randomized radius `radius + (u - 0.5) * irregularity`;
/// vertices past it have their z forced to `-sink_depth`, everything else
/// keeps its z. Exactly one uniform sample is drawn per vertex, in vertex
/// order and before the distance test, so generation is deterministic for
/// a fixed RNG sequence. Topology is never touched.
///
/// Normals are recomputed afterwards; the flat +Z normals the plane was
/// built with no longer match the sunk rim.
///
/// With `irregularity` = 0 the boundary is an exact circle; with `radius`
/// past the grid's half-diagonal nothing sinks. Neither case is an error.
pub fn generate(mesh: &mut GridMesh, params: &DiscParams, rng: &mut impl Rng) {
    for position in &mut mesh.positions {
        let dist = position.truncate().length();
        let u: f32 = rng.random();
        let effective_radius = params.radius + (u - 0.5) * params.irregularity;
        if dist > effective_radius {
            position.z = -params.sink_depth;
        }
    }
    mesh.recompute_normals();
}
