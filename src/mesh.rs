use glam::{Mat4, Vec2, Vec3};

use crate::types::Vertex;

/// A regular rectangular grid of vertices with fixed triangle connectivity.
///
/// Positions may be deformed in place (see [`crate::disc`]); the index
/// buffer is built once and never changes afterwards.
#[derive(Clone)]
pub struct GridMesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
    segments_x: u32,
    segments_y: u32,
}

impl GridMesh {
    /// Build a flat plane in the x-y plane, centered at the origin.
    ///
    /// `segments_x`/`segments_y` are cell counts, so the grid holds
    /// `(segments_x + 1) * (segments_y + 1)` vertices. All normals start
    /// as +Z and UVs span [0,1] across the plane.
    pub fn plane(width: f32, height: f32, segments_x: u32, segments_y: u32) -> Self {
        let segments_x = segments_x.max(1);
        let segments_y = segments_y.max(1);
        let cols = segments_x + 1;
        let rows = segments_y + 1;

        let mut positions = Vec::with_capacity((cols * rows) as usize);
        let mut normals = Vec::with_capacity((cols * rows) as usize);
        let mut uvs = Vec::with_capacity((cols * rows) as usize);

        for iy in 0..rows {
            let v = iy as f32 / segments_y as f32;
            let y = (v - 0.5) * height;
            for ix in 0..cols {
                let u = ix as f32 / segments_x as f32;
                let x = (u - 0.5) * width;
                positions.push(Vec3::new(x, y, 0.0));
                normals.push(Vec3::Z);
                uvs.push(Vec2::new(u, v));
            }
        }

        // Two counter-clockwise triangles per cell (as seen from +Z).
        let mut indices = Vec::with_capacity((segments_x * segments_y * 6) as usize);
        for iy in 0..segments_y {
            for ix in 0..segments_x {
                let a = iy * cols + ix;
                let b = a + 1;
                let c = a + cols;
                let d = c + 1;
                indices.extend_from_slice(&[a, b, d]);
                indices.extend_from_slice(&[a, d, c]);
            }
        }

        Self {
            positions,
            normals,
            uvs,
            indices,
            segments_x,
            segments_y,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn segments(&self) -> (u32, u32) {
        (self.segments_x, self.segments_y)
    }

    /// Largest planar (x-y) distance of any vertex from the origin.
    pub fn max_planar_distance(&self) -> f32 {
        self.positions
            .iter()
            .map(|p| p.truncate().length())
            .fold(0.0, f32::max)
    }

    /// Recompute smooth per-vertex normals from current positions.
    ///
    /// Accumulates unnormalized face normals per vertex (area weighting
    /// falls out of the cross product), then normalizes. Vertices that end
    /// up with a zero accumulator keep +Z.
    pub fn recompute_normals(&mut self) {
        let mut acc = vec![Vec3::ZERO; self.positions.len()];

        for tri in self.indices.chunks_exact(3) {
            let p0 = self.positions[tri[0] as usize];
            let p1 = self.positions[tri[1] as usize];
            let p2 = self.positions[tri[2] as usize];
            let face = (p1 - p0).cross(p2 - p0);
            acc[tri[0] as usize] += face;
            acc[tri[1] as usize] += face;
            acc[tri[2] as usize] += face;
        }

        for (normal, sum) in self.normals.iter_mut().zip(acc) {
            *normal = sum.try_normalize().unwrap_or(Vec3::Z);
        }
    }

    /// Rigidly rotate positions and normals about the x axis.
    pub fn rotate_x(&mut self, angle: f32) {
        let rotation = Mat4::from_rotation_x(angle);
        for position in &mut self.positions {
            *position = rotation.transform_point3(*position);
        }
        for normal in &mut self.normals {
            *normal = rotation.transform_vector3(*normal);
        }
    }

    /// Interleave the attributes into a GPU upload buffer.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .map(|((position, normal), uv)| Vertex {
                position: position.to_array(),
                normal: normal.to_array(),
                uv: uv.to_array(),
            })
            .collect()
    }
}
