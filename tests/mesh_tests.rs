use glam::{Vec2, Vec3};
use std::f32::consts::PI;

use flatbread_viewer::mesh::GridMesh;

#[cfg(test)]
mod plane_tests {
    use super::*;

    #[test]
    fn test_plane_vertex_and_triangle_counts() {
        let mesh = GridMesh::plane(8.0, 8.0, 256, 256);
        assert_eq!(mesh.vertex_count(), 257 * 257);
        assert_eq!(mesh.triangle_count(), 2 * 256 * 256);
        assert_eq!(mesh.segments(), (256, 256));
    }

    #[test]
    fn test_plane_is_centered() {
        let mesh = GridMesh::plane(8.0, 8.0, 4, 4);
        assert_eq!(mesh.positions[0], Vec3::new(-4.0, -4.0, 0.0));
        assert_eq!(
            *mesh.positions.last().unwrap(),
            Vec3::new(4.0, 4.0, 0.0)
        );
        assert!(mesh.positions.iter().all(|p| p.z == 0.0));
    }

    #[test]
    fn test_plane_uvs_span_unit_square() {
        let mesh = GridMesh::plane(8.0, 8.0, 4, 4);
        assert_eq!(mesh.uvs[0], Vec2::new(0.0, 0.0));
        assert_eq!(*mesh.uvs.last().unwrap(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_plane_winding_is_counter_clockwise() {
        let mesh = GridMesh::plane(2.0, 2.0, 2, 2);
        for tri in mesh.indices.chunks_exact(3) {
            let p0 = mesh.positions[tri[0] as usize];
            let p1 = mesh.positions[tri[1] as usize];
            let p2 = mesh.positions[tri[2] as usize];
            let face = (p1 - p0).cross(p2 - p0);
            assert!(face.z > 0.0, "triangle {tri:?} winds clockwise");
        }
    }

    #[test]
    fn test_plane_indices_stay_in_range() {
        let mesh = GridMesh::plane(8.0, 8.0, 16, 16);
        let count = mesh.vertex_count() as u32;
        assert!(mesh.indices.iter().all(|&i| i < count));
    }

    #[test]
    fn test_segments_clamp_to_one() {
        let mesh = GridMesh::plane(1.0, 1.0, 0, 0);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn test_max_planar_distance_is_the_corner() {
        let mesh = GridMesh::plane(2.0, 2.0, 2, 2);
        assert!((mesh.max_planar_distance() - 2.0_f32.sqrt()).abs() < 1e-6);
    }
}

#[cfg(test)]
mod normal_tests {
    use super::*;

    #[test]
    fn test_flat_plane_normals_point_up() {
        let mesh = GridMesh::plane(8.0, 8.0, 8, 8);
        assert!(mesh.normals.iter().all(|n| *n == Vec3::Z));
    }

    #[test]
    fn test_recompute_on_flat_plane_keeps_up_normals() {
        let mut mesh = GridMesh::plane(8.0, 8.0, 8, 8);
        mesh.recompute_normals();
        assert!(mesh.normals.iter().all(|n| n.abs_diff_eq(Vec3::Z, 1e-6)));
    }
}

#[cfg(test)]
mod transform_tests {
    use super::*;

    #[test]
    fn test_rotate_x_half_turn_flips_the_plane() {
        let mut mesh = GridMesh::plane(2.0, 2.0, 2, 2);
        let before = mesh.positions.clone();
        mesh.rotate_x(PI);

        for (rotated, original) in mesh.positions.iter().zip(&before) {
            assert!(rotated.abs_diff_eq(
                Vec3::new(original.x, -original.y, -original.z),
                1e-5
            ));
        }
        for normal in &mesh.normals {
            assert!(normal.abs_diff_eq(Vec3::NEG_Z, 1e-5));
        }
    }

    #[test]
    fn test_rotate_x_preserves_topology() {
        let mut mesh = GridMesh::plane(2.0, 2.0, 4, 4);
        let indices = mesh.indices.clone();
        mesh.rotate_x(PI);
        assert_eq!(mesh.indices, indices);
    }

    #[test]
    fn test_vertices_interleave_attributes() {
        let mesh = GridMesh::plane(2.0, 2.0, 2, 2);
        let vertices = mesh.vertices();

        assert_eq!(vertices.len(), mesh.vertex_count());
        for (vertex, (position, uv)) in vertices.iter().zip(mesh.positions.iter().zip(&mesh.uvs)) {
            assert_eq!(vertex.position, position.to_array());
            assert_eq!(vertex.uv, uv.to_array());
            assert_eq!(vertex.normal, [0.0, 0.0, 1.0]);
        }
    }
}
