use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use flatbread_viewer::disc::{self, DiscParams};
use flatbread_viewer::mesh::GridMesh;

/// 3x3 vertices with spacing 1, centered at the origin. Corner vertices
/// sit at planar distance sqrt(2), edge midpoints at 1, center at 0.
fn unit_grid_3x3() -> GridMesh {
    GridMesh::plane(2.0, 2.0, 2, 2)
}

#[cfg(test)]
mod sink_rule_tests {
    use super::*;

    #[test]
    fn test_sink_matches_replayed_random_sequence() {
        let mut mesh = GridMesh::plane(8.0, 8.0, 32, 32);
        let original: Vec<f32> = mesh.positions.iter().map(|p| p.z).collect();
        let params = DiscParams {
            radius: 4.0,
            irregularity: 0.1,
            sink_depth: 0.2,
        };

        disc::generate(&mut mesh, &params, &mut Pcg32::seed_from_u64(42));

        // Replay the same sequence: one draw per vertex, in vertex order,
        // drawn whether or not the vertex ends up inside the radius.
        let mut replay = Pcg32::seed_from_u64(42);
        for (i, position) in mesh.positions.iter().enumerate() {
            let dist = position.truncate().length();
            let u: f32 = replay.random();
            let effective_radius = params.radius + (u - 0.5) * params.irregularity;

            if dist > effective_radius {
                assert_eq!(
                    position.z, -params.sink_depth,
                    "vertex {i} at distance {dist} should be sunk"
                );
            } else {
                assert_eq!(
                    position.z, original[i],
                    "vertex {i} at distance {dist} should keep its z"
                );
            }
        }
    }

    #[test]
    fn test_sunk_depth_is_exact() {
        let mut mesh = unit_grid_3x3();
        let params = DiscParams {
            radius: 1.0,
            irregularity: 0.0,
            sink_depth: 0.37,
        };

        disc::generate(&mut mesh, &params, &mut Pcg32::seed_from_u64(0));

        for position in &mesh.positions {
            if position.truncate().length() > 1.0 {
                assert_eq!(position.z, -0.37);
            }
        }
    }
}

#[cfg(test)]
mod boundary_case_tests {
    use super::*;

    #[test]
    fn test_zero_irregularity_gives_exact_circle() {
        // Radius 1.0 sinks exactly the 4 corners of the unit-spaced 3x3
        // grid and leaves the other 5 vertices alone.
        let mut mesh = unit_grid_3x3();
        let params = DiscParams {
            radius: 1.0,
            irregularity: 0.0,
            sink_depth: 0.2,
        };

        disc::generate(&mut mesh, &params, &mut Pcg32::seed_from_u64(99));

        let mut sunk = 0;
        for position in &mesh.positions {
            let dist = position.truncate().length();
            if dist > 1.0 {
                assert_eq!(position.z, -0.2);
                sunk += 1;
            } else {
                assert_eq!(position.z, 0.0);
            }
        }
        assert_eq!(sunk, 4, "exactly the corner vertices sink");
    }

    #[test]
    fn test_zero_irregularity_is_seed_independent() {
        let params = DiscParams {
            radius: 1.0,
            irregularity: 0.0,
            sink_depth: 0.2,
        };

        let mut a = unit_grid_3x3();
        let mut b = unit_grid_3x3();
        disc::generate(&mut a, &params, &mut Pcg32::seed_from_u64(1));
        disc::generate(&mut b, &params, &mut Pcg32::seed_from_u64(2));

        assert_eq!(a.positions, b.positions);
    }

    #[test]
    fn test_radius_beyond_grid_sinks_nothing() {
        // Radius 2.0 exceeds the corner distance sqrt(2), so all 9
        // vertices keep z = 0.
        let mut mesh = unit_grid_3x3();
        let params = DiscParams {
            radius: 2.0,
            irregularity: 0.0,
            sink_depth: 0.2,
        };

        disc::generate(&mut mesh, &params, &mut Pcg32::seed_from_u64(7));

        assert!(mesh.positions.iter().all(|p| p.z == 0.0));
    }

    #[test]
    fn test_radius_beyond_max_planar_distance_sinks_nothing() {
        let mut mesh = GridMesh::plane(8.0, 8.0, 16, 16);
        let radius = mesh.max_planar_distance() + 1.0;
        let params = DiscParams {
            radius,
            // Irregularity can shrink the threshold by at most half of
            // itself, so the margin of 1.0 keeps every vertex inside.
            irregularity: 0.1,
            sink_depth: 0.2,
        };

        disc::generate(&mut mesh, &params, &mut Pcg32::seed_from_u64(3));

        assert!(mesh.positions.iter().all(|p| p.z == 0.0));
    }
}

#[cfg(test)]
mod determinism_tests {
    use super::*;

    #[test]
    fn test_same_seed_is_bit_identical() {
        let params = DiscParams::default();

        let mut a = GridMesh::plane(8.0, 8.0, 24, 24);
        let mut b = GridMesh::plane(8.0, 8.0, 24, 24);
        disc::generate(&mut a, &params, &mut Pcg32::seed_from_u64(1234));
        disc::generate(&mut b, &params, &mut Pcg32::seed_from_u64(1234));

        assert_eq!(a.positions, b.positions);
        assert_eq!(a.normals, b.normals);
    }

    #[test]
    fn test_topology_is_unchanged() {
        let mut mesh = GridMesh::plane(8.0, 8.0, 24, 24);
        let indices_before = mesh.indices.clone();
        let vertex_count_before = mesh.vertex_count();

        disc::generate(
            &mut mesh,
            &DiscParams::default(),
            &mut Pcg32::seed_from_u64(5),
        );

        assert_eq!(mesh.vertex_count(), vertex_count_before);
        assert_eq!(mesh.indices, indices_before);
    }
}

#[cfg(test)]
mod normal_tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_normals_are_unit_length_after_generate() {
        let mut mesh = GridMesh::plane(8.0, 8.0, 32, 32);
        disc::generate(
            &mut mesh,
            &DiscParams::default(),
            &mut Pcg32::seed_from_u64(11),
        );

        for normal in &mesh.normals {
            assert!((normal.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_flat_interior_keeps_up_normal() {
        let mut mesh = GridMesh::plane(8.0, 8.0, 32, 32);
        disc::generate(
            &mut mesh,
            &DiscParams {
                radius: 4.0,
                irregularity: 0.0,
                sink_depth: 0.2,
            },
            &mut Pcg32::seed_from_u64(11),
        );

        // The center vertex and its whole neighborhood stay flat, so its
        // recomputed normal is exactly +Z.
        let center = mesh
            .positions
            .iter()
            .position(|p| p.truncate().length() < 1e-6)
            .expect("odd grid has a center vertex");
        assert!(mesh.normals[center].abs_diff_eq(Vec3::Z, 1e-5));
    }
}
