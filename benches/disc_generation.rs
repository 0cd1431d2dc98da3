use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use flatbread_viewer::disc::{self, DiscParams};
use flatbread_viewer::mesh::GridMesh;

fn bench_disc_generation(c: &mut Criterion) {
    let base = GridMesh::plane(8.0, 8.0, 256, 256);
    let params = DiscParams::default();

    c.bench_function("generate_257x257", |b| {
        b.iter(|| {
            let mut mesh = base.clone();
            let mut rng = Pcg32::seed_from_u64(7);
            disc::generate(black_box(&mut mesh), &params, &mut rng);
            mesh
        })
    });

    c.bench_function("recompute_normals_257x257", |b| {
        let mut mesh = base.clone();
        let mut rng = Pcg32::seed_from_u64(7);
        disc::generate(&mut mesh, &params, &mut rng);
        b.iter(|| {
            mesh.recompute_normals();
            black_box(&mesh);
        })
    });
}

criterion_group!(benches, bench_disc_generation);
criterion_main!(benches);
