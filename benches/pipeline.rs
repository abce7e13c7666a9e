use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use meshpaint::prelude::*;

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn cube() -> Mesh {
    Mesh::parse(include_str!("../assets/cube.obj")).unwrap()
}

/// Latitude/longitude sphere with quad bands and triangle-fan caps.
fn sphere(rings: usize, segments: usize) -> Mesh {
    let mut src = String::new();
    src.push_str("v 0 1 0\n");
    for ring in 1..rings {
        let phi = std::f64::consts::PI * ring as f64 / rings as f64;
        for seg in 0..segments {
            let theta = std::f64::consts::TAU * seg as f64 / segments as f64;
            src.push_str(&format!(
                "v {} {} {}\n",
                phi.sin() * theta.cos(),
                phi.cos(),
                phi.sin() * theta.sin()
            ));
        }
    }
    src.push_str("v 0 -1 0\n");

    let bottom = 2 + (rings - 1) * segments;
    let at = |ring: usize, seg: usize| 2 + (ring - 1) * segments + seg % segments;
    for seg in 0..segments {
        src.push_str(&format!("f 1 {} {}\n", at(1, seg + 1), at(1, seg)));
    }
    for ring in 1..rings - 1 {
        for seg in 0..segments {
            src.push_str(&format!(
                "f {} {} {} {}\n",
                at(ring, seg),
                at(ring, seg + 1),
                at(ring + 1, seg + 1),
                at(ring + 1, seg)
            ));
        }
    }
    for seg in 0..segments {
        src.push_str(&format!(
            "f {bottom} {} {}\n",
            at(rings - 1, seg),
            at(rings - 1, seg + 1)
        ));
    }
    Mesh::parse(&src).unwrap()
}

fn benchmark_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for (name, mesh) in [("cube", cube()), ("sphere_32x64", sphere(32, 64))] {
        for mode in [RenderMode::Wireframe, RenderMode::Filled] {
            let engine = Engine::new(
                mesh.clone(),
                SceneConfig {
                    render_mode: mode,
                    ..SceneConfig::default()
                },
            );
            let label = match mode {
                RenderMode::Wireframe => "wireframe",
                RenderMode::Filled => "filled",
            };
            group.bench_with_input(BenchmarkId::new(label, name), &engine, |b, engine| {
                let mut state = engine.initial_state();
                b.iter(|| black_box(engine.tick(&mut state, BUFFER_WIDTH, BUFFER_HEIGHT)));
            });
        }
    }

    group.finish();
}

fn benchmark_load(c: &mut Criterion) {
    let source = include_str!("../assets/icosahedron.obj");
    c.bench_function("parse_icosahedron", |b| {
        b.iter(|| Mesh::parse(black_box(source)).unwrap())
    });
}

criterion_group!(benches, benchmark_tick, benchmark_load);
criterion_main!(benches);
