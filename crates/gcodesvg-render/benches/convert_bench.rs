use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gcodesvg_core::ColorPolicy;
use gcodesvg_geometry::parse_gcode;
use gcodesvg_render::{convert, convert_gcode, RenderOptions};
use std::hint::black_box;

/// Concentric squares joined by rapids, each with an arc at one corner.
fn pocket_program(rings: usize) -> String {
    let mut out = String::from("G21 G90\n");
    for i in 0..rings {
        let lo = i as f64;
        let hi = 200.0 - lo;
        out.push_str(&format!("G0 X{} Y{}\n", lo, lo));
        out.push_str(&format!("G1 X{} Y{}\n", hi, lo));
        out.push_str(&format!("G1 X{} Y{}\n", hi, hi - 5.0));
        out.push_str(&format!("G3 X{} Y{} I-5 J0\n", hi - 10.0, hi - 5.0));
        out.push_str(&format!("G1 X{} Y{}\n", lo, hi - 5.0));
        out.push_str(&format!("G1 X{} Y{}\n", lo, lo));
    }
    out
}

fn bench_convert(c: &mut Criterion) {
    let colors = ColorPolicy::new()
        .with_linear("#000000")
        .with_circular("#ff00ff");
    let options = RenderOptions::new("bench", 800.0, 600.0);

    let mut group = c.benchmark_group("convert");
    for rings in [10usize, 50, 90] {
        let program = pocket_program(rings);
        let toolpath = match parse_gcode(&program) {
            Ok(toolpath) => toolpath,
            Err(err) => panic!("bench program failed to parse: {err}"),
        };

        group.bench_with_input(BenchmarkId::new("toolpath", rings), &toolpath, |b, tp| {
            b.iter(|| convert(black_box(tp), &colors, &options))
        });
        group.bench_with_input(BenchmarkId::new("gcode_text", rings), &program, |b, text| {
            b.iter(|| convert_gcode(black_box(text), &colors, &options))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
