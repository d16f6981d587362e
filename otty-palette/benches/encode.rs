use criterion::{Criterion, black_box, criterion_group, criterion_main};
use otty_palette::{Palette, Rgb, format};

fn palette(len: usize) -> Palette {
    (0..len)
        .map(|i| {
            let v = (i % 256) as u8;
            Rgb::new(v, v.wrapping_mul(3), v.wrapping_mul(7))
        })
        .collect()
}

fn bench_formats(c: &mut Criterion) {
    for len in [16, 256] {
        let palette = palette(len);
        for descriptor in format::list() {
            c.bench_function(&format!("{}_{len}", descriptor.id()), |b| {
                b.iter(|| black_box(descriptor.encode(black_box(&palette))));
            });
        }
    }
}

criterion_group!(encode, bench_formats);
criterion_main!(encode);
