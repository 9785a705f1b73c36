use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};
use seamcarve::{calculate_energy, SeamCarver};

fn sample(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let v = ((x * 37 + y * 91 + x * y * 13) % 251) as u8;
        Rgb([v, v.wrapping_mul(3), v.wrapping_add(y as u8)])
    })
}

fn energy_bench(c: &mut Criterion) {
    let image = sample(256, 256);
    c.bench_function("energy map 256x256", move |b| {
        b.iter(|| calculate_energy(black_box(&image)))
    });
}

fn seam_bench(c: &mut Criterion) {
    let carver = SeamCarver::new(sample(256, 256)).unwrap();
    c.bench_function("vertical seam 256x256", move |b| {
        b.iter(|| carver.find_vertical_seam())
    });

    let carver = SeamCarver::new(sample(256, 256)).unwrap();
    c.bench_function("horizontal seam 256x256", move |b| {
        b.iter(|| carver.find_horizontal_seam())
    });
}

fn removal_bench(c: &mut Criterion) {
    let carver = SeamCarver::new(sample(256, 256)).unwrap();
    let seam = carver.find_vertical_seam();
    c.bench_function("remove vertical seam 256x256", move |b| {
        b.iter(|| {
            let mut scratch = carver.clone();
            scratch.remove_vertical_seam(&seam).unwrap();
            scratch
        })
    });
}

criterion_group!(benches, energy_bench, seam_bench, removal_bench);
criterion_main!(benches);
