use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};
use lesscolors::{ColorPalette, ColorSpace, Image, ImageModifier};

fn gradient_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 4) as u8, (y * 4) as u8, ((x + y) * 2) as u8, 255])
    })
}

fn benchmark_palette_remap(c: &mut Criterion) {
    let buffer = gradient_image(64, 64);
    let palette = ColorPalette::from_hex_colors(&[
        "#000000", "#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#00FFFF", "#FF00FF", "#FFFFFF",
    ])
    .unwrap();

    let mut group = c.benchmark_group("reduce_colors_64x64");
    for space in [ColorSpace::Srgb, ColorSpace::Lab, ColorSpace::Oklab] {
        group.bench_function(space.to_string(), |b| {
            b.iter(|| {
                let mut modifier = ImageModifier::new(Image::from_rgba(buffer.clone()));
                modifier.reduce_colors(black_box(&palette), space);
                black_box(modifier.pixels_changed())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_palette_remap);
criterion_main!(benches);
