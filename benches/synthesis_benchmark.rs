use byteorder::{ByteOrder, LittleEndian};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slg2png::models::Tile;
use slg2png::processors::ImageSynthesizer;
use slg2png::readers::{range_scanner, record_decoder};
use slg2png::utils::constants::{FILE_HEADER_SIZE, PAGE_SIZE};
use slg2png::utils::palette::generate_palette;

fn synthetic_stream(pages: usize) -> Vec<u8> {
    let mut data = vec![0u8; FILE_HEADER_SIZE];
    for i in 0..pages {
        let mut block = vec![(i % 251) as u8; PAGE_SIZE];
        let kind: u32 = if i % 8 == 0 { 0x6d14 } else { 0x2c11 };
        LittleEndian::write_u32(&mut block[0..4], kind << 16);
        LittleEndian::write_f32(&mut block[4..8], 10.0 + (i % 9) as f32 * 10.0);
        LittleEndian::write_f32(&mut block[12..16], 15.0 + (i % 10) as f32);
        LittleEndian::write_u32(&mut block[16..20], 4_000_000);
        LittleEndian::write_u32(&mut block[20..24], 500_000);
        data.extend_from_slice(&block);
    }
    data
}

fn benchmark_palette(c: &mut Criterion) {
    c.bench_function("generate_palette", |b| {
        b.iter(|| black_box(generate_palette()))
    });
}

fn benchmark_decode(c: &mut Criterion) {
    let data = synthetic_stream(1);
    let block = &data[FILE_HEADER_SIZE..FILE_HEADER_SIZE + PAGE_SIZE];
    c.bench_function("decode_page", |b| {
        b.iter(|| record_decoder::decode_page(black_box(block)).unwrap())
    });
}

fn benchmark_scan(c: &mut Criterion) {
    let data = synthetic_stream(500);
    c.bench_function("scan_500_pages", |b| {
        b.iter(|| range_scanner::scan(black_box(&data), 0, 500).unwrap())
    });
}

fn benchmark_synthesize(c: &mut Criterion) {
    let pages = 100;
    let data = synthetic_stream(pages);
    let scan = range_scanner::scan(&data, 0, pages).unwrap();
    let palette = generate_palette();
    let synthesizer = ImageSynthesizer::new(&data, &scan.pages, &scan.range, &palette, 0);
    let tile = Tile {
        start_page: 0,
        page_count: pages,
        image_index: 0,
    };

    c.bench_function("synthesize_100_page_tile", |b| {
        b.iter(|| synthesizer.synthesize(black_box(&tile)).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_palette,
    benchmark_decode,
    benchmark_scan,
    benchmark_synthesize
);
criterion_main!(benches);
