//! Benchmarks for the parse and render hot paths.
//!
//! All inputs are fixed-size (32-byte hash, 36-byte packed buffer), so
//! these mostly track the cost of the bit-by-bit CRC and the base64
//! round-trip.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ton_address::{crc16, Address, StringFormat};

const RAW: &str = "-1:811ced271f8f449cb51eb5920090b92cb200b20f07170676e9db6fbe9da516cf";
const FRIENDLY: &str = "Ef-BHO0nH49EnLUetZIAkLkssgCyDwcXBnbp22--naUWz8VY";

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_raw", |b| {
        b.iter(|| Address::parse(black_box(RAW)))
    });
    c.bench_function("parse_friendly", |b| {
        b.iter(|| Address::parse(black_box(FRIENDLY)))
    });
    c.bench_function("is_valid_reject", |b| {
        b.iter(|| Address::is_valid(black_box("12345")))
    });
}

fn bench_render(c: &mut Criterion) {
    let address = Address::parse(FRIENDLY).unwrap();

    c.bench_function("to_string_friendly", |b| {
        b.iter(|| address.to_string_with(black_box(StringFormat::default())))
    });
    c.bench_function("to_string_raw", |b| {
        b.iter(|| address.to_string_with(black_box(StringFormat::default().user_friendly(false))))
    });
}

fn bench_crc16(c: &mut Criterion) {
    let buf = [0xA5u8; 34];
    c.bench_function("crc16_34_bytes", |b| b.iter(|| crc16(black_box(&buf))));
}

criterion_group!(benches, bench_parse, bench_render, bench_crc16);
criterion_main!(benches);
