//! Benchmarks for dictc protocol parsing

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dictc::protocol::{split_atoms, Status};

fn protocol_benchmarks(c: &mut Criterion) {
    c.bench_function("split_atoms_plain", |b| {
        b.iter(|| split_atoms(black_box("wn exact cat feline mammal")))
    });

    c.bench_function("split_atoms_quoted", |b| {
        b.iter(|| split_atoms(black_box("151 \"cat\" foo \"Foo Dictionary of Common Words\"")))
    });

    c.bench_function("status_parse", |b| {
        b.iter(|| Status::parse(black_box("150 12 definitions retrieved")))
    });
}

criterion_group!(benches, protocol_benchmarks);
criterion_main!(benches);
