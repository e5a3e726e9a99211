use criterion::{criterion_group, criterion_main, Criterion};

use twophase::cubie::CubieCube;
use twophase::moves::Move::*;
use twophase::solver::{setup, solve};

fn cc_apply_moves() {
    let cc = CubieCube::default();
    let _ = cc.apply_moves(&[R, U, R3, U3]);
}

fn bench_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("CubieCube Moves");
    group.bench_function("apply_moves", |b| b.iter(cc_apply_moves));
    group.finish();
}

fn bench_solver(c: &mut Criterion) {
    setup();
    c.bench_function("Solver", |b| {
        b.iter(|| {
            solve(
                "RLLBUFUUUBDURRBBUBRLRRFDFDDLLLUDFLRRDDFRLFDBUBFFLBBDUF",
                23,
                10.0,
                false,
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_solver, bench_moves);
criterion_main!(benches);
