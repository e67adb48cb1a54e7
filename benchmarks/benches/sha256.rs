// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use redoubt_sha256::{HashState, MessageSchedule, compress_block, sha256};

fn benchmark_sha256(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha256");

    // 55 and 64 straddle the one-block/two-block padding boundary
    for msg_len in [0, 55, 64, 1024, 16 * 1024, 1024 * 1024].iter() {
        group.throughput(Throughput::Bytes(*msg_len as u64));
        group.bench_with_input(format!("{} bytes", msg_len), msg_len, |b, &msg_len| {
            let msg = vec![0xa5u8; msg_len];

            b.iter(|| sha256(black_box(&msg)));
        });
    }
    group.finish();
}

fn benchmark_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha256_block");
    let block = [0x5au8; 64];

    group.throughput(Throughput::Bytes(64));
    group.bench_function("expand", |b| {
        b.iter(|| MessageSchedule::expand(black_box(&block)));
    });
    group.bench_function("compress_block", |b| {
        b.iter(|| compress_block(black_box(HashState::INITIAL), black_box(&block)));
    });
    group.finish();
}

criterion_group!(benches, benchmark_sha256, benchmark_compress);
criterion_main!(benches);
