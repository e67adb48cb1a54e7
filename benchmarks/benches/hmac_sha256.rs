// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use redoubt_sha256::{hmac_sha256, verify};

fn benchmark_hmac_sha256(c: &mut Criterion) {
    let mut group = c.benchmark_group("hmac_sha256");

    // Block-sized key vs. a key that must be hashed down first
    for key_len in [32, 64, 131].iter() {
        for msg_len in [64, 1024].iter() {
            group.throughput(Throughput::Bytes(*msg_len as u64));
            group.bench_with_input(
                format!("{} byte key, {} bytes", key_len, msg_len),
                &(*key_len, *msg_len),
                |b, &(key_len, msg_len)| {
                    let key = vec![0x0bu8; key_len];
                    let msg = vec![0xcdu8; msg_len];

                    b.iter(|| hmac_sha256(black_box(&key), black_box(&msg)));
                },
            );
        }
    }
    group.finish();
}

fn benchmark_verify(c: &mut Criterion) {
    let key = b"benchmark-key";
    let msg = vec![0x42u8; 1024];
    let tag = hmac_sha256(key, &msg);

    c.bench_function("hmac_sha256_verify", |b| {
        b.iter(|| {
            verify(black_box(key), black_box(&msg), black_box(tag.as_bytes()))
                .expect("tag must verify");
        });
    });
}

criterion_group!(benches, benchmark_hmac_sha256, benchmark_verify);
criterion_main!(benches);
