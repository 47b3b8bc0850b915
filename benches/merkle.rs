use bc_merkle::{tx_merkle_root, tx_status_merkle_root, Hash, Tx, TxVerifyResult};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_tx_root(c: &mut Criterion) {
    let mut group = c.benchmark_group("tx_merkle_root");
    for n in [1usize, 16, 255, 1024, 4096] {
        let txs: Vec<Tx> = (0..n as u64)
            .map(|i| Tx::new(Hash::digest(&i.to_le_bytes())))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &txs, |b, txs| {
            b.iter(|| tx_merkle_root(black_box(txs)).unwrap())
        });
    }
    group.finish();
}

fn bench_status_root(c: &mut Criterion) {
    let results: Vec<TxVerifyResult> = (0..1024).map(|i| TxVerifyResult::new(i % 7 == 0)).collect();
    c.bench_function("tx_status_merkle_root/1024", |b| {
        b.iter(|| tx_status_merkle_root(black_box(&results)).unwrap())
    });
}

criterion_group!(benches, bench_tx_root, bench_status_root);
criterion_main!(benches);
