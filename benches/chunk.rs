use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use ringrow::RingQueue;

const SIZES: &[usize] = &[16, 256, 4096];

fn chunk_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_transfer");
    for &size in SIZES {
        let id = BenchmarkId::new("put_get_chunk", size);
        group.bench_with_input(id, &size, |b, &size| {
            let src: Vec<u64> = (0..size as u64).collect();
            let mut dst = vec![0u64; size];

            b.iter_batched_ref(
                // Offset front and back so the transfer straddles the
                // physical end of the buffer.
                || {
                    let mut queue = RingQueue::new(size).unwrap();
                    queue.put_chunk(&src[..size / 2]);
                    let mut scratch = vec![0u64; size / 2];
                    queue.get_chunk(&mut scratch);
                    queue
                },
                |queue| {
                    assert_eq!(queue.put_chunk(&src), size);
                    assert_eq!(queue.get_chunk(&mut dst), size);
                    black_box(&dst);
                },
                BatchSize::SmallInput,
            );
        });
    }
}

fn single_put_get(c: &mut Criterion) {
    c.bench_function("single_put_get", |b| {
        let mut queue = RingQueue::new(64).unwrap();
        b.iter(|| {
            queue.put(black_box(1u64));
            black_box(queue.get());
        });
    });
}

criterion_group! {
    benches,
    chunk_transfer,
    single_put_get,
}

criterion_main!(benches);
