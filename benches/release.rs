use {
    criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main},
    scopedref::scoped,
    std::ptr::NonNull,
};

pub fn bench_release(c: &mut Criterion) {
    const GUARD_COUNT: usize = 64;

    let mut group = c.benchmark_group("release");

    group
        .bench_function("scoped_ref", |b| {
            b.iter_batched(
                || {
                    (0..GUARD_COUNT)
                        .map(|i| {
                            scoped!(
                                |ptr: *mut u8, len: usize| {
                                    black_box((ptr, len));
                                },
                                NonNull::<u8>::dangling().as_ptr(),
                                i
                            )
                        })
                        .collect::<Vec<_>>()
                },
                |guards| {
                    guards.into_iter().for_each(|mut guard| {
                        guard.release();
                        black_box(guard.is_live());
                    })
                },
                BatchSize::SmallInput,
            )
        })
        .bench_function("manual", |b| {
            b.iter_batched(
                || {
                    (0..GUARD_COUNT)
                        .map(|i| (NonNull::<u8>::dangling().as_ptr(), i))
                        .collect::<Vec<_>>()
                },
                |resources| {
                    resources.into_iter().for_each(|(ptr, len)| {
                        black_box((ptr, len));
                    })
                },
                BatchSize::SmallInput,
            )
        });
    group.finish();
}

criterion_group!(release, bench_release);
criterion_main!(release);
