use criterion::{criterion_group, criterion_main, Criterion};
use mixfft::{create_plan, Complex32, Direction};

fn bench_small_fft(c: &mut Criterion) {
    for &n in &[2usize, 3, 4, 5, 6, 8, 12, 15, 16] {
        let mut group = c.benchmark_group(format!("fft_{}", n));
        let plan = create_plan::<f32>(n, Direction::Forward, None).unwrap();
        let input: Vec<Complex32> = (0..n).map(|i| Complex32::new(i as f32, 0.0)).collect();
        let mut data = input.clone();
        let mut scratch = plan.make_scratch();
        group.bench_function("plan", |b| {
            b.iter(|| {
                data.copy_from_slice(&input);
                plan.process_with_scratch(&mut data, &mut scratch);
            });
        });
        group.finish();
    }
}

criterion_group!(benches, bench_small_fft);
criterion_main!(benches);
