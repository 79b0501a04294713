use criterion::{Criterion, black_box, criterion_group, criterion_main};

use latin1_view::{Encoding, Latin1Chars, decode, registry};

fn sample(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 256) as u8).collect()
}

fn bench_decode(c: &mut Criterion) {
    let data = sample(64 * 1024);

    c.bench_function("decode 64KB", |b| {
        b.iter(|| decode(black_box(&data[..]), Encoding::ISO_8859_1))
    });
}

fn bench_char_at(c: &mut Criterion) {
    let view = Latin1Chars::new(sample(4096));

    c.bench_function("char_at 4096", |b| {
        b.iter(|| {
            let mut sum = 0u32;
            for i in 0..view.len() as isize {
                if let Ok(ch) = view.char_at(black_box(i)) {
                    sum = sum.wrapping_add(u32::from(ch));
                }
            }
            sum
        })
    });
}

fn bench_nested_slices(c: &mut Criterion) {
    let view = Latin1Chars::new(sample(4096));

    c.bench_function("nested subsequence 4096", |b| {
        b.iter(|| {
            let mut v = view.clone();
            while v.len() > 2 {
                v = match v.subsequence(1, v.len() as isize - 1) {
                    Ok(next) => next,
                    Err(_) => break,
                };
            }
            v
        })
    });
}

fn bench_resolve(c: &mut Criterion) {
    c.bench_function("resolve alias", |b| {
        b.iter(|| registry::resolve(black_box("csISOLatin1")))
    });
}

criterion_group!(
    benches,
    bench_decode,
    bench_char_at,
    bench_nested_slices,
    bench_resolve
);
criterion_main!(benches);
