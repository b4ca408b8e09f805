use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use des_cipher::{BlockCodec, CodecOptions, TextEncoding};

const KEY_HEX: &str = "13 34 57 79 9B BC DF F1";

fn bench_text_codec(c: &mut Criterion) {
    let text = "The quick brown fox jumps over the lazy dog. Symmetric encryption test string!"
        .repeat(64);

    let configs = [
        ("utf16 sequential", TextEncoding::Utf16Le, usize::MAX),
        ("utf16 parallel", TextEncoding::Utf16Le, 1),
        ("latin1 sequential", TextEncoding::Latin1, usize::MAX),
        ("latin1 parallel", TextEncoding::Latin1, 1),
    ];

    let mut group = c.benchmark_group("DES text");
    for (name, encoding, parallel_threshold) in configs {
        let codec = BlockCodec::new(CodecOptions {
            encoding,
            parallel_threshold,
        });
        let encrypted = codec.encrypt(&text, KEY_HEX).unwrap();

        group.bench_with_input(BenchmarkId::new("encrypt", name), &text, |b, text| {
            b.iter(|| codec.encrypt(text, KEY_HEX).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("decrypt", name), &encrypted, |b, encrypted| {
            b.iter(|| codec.decrypt(encrypted, KEY_HEX).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_text_codec);
criterion_main!(benches);
