use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use des_cipher::crypto::des::DES;
use des_cipher::crypto::des_key_expansion::generate_subkeys;
use des_cipher::crypto::key_generator::generate_random_key_hex;
use des_cipher::crypto::utils::bytes_to_bits;
use rand::RngCore;
use std::hint::black_box;

fn bench_single_block(c: &mut Criterion) {
    let des = DES::default();
    let key = bytes_to_bits(&hex_literal::hex!("133457799BBCDFF1"));
    let block = bytes_to_bits(&hex_literal::hex!("0123456789ABCDEF"));
    let ciphertext = des.encrypt_bits(&block, &key).unwrap();

    c.bench_function("DES block encrypt", |b| {
        b.iter(|| des.encrypt_bits(black_box(&block), black_box(&key)).unwrap())
    });

    c.bench_function("DES block decrypt", |b| {
        b.iter(|| des.decrypt_bits(black_box(&ciphertext), black_box(&key)).unwrap())
    });

    c.bench_function("DES key schedule", |b| {
        b.iter(|| generate_subkeys(black_box(&key)))
    });
}

fn bench_random_blocks(c: &mut Criterion) {
    let des = DES::default();
    let key = bytes_to_bits(&hex_literal::hex!("0E329232EA6D0D73"));
    let mut rng = rand::rng();

    c.bench_function("DES random block encrypt", |b| {
        b.iter_batched(
            || {
                let mut block = [0u8; 8];
                rng.fill_bytes(&mut block);
                bytes_to_bits(&block)
            },
            |block| des.encrypt_bits(&block, &key).unwrap(),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("DES key generation", |b| b.iter(generate_random_key_hex));
}

criterion_group!(benches, bench_single_block, bench_random_blocks);
criterion_main!(benches);
