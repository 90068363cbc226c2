use classic_crypto::hill::HillCipher;
use classic_crypto::preset::alphabets::LATIN_UPPERCASE_CODE;
use classic_crypto::stats::clean_text;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_happy_flow(c: &mut Criterion) {
    // 1) one‐time setup
    let cipher = HillCipher::try_with(
        &vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]],
        26,
        false,
    )
    .expect("build cipher");
    let padding = LATIN_UPPERCASE_CODE.encode("X").expect("encode padding")[0];

    // the same message every iteration
    let original_text = clean_text("Heh safasdkjfhkjas fha sdf asda");

    c.bench_function("happy_flow", |b| {
        b.iter(|| {
            // 2) encode and encrypt
            let plaintext = LATIN_UPPERCASE_CODE.encode(&original_text).expect("encode");
            let ciphertext = cipher.encrypt(&plaintext, Some(padding)).expect("encrypt");

            // 3) decrypt and decode
            let decrypted = cipher.decrypt(&ciphertext, None).expect("decrypt");
            let decoded = LATIN_UPPERCASE_CODE.decode(&decrypted).expect("decode");

            // 4) black_box the result so the optimizer can't drop it
            black_box(decoded);
        })
    });
}

criterion_group!(benches, bench_happy_flow);
criterion_main!(benches);
