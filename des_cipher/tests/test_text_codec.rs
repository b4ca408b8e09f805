use des_cipher::crypto::des::encrypt_block;
use des_cipher::crypto::text_codec::split_cipher_blocks;
use des_cipher::{BlockCodec, CodecOptions, DesError, TextEncoding, decrypt, encrypt, generate_key};
use quickcheck::quickcheck;

const KEY_HEX: &str = "13 34 57 79 9B BC DF F1";

#[test]
fn test_text_roundtrip() {
    let encrypted = encrypt("Hello, DES!", KEY_HEX).unwrap();
    // 11 characters fill three blocks
    assert_eq!(encrypted.split(' ').count(), 24);
    assert_eq!(decrypt(&encrypted, KEY_HEX).unwrap(), "Hello, DES!");
}

#[test]
fn test_single_block_matches_encrypt_block() {
    assert_eq!(encrypt("Test", KEY_HEX).unwrap(), "D8 5D 0D 60 E5 47 DF 82");
    assert_eq!(encrypt("Test", KEY_HEX).unwrap(), encrypt_block("Test", KEY_HEX).unwrap());
}

#[test]
fn test_blocks_are_independent() {
    let encrypted = encrypt("TestTest", KEY_HEX).unwrap();
    assert_eq!(encrypted, "D8 5D 0D 60 E5 47 DF 82 D8 5D 0D 60 E5 47 DF 82");
}

#[test]
fn test_padding_is_null_characters() {
    let padded = encrypt_block("Hi\0\0", KEY_HEX).unwrap();
    assert_eq!(encrypt("Hi", KEY_HEX).unwrap(), padded);
}

#[test]
fn test_decrypt_contiguous_hex() {
    let encrypted = encrypt("Hello, DES!", KEY_HEX).unwrap();
    let contiguous = encrypted.replace(' ', "");
    assert_eq!(decrypt(&contiguous, KEY_HEX).unwrap(), "Hello, DES!");
}

#[test]
fn test_decrypt_multiline_hex() {
    let encrypted = encrypt("Hello, DES!", KEY_HEX).unwrap();
    let multiline = encrypted.replacen(' ', "\n", 3);
    assert_eq!(decrypt(&multiline, KEY_HEX).unwrap(), "Hello, DES!");
}

fn one_block_per_line(encrypted: &str) -> String {
    encrypted
        .split(' ')
        .collect::<Vec<_>>()
        .chunks(8)
        .map(|block| block.concat())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_decrypt_one_block_per_line() {
    // 28 characters make 7 blocks, 32 make 8
    for text in ["abcdefghijklmnopqrstuvwxyz01", "abcdefghijklmnopqrstuvwxyz012345"] {
        let encrypted = encrypt(text, KEY_HEX).unwrap();
        let per_line = one_block_per_line(&encrypted);
        assert_eq!(per_line.lines().count(), text.len() / 4);
        assert_eq!(decrypt(&per_line, KEY_HEX).unwrap(), text);
    }
}

#[test]
fn test_trailing_nulls_stripped() {
    let encrypted = encrypt("ab\0\0\0", KEY_HEX).unwrap();
    assert_eq!(decrypt(&encrypted, KEY_HEX).unwrap(), "ab");
}

#[test]
fn test_empty_input() {
    assert_eq!(encrypt("", KEY_HEX).unwrap(), "");
    assert_eq!(decrypt("", KEY_HEX).unwrap(), "");
    assert_eq!(decrypt("  \n ", KEY_HEX).unwrap(), "");
}

#[test]
fn test_misaligned_ciphertext() {
    assert!(matches!(decrypt("ABC", KEY_HEX), Err(DesError::InvalidHexFormat(_))));
    assert!(matches!(
        decrypt("00 11 22 33 44 55 66 77 88", KEY_HEX),
        Err(DesError::InvalidHexFormat(_))
    ));
}

#[test]
fn test_bad_key_rejected() {
    let bad_parity = "13 34 57 79 9B BC DF F0";
    assert_eq!(encrypt("Hello", bad_parity), Err(DesError::InvalidKeyParity));
    assert_eq!(
        decrypt("D8 5D 0D 60 E5 47 DF 82", bad_parity),
        Err(DesError::InvalidKeyParity)
    );
    assert_eq!(encrypt("Hello", "BB B1 F3 D2 9C 8D 88"), Err(DesError::InvalidKeyLength(56)));
}

#[test]
fn test_wrong_key_does_not_recover_text() {
    let encrypted = encrypt("Secret message", KEY_HEX).unwrap();
    let other_key = "0E 32 92 32 EA 6D 0D 73";
    let recovered = decrypt(&encrypted, other_key).unwrap();
    assert_ne!(recovered, "Secret message");
}

#[test]
fn test_surrogate_pair_across_blocks() {
    // three BMP characters put the emoji's two code units in different blocks
    let text = "abc😀";
    let encrypted = encrypt(text, KEY_HEX).unwrap();
    assert_eq!(encrypted.split(' ').count(), 16);
    assert_eq!(decrypt(&encrypted, KEY_HEX).unwrap(), text);
}

#[test]
fn test_generated_key_roundtrip() {
    let key = generate_key();
    let encrypted = encrypt("Привет, мир", &key).unwrap();
    assert_eq!(decrypt(&encrypted, &key).unwrap(), "Привет, мир");
}

#[test]
fn test_latin1_codec() {
    let codec = BlockCodec::new(CodecOptions {
        encoding: TextEncoding::Latin1,
        ..CodecOptions::default()
    });
    assert_eq!(codec.chars_per_block(), 8);

    let encrypted = codec.encrypt("Größe 12", KEY_HEX).unwrap();
    assert_eq!(encrypted.split(' ').count(), 8);
    assert_eq!(codec.decrypt(&encrypted, KEY_HEX).unwrap(), "Größe 12");

    assert_eq!(
        codec.encrypt("5 €", KEY_HEX),
        Err(DesError::UnencodableCharacter('€', "Latin-1"))
    );
}

#[test]
fn test_parallel_and_sequential_agree() {
    let text = "The quick brown fox jumps over the lazy dog. ".repeat(20);
    let parallel = BlockCodec::new(CodecOptions {
        parallel_threshold: 1,
        ..CodecOptions::default()
    });
    let sequential = BlockCodec::new(CodecOptions {
        parallel_threshold: usize::MAX,
        ..CodecOptions::default()
    });

    let encrypted = parallel.encrypt(&text, KEY_HEX).unwrap();
    assert_eq!(encrypted, sequential.encrypt(&text, KEY_HEX).unwrap());
    assert_eq!(parallel.decrypt(&encrypted, KEY_HEX).unwrap(), text);
    assert_eq!(sequential.decrypt(&encrypted, KEY_HEX).unwrap(), text);
}

#[test]
fn test_split_cipher_blocks() {
    let blocks = split_cipher_blocks("0011223344556677 8899AABBCCDDEEFF").unwrap();
    assert_eq!(
        blocks,
        vec!["00 11 22 33 44 55 66 77", "88 99 AA BB CC DD EE FF"]
    );

    let blocks = split_cipher_blocks("00 11 22 33 44 55 66 77").unwrap();
    assert_eq!(blocks, vec!["00 11 22 33 44 55 66 77"]);

    assert!(split_cipher_blocks("").unwrap().is_empty());

    // eight 16-digit tokens are eight blocks, not one
    let tokens = vec!["0011223344556677"; 8].join("\n");
    let blocks = split_cipher_blocks(&tokens).unwrap();
    assert_eq!(blocks.len(), 8);
    assert!(blocks.iter().all(|block| block == "00 11 22 33 44 55 66 77"));

    assert!(matches!(
        split_cipher_blocks(&vec!["00112233445566"; 7].join(" ")),
        Err(DesError::InvalidHexFormat(_))
    ));
}

quickcheck! {
    fn prop_text_roundtrip(text: String) -> bool {
        let encrypted = encrypt(&text, KEY_HEX).unwrap();
        decrypt(&encrypted, KEY_HEX).unwrap() == text.trim_end_matches('\0')
    }
}
