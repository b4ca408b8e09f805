use des_cipher::crypto::key_generator::validate_parity;
use des_cipher::crypto::utils::hex_to_bits;
use des_cipher::{BlockCodec, CodecOptions, TextEncoding, decrypt, encrypt, generate_key};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let text = "The quick brown fox jumps over the lazy dog. Symmetric encryption test string!";

    // === UTF-16LE, four characters per block ===
    let key = generate_key();
    println!("Key: {key} (parity ok: {})", validate_parity(&hex_to_bits(&key)?));

    let encrypted = encrypt(text, &key)?;
    println!("Ciphertext: {encrypted}");

    let decrypted = decrypt(&encrypted, &key)?;
    assert_eq!(text, decrypted);
    println!("DES UTF-16LE OK");

    // Contiguous hex is accepted as well
    let decrypted = decrypt(&encrypted.replace(' ', ""), &key)?;
    assert_eq!(text, decrypted);

    // === Latin-1, eight characters per block ===
    let codec = BlockCodec::new(CodecOptions {
        encoding: TextEncoding::Latin1,
        ..CodecOptions::default()
    });
    let encrypted = codec.encrypt(text, &key)?;
    let decrypted = codec.decrypt(&encrypted, &key)?;
    assert_eq!(text, decrypted);
    println!("DES Latin-1 OK");

    // A key with a broken parity bit is refused
    match encrypt(text, "13 34 57 79 9B BC DF F0") {
        Err(err) => println!("Rejected as expected: {err}"),
        Ok(_) => unreachable!(),
    }

    Ok(())
}
