//! Import/export round trip: text and key go to files the way a front end
//! would save them, then get read back and decrypted.
//!
//! Usage: `cargo run --example encrypt_file [input.txt]`

use std::io;
use std::path::PathBuf;

use des_cipher::{decrypt, encrypt, generate_key};

const SAMPLE: &str =
    "Plain text that goes through DES, one 64-bit block at a time.\nВторая строка.";

fn to_io(err: des_cipher::DesError) -> io::Error {
    io::Error::other(err)
}

#[tokio::main]
async fn main() -> io::Result<()> {
    env_logger::init();

    let workdir = tempfile::tempdir()?;

    let input_path = match std::env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => {
            let path = workdir.path().join("plain.txt");
            tokio::fs::write(&path, SAMPLE).await?;
            path
        }
    };

    let text = tokio::fs::read_to_string(&input_path).await?;
    println!("Read {} characters from {}", text.chars().count(), input_path.display());

    // Export key
    let key_path = workdir.path().join("key.txt");
    tokio::fs::write(&key_path, generate_key()).await?;

    // Import key, encrypt, export ciphertext
    let key = tokio::fs::read_to_string(&key_path).await?;
    let key = key.trim();
    let encrypted = encrypt(&text, key).map_err(to_io)?;
    let encrypted_path = workdir.path().join("encrypted.txt");
    tokio::fs::write(&encrypted_path, &encrypted).await?;
    println!("Wrote {} bytes of hex to {}", encrypted.len(), encrypted_path.display());

    // Import ciphertext, decrypt, export plain text
    let encrypted = tokio::fs::read_to_string(&encrypted_path).await?;
    let decrypted = decrypt(encrypted.trim(), key).map_err(to_io)?;
    let decrypted_path = workdir.path().join("decrypted.txt");
    tokio::fs::write(&decrypted_path, &decrypted).await?;

    assert_eq!(decrypted, text.trim_end_matches('\0'));
    println!("Round trip through {} OK", workdir.path().display());

    Ok(())
}
