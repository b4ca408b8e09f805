pub mod crypto;
pub use crypto::error::*;
pub use crypto::text_codec::{BlockCodec, CodecOptions, decrypt, encrypt, generate_key};
pub use crypto::text_encoding::TextEncoding;
