//! Character encodings used to turn text into cipher blocks and back.
//!
//! The width of one code unit decides how many characters fit in a 64-bit
//! block: four UTF-16 code units or eight Latin-1 characters.

use crate::crypto::error::{DesError, DesResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// Two bytes per UTF-16 code unit, low byte first.
    #[default]
    Utf16Le,
    /// One byte per character, U+0000 to U+00FF only.
    Latin1,
}

impl TextEncoding {
    /// Bytes per code unit.
    pub const fn unit_width(self) -> usize {
        match self {
            TextEncoding::Utf16Le => 2,
            TextEncoding::Latin1 => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            TextEncoding::Utf16Le => "UTF-16LE",
            TextEncoding::Latin1 => "Latin-1",
        }
    }

    pub fn encode(self, text: &str) -> DesResult<Vec<u8>> {
        match self {
            TextEncoding::Utf16Le => Ok(encode_utf16_le(text)),
            TextEncoding::Latin1 => text
                .chars()
                .map(|c| {
                    u8::try_from(c).map_err(|_| DesError::UnencodableCharacter(c, self.name()))
                })
                .collect(),
        }
    }

    pub fn decode(self, bytes: &[u8]) -> DesResult<String> {
        match self {
            TextEncoding::Utf16Le => {
                if bytes.len() % 2 != 0 {
                    return Err(DesError::DecodingFailure(self.name()));
                }
                let units = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
                char::decode_utf16(units)
                    .collect::<Result<String, _>>()
                    .map_err(|_| DesError::DecodingFailure(self.name()))
            }
            TextEncoding::Latin1 => Ok(decode_latin1(bytes)),
        }
    }

    /// Decodes with this encoding, or byte-per-character when that fails.
    pub fn decode_with_fallback(self, bytes: &[u8]) -> String {
        match self.decode(bytes) {
            Ok(text) => text,
            Err(err) => {
                log::debug!("{err}; falling back to {}", TextEncoding::Latin1.name());
                decode_latin1(bytes)
            }
        }
    }
}

pub fn encode_utf16_le(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&byte| char::from(byte)).collect()
}
