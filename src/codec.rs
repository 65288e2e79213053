//! The encode/decode boundary: function-pair type aliases plus the canonical
//! JSON and TOML pairs installed by the builder conveniences.
//!
//! The core never interprets file bytes itself. [`Context`](crate::Context)
//! hands the full contents to whatever pair is installed, and any functions
//! with these shapes can be substituted via
//! [`encoder()`](crate::Builder::encoder) / [`decoder()`](crate::Builder::decoder) —
//! the contract is purely "bytes in, bytes out, same logical shape round-trips".

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Error produced by encode/decode functions. Boxed so caller-supplied
/// codecs can surface their own error types unchanged.
pub type CodecError = Box<dyn std::error::Error + Send + Sync>;

/// Encodes a value into the byte representation stored on disk.
pub type EncodeFn<T> = Box<dyn Fn(&T) -> Result<Vec<u8>, CodecError> + Send + Sync>;

/// Parses raw file bytes and stores the result in the value behind `dest`.
pub type DecodeFn<T> = Box<dyn Fn(&[u8], &mut T) -> Result<(), CodecError> + Send + Sync>;

/// Canonical JSON encode: pretty-printed with 4-space indentation.
///
/// The indentation is fixed so repeated writes of the same value produce
/// identical bytes.
pub fn json_encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Canonical JSON decode: standard parsing, replacing the value behind `dest`.
pub fn json_decode<T: DeserializeOwned>(bytes: &[u8], dest: &mut T) -> Result<(), CodecError> {
    *dest = serde_json::from_slice(bytes)?;
    Ok(())
}

/// Canonical TOML encode: pretty-printed document.
#[cfg(feature = "toml")]
pub fn toml_encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
    Ok(toml::to_string_pretty(value)?.into_bytes())
}

/// Canonical TOML decode. TOML is a text format, so the bytes must be valid
/// UTF-8.
#[cfg(feature = "toml")]
pub fn toml_decode<T: DeserializeOwned>(bytes: &[u8], dest: &mut T) -> Result<(), CodecError> {
    *dest = toml::from_str(std::str::from_utf8(bytes)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{TestConfig, sample};

    #[test]
    fn json_encode_uses_four_space_indent() {
        let bytes = json_encode(&sample()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("{\n    \"host\""), "got: {text}");
    }

    #[test]
    fn json_encode_is_stable_across_calls() {
        let value = sample();
        assert_eq!(json_encode(&value).unwrap(), json_encode(&value).unwrap());
    }

    #[test]
    fn json_pair_round_trips() {
        let value = sample();
        let bytes = json_encode(&value).unwrap();
        let mut read_back = TestConfig::default();
        json_decode(&bytes, &mut read_back).unwrap();
        assert_eq!(read_back, value);
    }

    #[test]
    fn json_decode_rejects_malformed_input() {
        let mut dest = TestConfig::default();
        let result = json_decode(b"{not json", &mut dest);
        assert!(result.is_err());
    }

    #[cfg(feature = "toml")]
    #[test]
    fn toml_pair_round_trips() {
        let value = sample();
        let bytes = toml_encode(&value).unwrap();
        let mut read_back = TestConfig::default();
        toml_decode(&bytes, &mut read_back).unwrap();
        assert_eq!(read_back, value);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn toml_decode_rejects_invalid_utf8() {
        let mut dest = TestConfig::default();
        let result = toml_decode(&[0xff, 0xfe], &mut dest);
        assert!(result.is_err());
    }

    #[cfg(feature = "toml")]
    #[test]
    fn toml_decode_rejects_malformed_input() {
        let mut dest = TestConfig::default();
        let result = toml_decode(b"host = ", &mut dest);
        assert!(result.is_err());
    }
}
