//! Codec configuration.
//!
//! Only UTF-8 has a choice of behaviour. The permissive mode is the default and
//! reproduces the unvalidated codec byte for byte; the strict mode rejects
//! unpaired surrogates when encoding and malformed sequences when decoding.
//!
//! Both types implement `serde` traits so they can be embedded in a host
//! application's own configuration file.

use crate::{error::Result, hex, utf8, wide_str_ty::CodeUnits, wide_string::WideString};
use serde::{Deserialize, Serialize};

/// How the UTF-8 codec treats malformed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Utf8Mode {
    /// Accept anything, never fail.
    #[default]
    Permissive,
    /// Fail on lone surrogates and malformed byte sequences.
    Strict,
}

/// Codec settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CodecConfig {
    /// Mode used by the UTF-8 conversions of this config.
    #[serde(default)]
    pub utf8_mode: Utf8Mode,
}

impl CodecConfig {
    /// A config using the strict UTF-8 mode.
    pub fn strict() -> Self {
        CodecConfig {
            utf8_mode: Utf8Mode::Strict,
        }
    }

    /// Encodes text as UTF-8 according to `utf8_mode`.
    pub fn encode_utf8<T: CodeUnits + ?Sized>(&self, text: &T) -> Result<Vec<u8>> {
        utf8::encode_with(text, self.utf8_mode)
    }

    /// Decodes UTF-8 according to `utf8_mode`.
    pub fn decode_utf8(&self, bytes: &[u8]) -> Result<WideString> {
        utf8::decode_with(bytes, self.utf8_mode)
    }

    /// Encodes text as UTF-8 and formats it as a `0x`-prefixed hex string.
    pub fn string_to_hex_string<T: CodeUnits + ?Sized>(&self, text: &T) -> Result<String> {
        Ok(hex::from_bytes(self.encode_utf8(text)?))
    }

    /// Parses a hex string and decodes the bytes as UTF-8.
    pub fn hex_string_to_string(&self, hex_string: &str) -> Result<WideString> {
        self.decode_utf8(&hex::to_bytes(hex_string))
    }
}
