//! Four-char code conversion between 32-bit values and their textual forms.
//!
//! Sdef documents write codes either as 4 (or, for commands, 8) Mac Roman
//! characters, or as `0x`-prefixed hex with 8 (or 16) digits. Decoding is
//! all-or-nothing: a string yields an exact 32-bit value or fails.

use encoding_rs::MACINTOSH;

use super::error::{Result, SdefError};

/// A 32-bit type/event identifier (`OSType` in Apple terms).
pub type OsType = u32;

/// Parse a single code given as a 4-character Mac Roman string or a
/// 10-character `0x` hex string.
///
/// Used for class, property, enumerator, and parameter codes.
pub fn parse_four_char_code(text: &str) -> Result<OsType> {
    if text.len() == 10 && (text.starts_with("0x") || text.starts_with("0X")) {
        // e.g. "0x00000001"; a malformed hex form is an error, it never
        // falls through to the Mac Roman path
        return hex_u32(text.get(2..))
            .ok_or_else(|| SdefError::CodeBadDigits(text.to_string()));
    }
    Ok(u32::from_be_bytes(mac_roman_bytes(text)?))
}

/// Parse a dual eventClass/eventID code given as an 8-character Mac Roman
/// string or an 18-character `0x` hex string.
///
/// Used for command and event codes only.
pub fn parse_eight_char_code(text: &str) -> Result<(OsType, OsType)> {
    if text.len() == 18 && (text.starts_with("0x") || text.starts_with("0X")) {
        // e.g. "0x0123456701234567"
        let parse_half = |range| {
            hex_u32(text.get(range)).ok_or_else(|| SdefError::CodeBadDigits(text.to_string()))
        };
        return Ok((parse_half(2..10)?, parse_half(10..18)?));
    }
    let (bytes, _, had_errors) = MACINTOSH.encode(text);
    if had_errors {
        return Err(SdefError::CodeNotMacRoman(text.to_string()));
    }
    if bytes.len() != 8 {
        return Err(SdefError::CodeWrongLength(text.to_string()));
    }
    // Mac Roman is one byte per character, so the halves split cleanly
    let (class, id) = bytes.split_at(4);
    Ok((be_u32(class), be_u32(id)))
}

/// Render a 32-bit code as its 4-character Mac Roman string for
/// diagnostics and logging.
///
/// Only values decoded from the Mac Roman path round-trip to their source
/// text; values written in hex notation render as whatever characters
/// their bytes happen to map to.
pub fn four_char_string(code: OsType) -> String {
    // no BOM sniffing: byte patterns like FF FE must stay Mac Roman
    let bytes = code.to_be_bytes();
    let (text, _) = MACINTOSH.decode_without_bom_handling(&bytes);
    text.into_owned()
}

/// Encode a string as exactly 4 Mac Roman bytes.
fn mac_roman_bytes(text: &str) -> Result<[u8; 4]> {
    let (bytes, _, had_errors) = MACINTOSH.encode(text);
    if had_errors {
        return Err(SdefError::CodeNotMacRoman(text.to_string()));
    }
    bytes
        .as_ref()
        .try_into()
        .map_err(|_| SdefError::CodeWrongLength(text.to_string()))
}

/// Interpret a 4-byte slice as a big-endian u32.
fn be_u32(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Parse exactly 8 hex digits. `from_str_radix` alone would also accept a
/// leading sign.
fn hex_u32(digits: Option<&str>) -> Option<u32> {
    let digits = digits.filter(|d| d.bytes().all(|b| b.is_ascii_hexdigit()))?;
    u32::from_str_radix(digits, 16).ok()
}
