// File:    crypto.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: Handles the core cryptographic operations, subtracting pad digits from character codes and back.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! This module contains the core cryptographic operations.
//!
//! A character is encrypted by taking its (uppercased) ordinal, subtracting
//! [`ORDINAL_OFFSET`] and then subtracting one pad digit. The result is always
//! written as exactly [`CIPHER_WIDTH`] decimal characters, so a ciphertext can
//! be split back into values without separators.

use crate::error::FormatError;

/// Offset subtracted from a character's ordinal before the pad digit is applied.
pub const ORDINAL_OFFSET: u8 = 10;
/// Number of characters each cipher value occupies.
pub const CIPHER_WIDTH: usize = 2;

/// Lowest ordinal whose code stays non-negative for every pad digit.
const MIN_ORDINAL: u8 = ORDINAL_OFFSET + 9;
/// Highest ordinal whose code stays below 100 for every pad digit.
const MAX_ORDINAL: u8 = ORDINAL_OFFSET + 99;

/// Returns the code of `ch` after uppercasing, or `None` if the character
/// cannot be represented by a two-digit cipher value.
///
/// Encodable characters are space, `!` to `@`, `A` to `Z` (either case) and
/// `[`, `\`, `]`, `^`, `_`, `` ` ``.
#[must_use]
pub fn char_code(ch: char) -> Option<u8> {
    let ordinal = u8::try_from(ch.to_ascii_uppercase()).ok()?;
    (MIN_ORDINAL..=MAX_ORDINAL)
        .contains(&ordinal)
        .then(|| ordinal - ORDINAL_OFFSET)
}

/// Subtracts a pad digit from a character code.
///
/// `code` must come from [`char_code`] and `key` must be in `0..=9`; the
/// result is then in `0..=99`.
#[must_use]
pub const fn encipher(code: u8, key: u8) -> u8 {
    code - key
}

/// Adds the pad digit back to a cipher value and restores the character.
///
/// `value` must be in `0..=99` and `key` in `0..=9`.
#[must_use]
pub fn decipher(value: u8, key: u8) -> char {
    char::from(value + key + ORDINAL_OFFSET)
}

/// Appends `value` as two zero-padded decimal characters.
pub fn push_value(out: &mut String, value: u8) {
    out.push(char::from(b'0' + value / 10));
    out.push(char::from(b'0' + value % 10));
}

/// Splits a cipher body into two-digit values.
///
/// `base` is the offset of `body` within the full ciphertext and is only used
/// for error positions.
///
/// # Errors
///
/// Returns [`FormatError::OddCipherLength`] if `body` does not divide into
/// whole values, or [`FormatError::InvalidCipherChunk`] for a chunk that is not
/// two ASCII digits.
pub fn parse_values(body: &str, base: usize) -> Result<Vec<u8>, FormatError> {
    let bytes = body.as_bytes();
    if bytes.len() % CIPHER_WIDTH != 0 {
        return Err(FormatError::OddCipherLength { len: bytes.len() });
    }
    bytes
        .chunks_exact(CIPHER_WIDTH)
        .enumerate()
        .map(|(index, chunk)| match chunk {
            [tens, ones] if tens.is_ascii_digit() && ones.is_ascii_digit() => {
                Ok((tens - b'0') * 10 + (ones - b'0'))
            }
            _ => Err(FormatError::InvalidCipherChunk {
                chunk: String::from_utf8_lossy(chunk).into_owned(),
                position: base + index * CIPHER_WIDTH,
            }),
        })
        .collect()
}
