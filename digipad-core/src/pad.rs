// File:    pad.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: The decimal one-time pad: generation, loading from printed text, and single-use encryption.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::config::PadConfig;
use crate::crypto;
use crate::entropy::DigitSource;
use crate::error::{FormatError, PadError};
use crate::layout::PadLayout;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A one-time pad of decimal digits.
///
/// The first group of digits is the pad id. It is sent in the clear in front
/// of every ciphertext so the recipient can pick the matching pad, and it is
/// never used as key material. The digits after it encrypt one message
/// character each.
///
/// A pad encrypts at most once; [`Pad::encode`] fails on every call after the
/// first successful one. Decoding is unrestricted. Digits, id and text are
/// wiped from memory when the pad is dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Pad {
    digits: Vec<u8>,
    #[zeroize(skip)]
    layout: PadLayout,
    id: String,
    text: String,
    consumed: bool,
}

impl Pad {
    /// Generates a fresh pad from `source`.
    ///
    /// The requested length is rounded up to a whole number of lines.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::InvalidConfig`] for an unusable configuration or
    /// [`PadError::EntropyExhausted`] if the source fails.
    pub fn generate<S>(source: &mut S, config: &PadConfig) -> Result<Self, PadError>
    where
        S: DigitSource + ?Sized,
    {
        let layout = config.layout()?;
        let length = config.rounded_length()?;
        let digits = source.fill_digits(length)?;
        Self::from_digits(digits, layout)
    }

    /// Loads a pad from its printed text block, inferring the layout.
    ///
    /// Loaded pads start out unused; whether the printed pad was used before is
    /// up to the caller to know.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::Format`] if the text is not a well-formed pad.
    pub fn load(text: &str) -> Result<Self, PadError> {
        let (layout, digits) = PadLayout::parse(text)?;
        Self::from_digits(digits, layout)
    }

    /// Builds a pad from known digits.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::Format`] if a value is above 9 or there are fewer
    /// digits than one group.
    pub fn from_digits(digits: Vec<u8>, layout: PadLayout) -> Result<Self, PadError> {
        if let Some((position, &value)) = digits.iter().enumerate().find(|&(_, &d)| d > 9) {
            return Err(FormatError::DigitOutOfRange { value, position }.into());
        }
        let group_size = layout.group_size();
        if digits.len() < group_size {
            return Err(FormatError::TooShort {
                len: digits.len(),
                group_size,
            }
            .into());
        }

        let text = layout.render(&digits);
        let id = digits[..group_size]
            .iter()
            .map(|&d| char::from(b'0' + d))
            .collect();
        Ok(Self {
            digits,
            layout,
            id,
            text,
            consumed: false,
        })
    }

    /// The id: the first group of digits.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// All digits, id group included.
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// The printed text block.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Group size and line width.
    #[must_use]
    pub const fn layout(&self) -> PadLayout {
        self.layout
    }

    /// Digits per group.
    #[must_use]
    pub const fn group_size(&self) -> usize {
        self.layout.group_size()
    }

    /// Digits per line.
    #[must_use]
    pub const fn line_width(&self) -> usize {
        self.layout.line_width()
    }

    /// Total number of digits, id group included.
    #[must_use]
    pub fn length(&self) -> usize {
        self.digits.len()
    }

    /// Longest message this pad can encrypt.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.digits.len() - self.layout.group_size()
    }

    /// Whether the pad has already encrypted a message.
    #[must_use]
    pub const fn is_consumed(&self) -> bool {
        self.consumed
    }

    fn key_digits(&self) -> &[u8] {
        &self.digits[self.layout.group_size()..]
    }

    /// Encrypts `message` and marks the pad as used.
    ///
    /// The message is uppercased. Each character consumes one pad digit
    /// following the id group and becomes a two-digit value. The returned
    /// ciphertext is the id followed by those values.
    ///
    /// Nothing changes if an error is returned.
    ///
    /// # Errors
    ///
    /// - [`PadError::AlreadyUsed`] if the pad has encrypted before.
    /// - [`PadError::Capacity`] if the message is longer than [`Pad::capacity`].
    /// - [`PadError::Format`] with [`FormatError::UnsupportedCharacter`] for a
    ///   character outside the encodable ASCII range.
    pub fn encode(&mut self, message: &str) -> Result<String, PadError> {
        if self.consumed {
            return Err(PadError::AlreadyUsed {
                id: self.id.clone(),
            });
        }
        let requested = message.chars().count();
        let capacity = self.capacity();
        if requested > capacity {
            return Err(PadError::Capacity {
                requested,
                capacity,
            });
        }

        let mut ciphertext =
            String::with_capacity(self.id.len() + requested * crypto::CIPHER_WIDTH);
        ciphertext.push_str(&self.id);
        for (position, (ch, &key)) in message.chars().zip(self.key_digits()).enumerate() {
            let code =
                crypto::char_code(ch).ok_or(FormatError::UnsupportedCharacter { ch, position })?;
            crypto::push_value(&mut ciphertext, crypto::encipher(code, key));
        }

        self.consumed = true;
        Ok(ciphertext)
    }

    /// Decrypts a ciphertext produced by this pad.
    ///
    /// Decoding does not consume the pad and may be repeated.
    ///
    /// # Errors
    ///
    /// - [`PadError::Format`] if the ciphertext does not start with this pad's
    ///   id or its body is not a sequence of two-digit values.
    /// - [`PadError::Capacity`] if it holds more values than the pad has digits.
    pub fn decode(&self, ciphertext: &str) -> Result<String, PadError> {
        let group_size = self.layout.group_size();
        let found = ciphertext.get(..group_size).unwrap_or(ciphertext);
        if found != self.id {
            return Err(FormatError::IdMismatch {
                expected: self.id.clone(),
                found: found.to_owned(),
            }
            .into());
        }

        let body = ciphertext.get(group_size..).unwrap_or_default();
        let values = crypto::parse_values(body, group_size)?;
        let capacity = self.capacity();
        if values.len() > capacity {
            return Err(PadError::Capacity {
                requested: values.len(),
                capacity,
            });
        }

        Ok(values
            .iter()
            .zip(self.key_digits())
            .map(|(&value, &key)| crypto::decipher(value, key))
            .collect())
    }
}

impl fmt::Display for Pad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Debug for Pad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pad")
            .field("id", &self.id)
            .field("length", &self.digits.len())
            .field("layout", &self.layout)
            .field("consumed", &self.consumed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pad() -> Pad {
        let layout = PadLayout::new(5, 15).unwrap();
        Pad::from_digits(vec![1, 2, 3, 4, 5, 3, 7, 0, 9, 4], layout).unwrap()
    }

    #[test]
    fn test_id_is_first_group() {
        let pad = sample_pad();
        assert_eq!(pad.id(), "12345");
        assert_eq!(pad.capacity(), 5);
    }

    #[test]
    fn test_failed_encode_leaves_pad_unused() {
        let mut pad = sample_pad();
        assert!(pad.encode("TOO LONG").is_err());
        assert!(pad.encode("A~").is_err());
        assert!(!pad.is_consumed());
        assert!(pad.encode("OK").is_ok());
        assert!(pad.is_consumed());
    }

    #[test]
    fn test_debug_does_not_reveal_digits() {
        let pad = sample_pad();
        let debug = format!("{pad:?}");
        assert!(debug.contains("12345"));
        assert!(!debug.contains("37094"));
    }

    #[test]
    fn test_from_digits_rejects_bad_input() {
        let layout = PadLayout::new(5, 15).unwrap();
        assert_eq!(
            Pad::from_digits(vec![1, 2, 3], layout).unwrap_err(),
            PadError::Format(FormatError::TooShort {
                len: 3,
                group_size: 5
            })
        );
        assert_eq!(
            Pad::from_digits(vec![1, 2, 13, 4, 5], layout).unwrap_err(),
            PadError::Format(FormatError::DigitOutOfRange {
                value: 13,
                position: 2
            })
        );
    }
}
