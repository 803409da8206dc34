// File:    error.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: Error types returned by pad generation, parsing, encoding and decoding.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use thiserror::Error;

/// Errors produced by pad operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PadError {
    /// The message does not fit into the usable digits of the pad.
    #[error("message of {requested} characters exceeds the pad capacity of {capacity}")]
    Capacity {
        /// Number of characters (or cipher values) that were supplied.
        requested: usize,
        /// Number of pad digits available after the id group.
        capacity: usize,
    },

    /// The pad has already encrypted a message.
    #[error("one-time pad {id} has already been used for encryption")]
    AlreadyUsed {
        /// Id of the consumed pad.
        id: String,
    },

    /// A pad text block or a ciphertext is malformed.
    #[error("malformed input: {0}")]
    Format(#[from] FormatError),

    /// The secure random source could not deliver any more bytes.
    #[error("secure random source unavailable: {reason}")]
    EntropyExhausted {
        /// Description reported by the underlying source.
        reason: String,
    },

    /// A pad configuration value is zero or too large to lay out.
    #[error("invalid pad configuration: {field} = {value}")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: usize,
    },
}

impl PadError {
    /// Returns `true` for errors that cannot be recovered from by retrying with
    /// different input.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::EntropyExhausted { .. })
    }
}

/// The ways a pad text block or a ciphertext can be malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The input contains no digits at all.
    #[error("pad text is empty")]
    Empty,

    /// A character other than a digit, space or line break was found.
    #[error("unexpected character {ch:?} at offset {position}")]
    InvalidDigit {
        /// The offending character.
        ch: char,
        /// Byte offset of the character in the input.
        position: usize,
    },

    /// A raw digit value outside `0..=9` was supplied.
    #[error("digit value {value} at index {position} is out of range")]
    DigitOutOfRange {
        /// The offending value.
        value: u8,
        /// Index of the value in the digit sequence.
        position: usize,
    },

    /// Fewer digits than a single id group.
    #[error("pad holds {len} digits, fewer than its group size of {group_size}")]
    TooShort {
        /// Number of digits available.
        len: usize,
        /// Required group size.
        group_size: usize,
    },

    /// Two separators follow each other, a line starts with one, or a line is blank.
    #[error("empty group {group} on line {line}")]
    EmptyGroup {
        /// Zero-based line number.
        line: usize,
        /// Zero-based group number within the line.
        group: usize,
    },

    /// A group does not have the size established by the first group.
    #[error("group {group} on line {line} has {found} digits, expected {expected}")]
    InconsistentGroup {
        /// Zero-based line number.
        line: usize,
        /// Zero-based group number within the line.
        group: usize,
        /// Group size taken from the first group.
        expected: usize,
        /// Size of the offending group.
        found: usize,
    },

    /// A line does not have the width established by the first line.
    #[error("line {line} has {found} digits, expected {expected}")]
    InconsistentLine {
        /// Zero-based line number.
        line: usize,
        /// Line width taken from the first line.
        expected: usize,
        /// Digit count of the offending line.
        found: usize,
    },

    /// The ciphertext does not start with the id of the pad.
    #[error("ciphertext id {found:?} does not match pad id {expected:?}")]
    IdMismatch {
        /// Id of the pad used for decoding.
        expected: String,
        /// Leading characters of the ciphertext.
        found: String,
    },

    /// No pad in a batch carries the id found at the start of a ciphertext.
    #[error("no pad with id {id:?}")]
    UnknownPad {
        /// Leading characters of the ciphertext, or the requested id.
        id: String,
    },

    /// More than one pad in a batch carries the same id.
    #[error("several pads share id {id:?}")]
    AmbiguousPad {
        /// The shared id.
        id: String,
    },

    /// The cipher values after the id do not split into two-digit chunks.
    #[error("cipher body of {len} characters is not a whole number of two-digit values")]
    OddCipherLength {
        /// Length in bytes of the cipher body.
        len: usize,
    },

    /// A two-character chunk is not a decimal number.
    #[error("cipher value {chunk:?} at offset {position} is not a two-digit number")]
    InvalidCipherChunk {
        /// The offending chunk.
        chunk: String,
        /// Byte offset of the chunk in the ciphertext.
        position: usize,
    },

    /// A message character has no two-digit cipher representation.
    #[error("character {ch:?} at position {position} cannot be encoded")]
    UnsupportedCharacter {
        /// The offending character.
        ch: char,
        /// Zero-based character position in the message.
        position: usize,
    },
}
