// File:    entropy.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: Provides uniformly distributed random decimal digits drawn from the operating system's secure generator.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::error::PadError;
use rand::{TryRngCore, rngs::OsRng};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A supplier of random digits in `0..=9`.
///
/// Implementations used for real pads must draw from a cryptographically
/// secure generator and give every digit the same probability.
pub trait DigitSource: Send {
    /// Returns the next digit.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::EntropyExhausted`] if the underlying generator fails.
    fn next_digit(&mut self) -> Result<u8, PadError>;

    /// Draws `count` digits in order.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by [`DigitSource::next_digit`].
    fn fill_digits(&mut self, count: usize) -> Result<Vec<u8>, PadError> {
        // Never grows: a reallocation would leave an unwiped copy of the digits.
        let mut digits = Vec::with_capacity(count);
        for _ in 0..count {
            digits.push(self.next_digit()?);
        }
        Ok(digits)
    }
}

const BUFFER_LEN: usize = 64;
/// Largest multiple of ten that fits in a byte; bytes at or above it are
/// discarded so the remaining ones reduce to digits without bias.
const REJECTION_BOUND: u8 = 250;

/// Digits from the operating system's CSPRNG.
///
/// Random bytes are fetched in small batches and reduced to digits by
/// rejection sampling. The batch buffer is wiped as it is consumed and when
/// the source is dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct OsDigitSource {
    buffer: [u8; BUFFER_LEN],
    cursor: usize,
}

impl OsDigitSource {
    /// Creates a source that fetches its first batch lazily.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: [0; BUFFER_LEN],
            cursor: BUFFER_LEN,
        }
    }

    fn refill(&mut self) -> Result<(), PadError> {
        let mut rng = OsRng;
        // Use the failable `try_fill_bytes` and surface the failure as fatal.
        rng.try_fill_bytes(&mut self.buffer)
            .map_err(|e| PadError::EntropyExhausted {
                reason: e.to_string(),
            })?;
        self.cursor = 0;
        Ok(())
    }
}

impl Default for OsDigitSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitSource for OsDigitSource {
    fn next_digit(&mut self) -> Result<u8, PadError> {
        loop {
            if self.cursor >= BUFFER_LEN {
                self.refill()?;
            }
            let byte = std::mem::take(&mut self.buffer[self.cursor]);
            self.cursor += 1;
            if byte < REJECTION_BOUND {
                return Ok(byte % 10);
            }
        }
    }
}
