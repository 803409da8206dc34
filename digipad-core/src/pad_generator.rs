// File:    pad_generator.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: Provides functionality for generating batches of one-time pads and printing them as one text block.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::config::{DEFAULT_GROUP_SIZE, PadConfig};
use crate::entropy::{DigitSource, OsDigitSource};
use crate::error::{FormatError, PadError};
use crate::pad::Pad;
use std::collections::HashSet;
use std::fmt;

/// Separator placed between pads when a batch is printed: one blank line.
pub const BATCH_SEPARATOR: &str = "\n\n";

/// Redraws of a single pad before its source is given up on.
const MAX_ID_REDRAWS: usize = 1_000;

/// Generates pads that all share one configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadFactory {
    config: PadConfig,
}

impl PadFactory {
    /// Creates a factory for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::InvalidConfig`] if the configuration is unusable.
    pub fn new(config: PadConfig) -> Result<Self, PadError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration every generated pad follows.
    #[must_use]
    pub const fn config(&self) -> &PadConfig {
        &self.config
    }

    /// Generates `count` independent pads from the operating system's CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::EntropyExhausted`] if the generator fails.
    pub fn generate(&self, count: usize) -> Result<PadBatch, PadError> {
        let mut source = OsDigitSource::new();
        self.generate_with(&mut source, count)
    }

    /// Generates `count` pads, drawing digits from `source` one pad after the other.
    ///
    /// Ids are unique within the batch: a pad whose id is already taken is
    /// discarded and drawn again.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::InvalidConfig`] if `count` exceeds the number of
    /// distinct ids of the configured group size, or the first error reported
    /// by the source. A source that keeps repeating taken ids is reported as
    /// [`PadError::EntropyExhausted`].
    pub fn generate_with<S>(&self, source: &mut S, count: usize) -> Result<PadBatch, PadError>
    where
        S: DigitSource + ?Sized,
    {
        if self.distinct_ids().is_some_and(|ids| count > ids) {
            return Err(PadError::InvalidConfig {
                field: "count",
                value: count,
            });
        }

        let mut pads = Vec::with_capacity(count);
        let mut taken = HashSet::with_capacity(count);
        while pads.len() < count {
            let pad = self.draw_fresh(source, &taken)?;
            taken.insert(pad.id().to_string());
            pads.push(pad);
        }
        Ok(PadBatch::from(pads))
    }

    fn draw_fresh<S>(&self, source: &mut S, taken: &HashSet<String>) -> Result<Pad, PadError>
    where
        S: DigitSource + ?Sized,
    {
        for _ in 0..=MAX_ID_REDRAWS {
            let pad = Pad::generate(&mut *source, &self.config)?;
            if !taken.contains(pad.id()) {
                return Ok(pad);
            }
        }
        Err(PadError::EntropyExhausted {
            reason: format!("digit source repeated a taken pad id {MAX_ID_REDRAWS} times"),
        })
    }

    /// Number of ids a group of `group_size` digits can spell; `None` if it
    /// does not fit in `usize`.
    fn distinct_ids(&self) -> Option<usize> {
        u32::try_from(self.config.group_size)
            .ok()
            .and_then(|exponent| 10usize.checked_pow(exponent))
    }
}

/// An ordered collection of independent pads.
///
/// Printed, the pads are separated by a single blank line.
#[derive(Debug, Default)]
pub struct PadBatch {
    pads: Vec<Pad>,
}

impl PadBatch {
    /// Parses a printed batch: pad blocks separated by blank lines. A line of
    /// only whitespace counts as blank.
    ///
    /// Each block may have its own layout.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::Format`] if the text holds no pad or any block is
    /// malformed.
    pub fn parse(text: &str) -> Result<Self, PadError> {
        let mut pads = Vec::new();
        let mut block: Vec<&str> = Vec::new();
        for line in text.lines() {
            if line.trim().is_empty() {
                if !block.is_empty() {
                    pads.push(Pad::load(&block.join("\n"))?);
                    block.clear();
                }
            } else {
                block.push(line);
            }
        }
        if !block.is_empty() {
            pads.push(Pad::load(&block.join("\n"))?);
        }

        if pads.is_empty() {
            return Err(FormatError::Empty.into());
        }
        Ok(Self { pads })
    }

    /// Number of pads.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pads.len()
    }

    /// Whether the batch holds no pads.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pads.is_empty()
    }

    /// Iterates over the pads in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Pad> {
        self.pads.iter()
    }

    /// The first pad, if any.
    #[must_use]
    pub fn first_mut(&mut self) -> Option<&mut Pad> {
        self.pads.first_mut()
    }

    /// The pad with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::UnknownPad`] if no pad has the id, or
    /// [`FormatError::AmbiguousPad`] if several do.
    pub fn find(&self, id: &str) -> Result<&Pad, PadError> {
        let index = self.position(id)?;
        Ok(&self.pads[index])
    }

    /// The pad with the given id, for encoding.
    ///
    /// # Errors
    ///
    /// Same as [`PadBatch::find`].
    pub fn find_mut(&mut self, id: &str) -> Result<&mut Pad, PadError> {
        let index = self.position(id)?;
        Ok(&mut self.pads[index])
    }

    fn position(&self, id: &str) -> Result<usize, PadError> {
        let mut matches = self
            .pads
            .iter()
            .enumerate()
            .filter(|(_, pad)| pad.id() == id)
            .map(|(index, _)| index);
        match (matches.next(), matches.next()) {
            (Some(index), None) => Ok(index),
            (Some(_), Some(_)) => Err(FormatError::AmbiguousPad { id: id.to_string() }.into()),
            (None, _) => Err(FormatError::UnknownPad { id: id.to_string() }.into()),
        }
    }

    /// The pad whose id starts `ciphertext`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::UnknownPad`] if no pad matches, or
    /// [`FormatError::AmbiguousPad`] if more than one does.
    pub fn pad_for(&self, ciphertext: &str) -> Result<&Pad, PadError> {
        let mut matches = self
            .pads
            .iter()
            .filter(|pad| ciphertext.starts_with(pad.id()));
        match (matches.next(), matches.next()) {
            (Some(pad), None) => Ok(pad),
            (Some(pad), Some(_)) => Err(FormatError::AmbiguousPad {
                id: pad.id().to_string(),
            }
            .into()),
            (None, _) => {
                let group_size = self.pads.first().map_or(DEFAULT_GROUP_SIZE, Pad::group_size);
                Err(FormatError::UnknownPad {
                    id: ciphertext.chars().take(group_size).collect(),
                }
                .into())
            }
        }
    }

    /// Decodes `ciphertext` with the pad whose id it starts with.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`PadBatch::pad_for`] and [`Pad::decode`].
    pub fn decode(&self, ciphertext: &str) -> Result<String, PadError> {
        self.pad_for(ciphertext)?.decode(ciphertext)
    }
}

impl From<Vec<Pad>> for PadBatch {
    fn from(pads: Vec<Pad>) -> Self {
        Self { pads }
    }
}

impl IntoIterator for PadBatch {
    type Item = Pad;
    type IntoIter = std::vec::IntoIter<Pad>;

    fn into_iter(self) -> Self::IntoIter {
        self.pads.into_iter()
    }
}

impl<'a> IntoIterator for &'a PadBatch {
    type Item = &'a Pad;
    type IntoIter = std::slice::Iter<'a, Pad>;

    fn into_iter(self) -> Self::IntoIter {
        self.pads.iter()
    }
}

impl fmt::Display for PadBatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pad) in self.pads.iter().enumerate() {
            if i != 0 {
                f.write_str(BATCH_SEPARATOR)?;
            }
            f.write_str(pad.text())?;
        }
        Ok(())
    }
}
