// File:    config.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: Generation parameters for one-time pads, with defaults suited to a printed sheet.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::error::PadError;
use crate::layout::PadLayout;
use serde::{Deserialize, Serialize};

/// Default number of digits requested for a new pad.
pub const DEFAULT_LENGTH: usize = 225;
/// Default number of digits per group.
pub const DEFAULT_GROUP_SIZE: usize = 5;
/// Number of groups printed on one line; the line width is
/// `group_size * GROUPS_PER_LINE` digits.
pub const GROUPS_PER_LINE: usize = 15;

/// Parameters for generating pads.
///
/// Missing fields take their defaults when deserialized, so a configuration
/// file only needs to name the values it changes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PadConfig {
    /// Requested number of digits; rounded up to a whole number of lines.
    pub length: usize,
    /// Digits per group. The first group of every pad is its id.
    pub group_size: usize,
    /// Groups per printed line.
    pub groups_per_line: usize,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            group_size: DEFAULT_GROUP_SIZE,
            groups_per_line: GROUPS_PER_LINE,
        }
    }
}

impl PadConfig {
    /// Checks that every value is usable and that the rounded length fits in memory.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), PadError> {
        self.rounded_length().map(|_| ())
    }

    /// The group and line layout described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::InvalidConfig`] if the group size or groups per line is
    /// zero, or if the line width overflows.
    pub fn layout(&self) -> Result<PadLayout, PadError> {
        PadLayout::new(self.group_size, self.groups_per_line)
    }

    /// The number of digits a generated pad will hold: `length` rounded up to
    /// the next multiple of the line width.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::InvalidConfig`] if the layout is invalid, the length
    /// is zero, or the rounded length overflows.
    pub fn rounded_length(&self) -> Result<usize, PadError> {
        let layout = self.layout()?;
        if self.length == 0 {
            return Err(PadError::InvalidConfig {
                field: "length",
                value: self.length,
            });
        }
        layout
            .round_up(self.length)
            .ok_or(PadError::InvalidConfig {
                field: "length",
                value: self.length,
            })
    }
}
