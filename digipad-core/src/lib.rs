// File:    lib.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: The main library crate for digipad-core, tying together digit generation, pad layout and the digit cipher.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Digipad Core Library
//!
//! This library provides decimal one-time pads meant to be printed and
//! exchanged on paper: secure digit generation, the grouped text layout of a
//! pad, parsing that layout back, and the single-use digit cipher.
//!
//! ```
//! use digipad_core::{Pad, PadLayout};
//!
//! let layout = PadLayout::new(5, 15)?;
//! let mut pad = Pad::from_digits(vec![1, 2, 3, 4, 5, 3, 7, 0, 0, 0], layout)?;
//!
//! let ciphertext = pad.encode("hi")?;
//! assert_eq!(ciphertext, "123455956");
//! assert_eq!(pad.decode(&ciphertext)?, "HI");
//! # Ok::<(), digipad_core::PadError>(())
//! ```

/// Pad generation parameters and their defaults.
pub mod config;
/// The digit cipher applied to individual characters.
pub mod crypto;
/// Sources of uniformly distributed random digits.
pub mod entropy;
/// Error types shared by every operation in the crate.
pub mod error;
/// Rendering digits as grouped text blocks and parsing them back.
pub mod layout;
/// The one-time pad itself.
pub mod pad;
/// Batch generation of pads.
pub mod pad_generator;

pub use config::PadConfig;
pub use entropy::{DigitSource, OsDigitSource};
pub use error::{FormatError, PadError};
pub use layout::PadLayout;
pub use pad::Pad;
pub use pad_generator::{PadBatch, PadFactory};
