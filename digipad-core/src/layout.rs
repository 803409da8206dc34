// File:    layout.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: Renders pad digits as a grouped, lined text block and parses such blocks back into digits.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! A pad is printed as groups of `group_size` digits separated by single
//! spaces, `line_width` digits per line, lines separated by `\n`:
//!
//! ```text
//! 48213 90571 33820
//! 11946 02757 68301
//! ```
//!
//! There is never a separator after the final digit.

use crate::error::{FormatError, PadError};

/// Group size and line width of a printed pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PadLayout {
    group_size: usize,
    line_width: usize,
}

impl PadLayout {
    /// Creates a layout of `groups_per_line` groups of `group_size` digits.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::InvalidConfig`] if either value is zero or the line
    /// width overflows.
    pub const fn new(group_size: usize, groups_per_line: usize) -> Result<Self, PadError> {
        if group_size == 0 {
            return Err(PadError::InvalidConfig {
                field: "group_size",
                value: group_size,
            });
        }
        if groups_per_line == 0 {
            return Err(PadError::InvalidConfig {
                field: "groups_per_line",
                value: groups_per_line,
            });
        }
        match group_size.checked_mul(groups_per_line) {
            Some(line_width) => Ok(Self {
                group_size,
                line_width,
            }),
            None => Err(PadError::InvalidConfig {
                field: "groups_per_line",
                value: groups_per_line,
            }),
        }
    }

    /// Digits per group.
    #[must_use]
    pub const fn group_size(&self) -> usize {
        self.group_size
    }

    /// Digits per line. Always a multiple of the group size.
    #[must_use]
    pub const fn line_width(&self) -> usize {
        self.line_width
    }

    /// Groups per line.
    #[must_use]
    pub const fn groups_per_line(&self) -> usize {
        self.line_width / self.group_size
    }

    /// Rounds `length` up to a whole number of lines. Returns `None` on overflow.
    #[must_use]
    pub const fn round_up(&self, length: usize) -> Option<usize> {
        length.div_ceil(self.line_width).checked_mul(self.line_width)
    }

    /// Renders `digits` as a text block. Every value must be in `0..=9`.
    #[must_use]
    pub fn render(&self, digits: &[u8]) -> String {
        let mut text = String::with_capacity(digits.len() + digits.len() / self.group_size);
        for (i, &digit) in digits.iter().enumerate() {
            if i != 0 && i % self.line_width == 0 {
                text.push('\n');
            } else if i != 0 && i % self.group_size == 0 {
                text.push(' ');
            }
            text.push(char::from(b'0' + digit));
        }
        text
    }

    /// Parses a rendered text block, inferring the layout from it.
    ///
    /// The group size is the length of the first group and the line width is
    /// the number of digits on the first line. A single-line block gets the
    /// smallest line width that holds it in whole groups. Trailing line breaks,
    /// `\r` before a line break and spaces at the end of a line are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] if the block is empty, contains anything but
    /// digits and separators, or its groups and lines are not uniform. Only the
    /// final group and the final line may be short.
    pub fn parse(text: &str) -> Result<(Self, Vec<u8>), FormatError> {
        let body = text.trim_end_matches(['\r', '\n']);
        if body.is_empty() {
            return Err(FormatError::Empty);
        }

        let mut digits = Vec::with_capacity(body.len());
        let mut groups: Vec<ParsedGroup> = Vec::new();
        let mut line_digits: Vec<usize> = Vec::new();
        let mut offset = 0;

        for (line, raw_line) in body.split('\n').enumerate() {
            let content = raw_line
                .strip_suffix('\r')
                .unwrap_or(raw_line)
                .trim_end_matches(' ');
            let mut line_len = 0;
            let mut group_offset = offset;
            for (group, chunk) in content.split(' ').enumerate() {
                if chunk.is_empty() {
                    return Err(FormatError::EmptyGroup { line, group });
                }
                for (index, ch) in chunk.char_indices() {
                    let byte = u8::try_from(ch)
                        .ok()
                        .filter(u8::is_ascii_digit)
                        .ok_or(FormatError::InvalidDigit {
                            ch,
                            position: group_offset + index,
                        })?;
                    digits.push(byte - b'0');
                }
                // every character is an ASCII digit from here on
                let len = chunk.len();
                groups.push(ParsedGroup { line, group, len });
                line_len += len;
                group_offset += chunk.len() + 1;
            }
            line_digits.push(line_len);
            offset += raw_line.len() + 1;
        }

        let group_size = groups.first().map_or(0, |g| g.len);
        if let Some((last, leading)) = groups.split_last() {
            if let Some(bad) = leading.iter().find(|g| g.len != group_size) {
                return Err(bad.inconsistent(group_size));
            }
            if last.len > group_size {
                return Err(last.inconsistent(group_size));
            }
        }

        let line_width = match line_digits.as_slice() {
            [only] => only.next_multiple_of(group_size),
            [first, ..] => *first,
            [] => return Err(FormatError::Empty),
        };
        if let Some((last_line, leading)) = line_digits.split_last() {
            if let Some((line, &found)) = leading
                .iter()
                .enumerate()
                .find(|&(_, &found)| found != line_width)
            {
                return Err(FormatError::InconsistentLine {
                    line,
                    expected: line_width,
                    found,
                });
            }
            if *last_line > line_width {
                return Err(FormatError::InconsistentLine {
                    line: leading.len(),
                    expected: line_width,
                    found: *last_line,
                });
            }
        }

        Ok((
            Self {
                group_size,
                line_width,
            },
            digits,
        ))
    }
}

struct ParsedGroup {
    line: usize,
    group: usize,
    len: usize,
}

impl ParsedGroup {
    const fn inconsistent(&self, expected: usize) -> FormatError {
        FormatError::InconsistentGroup {
            line: self.line,
            group: self.group,
            expected,
            found: self.len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(group_size: usize, groups_per_line: usize) -> PadLayout {
        PadLayout::new(group_size, groups_per_line).unwrap()
    }

    #[test]
    fn test_render_groups_and_lines() {
        let digits: Vec<u8> = (0..20).map(|i| i % 10).collect();
        assert_eq!(
            layout(5, 2).render(&digits),
            "01234 56789\n01234 56789"
        );
    }

    #[test]
    fn test_render_has_no_trailing_separator_for_single_digit_groups() {
        assert_eq!(layout(1, 3).render(&[1, 2, 3, 4, 5, 6]), "1 2 3\n4 5 6");
    }

    #[test]
    fn test_render_partial_last_group() {
        assert_eq!(layout(5, 15).render(&[1, 2, 3, 4, 5, 6, 7]), "12345 67");
    }

    #[test]
    fn test_parse_infers_layout() {
        let (parsed, digits) = PadLayout::parse("01234 56789\n01234 56789").unwrap();
        assert_eq!(parsed, layout(5, 2));
        assert_eq!(digits.len(), 20);
        assert_eq!(&digits[..6], &[0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_parse_single_line_rounds_width_to_whole_groups() {
        let (parsed, digits) = PadLayout::parse("12345 67").unwrap();
        assert_eq!(parsed.group_size(), 5);
        assert_eq!(parsed.line_width(), 10);
        assert_eq!(digits, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_parse_tolerates_trailing_newline_and_crlf() {
        let (parsed, digits) = PadLayout::parse("12345 67890\r\n12345 67890\r\n").unwrap();
        assert_eq!(parsed, layout(5, 2));
        assert_eq!(digits.len(), 20);
    }

    #[test]
    fn test_parse_ignores_spaces_at_line_end() {
        let (parsed, digits) = PadLayout::parse("12345 67890 \n12345 67890  \r\n").unwrap();
        assert_eq!(parsed, layout(5, 2));
        assert_eq!(parsed.groups_per_line(), 2);
        assert_eq!(digits.len(), 20);
    }

    #[test]
    fn test_parse_reports_offending_character_offset() {
        assert_eq!(
            PadLayout::parse("12345 6789a"),
            Err(FormatError::InvalidDigit {
                ch: 'a',
                position: 10
            })
        );
        assert_eq!(
            PadLayout::parse("12345 67890\n1x345 67890"),
            Err(FormatError::InvalidDigit {
                ch: 'x',
                position: 13
            })
        );
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert_eq!(PadLayout::parse(""), Err(FormatError::Empty));
        assert_eq!(PadLayout::parse("\n\n"), Err(FormatError::Empty));
    }

    #[test]
    fn test_parse_rejects_doubled_separators() {
        assert_eq!(
            PadLayout::parse("12345  67890"),
            Err(FormatError::EmptyGroup { line: 0, group: 1 })
        );
        assert_eq!(
            PadLayout::parse("12345 67890\n\n12345 67890"),
            Err(FormatError::EmptyGroup { line: 1, group: 0 })
        );
    }

    #[test]
    fn test_parse_rejects_inconsistent_groups() {
        assert_eq!(
            PadLayout::parse("12345 1234\n12345 12345"),
            Err(FormatError::InconsistentGroup {
                line: 0,
                group: 1,
                expected: 5,
                found: 4
            })
        );
        assert_eq!(
            PadLayout::parse("12345 123456"),
            Err(FormatError::InconsistentGroup {
                line: 0,
                group: 1,
                expected: 5,
                found: 6
            })
        );
    }

    #[test]
    fn test_parse_rejects_inconsistent_lines() {
        assert_eq!(
            PadLayout::parse("12345 12345\n12345\n12345"),
            Err(FormatError::InconsistentLine {
                line: 1,
                expected: 10,
                found: 5
            })
        );
        assert_eq!(
            PadLayout::parse("12345\n12345 12345"),
            Err(FormatError::InconsistentLine {
                line: 1,
                expected: 5,
                found: 10
            })
        );
    }
}
