//! Tokenizing primitives shared by the line- and block-oriented parsers
//!
//! All functions are pure and borrow from the input document.

use aoc_kit::ParseError;
use std::fmt::Display;
use std::str::FromStr;

/// Non-blank lines with their 1-based physical line number, trimmed
pub fn non_blank_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

/// Split on runs of blank lines, keeping the first line number of each block
///
/// Whitespace-only lines count as blank. Blocks never start or end with a
/// blank line and leading/trailing blank runs produce no block.
pub fn blocks_with_line_numbers(text: &str) -> Vec<(usize, &str)> {
    let mut blocks = Vec::new();
    // (first line number, start offset) of the block being collected
    let mut current: Option<(usize, usize)> = None;
    let mut block_end = 0;
    let mut offset = 0;

    for (idx, line) in text.split_inclusive('\n').enumerate() {
        let line_start = offset;
        offset += line.len();

        if line.trim().is_empty() {
            if let Some((first_line, start)) = current.take() {
                blocks.push((first_line, &text[start..block_end]));
            }
        } else {
            current.get_or_insert((idx + 1, line_start));
            block_end = line_start + line.trim_end_matches(['\r', '\n']).len();
        }
    }

    if let Some((first_line, start)) = current {
        blocks.push((first_line, &text[start..block_end]));
    }
    blocks
}

/// Split on one or more blank lines, preserving line order inside each block
pub fn split_blank_separated_blocks(text: &str) -> Vec<&str> {
    blocks_with_line_numbers(text)
        .into_iter()
        .map(|(_, block)| block)
        .collect()
}

/// First digit scanning forward and last digit scanning backward
///
/// A single digit is both first and last. `None` when the line holds no
/// ASCII digit.
pub fn first_and_last_digit(line: &str) -> Option<(u8, u8)> {
    let bytes = line.as_bytes();
    let first = bytes.iter().find(|b| b.is_ascii_digit())?;
    let last = bytes.iter().rev().find(|b| b.is_ascii_digit())?;
    Some((first - b'0', last - b'0'))
}

pub fn split_whitespace_fields(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Parse one token, reporting failures as a malformed record on `line`
pub fn parse_field<T>(token: &str, line: usize, what: &str) -> Result<T, ParseError>
where
    T: FromStr,
    T::Err: Display,
{
    token
        .parse()
        .map_err(|e| ParseError::malformed(line, format!("invalid {what} '{token}': {e}")))
}
