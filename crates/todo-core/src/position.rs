//! Conversion between the 1-based positions people type and 0-based indices.

use crate::error::{Result, TaskError};

/// Parses a 1-based position typed by a user into a 0-based index.
///
/// The trimmed input must be a plain integer. Non-numeric input, zero and
/// negative numbers are all reported as [`TaskError::OutOfRange`], as is a
/// position past the end of a list of `len` tasks.
///
/// # Examples
///
/// ```rust
/// use todo_core::{parse_display_position, TaskError};
///
/// assert_eq!(parse_display_position(" 2 ", 3), Ok(1));
/// assert!(matches!(
///     parse_display_position("abc", 3),
///     Err(TaskError::OutOfRange { .. })
/// ));
/// ```
pub fn parse_display_position(raw: &str, len: usize) -> Result<usize> {
    let trimmed = raw.trim();
    let out_of_range = || TaskError::out_of_range(trimmed, len);

    let number: i64 = trimmed.parse().map_err(|_| out_of_range())?;
    let index = number
        .checked_sub(1)
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(out_of_range)?;
    if index >= len {
        return Err(out_of_range());
    }
    Ok(index)
}

/// Converts a 0-based index into the 1-based number shown to users.
pub fn display_position(index: usize) -> usize {
    index + 1
}
