//! Input rules for new task descriptions.

use crate::error::{Result, TaskboardError};

/// Longest description accepted on creation, in characters
pub const MAX_DESCRIPTION_LEN: usize = 100;

/// Validate a description typed for a new card
///
/// Rules are checked in order: blank input, characters outside
/// `[A-Za-z ]`, then length. The text is not trimmed.
///
/// # Examples
/// ```
/// use taskboard_core::domain::validation::validate_description;
///
/// assert!(validate_description("Buy milk").is_ok());
/// assert!(validate_description("Buy 2 milks").is_err());
/// ```
pub fn validate_description(description: &str) -> Result<()> {
    if description.trim().is_empty() {
        return Err(TaskboardError::EmptyDescription);
    }

    if !description
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c == ' ')
    {
        return Err(TaskboardError::InvalidCharacters);
    }

    let len = description.chars().count();
    if len > MAX_DESCRIPTION_LEN {
        return Err(TaskboardError::DescriptionTooLong {
            len,
            max: MAX_DESCRIPTION_LEN,
        });
    }

    Ok(())
}
