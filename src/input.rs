//! Checks the presentation layer runs before handing input to the store.
//!
//! The store accepts any content; rejecting short edits is the caller's job.

use crate::error::DiaryError;

/// Minimum length of edited content, in characters.
pub const MIN_EDIT_CONTENT_LEN: usize = 5;

/// Reject edited content shorter than [`MIN_EDIT_CONTENT_LEN`] characters.
///
/// Length counts Unicode scalar values, so `"일기 쓰기"` is five characters.
///
/// # Examples
///
/// ```
/// use diaryfold::validate_edit_content;
///
/// assert!(validate_edit_content("fine day").is_ok());
/// assert!(validate_edit_content("meh").is_err());
/// ```
pub fn validate_edit_content(content: &str) -> Result<(), DiaryError> {
    let actual = content.chars().count();
    if actual < MIN_EDIT_CONTENT_LEN {
        return Err(DiaryError::ContentTooShort {
            min: MIN_EDIT_CONTENT_LEN,
            actual,
        });
    }
    Ok(())
}
