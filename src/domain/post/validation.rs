//! Post validation utilities

use thiserror::Error;

/// Errors that can occur during post validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PostValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title exceeds maximum length of {0} characters")]
    TitleTooLong(usize),

    #[error("Content cannot be empty")]
    EmptyContent,
}

const MAX_TITLE_LENGTH: usize = 200;

/// Validate a post title
///
/// Rules:
/// - Cannot be empty or whitespace only
/// - Maximum 200 characters
pub fn validate_title(title: &str) -> Result<(), PostValidationError> {
    if title.trim().is_empty() {
        return Err(PostValidationError::EmptyTitle);
    }

    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(PostValidationError::TitleTooLong(MAX_TITLE_LENGTH));
    }

    Ok(())
}

/// Validate post content
pub fn validate_content(content: &str) -> Result<(), PostValidationError> {
    if content.trim().is_empty() {
        return Err(PostValidationError::EmptyContent);
    }

    Ok(())
}
