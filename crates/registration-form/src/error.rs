//! Error types for the registration-form crate.
//!
//! Field-level failures are values collected into
//! [`ValidationErrors`](crate::ValidationErrors) rather than propagated with
//! `?`, so a single evaluation reports every problem at once. Rendering
//! failures surface separately as [`DisplayError`].

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Reasons a single field, skill attribute, or the skill collection fails
/// validation.
///
/// Every variant is user-correctable. The [`Display`](std::fmt::Display)
/// output is the message shown next to the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldErrorKind {
    /// The value is blank once trimmed.
    #[error("must not be empty")]
    EmptyField,
    /// The value is not a syntactically valid email address.
    #[error("must be a valid email address")]
    InvalidFormat,
    /// The email address does not end with the allowed suffix.
    #[error("must end with {suffix}")]
    DomainNotAllowed {
        /// Suffix the address is required to end with.
        suffix: String,
    },
    /// The value has fewer characters than required.
    #[error("must be at least {min} characters")]
    TooShort {
        /// Minimum number of characters.
        min: usize,
    },
    /// The value cannot be read as a whole number.
    #[error("must be a whole number")]
    NotANumber,
    /// The number lies outside the accepted inclusive range.
    #[error("must be between {min} and {max}")]
    OutOfRange {
        /// Inclusive lower bound.
        min: u8,
        /// Inclusive upper bound.
        max: u8,
    },
    /// The collection holds fewer entries than required.
    #[error("must contain at least {min} entries")]
    TooFewItems {
        /// Minimum number of entries.
        min: usize,
    },
    /// No entry has a proficiency above the threshold.
    #[error("at least one entry must have a proficiency above {threshold}")]
    InsufficientProficiency {
        /// Proficiency that at least one entry must exceed.
        threshold: u8,
    },
}

impl FieldErrorKind {
    /// Stable machine-readable code for the failure.
    ///
    /// # Examples
    /// ```
    /// use registration_form::FieldErrorKind;
    ///
    /// assert_eq!(FieldErrorKind::EmptyField.code(), "empty_field");
    /// assert_eq!(FieldErrorKind::TooShort { min: 6 }.code(), "too_short");
    /// ```
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyField => "empty_field",
            Self::InvalidFormat => "invalid_format",
            Self::DomainNotAllowed { .. } => "domain_not_allowed",
            Self::TooShort { .. } => "too_short",
            Self::NotANumber => "not_a_number",
            Self::OutOfRange { .. } => "out_of_range",
            Self::TooFewItems { .. } => "too_few_items",
            Self::InsufficientProficiency { .. } => "insufficient_proficiency",
        }
    }
}

impl Serialize for FieldErrorKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FieldError", 2)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Errors raised while rendering a submission outcome.
#[derive(Debug, Error)]
pub enum DisplayError {
    /// The accepted registration could not be serialised.
    #[error("failed to render registration: {source}")]
    Render {
        /// Underlying serialisation error.
        #[from]
        #[source]
        source: serde_json::Error,
    },
}
