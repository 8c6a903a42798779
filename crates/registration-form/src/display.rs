//! Display port and a plain-text implementation.
//!
//! The form hands every [`SubmissionEvent`] to a [`ResultDisplay`]. Rendering
//! layers implement the trait; [`TextDisplay`] keeps the rendered JSON payload
//! and per-field messages in memory for terminals and tests.

use crate::error::{DisplayError, FieldErrorKind};
use crate::form::SubmissionEvent;
use crate::model::UserRegistration;
use crate::path::FieldPath;
use crate::report::ValidationErrors;

/// Receives the outcome of each submission.
pub trait ResultDisplay {
    /// Present an accepted registration or the collected field errors.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError`] when the outcome cannot be rendered.
    fn present(&mut self, event: &SubmissionEvent) -> Result<(), DisplayError>;
}

/// Render a registration as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`DisplayError::Render`] when serialisation fails.
pub fn render_registration(registration: &UserRegistration) -> Result<String, DisplayError> {
    Ok(serde_json::to_string_pretty(registration)?)
}

/// Render field errors as one `path: message` line per failing path.
#[must_use]
pub fn render_errors(errors: &ValidationErrors) -> String {
    errors
        .iter()
        .map(|(path, kind)| format!("{path}: {kind}\n"))
        .collect()
}

/// In-memory text rendering of submission outcomes.
///
/// Accepted submissions replace the output and clear the errors. Rejected
/// submissions replace the errors and keep the last accepted output.
///
/// # Examples
/// ```
/// use registration_form::{FieldPath, RegistrationForm, TextDisplay};
///
/// let mut form = RegistrationForm::default();
/// let mut display = TextDisplay::default();
/// form.submit(&mut display).expect("display succeeds");
///
/// assert_eq!(display.error_for(FieldPath::Name).as_deref(), Some("must not be empty"));
/// assert!(display.output().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDisplay {
    output: String,
    errors: ValidationErrors,
}

impl TextDisplay {
    /// Create an empty display.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// JSON text of the last accepted registration, or empty.
    #[must_use]
    pub fn output(&self) -> &str {
        self.output.as_str()
    }

    /// Errors shown for the last rejected submission.
    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Message to show next to the input at `path`; `None` renders nothing.
    #[must_use]
    pub fn error_for(&self, path: FieldPath) -> Option<String> {
        self.errors.get(path).map(FieldErrorKind::to_string)
    }

    /// All current error messages, one line per failing path.
    #[must_use]
    pub fn error_lines(&self) -> String {
        render_errors(&self.errors)
    }
}

impl ResultDisplay for TextDisplay {
    fn present(&mut self, event: &SubmissionEvent) -> Result<(), DisplayError> {
        match event {
            SubmissionEvent::Accepted(registration) => {
                self.output = render_registration(registration)?;
                self.errors = ValidationErrors::new();
            }
            SubmissionEvent::Rejected(errors) => {
                self.errors = errors.clone();
            }
        }
        Ok(())
    }
}
