//! Form state and the submission state machine.
//!
//! A [`RegistrationForm`] holds the raw inputs and the dynamic skill list.
//! Submitting moves the form from `Idle` to `Submitting`, evaluates the
//! schema synchronously, passes through `Accepted` or `Rejected` while the
//! display collaborator renders the outcome, and settles back in `Idle` with
//! the user's input intact.

use std::fmt;

use tracing::{debug, info};

use crate::display::ResultDisplay;
use crate::error::DisplayError;
use crate::mask::mask_national_id;
use crate::model::{RawRegistration, UserRegistration, ValidationResult};
use crate::report::ValidationErrors;
use crate::schema::RegistrationSchema;
use crate::skill_list::SkillList;

/// Phase of the submission flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// Accepting edits.
    #[default]
    Idle,
    /// Evaluating the current input.
    Submitting,
    /// Evaluation passed; the registration is being displayed.
    Accepted,
    /// Evaluation failed; the errors are being displayed.
    Rejected,
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        };
        f.write_str(label)
    }
}

/// Outcome handed to the display collaborator after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionEvent {
    /// The input validated into a registration.
    Accepted(UserRegistration),
    /// The input failed validation.
    Rejected(ValidationErrors),
}

impl From<ValidationResult> for SubmissionEvent {
    fn from(value: ValidationResult) -> Self {
        match value {
            ValidationResult::Valid(registration) => Self::Accepted(registration),
            ValidationResult::Failed(errors) => Self::Rejected(errors),
        }
    }
}

/// Registration form state for one session.
///
/// # Examples
/// ```
/// use registration_form::{RegistrationForm, SubmissionEvent, SubmissionState, TextDisplay};
///
/// let mut form = RegistrationForm::default();
/// form.set_name("ada lovelace");
/// form.set_national_id("52998224725");
/// form.set_email("ADA@GMAIL.COM");
/// form.set_password("analytical");
/// for (title, proficiency) in [("Maths", "95"), ("Poetry", "30")] {
///     let key = form.skills_mut().append();
///     form.skills_mut().set_title(key, title);
///     form.skills_mut().set_proficiency(key, proficiency);
/// }
///
/// let mut display = TextDisplay::new();
/// let event = form.submit(&mut display).expect("display succeeds");
///
/// assert!(matches!(event, SubmissionEvent::Accepted(_)));
/// assert_eq!(form.state(), SubmissionState::Idle);
/// assert!(display.output().contains("529.982.247-25"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    schema: RegistrationSchema,
    name: String,
    national_id: String,
    email: String,
    password: String,
    skills: SkillList,
    state: SubmissionState,
}

impl RegistrationForm {
    /// Create an empty form evaluated by `schema`.
    #[must_use]
    pub fn new(schema: RegistrationSchema) -> Self {
        Self {
            schema,
            ..Self::default()
        }
    }

    /// Current phase of the submission flow.
    #[must_use]
    pub const fn state(&self) -> SubmissionState {
        self.state
    }

    /// Schema used on submission.
    #[must_use]
    pub const fn schema(&self) -> &RegistrationSchema {
        &self.schema
    }

    /// Store the name input.
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    /// Mask and store the national ID input, returning the stored text.
    pub fn set_national_id(&mut self, raw: &str) -> &str {
        self.national_id = mask_national_id(raw);
        self.national_id.as_str()
    }

    /// Store the email input.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    /// Store the password input.
    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    /// Stored national ID text, already masked.
    #[must_use]
    pub fn national_id(&self) -> &str {
        self.national_id.as_str()
    }

    /// Dynamic skill entries.
    #[must_use]
    pub const fn skills(&self) -> &SkillList {
        &self.skills
    }

    /// Mutable access for appending, editing, and removing skill entries.
    pub const fn skills_mut(&mut self) -> &mut SkillList {
        &mut self.skills
    }

    /// Current input as submitted to the schema.
    #[must_use]
    pub fn snapshot(&self) -> RawRegistration {
        RawRegistration {
            name: self.name.clone(),
            national_id: self.national_id.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            skills: self.skills.to_raw_skills(),
        }
    }

    /// Evaluate the current input and hand the outcome to `display`.
    ///
    /// The form always returns to [`SubmissionState::Idle`] and keeps its
    /// input, whether the submission was accepted, rejected, or the display
    /// failed.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError`] when `display` cannot render the outcome.
    pub fn submit<D>(&mut self, display: &mut D) -> Result<SubmissionEvent, DisplayError>
    where
        D: ResultDisplay + ?Sized,
    {
        self.transition(SubmissionState::Submitting);
        let event = SubmissionEvent::from(self.schema.evaluate(&self.snapshot()));
        match &event {
            SubmissionEvent::Accepted(_) => {
                self.transition(SubmissionState::Accepted);
                info!(skills = self.skills.len(), "registration accepted");
            }
            SubmissionEvent::Rejected(errors) => {
                self.transition(SubmissionState::Rejected);
                info!(failures = errors.len(), "registration rejected");
            }
        }
        let presented = display.present(&event);
        self.transition(SubmissionState::Idle);
        presented.map(|()| event)
    }

    fn transition(&mut self, next: SubmissionState) {
        debug!(from = %self.state, to = %next, "submission state changed");
        self.state = next;
    }
}
