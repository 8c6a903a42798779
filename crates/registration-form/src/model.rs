//! Raw form input and the normalised registration it validates into.

use serde::{Deserialize, Serialize};

use crate::report::ValidationErrors;

/// Skill entry exactly as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSkill {
    /// Skill title text.
    pub title: String,
    /// Proficiency text, coerced to a number during validation.
    pub proficiency: String,
}

impl RawSkill {
    /// Build a raw skill entry from borrowed or owned text.
    #[must_use]
    pub fn new(title: impl Into<String>, proficiency: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            proficiency: proficiency.into(),
        }
    }
}

/// Registration form contents exactly as entered.
///
/// Missing JSON fields deserialise to empty values so partially filled forms
/// are still evaluated and reported field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRegistration {
    /// Full name text.
    pub name: String,
    /// National ID (CPF) text, usually already masked.
    pub national_id: String,
    /// Email text.
    pub email: String,
    /// Password text.
    pub password: String,
    /// Skill entries in display order.
    pub skills: Vec<RawSkill>,
}

/// Validated skill entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    title: String,
    proficiency: u8,
}

impl Skill {
    pub(crate) const fn new(title: String, proficiency: u8) -> Self {
        Self { title, proficiency }
    }

    /// Skill title as typed.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Proficiency in the inclusive range 1 to 100.
    #[must_use]
    pub const fn proficiency(&self) -> u8 {
        self.proficiency
    }
}

/// Normalised registration produced by a successful evaluation.
///
/// ## Invariants
/// - `name` is non-empty and title-cased.
/// - `national_id` is non-empty.
/// - `email` is lower-cased and ends with the allowed suffix.
/// - `password` meets the configured minimum length.
/// - `skills` satisfies the collection rules and keeps submission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRegistration {
    name: String,
    national_id: String,
    email: String,
    password: String,
    skills: Vec<Skill>,
}

impl UserRegistration {
    pub(crate) const fn new(
        name: String,
        national_id: String,
        email: String,
        password: String,
        skills: Vec<Skill>,
    ) -> Self {
        Self {
            name,
            national_id,
            email,
            password,
            skills,
        }
    }

    /// Title-cased full name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// National ID as submitted.
    #[must_use]
    pub fn national_id(&self) -> &str {
        self.national_id.as_str()
    }

    /// Lower-cased email address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password as submitted.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Skills in submission order.
    #[must_use]
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }
}

/// Outcome of evaluating a [`RawRegistration`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Every rule passed; carries the normalised registration.
    Valid(UserRegistration),
    /// At least one rule failed; carries every violation.
    Failed(ValidationErrors),
}

impl ValidationResult {
    /// Returns `true` when the evaluation passed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Convert into a standard [`Result`].
    ///
    /// # Errors
    ///
    /// Returns the collected [`ValidationErrors`] when evaluation failed.
    pub fn into_result(self) -> Result<UserRegistration, ValidationErrors> {
        match self {
            Self::Valid(registration) => Ok(registration),
            Self::Failed(errors) => Err(errors),
        }
    }
}
