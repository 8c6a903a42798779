//! Registration schema composing the field rules into one evaluation.
//!
//! The schema owns the [`FormPolicy`] and runs every rule against a
//! [`RawRegistration`], collecting failures instead of stopping at the first.
//! Collection-level skill rules run after the per-item rules and report
//! against the `skills` path regardless of item failures.

use tracing::debug;

use crate::model::{RawRegistration, RawSkill, Skill, UserRegistration, ValidationResult};
use crate::path::FieldPath;
use crate::report::ValidationErrors;
use crate::rules::{
    ensure_min_items, ensure_proficiency_peak, parse_proficiency, validate_email,
    validate_name, validate_national_id, validate_password, validate_skill_title,
};
use crate::settings::FormPolicy;

/// Declarative description of the registration form's rules.
///
/// # Examples
/// ```
/// use registration_form::{RawRegistration, RawSkill, RegistrationSchema};
///
/// let raw = RawRegistration {
///     name: "ada lovelace".to_owned(),
///     national_id: "123.456.789-09".to_owned(),
///     email: "Ada@Gmail.com".to_owned(),
///     password: "analytical".to_owned(),
///     skills: vec![RawSkill::new("Rust", "90"), RawSkill::new("Go", "40")],
/// };
///
/// let registration = RegistrationSchema::default()
///     .evaluate(&raw)
///     .into_result()
///     .expect("valid registration");
/// assert_eq!(registration.name(), "Ada Lovelace");
/// assert_eq!(registration.email(), "ada@gmail.com");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationSchema {
    policy: FormPolicy,
}

impl RegistrationSchema {
    /// Build a schema enforcing `policy`.
    #[must_use]
    pub const fn new(policy: FormPolicy) -> Self {
        Self { policy }
    }

    /// Policy this schema enforces.
    #[must_use]
    pub const fn policy(&self) -> &FormPolicy {
        &self.policy
    }

    /// Evaluate raw form input.
    ///
    /// Returns [`ValidationResult::Valid`] with the normalised registration
    /// when every rule passes, otherwise [`ValidationResult::Failed`] holding
    /// every violated path. Evaluation is pure; the same input always yields
    /// an equal result.
    #[must_use]
    pub fn evaluate(&self, raw: &RawRegistration) -> ValidationResult {
        debug!(skills = raw.skills.len(), "evaluating registration");
        let mut errors = ValidationErrors::new();

        let name = errors.check(FieldPath::Name, validate_name(&raw.name));
        let national_id = errors.check(
            FieldPath::NationalId,
            validate_national_id(&raw.national_id),
        );
        let email = errors.check(
            FieldPath::Email,
            validate_email(&raw.email, self.policy.allowed_email_suffix()),
        );
        let password = errors.check(
            FieldPath::Password,
            validate_password(&raw.password, self.policy.password_min_length()),
        );
        let skills = self.evaluate_skills(&raw.skills, &mut errors);

        match (name, national_id, email, password, skills) {
            (Some(name), Some(national_id), Some(email), Some(password), Some(skills))
                if errors.is_empty() =>
            {
                debug!("registration passed validation");
                ValidationResult::Valid(UserRegistration::new(
                    name,
                    national_id,
                    email,
                    password,
                    skills,
                ))
            }
            _ => {
                debug!(failures = errors.len(), "registration failed validation");
                ValidationResult::Failed(errors)
            }
        }
    }

    fn evaluate_skills(
        &self,
        raw: &[RawSkill],
        errors: &mut ValidationErrors,
    ) -> Option<Vec<Skill>> {
        let checked: Vec<(Option<String>, Option<u8>)> = raw
            .iter()
            .enumerate()
            .map(|(index, skill)| {
                let title = errors.check(
                    FieldPath::skill_title(index),
                    validate_skill_title(&skill.title),
                );
                let proficiency = errors.check(
                    FieldPath::skill_proficiency(index),
                    parse_proficiency(&skill.proficiency),
                );
                (title, proficiency)
            })
            .collect();

        let valid_proficiencies = checked.iter().filter_map(|(_, proficiency)| *proficiency);
        errors.check(
            FieldPath::Skills,
            ensure_min_items(raw.len(), self.policy.skills_min_items()),
        );
        errors.check(
            FieldPath::Skills,
            ensure_proficiency_peak(valid_proficiencies, self.policy.proficiency_threshold()),
        );

        checked
            .into_iter()
            .map(|(title, proficiency)| Some(Skill::new(title?, proficiency?)))
            .collect()
    }
}
