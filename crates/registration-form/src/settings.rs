//! Form policy configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Email suffix accepted when no override is configured.
pub const DEFAULT_ALLOWED_EMAIL_SUFFIX: &str = "@gmail.com";
/// Minimum password length when no override is configured.
pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 6;
/// Minimum number of skill entries when no override is configured.
pub const DEFAULT_SKILLS_MIN_ITEMS: usize = 2;
/// Proficiency one entry must exceed when no override is configured.
pub const DEFAULT_PROFICIENCY_THRESHOLD: u8 = 50;

/// Configuration values tuning the registration rules.
///
/// The numeric limits carry defaults so an empty environment still loads;
/// an unset email suffix falls back to [`DEFAULT_ALLOWED_EMAIL_SUFFIX`].
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "REGISTRATION_FORM")]
pub struct FormSettings {
    /// Suffix every email address must end with.
    pub allowed_email_suffix: Option<String>,
    /// Minimum number of password characters.
    #[ortho_config(default = 6)]
    pub password_min_length: usize,
    /// Minimum number of skill entries.
    #[ortho_config(default = 2)]
    pub skills_min_items: usize,
    /// Proficiency at least one skill entry must exceed.
    #[ortho_config(default = 50)]
    pub proficiency_threshold: u8,
}

impl FormSettings {
    /// Resolve the configured values into a [`FormPolicy`].
    ///
    /// # Examples
    /// ```
    /// use registration_form::{FormPolicy, FormSettings};
    ///
    /// let settings = FormSettings {
    ///     allowed_email_suffix: Some("@Example.ORG".to_owned()),
    ///     password_min_length: 8,
    ///     skills_min_items: 2,
    ///     proficiency_threshold: 50,
    /// };
    /// let policy = settings.policy();
    ///
    /// assert_eq!(policy.allowed_email_suffix(), "@example.org");
    /// assert_eq!(policy.password_min_length(), 8);
    /// assert_eq!(policy.skills_min_items(), FormPolicy::default().skills_min_items());
    /// ```
    #[must_use]
    pub fn policy(&self) -> FormPolicy {
        FormPolicy::new(
            self.allowed_email_suffix
                .as_deref()
                .unwrap_or(DEFAULT_ALLOWED_EMAIL_SUFFIX),
            self.password_min_length,
            self.skills_min_items,
            self.proficiency_threshold,
        )
    }
}

/// Resolved rule parameters used by [`RegistrationSchema`](crate::RegistrationSchema).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPolicy {
    allowed_email_suffix: String,
    password_min_length: usize,
    skills_min_items: usize,
    proficiency_threshold: u8,
}

impl Default for FormPolicy {
    fn default() -> Self {
        Self {
            allowed_email_suffix: DEFAULT_ALLOWED_EMAIL_SUFFIX.to_owned(),
            password_min_length: DEFAULT_PASSWORD_MIN_LENGTH,
            skills_min_items: DEFAULT_SKILLS_MIN_ITEMS,
            proficiency_threshold: DEFAULT_PROFICIENCY_THRESHOLD,
        }
    }
}

impl FormPolicy {
    /// Build a policy from explicit values, lower-casing the email suffix.
    #[must_use]
    pub fn new(
        allowed_email_suffix: &str,
        password_min_length: usize,
        skills_min_items: usize,
        proficiency_threshold: u8,
    ) -> Self {
        Self {
            allowed_email_suffix: allowed_email_suffix.to_lowercase(),
            password_min_length,
            skills_min_items,
            proficiency_threshold,
        }
    }

    /// Lower-cased suffix every email address must end with.
    #[must_use]
    pub fn allowed_email_suffix(&self) -> &str {
        self.allowed_email_suffix.as_str()
    }

    /// Minimum number of password characters.
    #[must_use]
    pub const fn password_min_length(&self) -> usize {
        self.password_min_length
    }

    /// Minimum number of skill entries.
    #[must_use]
    pub const fn skills_min_items(&self) -> usize {
        self.skills_min_items
    }

    /// Proficiency at least one skill entry must exceed.
    #[must_use]
    pub const fn proficiency_threshold(&self) -> u8 {
        self.proficiency_threshold
    }
}
