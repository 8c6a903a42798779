//! Registration form validation engine.
//!
//! The crate turns raw, string-typed form input into a typed
//! [`UserRegistration`] or a map of per-field errors. It covers the whole
//! client-side flow of a registration screen:
//!
//! - A declarative schema that normalises fields (title-cased name,
//!   lower-cased email) and collects every failure in one pass
//! - An identity-keyed dynamic list for the repeatable skill inputs
//! - A submission state machine that hands outcomes to a display port
//! - An input mask for the national ID (CPF)
//! - Layered settings for the policy constants (allowed email domain,
//!   password length, skill count, proficiency threshold)
//!
//! # Example
//!
//! ```
//! use registration_form::{FieldPath, RawRegistration, RawSkill, RegistrationSchema};
//!
//! let raw = RawRegistration {
//!     name: "john doe".to_owned(),
//!     national_id: "123.456.789-09".to_owned(),
//!     email: "John@Gmail.com".to_owned(),
//!     password: "secret1".to_owned(),
//!     skills: vec![RawSkill::new("Rust", "80"), RawSkill::new("Go", "40")],
//! };
//!
//! let registration = RegistrationSchema::default()
//!     .evaluate(&raw)
//!     .into_result()
//!     .expect("valid input");
//! assert_eq!(registration.name(), "John Doe");
//! assert_eq!(registration.email(), "john@gmail.com");
//!
//! let blank = RegistrationSchema::default().evaluate(&RawRegistration::default());
//! let errors = blank.into_result().expect_err("blank input fails");
//! assert!(errors.contains(FieldPath::Name));
//! assert!(errors.contains(FieldPath::Skills));
//! ```

pub mod demo_cli;
mod display;
mod error;
mod form;
pub mod mask;
mod model;
mod path;
mod report;
pub mod rules;
mod schema;
mod settings;
mod skill_list;

pub use display::{ResultDisplay, TextDisplay, render_errors, render_registration};
pub use error::{DisplayError, FieldErrorKind};
pub use form::{RegistrationForm, SubmissionEvent, SubmissionState};
pub use model::{RawRegistration, RawSkill, Skill, UserRegistration, ValidationResult};
pub use path::{FieldPath, SkillAttribute};
pub use report::ValidationErrors;
pub use schema::RegistrationSchema;
pub use settings::{
    DEFAULT_ALLOWED_EMAIL_SUFFIX, DEFAULT_PASSWORD_MIN_LENGTH, DEFAULT_PROFICIENCY_THRESHOLD,
    DEFAULT_SKILLS_MIN_ITEMS, FormPolicy, FormSettings,
};
pub use skill_list::{DEFAULT_PROFICIENCY, EntryKey, SkillList};
