//! Command-line rendering layer for the registration form.
//!
//! The binary delegates to these functions so the flow can be exercised in
//! tests without spawning a process. A submission file holds a JSON
//! [`RawRegistration`]; it is typed into a [`RegistrationForm`] the way a user
//! would (masking the national ID and appending skills through the list
//! manager), submitted, and rendered through a [`TextDisplay`].

use std::ffi::OsString;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use clap::Parser;
use ortho_config::OrthoConfig;
use tracing::debug;

use crate::display::TextDisplay;
use crate::form::{RegistrationForm, SubmissionEvent};
use crate::model::RawRegistration;
use crate::schema::RegistrationSchema;
use crate::settings::{FormPolicy, FormSettings};

mod error;

pub use error::CliError;

const PROGRAM_NAME: &str = "registration-form";

/// Arguments accepted by the demo binary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "registration-form",
    about = "Validate a registration form submission and render the outcome"
)]
pub struct DemoArgs {
    /// Path to a JSON file holding the raw form input.
    #[arg(long)]
    pub submission: Utf8PathBuf,
}

/// Rendered outcome of one demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    /// Whether the submission was accepted.
    pub accepted: bool,
    /// Pretty JSON on acceptance, `path: message` lines on rejection.
    pub rendered: String,
}

/// Load the form policy from the environment and configuration files.
///
/// # Errors
///
/// Returns [`CliError::Settings`] when the configuration cannot be loaded.
pub fn load_policy() -> Result<FormPolicy, CliError> {
    FormSettings::load_from_iter([OsString::from(PROGRAM_NAME)])
        .map(|settings| settings.policy())
        .map_err(|err| CliError::Settings {
            message: err.to_string(),
        })
}

/// Read and parse a submission file.
///
/// # Errors
///
/// Returns [`CliError`] when the path names no file, the file cannot be read,
/// or its contents are not a raw registration.
pub fn load_submission(path: &Utf8Path) -> Result<RawRegistration, CliError> {
    let file_name = path.file_name().ok_or_else(|| CliError::InvalidPath {
        path: path.to_path_buf(),
    })?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let read_error = |err: std::io::Error| CliError::Read {
        path: path.to_path_buf(),
        message: err.to_string(),
    };

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let contents = dir.read_to_string(file_name).map_err(read_error)?;
    debug!(path = %path, bytes = contents.len(), "submission loaded");

    serde_json::from_str(&contents).map_err(|err| CliError::Parse {
        message: err.to_string(),
    })
}

/// Type `raw` into `form` field by field.
///
/// The national ID passes through the input mask and every skill is appended
/// through the form's skill list before its inputs are filled.
pub fn fill_form(form: &mut RegistrationForm, raw: &RawRegistration) {
    form.set_name(raw.name.as_str());
    form.set_national_id(&raw.national_id);
    form.set_email(raw.email.as_str());
    form.set_password(raw.password.as_str());
    for skill in &raw.skills {
        let key = form.skills_mut().append();
        form.skills_mut().set_title(key, skill.title.as_str());
        form.skills_mut().set_proficiency(key, skill.proficiency.as_str());
    }
}

/// Load, submit, and render the submission named by `args`.
///
/// # Errors
///
/// Returns [`CliError`] when the submission cannot be loaded or rendered.
/// A rejected submission is not an error; it is reported through
/// [`DemoReport::accepted`].
///
/// # Example
///
/// ```
/// use registration_form::FormPolicy;
/// use registration_form::demo_cli::{DemoArgs, run};
///
/// let args = DemoArgs { submission: "missing/submission.json".into() };
/// assert!(run(&args, FormPolicy::default()).is_err());
/// ```
pub fn run(args: &DemoArgs, policy: FormPolicy) -> Result<DemoReport, CliError> {
    let raw = load_submission(&args.submission)?;
    let mut form = RegistrationForm::new(RegistrationSchema::new(policy));
    fill_form(&mut form, &raw);

    let mut display = TextDisplay::new();
    let event = form
        .submit(&mut display)
        .map_err(|err| CliError::Display {
            message: err.to_string(),
        })?;

    Ok(match event {
        SubmissionEvent::Accepted(_) => DemoReport {
            accepted: true,
            rendered: display.output().to_owned(),
        },
        SubmissionEvent::Rejected(_) => DemoReport {
            accepted: false,
            rendered: display.error_lines(),
        },
    })
}
