//! Independent validation rules for each registration field.
//!
//! Every rule is a pure function of its input returning the normalised value
//! or the [`FieldErrorKind`] describing the failure. Rules never look at other
//! fields; [`RegistrationSchema`](crate::RegistrationSchema) composes them.
//!
//! # Rules
//!
//! - Name: non-blank, then title-cased word by word
//! - National ID: non-blank only
//! - Email: non-blank, syntactically valid, lower-cased, allowed suffix
//! - Password: minimum character count
//! - Skill title: non-blank
//! - Skill proficiency: whole number between [`PROFICIENCY_MIN`] and
//!   [`PROFICIENCY_MAX`]

use std::sync::OnceLock;

use regex::Regex;

use crate::error::FieldErrorKind;

/// Lowest accepted skill proficiency.
pub const PROFICIENCY_MIN: u8 = 1;

/// Highest accepted skill proficiency.
pub const PROFICIENCY_MAX: u8 = 100;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Leading dots and consecutive dots are rejected separately.
        let pattern = r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validate a full name and convert it to title case.
///
/// Words are split on any whitespace, the first character of each word is
/// upper-cased, the remainder is kept as typed, and words are rejoined with
/// single spaces.
///
/// # Errors
///
/// Returns [`FieldErrorKind::EmptyField`] when the name is blank.
///
/// # Examples
/// ```
/// use registration_form::rules::validate_name;
///
/// assert_eq!(validate_name("  ada   king lovelace ").as_deref(), Ok("Ada King Lovelace"));
/// assert_eq!(validate_name("mcIntyre").as_deref(), Ok("McIntyre"));
/// ```
pub fn validate_name(raw: &str) -> Result<String, FieldErrorKind> {
    if is_blank(raw) {
        return Err(FieldErrorKind::EmptyField);
    }
    let words: Vec<String> = raw.split_whitespace().map(capitalise_word).collect();
    Ok(words.join(" "))
}

fn capitalise_word(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Validate the national ID field.
///
/// Only presence is checked; the value is returned exactly as entered.
///
/// # Errors
///
/// Returns [`FieldErrorKind::EmptyField`] when the ID is blank.
pub fn validate_national_id(raw: &str) -> Result<String, FieldErrorKind> {
    if is_blank(raw) {
        return Err(FieldErrorKind::EmptyField);
    }
    Ok(raw.to_owned())
}

/// Returns `true` when `value` is a syntactically valid email address.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && email_regex().is_match(value)
}

/// Validate an email address, lower-case it, and enforce the domain suffix.
///
/// `allowed_suffix` is compared against the lower-cased address, so it should
/// itself be lower case.
///
/// # Errors
///
/// Returns [`FieldErrorKind::EmptyField`] when blank,
/// [`FieldErrorKind::InvalidFormat`] when malformed, and
/// [`FieldErrorKind::DomainNotAllowed`] when the suffix does not match.
///
/// # Examples
/// ```
/// use registration_form::FieldErrorKind;
/// use registration_form::rules::validate_email;
///
/// assert_eq!(validate_email("JOHN@GMAIL.COM", "@gmail.com").as_deref(), Ok("john@gmail.com"));
/// assert!(matches!(
///     validate_email("john@yahoo.com", "@gmail.com"),
///     Err(FieldErrorKind::DomainNotAllowed { .. })
/// ));
/// ```
pub fn validate_email(raw: &str, allowed_suffix: &str) -> Result<String, FieldErrorKind> {
    if is_blank(raw) {
        return Err(FieldErrorKind::EmptyField);
    }
    if !is_valid_email(raw) {
        return Err(FieldErrorKind::InvalidFormat);
    }
    let lowered = raw.to_lowercase();
    if !lowered.ends_with(allowed_suffix) {
        return Err(FieldErrorKind::DomainNotAllowed {
            suffix: allowed_suffix.to_owned(),
        });
    }
    Ok(lowered)
}

/// Validate that a password has at least `min_length` characters.
///
/// Length is counted in Unicode scalar values, so each emoji counts once.
///
/// # Errors
///
/// Returns [`FieldErrorKind::TooShort`] when the password is shorter.
pub fn validate_password(raw: &str, min_length: usize) -> Result<String, FieldErrorKind> {
    if raw.chars().count() < min_length {
        return Err(FieldErrorKind::TooShort { min: min_length });
    }
    Ok(raw.to_owned())
}

/// Validate a skill title.
///
/// # Errors
///
/// Returns [`FieldErrorKind::EmptyField`] when the title is blank.
pub fn validate_skill_title(raw: &str) -> Result<String, FieldErrorKind> {
    if is_blank(raw) {
        return Err(FieldErrorKind::EmptyField);
    }
    Ok(raw.to_owned())
}

/// Coerce proficiency text to a number within the accepted range.
///
/// Surrounding whitespace is ignored and blank text coerces to zero, which is
/// then out of range. Any finite numeric notation is accepted as long as it
/// denotes a whole number, so `50.0` and `1e2` coerce to 50 and 100.
///
/// # Errors
///
/// Returns [`FieldErrorKind::NotANumber`] when the text is not a finite number
/// or has a fractional part, and [`FieldErrorKind::OutOfRange`] when the
/// number falls outside [`PROFICIENCY_MIN`]..=[`PROFICIENCY_MAX`].
///
/// # Examples
/// ```
/// use registration_form::FieldErrorKind;
/// use registration_form::rules::parse_proficiency;
///
/// assert_eq!(parse_proficiency(" 75 "), Ok(75));
/// assert_eq!(parse_proficiency("50.0"), Ok(50));
/// assert_eq!(parse_proficiency("abc"), Err(FieldErrorKind::NotANumber));
/// assert!(matches!(parse_proficiency("101"), Err(FieldErrorKind::OutOfRange { .. })));
/// ```
pub fn parse_proficiency(raw: &str) -> Result<u8, FieldErrorKind> {
    let trimmed = raw.trim();
    let value = if trimmed.is_empty() {
        0.0
    } else {
        trimmed
            .parse::<f64>()
            .map_err(|_| FieldErrorKind::NotANumber)?
    };
    if !value.is_finite() {
        return Err(FieldErrorKind::NotANumber);
    }
    if !(f64::from(PROFICIENCY_MIN)..=f64::from(PROFICIENCY_MAX)).contains(&value) {
        return Err(FieldErrorKind::OutOfRange {
            min: PROFICIENCY_MIN,
            max: PROFICIENCY_MAX,
        });
    }
    if value.fract().abs() > 0.0 {
        return Err(FieldErrorKind::NotANumber);
    }
    Ok(whole_in_range_to_u8(value))
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "callers pass whole numbers already checked against the u8 proficiency range"
)]
const fn whole_in_range_to_u8(value: f64) -> u8 {
    value as u8
}

/// Require the skill collection to hold at least `min` entries.
///
/// # Errors
///
/// Returns [`FieldErrorKind::TooFewItems`] when `count` is below `min`.
pub const fn ensure_min_items(count: usize, min: usize) -> Result<(), FieldErrorKind> {
    if count < min {
        return Err(FieldErrorKind::TooFewItems { min });
    }
    Ok(())
}

/// Require at least one proficiency strictly above `threshold`.
///
/// # Errors
///
/// Returns [`FieldErrorKind::InsufficientProficiency`] when none qualifies.
pub fn ensure_proficiency_peak<I>(proficiencies: I, threshold: u8) -> Result<(), FieldErrorKind>
where
    I: IntoIterator<Item = u8>,
{
    if proficiencies.into_iter().any(|value| value > threshold) {
        return Ok(());
    }
    Err(FieldErrorKind::InsufficientProficiency { threshold })
}

#[cfg(test)]
mod tests {
    //! Covers each rule in isolation.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ada lovelace", "Ada Lovelace")]
    #[case("  grace   hopper  ", "Grace Hopper")]
    #[case("émile zola", "Émile Zola")]
    #[case("alan\tmathison\nturing", "Alan Mathison Turing")]
    #[case("o'brien", "O'brien")]
    fn title_cases_names(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(validate_name(raw).as_deref(), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn rejects_blank_names(#[case] raw: &str) {
        assert_eq!(validate_name(raw), Err(FieldErrorKind::EmptyField));
    }

    #[rstest]
    fn national_id_only_checks_presence() {
        assert_eq!(validate_national_id("123").as_deref(), Ok("123"));
        assert_eq!(
            validate_national_id("000.000.000-00").as_deref(),
            Ok("000.000.000-00")
        );
        assert_eq!(validate_national_id("  "), Err(FieldErrorKind::EmptyField));
    }

    #[rstest]
    #[case("john@gmail.com", true)]
    #[case("john.doe+tag@gmail.com", true)]
    #[case("o'neil@mail.example.org", true)]
    #[case("JOHN@GMAIL.COM", true)]
    #[case("john", false)]
    #[case("john@", false)]
    #[case("@gmail.com", false)]
    #[case("john@gmail", false)]
    #[case(".john@gmail.com", false)]
    #[case("john..doe@gmail.com", false)]
    #[case("john.@gmail.com", false)]
    #[case("jo hn@gmail.com", false)]
    #[case(" john@gmail.com", false)]
    fn recognises_email_syntax(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_email(value), expected);
    }

    #[rstest]
    fn email_rules_apply_in_order() {
        assert_eq!(
            validate_email("", "@gmail.com"),
            Err(FieldErrorKind::EmptyField)
        );
        assert_eq!(
            validate_email("not-an-email", "@gmail.com"),
            Err(FieldErrorKind::InvalidFormat)
        );
        assert_eq!(
            validate_email("john@yahoo.com", "@gmail.com"),
            Err(FieldErrorKind::DomainNotAllowed {
                suffix: "@gmail.com".to_owned()
            })
        );
        assert_eq!(
            validate_email("John.Doe@Gmail.Com", "@gmail.com").as_deref(),
            Ok("john.doe@gmail.com")
        );
    }

    #[rstest]
    fn domain_suffix_must_match_whole_domain() {
        assert!(matches!(
            validate_email("john@notgmail.com", "@gmail.com"),
            Err(FieldErrorKind::DomainNotAllowed { .. })
        ));
    }

    #[rstest]
    #[case("12345", false)]
    #[case("123456", true)]
    #[case("çãõéíú", true)]
    #[case("", false)]
    fn enforces_password_length(#[case] raw: &str, #[case] accepted: bool) {
        let result = validate_password(raw, 6);
        assert_eq!(result.is_ok(), accepted);
        if !accepted {
            assert_eq!(result, Err(FieldErrorKind::TooShort { min: 6 }));
        }
    }

    #[rstest]
    fn password_length_counts_characters_not_code_units() {
        assert_eq!(
            validate_password("\u{1F600}\u{1F600}\u{1F600}", 6),
            Err(FieldErrorKind::TooShort { min: 6 })
        );
        assert!(validate_password("\u{1F600}".repeat(6).as_str(), 6).is_ok());
    }

    #[rstest]
    fn skill_title_requires_text() {
        assert_eq!(validate_skill_title("Rust").as_deref(), Ok("Rust"));
        assert_eq!(validate_skill_title(" "), Err(FieldErrorKind::EmptyField));
    }

    #[rstest]
    #[case("1", Ok(1))]
    #[case("100", Ok(100))]
    #[case("+42", Ok(42))]
    #[case(" 51 ", Ok(51))]
    #[case("0", Err(FieldErrorKind::OutOfRange { min: 1, max: 100 }))]
    #[case("", Err(FieldErrorKind::OutOfRange { min: 1, max: 100 }))]
    #[case("101", Err(FieldErrorKind::OutOfRange { min: 1, max: 100 }))]
    #[case("-5", Err(FieldErrorKind::OutOfRange { min: 1, max: 100 }))]
    #[case(
        "99999999999999999999999",
        Err(FieldErrorKind::OutOfRange { min: 1, max: 100 })
    )]
    #[case("50.0", Ok(50))]
    #[case("1e2", Ok(100))]
    #[case(" 7.00 ", Ok(7))]
    #[case("1e3", Err(FieldErrorKind::OutOfRange { min: 1, max: 100 }))]
    #[case("0.5", Err(FieldErrorKind::OutOfRange { min: 1, max: 100 }))]
    #[case("abc", Err(FieldErrorKind::NotANumber))]
    #[case("50.5", Err(FieldErrorKind::NotANumber))]
    #[case("inf", Err(FieldErrorKind::NotANumber))]
    #[case("NaN", Err(FieldErrorKind::NotANumber))]
    #[case("5 0", Err(FieldErrorKind::NotANumber))]
    fn coerces_proficiency(#[case] raw: &str, #[case] expected: Result<u8, FieldErrorKind>) {
        assert_eq!(parse_proficiency(raw), expected);
    }

    #[rstest]
    fn enforces_minimum_item_count() {
        assert_eq!(
            ensure_min_items(1, 2),
            Err(FieldErrorKind::TooFewItems { min: 2 })
        );
        assert_eq!(ensure_min_items(2, 2), Ok(()));
    }

    #[rstest]
    #[case(vec![50, 50], false)]
    #[case(vec![50, 51], true)]
    #[case(vec![], false)]
    #[case(vec![100], true)]
    fn requires_one_proficiency_above_threshold(#[case] values: Vec<u8>, #[case] ok: bool) {
        assert_eq!(ensure_proficiency_peak(values, 50).is_ok(), ok);
    }
}
