//! Display mask for the national ID (CPF) input.
//!
//! The mask runs on every edit before the value is stored. It keeps at most
//! [`NATIONAL_ID_DIGITS`] digits, drops anything else, and groups the digits
//! as `000.000.000-00`. A separator only appears once a digit follows it, so
//! partially typed values mask cleanly (`1234` becomes `123.4`).

/// Number of digits in a national ID.
pub const NATIONAL_ID_DIGITS: usize = 11;

/// Reformat raw national ID text for display.
///
/// # Examples
/// ```
/// use registration_form::mask::mask_national_id;
///
/// assert_eq!(mask_national_id("52998224725"), "529.982.247-25");
/// assert_eq!(mask_national_id("529.98"), "529.98");
/// assert_eq!(mask_national_id("5299822472599"), "529.982.247-25");
/// ```
#[must_use]
pub fn mask_national_id(raw: &str) -> String {
    let mut masked = String::with_capacity(NATIONAL_ID_DIGITS + 3);
    for (position, digit) in raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(NATIONAL_ID_DIGITS)
        .enumerate()
    {
        if let Some(separator) = separator_before(position) {
            masked.push(separator);
        }
        masked.push(digit);
    }
    masked
}

const fn separator_before(position: usize) -> Option<char> {
    match position {
        3 | 6 => Some('.'),
        9 => Some('-'),
        _ => None,
    }
}
