//! Result-collecting combinator for independent validation rules.
//!
//! Rules return `Result<T, FieldErrorKind>`. [`ValidationErrors::check`]
//! records failures against a [`FieldPath`] and hands successful values back,
//! so evaluation keeps going after the first failure.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::Serialize;

use crate::error::FieldErrorKind;
use crate::path::FieldPath;

/// Every violation found during one evaluation, keyed by field path.
///
/// Each path holds a single error; the first one recorded for a path is kept.
/// Paths that passed validation are absent.
///
/// # Examples
/// ```
/// use registration_form::{FieldErrorKind, FieldPath, ValidationErrors};
///
/// let mut errors = ValidationErrors::new();
/// let name: Option<String> = errors.check(FieldPath::Name, Err(FieldErrorKind::EmptyField));
/// let email = errors.check(FieldPath::Email, Ok("ada@gmail.com"));
///
/// assert!(name.is_none());
/// assert_eq!(email, Some("ada@gmail.com"));
/// assert_eq!(errors.get(FieldPath::Name), Some(&FieldErrorKind::EmptyField));
/// assert_eq!(errors.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<FieldPath, FieldErrorKind>);

impl ValidationErrors {
    /// Create an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Record `kind` against `path` unless the path already holds an error.
    pub fn record(&mut self, path: FieldPath, kind: FieldErrorKind) {
        self.0.entry(path).or_insert(kind);
    }

    /// Record the failure of `result`, or return its successful value.
    pub fn check<T>(&mut self, path: FieldPath, result: Result<T, FieldErrorKind>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(kind) => {
                self.record(path, kind);
                None
            }
        }
    }

    /// Error recorded for `path`, if any.
    #[must_use]
    pub fn get(&self, path: FieldPath) -> Option<&FieldErrorKind> {
        self.0.get(&path)
    }

    /// Returns `true` when `path` failed validation.
    #[must_use]
    pub fn contains(&self, path: FieldPath) -> bool {
        self.0.contains_key(&path)
    }

    /// Number of failing paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when nothing failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over failures in path order.
    pub fn iter(&self) -> btree_map::Iter<'_, FieldPath, FieldErrorKind> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = (&'a FieldPath, &'a FieldErrorKind);
    type IntoIter = btree_map::Iter<'a, FieldPath, FieldErrorKind>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
