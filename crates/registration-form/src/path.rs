//! Field paths used as keys in the validation error map.
//!
//! A path addresses one scalar input (`email`), the skill collection as a
//! whole (`skills`), or one attribute of one skill entry
//! (`skills[1].proficiency`). Paths order scalar fields first, in form order,
//! followed by the collection and then its items by index.

use std::fmt;

use serde::{Serialize, Serializer};

/// Attribute of a single skill entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkillAttribute {
    /// The skill title.
    Title,
    /// The proficiency score.
    Proficiency,
}

impl SkillAttribute {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Proficiency => "proficiency",
        }
    }
}

/// Address of a validated input.
///
/// # Examples
/// ```
/// use registration_form::FieldPath;
///
/// assert_eq!(FieldPath::NationalId.to_string(), "nationalId");
/// assert_eq!(FieldPath::skill_title(2).to_string(), "skills[2].title");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldPath {
    /// The full name input.
    Name,
    /// The national ID (CPF) input.
    NationalId,
    /// The email input.
    Email,
    /// The password input.
    Password,
    /// The skill collection as a whole.
    Skills,
    /// One attribute of the skill at `index` in submission order.
    Skill {
        /// Position of the entry in the submitted sequence.
        index: usize,
        /// Attribute within the entry.
        attribute: SkillAttribute,
    },
}

impl FieldPath {
    /// Path of the title of the skill at `index`.
    #[must_use]
    pub const fn skill_title(index: usize) -> Self {
        Self::Skill {
            index,
            attribute: SkillAttribute::Title,
        }
    }

    /// Path of the proficiency of the skill at `index`.
    #[must_use]
    pub const fn skill_proficiency(index: usize) -> Self {
        Self::Skill {
            index,
            attribute: SkillAttribute::Proficiency,
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => f.write_str("name"),
            Self::NationalId => f.write_str("nationalId"),
            Self::Email => f.write_str("email"),
            Self::Password => f.write_str("password"),
            Self::Skills => f.write_str("skills"),
            Self::Skill { index, attribute } => {
                write!(f, "skills[{index}].{}", attribute.as_str())
            }
        }
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
