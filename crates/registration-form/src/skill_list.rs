//! Identity-keyed dynamic list backing the repeatable skill inputs.
//!
//! Entries live in a map keyed by [`EntryKey`]; display order is a separate
//! sequence of keys. Keys come from a per-list counter and are never handed
//! out twice, so input state bound to a key cannot drift onto another entry
//! after a removal or reorder.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::model::RawSkill;

/// Proficiency text given to freshly appended entries.
pub const DEFAULT_PROFICIENCY: &str = "0";

/// Stable synthetic identity of a skill entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryKey(u64);

impl EntryKey {
    /// Numeric value of the key.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skill-{}", self.0)
    }
}

/// Ordered, identity-keyed skill entries for one form session.
///
/// # Examples
/// ```
/// use registration_form::SkillList;
///
/// let mut skills = SkillList::new();
/// let rust = skills.append();
/// let go = skills.append();
/// skills.set_title(rust, "Rust");
///
/// assert!(skills.remove(go));
/// assert!(!skills.remove(go));
/// assert_eq!(skills.keys().collect::<Vec<_>>(), vec![rust]);
/// assert_eq!(skills.get(rust).map(|entry| entry.title.as_str()), Some("Rust"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillList {
    entries: HashMap<EntryKey, RawSkill>,
    order: Vec<EntryKey>,
    next_key: u64,
}

impl SkillList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry with an empty title and zero proficiency.
    ///
    /// Returns the fresh key identifying the entry.
    pub fn append(&mut self) -> EntryKey {
        let key = EntryKey(self.next_key);
        self.next_key = self.next_key.saturating_add(1);
        self.entries
            .insert(key, RawSkill::new(String::new(), DEFAULT_PROFICIENCY));
        self.order.push(key);
        debug!(key = %key, len = self.order.len(), "skill entry appended");
        key
    }

    /// Remove the entry identified by `key`.
    ///
    /// Unknown keys are ignored. Returns `true` when an entry was removed.
    pub fn remove(&mut self, key: EntryKey) -> bool {
        if self.entries.remove(&key).is_none() {
            return false;
        }
        self.order.retain(|candidate| *candidate != key);
        debug!(key = %key, len = self.order.len(), "skill entry removed");
        true
    }

    /// Move the entry identified by `key` to `index`, clamped to the end.
    ///
    /// Keys are unchanged. Returns `false` when `key` is unknown.
    pub fn move_to(&mut self, key: EntryKey, index: usize) -> bool {
        let Some(position) = self.position(key) else {
            return false;
        };
        self.order.remove(position);
        let target = index.min(self.order.len());
        self.order.insert(target, key);
        true
    }

    /// Replace the title of the entry identified by `key`.
    ///
    /// Returns `false` when `key` is unknown.
    pub fn set_title(&mut self, key: EntryKey, title: impl Into<String>) -> bool {
        self.entries.get_mut(&key).is_some_and(|entry| {
            entry.title = title.into();
            true
        })
    }

    /// Replace the proficiency text of the entry identified by `key`.
    ///
    /// Returns `false` when `key` is unknown.
    pub fn set_proficiency(&mut self, key: EntryKey, proficiency: impl Into<String>) -> bool {
        self.entries.get_mut(&key).is_some_and(|entry| {
            entry.proficiency = proficiency.into();
            true
        })
    }

    /// Entry identified by `key`.
    #[must_use]
    pub fn get(&self, key: EntryKey) -> Option<&RawSkill> {
        self.entries.get(&key)
    }

    /// Display position of the entry identified by `key`.
    #[must_use]
    pub fn position(&self, key: EntryKey) -> Option<usize> {
        self.order.iter().position(|candidate| *candidate == key)
    }

    /// Keys in display order.
    pub fn keys(&self) -> impl Iterator<Item = EntryKey> + '_ {
        self.order.iter().copied()
    }

    /// Entries with their keys in display order.
    pub fn entries(&self) -> impl Iterator<Item = (EntryKey, &RawSkill)> + '_ {
        self.order
            .iter()
            .filter_map(|key| self.entries.get(key).map(|entry| (*key, entry)))
    }

    /// Entries in display order, ready for evaluation.
    #[must_use]
    pub fn to_raw_skills(&self) -> Vec<RawSkill> {
        self.entries().map(|(_, entry)| entry.clone()).collect()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` when the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
