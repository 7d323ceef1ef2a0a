//! Recipients and the sending whitelist.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// Class assigned to recipients whose record has none.
pub const UNKNOWN_CLASS: &str = "Unknown";

/// A parent (or guardian) who receives notifications.
///
/// Field aliases accept the column names of the exported parent sheet
/// (`Parent`, `PhoneNumber`, `Class`) so exported rows import unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    /// Display name used in the salutation.
    #[serde(
        default,
        alias = "Parent",
        alias = "Name",
        deserialize_with = "deserialize_cell"
    )]
    pub name: String,

    /// Raw phone number as stored.
    #[serde(
        default,
        alias = "PhoneNumber",
        deserialize_with = "deserialize_cell"
    )]
    pub phone_number: String,

    /// Cohort grouping.
    #[serde(
        default = "default_class",
        alias = "Class",
        deserialize_with = "deserialize_class"
    )]
    pub class: String,
}

fn default_class() -> String {
    UNKNOWN_CLASS.to_string()
}

impl Recipient {
    /// Create a new recipient.
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        class: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
            class: class.into(),
        }
    }

    /// The phone number with surrounding whitespace removed.
    pub fn trimmed_number(&self) -> &str {
        self.phone_number.trim()
    }

    /// A recipient is addressable only if it has a non-blank number.
    pub fn is_addressable(&self) -> bool {
        !self.trimmed_number().is_empty()
    }
}

/// A spreadsheet cell as exported: text, a number, a boolean, or empty.
#[derive(Deserialize)]
#[serde(untagged)]
enum Cell {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Flag(bool),
    Empty(()),
}

impl Cell {
    /// Render as text; `None` for an empty cell. Whole floats drop the
    /// decimal part so phone numbers survive numeric export.
    fn into_text(self) -> Option<String> {
        match self {
            Cell::Text(s) => Some(s),
            Cell::Unsigned(n) => Some(n.to_string()),
            Cell::Signed(n) => Some(n.to_string()),
            Cell::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(format!("{:.0}", f)),
            Cell::Float(f) => Some(f.to_string()),
            Cell::Flag(b) => Some(b.to_string()),
            Cell::Empty(()) => None,
        }
    }
}

fn deserialize_cell<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Cell::deserialize(deserializer)?
        .into_text()
        .unwrap_or_default())
}

fn deserialize_class<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Cell::deserialize(deserializer)?
        .into_text()
        .unwrap_or_else(default_class))
}

/// Operator-maintained allow-list of numbers eligible for outbound sending.
///
/// The messaging sandbox only delivers to pre-approved numbers. Membership
/// is an exact match against a recipient's trimmed number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Whitelist {
    numbers: HashSet<String>,
}

impl Whitelist {
    /// Build a whitelist. Entries are trimmed; blank entries are dropped.
    pub fn new<I, S>(numbers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            numbers: numbers
                .into_iter()
                .map(|n| n.as_ref().trim().to_string())
                .filter(|n| !n.is_empty())
                .collect(),
        }
    }

    /// Check whether a (trimmed) number is allowed.
    pub fn contains(&self, number: &str) -> bool {
        self.numbers.contains(number)
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Whitelist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
