//! Field identity, value, and validity types

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::rules::RuleViolation;

/// Identifies one of the six tracked form fields
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Cuisine,
    Message,
    Terms,
}

impl FieldId {
    /// All tracked fields, in form declaration order
    pub const ALL: [FieldId; 6] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Cuisine,
        FieldId::Message,
        FieldId::Terms,
    ];

    /// Wire identifier of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Cuisine => "cuisine",
            FieldId::Message => "message",
            FieldId::Terms => "terms",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Email => "Email",
            FieldId::Phone => "Phone",
            FieldId::Cuisine => "Favorite Cuisine",
            FieldId::Message => "Message",
            FieldId::Terms => "Terms and Conditions",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Current value of a form input
///
/// Text inputs and the cuisine select carry strings; the terms checkbox
/// carries a boolean.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn checked(value: bool) -> Self {
        FieldValue::Checked(value)
    }

    /// String content, if this is a text-ish value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Checked(_) => None,
        }
    }

    /// Checkbox state, if this is a boolean value
    pub fn as_checked(&self) -> Option<bool> {
        match self {
            FieldValue::Text(_) => None,
            FieldValue::Checked(b) => Some(*b),
        }
    }

    /// JSON representation used in submission records
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            FieldValue::Text(s) => serde_json::Value::String(s.clone()),
            FieldValue::Checked(b) => serde_json::Value::Bool(*b),
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Per-field validity state
///
/// Transitions: `Unvalidated` moves to `Valid` or `Invalid` on first
/// validation, then alternates between those two on every re-validation.
/// A field never returns to `Unvalidated`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Validity {
    Unvalidated,
    Valid,
    Invalid(RuleViolation),
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    /// Whether the field has been validated at least once
    pub fn is_validated(&self) -> bool {
        !matches!(self, Validity::Unvalidated)
    }
}
