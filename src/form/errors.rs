//! Error containers: per-field validation errors and rejected edits.

use serde::Serialize;
use thiserror::Error;

use super::path::{AddressField, FieldPath};

/// Validation errors for the nested address block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddressErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl AddressErrors {
    pub fn is_empty(&self) -> bool {
        self.city.is_none() && self.state.is_none()
    }
}

/// Field-keyed error messages, plus a submission-level `root` entry.
///
/// Mirrors the shape of `FormValues`: nested paths resolve independently
/// and hobby errors are a sparse, position-indexed sequence. Absence of an
/// entry means the field passed.
///
/// This container is independent of the values: edits never clear it. It is
/// replaced wholesale at the start of each submit attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "AddressErrors::is_empty")]
    pub address: AddressErrors,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hobbies: Vec<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral: Option<String>,
    /// Submission-level error not tied to any field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
}

impl FormErrors {
    /// True when every field passed and no root error is stored.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.age.is_none()
            && self.gender.is_none()
            && self.address.is_empty()
            && self.hobbies.iter().all(Option::is_none)
            && self.referral.is_none()
            && self.root.is_none()
    }

    /// Look up the message stored for a field path, if any.
    pub fn get(&self, path: &FieldPath) -> Option<&str> {
        let slot = match path {
            FieldPath::FirstName => &self.first_name,
            FieldPath::LastName => &self.last_name,
            FieldPath::Email => &self.email,
            FieldPath::Age => &self.age,
            FieldPath::Gender => &self.gender,
            FieldPath::Address(AddressField::City) => &self.address.city,
            FieldPath::Address(AddressField::State) => &self.address.state,
            FieldPath::Hobby(idx) => {
                return self.hobbies.get(*idx).and_then(|slot| slot.as_deref());
            }
            // No validation rules target these fields.
            FieldPath::StartDate | FieldPath::Subscribe => return None,
            FieldPath::Referral => &self.referral,
        };
        slot.as_deref()
    }

    /// Record a hobby error at `idx`, growing the sparse sequence as needed.
    pub(crate) fn set_hobby(&mut self, idx: usize, message: &str) {
        if self.hobbies.len() <= idx {
            self.hobbies.resize(idx + 1, None);
        }
        self.hobbies[idx] = Some(message.to_string());
    }
}

/// A rejected edit operation. Form state is unchanged when one is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EditError {
    /// Hobby index outside the current sequence.
    #[error("hobby index {index} out of range (len {len})")]
    HobbyIndexOutOfRange { index: usize, len: usize },

    /// Removing the only remaining hobby entry is forbidden.
    #[error("cannot remove the last hobby entry")]
    LastHobby,

    /// The supplied value variant does not fit the addressed field.
    #[error("field '{path}' expects a {expected} value")]
    TypeMismatch {
        path: FieldPath,
        expected: &'static str,
    },
}
