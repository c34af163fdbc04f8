//! Typed addressing for (possibly nested) form fields.

use std::fmt;

use chrono::NaiveDate;

use super::state::Gender;

/// Address sub-fields reachable through [`FieldPath::Address`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    City,
    State,
}

/// A location inside [`FormValues`](super::state::FormValues).
///
/// Replaces stringly-typed "address.city" / "hobbies[2].name" addressing
/// with a closed enum, so the set of editable fields is checked at compile
/// time. The `Display` form reproduces the dotted/bracketed notation for
/// logs and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPath {
    FirstName,
    LastName,
    Email,
    Age,
    Gender,
    Address(AddressField),
    /// The name of the hobby at this position.
    Hobby(usize),
    StartDate,
    Subscribe,
    Referral,
}

impl FieldPath {
    /// Which [`FieldValue`] variant this field accepts, for mismatch errors.
    pub(crate) fn expected_kind(&self) -> &'static str {
        match self {
            Self::Age => "integer",
            Self::Gender => "gender",
            Self::StartDate => "date",
            Self::Subscribe => "flag",
            _ => "text",
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstName => f.write_str("firstName"),
            Self::LastName => f.write_str("lastName"),
            Self::Email => f.write_str("email"),
            Self::Age => f.write_str("age"),
            Self::Gender => f.write_str("gender"),
            Self::Address(AddressField::City) => f.write_str("address.city"),
            Self::Address(AddressField::State) => f.write_str("address.state"),
            Self::Hobby(idx) => write!(f, "hobbies[{}].name", idx),
            Self::StartDate => f.write_str("startDate"),
            Self::Subscribe => f.write_str("subscribe"),
            Self::Referral => f.write_str("referral"),
        }
    }
}

/// The scalar payload accepted by a field edit.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Int(u32),
    Gender(Gender),
    Date(NaiveDate),
    Flag(bool),
}
