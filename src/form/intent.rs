//! Edit operations accepted by the form engine.

use super::path::{FieldPath, FieldValue};

/// A named mutation of the form values.
///
/// Every change to `FormValues` flows through one of these variants; the
/// engine applies them and nothing else writes the state.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEdit {
    /// Replace the scalar at `path` with `value`.
    SetField { path: FieldPath, value: FieldValue },
    /// Replace the name of the hobby at `index`.
    SetHobbyName { index: usize, name: String },
    /// Append an empty hobby entry at the end of the list.
    AddHobby,
    /// Remove the hobby at `index`. Rejected while only one entry remains.
    RemoveHobby { index: usize },
}
