//! Form value containers and the submission flag.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Gender selection. `Unset` is the placeholder option and fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Unset,
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

/// Nested address block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub state: String,
}

/// A single hobby entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Hobby {
    pub name: String,
}

/// The single source of truth for the registration form.
///
/// Initialized once when the form is created; mutated only through the
/// engine's named edit operations. The hobby list never drops below one
/// entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: u32,
    pub gender: Gender,
    pub address: Address,
    pub hobbies: Vec<Hobby>,
    pub start_date: NaiveDate,
    pub subscribe: bool,
    pub referral: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            age: 18,
            gender: Gender::Unset,
            address: Address::default(),
            hobbies: vec![Hobby::default()],
            start_date: chrono::Local::now().date_naive(),
            subscribe: false,
            referral: String::new(),
        }
    }
}

/// Whether a submit attempt is currently being driven.
///
/// The engine exposes this so the rendering layer can disable re-submission
/// while a call is in flight; the engine itself does not queue or reject
/// overlapping attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmissionState {
    pub is_submitting: bool,
}
