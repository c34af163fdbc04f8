//! The form state engine: applies edits and drives the submit state machine.

use uuid::Uuid;

use crate::submit::{SubmitCall, SubmitResponse};

use super::errors::{EditError, FormErrors};
use super::intent::FormEdit;
use super::path::{AddressField, FieldPath, FieldValue};
use super::state::{FormValues, Hobby, SubmissionState};
use super::validate::validate;

/// Terminal result of one submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed. The field errors are stored on the engine and the
    /// external call was never made.
    Invalid,
    /// The external call accepted the values.
    Accepted(SubmitResponse),
    /// The external call rejected. Its message is stored as the root error.
    Rejected,
}

/// Owns the form state.
///
/// The rendering layer reads `values`, `errors`, and `is_submitting`, and
/// feeds [`FormEdit`]s and submit triggers back in; it holds no state of
/// its own. Single logical writer: at most one submission is expected to be
/// in flight at a time, which the caller enforces by checking
/// `is_submitting`.
#[derive(Debug, Default)]
pub struct FormEngine {
    values: FormValues,
    errors: FormErrors,
    submission: SubmissionState,
}

impl FormEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from pre-filled values instead of the mount defaults.
    pub fn with_values(values: FormValues) -> Self {
        Self {
            values,
            errors: FormErrors::default(),
            submission: SubmissionState::default(),
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_submitting
    }

    /// Apply a single edit operation.
    ///
    /// Edits never run validation and never clear previously stored errors;
    /// errors refresh wholesale on the next submit. The state is unchanged
    /// when an error is returned.
    pub fn apply(&mut self, edit: FormEdit) -> Result<(), EditError> {
        match edit {
            FormEdit::SetField { path, value } => self.write_scalar(path, value),
            FormEdit::SetHobbyName { index, name } => {
                self.write_scalar(FieldPath::Hobby(index), FieldValue::Text(name))
            }
            FormEdit::AddHobby => {
                self.values.hobbies.push(Hobby::default());
                Ok(())
            }
            FormEdit::RemoveHobby { index } => {
                let len = self.values.hobbies.len();
                if index >= len {
                    return Err(EditError::HobbyIndexOutOfRange { index, len });
                }
                if len == 1 {
                    return Err(EditError::LastHobby);
                }
                self.values.hobbies.remove(index);
                Ok(())
            }
        }
    }

    /// Replace the value at `path`, leaving every sibling untouched.
    pub fn set_field(&mut self, path: FieldPath, value: FieldValue) -> Result<(), EditError> {
        self.apply(FormEdit::SetField { path, value })
    }

    /// Replace the name of the hobby at `index`.
    pub fn set_hobby_name(
        &mut self,
        index: usize,
        name: impl Into<String>,
    ) -> Result<(), EditError> {
        self.apply(FormEdit::SetHobbyName {
            index,
            name: name.into(),
        })
    }

    /// Append an empty hobby entry. There is no upper limit on the list.
    pub fn add_hobby(&mut self) {
        self.values.hobbies.push(Hobby::default());
    }

    /// Remove the hobby at `index`. Fails while only one entry remains, so
    /// the list never becomes empty.
    pub fn remove_hobby(&mut self, index: usize) -> Result<(), EditError> {
        self.apply(FormEdit::RemoveHobby { index })
    }

    fn write_scalar(&mut self, path: FieldPath, value: FieldValue) -> Result<(), EditError> {
        match (path, value) {
            (FieldPath::FirstName, FieldValue::Text(text)) => self.values.first_name = text,
            (FieldPath::LastName, FieldValue::Text(text)) => self.values.last_name = text,
            (FieldPath::Email, FieldValue::Text(text)) => self.values.email = text,
            (FieldPath::Age, FieldValue::Int(age)) => self.values.age = age,
            (FieldPath::Gender, FieldValue::Gender(gender)) => self.values.gender = gender,
            (FieldPath::Address(AddressField::City), FieldValue::Text(text)) => {
                self.values.address.city = text;
            }
            (FieldPath::Address(AddressField::State), FieldValue::Text(text)) => {
                self.values.address.state = text;
            }
            (FieldPath::Hobby(index), FieldValue::Text(text)) => {
                let len = self.values.hobbies.len();
                match self.values.hobbies.get_mut(index) {
                    Some(hobby) => hobby.name = text,
                    None => return Err(EditError::HobbyIndexOutOfRange { index, len }),
                }
            }
            (FieldPath::StartDate, FieldValue::Date(date)) => self.values.start_date = date,
            (FieldPath::Subscribe, FieldValue::Flag(flag)) => self.values.subscribe = flag,
            (FieldPath::Referral, FieldValue::Text(text)) => self.values.referral = text,
            (path, _) => {
                return Err(EditError::TypeMismatch {
                    path,
                    expected: path.expected_kind(),
                });
            }
        }
        Ok(())
    }

    /// Drive one submit attempt to completion.
    ///
    /// Clears all previously stored errors, raises the submitting flag,
    /// validates, and only on a clean pass invokes `call`. A rejection
    /// message lands verbatim under the root error key. The flag is lowered
    /// on every terminal path.
    pub async fn submit(&mut self, call: &dyn SubmitCall) -> SubmitOutcome {
        let attempt = Uuid::new_v4();
        self.errors = FormErrors::default();
        self.submission.is_submitting = true;
        // Single exit point: the flag comes back down whatever happened.
        let outcome = self.run_submit(attempt, call).await;
        self.submission.is_submitting = false;
        outcome
    }

    async fn run_submit(&mut self, attempt: Uuid, call: &dyn SubmitCall) -> SubmitOutcome {
        let errors = validate(&self.values);
        if !errors.is_empty() {
            tracing::debug!(attempt = %attempt, "validation failed, skipping submit call");
            self.errors = errors;
            return SubmitOutcome::Invalid;
        }

        match call.submit(&self.values).await {
            Ok(response) => {
                tracing::info!(attempt = %attempt, "submission accepted");
                SubmitOutcome::Accepted(response)
            }
            Err(err) => {
                tracing::warn!(attempt = %attempt, error = %err, "submission rejected");
                self.errors.root = Some(err.message);
                SubmitOutcome::Rejected
            }
        }
    }
}
