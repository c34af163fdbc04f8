//! The form state engine.
//!
//! ```text
//! FormEdit ──→ FormEngine ──→ FormValues / FormErrors ──→ rendering layer
//!    ↑                                                         │
//!    └─────────────────────────────────────────────────────────┘
//! ```
//!
//! - **FormValues**: the single source of truth for field contents
//! - **FormEdit**: named mutations (field edits, hobby add/remove)
//! - **FormEngine**: applies edits, runs the validation pass on submit, and
//!   drives the asynchronous submission to its terminal outcome

mod engine;
mod errors;
mod intent;
mod path;
mod state;
mod validate;

pub use engine::{FormEngine, SubmitOutcome};
pub use errors::{AddressErrors, EditError, FormErrors};
pub use intent::FormEdit;
pub use path::{AddressField, FieldPath, FieldValue};
pub use state::{Address, FormValues, Gender, Hobby, SubmissionState};
pub use validate::validate;
