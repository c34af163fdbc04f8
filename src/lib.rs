//! regform: a typed state engine for a multi-field registration form.
//!
//! The engine owns the form values, applies named edit operations
//! (including nested-address and hobby-list edits), runs the validation
//! pass on submit, and drives a simulated asynchronous submission to its
//! terminal outcome. The rendering layer is an external collaborator: it
//! reads values, errors, and the submitting flag, and feeds edits back in.

pub mod config;
pub mod form;
pub mod logging;
pub mod submit;
