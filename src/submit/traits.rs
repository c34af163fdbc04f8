//! Core trait for the external submit call.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::form::FormValues;

/// The accepted payload, echoed back by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub data: FormValues,
}

/// A rejected submission.
///
/// The engine treats every rejection uniformly and surfaces `message`
/// verbatim as the root error, regardless of content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SubmitError {
    pub message: String,
}

impl SubmitError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Asynchronous submission endpoint for validated form values.
///
/// The call either resolves or rejects exactly once; there is no timeout,
/// cancellation, or retry layer on top. Implementations decide what "the
/// server" does; the engine only interprets the outcome.
#[async_trait]
pub trait SubmitCall: Send + Sync {
    async fn submit(&self, values: &FormValues) -> Result<SubmitResponse, SubmitError>;
}
