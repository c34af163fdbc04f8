//! Shared test fixtures and a scripted mock submission backend.

#![allow(dead_code, unused_imports)]

use std::sync::Mutex;

use async_trait::async_trait;

use regform::form::{Address, FormValues, Gender, Hobby};
use regform::submit::{SubmitCall, SubmitError, SubmitResponse};

/// Values that pass every validation rule.
pub fn valid_values() -> FormValues {
    FormValues {
        first_name: "Jo".to_string(),
        last_name: "Doe".to_string(),
        email: "jo@x.com".to_string(),
        age: 20,
        gender: Gender::Male,
        address: Address {
            city: "NYC".to_string(),
            state: "NY".to_string(),
        },
        hobbies: vec![Hobby {
            name: "chess".to_string(),
        }],
        subscribe: false,
        referral: String::new(),
        ..FormValues::default()
    }
}

/// Scripted outcome for one `MockApi` call.
pub enum MockOutcome {
    Accept,
    Reject(&'static str),
}

/// Submission backend that pops pre-scripted outcomes and records every
/// payload it was called with.
pub struct MockApi {
    script: Mutex<Vec<MockOutcome>>,
    calls: Mutex<Vec<FormValues>>,
}

impl MockApi {
    pub fn new(script: Vec<MockOutcome>) -> Self {
        Self {
            script: Mutex::new(script),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn accepting() -> Self {
        Self::new(vec![MockOutcome::Accept])
    }

    pub fn rejecting(message: &'static str) -> Self {
        Self::new(vec![MockOutcome::Reject(message)])
    }

    /// Payloads received so far.
    pub fn calls(&self) -> Vec<FormValues> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl SubmitCall for MockApi {
    async fn submit(&self, values: &FormValues) -> Result<SubmitResponse, SubmitError> {
        self.calls.lock().unwrap().push(values.clone());
        let mut script = self.script.lock().unwrap();
        assert!(!script.is_empty(), "MockApi called more times than scripted");
        match script.remove(0) {
            MockOutcome::Accept => Ok(SubmitResponse {
                data: values.clone(),
            }),
            MockOutcome::Reject(message) => Err(SubmitError::new(message)),
        }
    }
}
