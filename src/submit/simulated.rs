//! Stand-in for the real network layer.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

use crate::form::FormValues;

use super::traits::{SubmitCall, SubmitError, SubmitResponse};

/// Message carried by every simulated server failure.
pub const SERVER_ERROR_MESSAGE: &str = "Server error occured, Please try again later";

type Decider = Box<dyn Fn() -> bool + Send + Sync>;

/// Simulated submission backend.
///
/// Sleeps for the configured delay, then succeeds or fails according to a
/// caller-supplied decision closure: the driver binary plugs in a coin
/// flip to mimic a flaky server, tests plug in fixed outcomes.
pub struct SimulatedApi {
    delay: Duration,
    decide: Decider,
}

impl SimulatedApi {
    /// Backend whose outcome is decided by `decide` (`true` = accept).
    pub fn new(delay: Duration, decide: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        Self {
            delay,
            decide: Box::new(decide),
        }
    }

    /// Backend that accepts every submission after `delay`.
    pub fn always_succeeds(delay: Duration) -> Self {
        Self::new(delay, || true)
    }

    /// Backend that rejects every submission after `delay`.
    pub fn always_fails(delay: Duration) -> Self {
        Self::new(delay, || false)
    }
}

impl fmt::Debug for SimulatedApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulatedApi")
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl SubmitCall for SimulatedApi {
    async fn submit(&self, values: &FormValues) -> Result<SubmitResponse, SubmitError> {
        tokio::time::sleep(self.delay).await;
        if (self.decide)() {
            Ok(SubmitResponse {
                data: values.clone(),
            })
        } else {
            Err(SubmitError::new(SERVER_ERROR_MESSAGE))
        }
    }
}
