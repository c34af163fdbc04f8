//! The external submit contract and its simulated implementation.

mod simulated;
mod traits;

pub use simulated::{SimulatedApi, SERVER_ERROR_MESSAGE};
pub use traits::{SubmitCall, SubmitError, SubmitResponse};
