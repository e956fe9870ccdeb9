//! Infrastructure layer
//!
//! Adapters for the outbound ports.

pub mod clock;
pub mod persistence;
pub mod postgrest;
pub mod webhook;

pub use clock::{FixedClock, SystemClock};
pub use persistence::InMemoryConcessionStore;
pub use postgrest::PostgrestStore;
pub use webhook::{HttpWorkflowNotifier, NoOpNotifier};
