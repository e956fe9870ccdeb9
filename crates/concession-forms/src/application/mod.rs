//! Application layer
//!
//! Use case orchestration over the form session aggregate.

pub mod availability;
pub mod commands;
pub mod dto;
pub mod registry;
pub mod side_channel;

pub use availability::SlotAvailabilityResolver;
pub use commands::{ConcessionService, SubmissionCoordinator};
pub use dto::{ChangeFieldCommand, SessionView};
pub use registry::{SessionHandle, SessionRegistry};
pub use side_channel::{best_effort, Delivery};
