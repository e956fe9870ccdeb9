//! Domain module
//!
//! Form rules, free of I/O. Everything here runs against a session passed
//! in by reference.

pub mod aggregates;
pub mod events;
pub mod services;
pub mod value_objects;

pub use aggregates::*;
pub use events::*;
pub use services::*;
pub use value_objects::*;
