//! Network layer - API call execution
//!
//! The Network actor receives operation commands and sends back responses.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
pub use client::{ApiClient, HttpTransport, Transport};
