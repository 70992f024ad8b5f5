//! # Stadium View
//!
//! A terminal client for the InStadium API: it renders the artist and
//! choreography collections as HTML tables and submits edits back.
//!
//! ## Features
//! - List artists and choreographies into table markup
//! - Create a choreography, update an artist, delete a choreography
//! - Server error messages surfaced in the page's error node
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (owns the page)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod markup;
pub mod messages;
pub mod models;
pub mod network;
pub mod page;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use error::ApiError;
pub use markup::render_table;
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{Artist, Choreography, Resource};
pub use network::{ApiClient, HttpTransport, NetworkActor, Transport};
pub use page::Page;
