//! Network messages - communication between App and Network layers

use crate::error::ApiError;
use crate::models::{Artist, Choreography};

/// One API call the page can issue
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    ListArtists,
    ListChoreographies,
    CreateChoreography(Choreography),
    UpdateArtist { old_unique_name: String, artist: Artist },
    DeleteChoreography { old_name: String },
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::ListArtists => OperationKind::ListArtists,
            Operation::ListChoreographies => OperationKind::ListChoreographies,
            Operation::CreateChoreography(_) => OperationKind::CreateChoreography,
            Operation::UpdateArtist { .. } => OperationKind::UpdateArtist,
            Operation::DeleteChoreography { .. } => OperationKind::DeleteChoreography,
        }
    }
}

/// Operation tag carried back with its outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    ListArtists,
    ListChoreographies,
    CreateChoreography,
    UpdateArtist,
    DeleteChoreography,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::ListArtists => "list artists",
            OperationKind::ListChoreographies => "list choreographies",
            OperationKind::CreateChoreography => "create choreography",
            OperationKind::UpdateArtist => "update artist",
            OperationKind::DeleteChoreography => "delete choreography",
        }
    }
}

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Run an operation as an independent task
    Execute { id: u64, operation: Operation },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    Artists { id: u64, items: Vec<Artist> },
    Choreographies { id: u64, items: Vec<Choreography> },
    /// A mutation succeeded
    Done { id: u64, kind: OperationKind, status: u16 },
    Failed { id: u64, kind: OperationKind, error: ApiError },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Artists { id, .. } => *id,
            NetworkResponse::Choreographies { id, .. } => *id,
            NetworkResponse::Done { id, .. } => *id,
            NetworkResponse::Failed { id, .. } => *id,
        }
    }
}
