//! Network actor - runs API calls in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::error::ApiError;
use crate::messages::network::{Operation, OperationKind};
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::{Artist, Choreography};
use crate::network::client::{ApiClient, Transport};

/// Network actor that executes operations as they arrive.
///
/// Every operation gets its own task; responses go back in completion order.
pub struct NetworkActor<T> {
    client: ApiClient<T>,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl<T: Transport> NetworkActor<T> {
    pub fn new(client: ApiClient<T>, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::Execute { id, operation }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                let kind = operation.kind();
                                tracing::info!(id, operation = kind.as_str(), "Executing operation");
                                let result = execute(&client, id, operation).await;
                                tracing::info!(id, operation = kind.as_str(), "Operation completed");
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => break,
                    }
                }

                // Clean up completed tasks
                Some(result) = self.active_requests.join_next() => {
                    if let Err(e) = result {
                        tracing::error!(error = %e, "Operation task failed");
                    }
                }
            }
        }
    }
}

/// Run one operation to its response message
pub async fn execute<T: Transport>(client: &ApiClient<T>, id: u64, operation: Operation) -> NetworkResponse {
    let kind = operation.kind();
    match operation {
        Operation::ListArtists => match client.list::<Artist>().await {
            Ok(items) => NetworkResponse::Artists { id, items },
            Err(error) => NetworkResponse::Failed { id, kind, error },
        },
        Operation::ListChoreographies => match client.list::<Choreography>().await {
            Ok(items) => NetworkResponse::Choreographies { id, items },
            Err(error) => NetworkResponse::Failed { id, kind, error },
        },
        Operation::CreateChoreography(choreography) => {
            finished(id, kind, client.create(&choreography).await)
        }
        Operation::UpdateArtist { old_unique_name, artist } => {
            finished(id, kind, client.update(&old_unique_name, &artist).await)
        }
        Operation::DeleteChoreography { old_name } => {
            finished(id, kind, client.delete::<Choreography>(&old_name).await)
        }
    }
}

fn finished(id: u64, kind: OperationKind, outcome: Result<u16, ApiError>) -> NetworkResponse {
    match outcome {
        Ok(status) => NetworkResponse::Done { id, kind, status },
        Err(error) => NetworkResponse::Failed { id, kind, error },
    }
}
