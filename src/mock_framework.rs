//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_add`] or [`expect_total_value`] to assert behavior.

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use crate::domain::AddOutcome;
use tokio::sync::{mpsc, oneshot};

/// Creates a mock client and a receiver for asserting requests.
///
/// No `ResourceActor` is spawned: each request lands on `receiver`, where the
/// test inspects it and answers through the enclosed reply channel. Successes,
/// failures and dropped replies can all be simulated deterministically.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Add request
pub async fn expect_add<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T, oneshot::Sender<Result<AddOutcome, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Add { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<oneshot::Sender<Result<Vec<T>, FrameworkError>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a TotalValue request
pub async fn expect_total_value<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<oneshot::Sender<Result<f64, FrameworkError>>> {
    match receiver.recv().await {
        Some(ResourceRequest::TotalValue { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Product;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Product>(10);

        let add_task = tokio::spawn(async move {
            client.add(Product::new("A1", "Widget", 10.0, 2)).await
        });

        let (item, responder) = expect_add(&mut receiver).await.expect("Expected Add request");
        assert_eq!(item.id, "A1");
        responder.send(Ok(AddOutcome::Inserted)).unwrap();

        let result = add_task.await.unwrap();
        assert_eq!(result, Ok(AddOutcome::Inserted));
    }
}
