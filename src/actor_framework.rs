use std::fmt::{Debug, Display};
use std::hash::Hash;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument};

use crate::domain::{AddOutcome, Inventory};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any record must implement to be held by an [`Inventory`] and
/// served by a [`ResourceActor`].
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Get the key of the record
    fn id(&self) -> &Self::Id;

    /// Fold a later record carrying the same key into this one.
    fn merge(&mut self, incoming: Self);

    /// Stock value contributed by this record.
    fn value(&self) -> f64;
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Add {
        item: T,
        respond_to: Response<AddOutcome>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    TotalValue {
        respond_to: Response<f64>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Owns one [`Inventory`] for the lifetime of a session. Requests are applied
/// strictly in arrival order.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    inventory: Inventory<T>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            inventory: Inventory::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Serves requests until every client handle has been dropped.
    #[instrument(name = "inventory_service", skip(self))]
    pub async fn run(mut self) {
        info!("Inventory service starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Add { item, respond_to } => {
                    self.handle_add(item, respond_to);
                }
                ResourceRequest::List { respond_to } => {
                    self.handle_list(respond_to);
                }
                ResourceRequest::TotalValue { respond_to } => {
                    self.handle_total_value(respond_to);
                }
            }
        }
        info!(records = self.inventory.len(), "Inventory service stopped");
    }

    #[instrument(fields(item_id = %item.id()), skip(self, item, respond_to))]
    fn handle_add(&mut self, item: T, respond_to: Response<AddOutcome>) {
        debug!("Processing add request");
        let outcome = self.inventory.add(item);
        match outcome {
            AddOutcome::Inserted => info!("Record inserted"),
            AddOutcome::Merged => info!("Quantity merged into existing record"),
        }
        let _ = respond_to.send(Ok(outcome));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list(&self, respond_to: Response<Vec<T>>) {
        debug!("Processing list request");
        let items = self.inventory.list();
        info!(record_count = items.len(), "Listed records");
        let _ = respond_to.send(Ok(items));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_total_value(&self, respond_to: Response<f64>) {
        debug!("Processing total_value request");
        let total = self.inventory.total_value();
        info!(total, "Computed total value");
        let _ = respond_to.send(Ok(total));
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn add(&self, item: T) -> Result<AddOutcome, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Add { item, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::List { respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn total_value(&self) -> Result<f64, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::TotalValue { respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Crate {
        label: u32,
        units: u32,
        unit_cost: f64,
    }

    impl Entity for Crate {
        type Id = u32;

        fn id(&self) -> &u32 { &self.label }

        fn merge(&mut self, incoming: Crate) {
            self.units += incoming.units;
        }

        fn value(&self) -> f64 {
            self.unit_cost * f64::from(self.units)
        }
    }

    // --- Test ---

    #[tokio::test]
    async fn test_resource_actor_add_list_total() {
        let (actor, client) = ResourceActor::new(10);
        let handle = tokio::spawn(actor.run());

        // 1. Insert
        let first = client.add(Crate { label: 7, units: 2, unit_cost: 1.5 }).await.unwrap();
        assert_eq!(first, AddOutcome::Inserted);

        // 2. Merge into the same key
        let second = client.add(Crate { label: 7, units: 4, unit_cost: 100.0 }).await.unwrap();
        assert_eq!(second, AddOutcome::Merged);

        // Verify state
        let items = client.list().await.unwrap();
        assert_eq!(items, vec![Crate { label: 7, units: 6, unit_cost: 1.5 }]);
        assert_eq!(client.total_value().await.unwrap(), 9.0);

        // 3. Dropping the last client stops the actor
        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_client_reports_closed_actor() {
        let (actor, client) = ResourceActor::<Crate>::new(1);
        drop(actor);

        let result = client.list().await;
        assert_eq!(result, Err(FrameworkError::ActorClosed));
    }
}
