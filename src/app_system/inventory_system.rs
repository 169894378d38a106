use tracing::{error, info};

use crate::actor_framework::ResourceActor;
use crate::clients::InventoryClient;
use crate::domain::Product;

/// Owns the inventory service for one session.
///
/// Starts the actor, hands out its client, and waits for it on shutdown.
pub struct InventorySystem {
    pub inventory_client: InventoryClient,
    handle: tokio::task::JoinHandle<()>,
}

impl InventorySystem {
    pub fn new(buffer_size: usize) -> Self {
        info!(buffer_size, "Starting inventory system");
        let (actor, resource_client) = ResourceActor::<Product>::new(buffer_size);
        let inventory_client = InventoryClient::new(resource_client);
        let handle = tokio::spawn(actor.run());

        Self {
            inventory_client,
            handle,
        }
    }

    /// Drops the client, which closes the channel, and waits for the actor.
    ///
    /// Clones of the client handed out elsewhere must be dropped first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down inventory system...");
        drop(self.inventory_client);

        if let Err(e) = self.handle.await {
            error!("Inventory actor failed: {:?}", e);
            return Err(format!("Inventory actor failed: {:?}", e));
        }

        info!("Inventory system shutdown complete.");
        Ok(())
    }
}
