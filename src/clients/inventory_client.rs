use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{AddOutcome, Product};
use crate::inventory_actor::InventoryError;

/// Client for interacting with the inventory actor.
///
/// Cheap to clone; this is the session context every front-end handler
/// receives.
#[derive(Clone)]
pub struct InventoryClient {
    inner: ResourceClient<Product>,
}

impl InventoryClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(fields(product_id = %product.id, quantity = product.quantity, brand = ?product.brand()), skip(self, product))]
    pub async fn add_product(&self, product: Product) -> Result<AddOutcome, InventoryError> {
        debug!("Sending request");
        self.inner.add(product).await.map_err(InventoryError::from)
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, InventoryError> {
        debug!("Sending request");
        self.inner.list().await.map_err(InventoryError::from)
    }

    #[instrument(skip(self))]
    pub async fn total_value(&self) -> Result<f64, InventoryError> {
        debug!("Sending request");
        self.inner.total_value().await.map_err(InventoryError::from)
    }
}
