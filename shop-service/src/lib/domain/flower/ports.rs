use async_trait::async_trait;

use crate::domain::flower::errors::FlowerError;
use crate::domain::flower::models::Flower;
use crate::domain::flower::models::FlowerId;
use crate::domain::flower::models::NewFlower;

/// Port for catalog service operations.
#[async_trait]
pub trait FlowerServicePort: Send + Sync + 'static {
    /// Add an item to the catalog.
    ///
    /// # Returns
    /// The stored flower with its assigned id
    async fn add_flower(&self, flower: NewFlower) -> Result<Flower, FlowerError>;

    /// All catalog items in insertion order.
    async fn list_flowers(&self) -> Vec<Flower>;
}

/// Storage operations for the flower catalog.
pub trait FlowerRepository: Send + Sync + 'static {
    /// Store a new flower under the next sequential id.
    ///
    /// Id assignment and insertion happen atomically: concurrent adds never
    /// receive the same id and leave no gaps.
    fn add(&self, flower: NewFlower) -> Flower;

    /// Look up a flower by id.
    fn get(&self, id: FlowerId) -> Option<Flower>;

    /// Snapshot of all flowers in insertion order.
    fn list_all(&self) -> Vec<Flower>;
}
