use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::models::CartSummary;
use crate::domain::flower::models::FlowerId;

/// Port for cart service operations.
#[async_trait]
pub trait CartServicePort: Send + Sync + 'static {
    /// Add one unit of a catalog flower to the cart.
    ///
    /// # Errors
    /// * `FlowerNotFound` - No catalog flower with this id
    async fn add_item(&self, flower_id: FlowerId) -> Result<(), CartError>;

    /// Current cart contents and total price.
    ///
    /// # Errors
    /// * `TotalOverflow` - The total cannot be represented
    async fn get_cart(&self) -> Result<CartSummary, CartError>;
}

/// Storage operations for the cart.
pub trait CartRepository: Send + Sync + 'static {
    /// Append an entry. Existence of the flower is not checked here.
    fn add(&self, flower_id: FlowerId);

    /// Snapshot of all entries, first added first.
    fn list_all(&self) -> Vec<FlowerId>;
}
