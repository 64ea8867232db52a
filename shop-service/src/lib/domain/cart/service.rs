use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::aggregator;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::models::CartSummary;
use crate::domain::cart::ports::CartRepository;
use crate::domain::cart::ports::CartServicePort;
use crate::domain::flower::models::FlowerId;
use crate::domain::flower::ports::FlowerRepository;

/// Domain service implementation for the shopping cart.
///
/// Validation of the flower id and the append are two independent store
/// calls; there is no transaction spanning catalog and cart.
pub struct CartService<CR, FR>
where
    CR: CartRepository,
    FR: FlowerRepository,
{
    cart: Arc<CR>,
    catalog: Arc<FR>,
}

impl<CR, FR> CartService<CR, FR>
where
    CR: CartRepository,
    FR: FlowerRepository,
{
    pub fn new(cart: Arc<CR>, catalog: Arc<FR>) -> Self {
        Self { cart, catalog }
    }
}

#[async_trait]
impl<CR, FR> CartServicePort for CartService<CR, FR>
where
    CR: CartRepository,
    FR: FlowerRepository,
{
    async fn add_item(&self, flower_id: FlowerId) -> Result<(), CartError> {
        if self.catalog.get(flower_id).is_none() {
            return Err(CartError::FlowerNotFound(flower_id));
        }

        self.cart.add(flower_id);
        tracing::info!(flower_id = %flower_id, "Item added to cart");

        Ok(())
    }

    async fn get_cart(&self) -> Result<CartSummary, CartError> {
        let entries = self.cart.list_all();
        let catalog = self.catalog.list_all();

        aggregator::compute(&entries, &catalog)
    }
}
