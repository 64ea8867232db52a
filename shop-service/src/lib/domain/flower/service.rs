use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::flower::errors::FlowerError;
use crate::domain::flower::models::Color;
use crate::domain::flower::models::Flower;
use crate::domain::flower::models::FlowerName;
use crate::domain::flower::models::NewFlower;
use crate::domain::flower::models::Price;
use crate::domain::flower::ports::FlowerRepository;
use crate::domain::flower::ports::FlowerServicePort;

/// Domain service implementation for the flower catalog.
pub struct FlowerService<FR>
where
    FR: FlowerRepository,
{
    repository: Arc<FR>,
}

impl<FR> FlowerService<FR>
where
    FR: FlowerRepository,
{
    pub fn new(repository: Arc<FR>) -> Self {
        Self { repository }
    }

    /// Stock the catalog with the shop's starter range (Rose and Tulip).
    ///
    /// # Returns
    /// The flowers that were added
    pub fn seed_default_catalog(&self) -> Result<Vec<Flower>, FlowerError> {
        let defaults = [
            ("Rose", "Red", Decimal::new(100, 1)),
            ("Tulip", "Yellow", Decimal::new(75, 1)),
        ];

        defaults
            .into_iter()
            .map(|(name, color, price)| {
                let flower = NewFlower::new(
                    FlowerName::new(name.to_string())?,
                    Color::new(color.to_string())?,
                    Price::new(price)?,
                );
                Ok(self.repository.add(flower))
            })
            .collect()
    }
}

#[async_trait]
impl<FR> FlowerServicePort for FlowerService<FR>
where
    FR: FlowerRepository,
{
    async fn add_flower(&self, flower: NewFlower) -> Result<Flower, FlowerError> {
        let flower = self.repository.add(flower);

        tracing::info!(
            flower_id = %flower.id,
            name = %flower.name,
            price = %flower.price,
            "Flower added to catalog"
        );

        Ok(flower)
    }

    async fn list_flowers(&self) -> Vec<Flower> {
        self.repository.list_all()
    }
}
