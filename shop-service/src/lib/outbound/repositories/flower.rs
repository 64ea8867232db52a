use parking_lot::RwLock;

use crate::domain::flower::models::Flower;
use crate::domain::flower::models::FlowerId;
use crate::domain::flower::models::NewFlower;
use crate::domain::flower::ports::FlowerRepository;

/// In-memory flower catalog.
///
/// Flowers are kept in insertion order, which is also ascending id order.
#[derive(Debug, Default)]
pub struct InMemoryFlowerRepository {
    catalog: RwLock<Catalog>,
}

#[derive(Debug, Default)]
struct Catalog {
    flowers: Vec<Flower>,
    last_id: u64,
}

impl InMemoryFlowerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlowerRepository for InMemoryFlowerRepository {
    fn add(&self, flower: NewFlower) -> Flower {
        let mut catalog = self.catalog.write();

        let id = FlowerId(catalog.last_id).next();
        debug_assert!(
            catalog.flowers.last().map_or(true, |last| last.id < id),
            "flower ids must be strictly increasing"
        );

        let flower = flower.with_id(id);
        catalog.last_id = id.value();
        catalog.flowers.push(flower.clone());

        flower
    }

    fn get(&self, id: FlowerId) -> Option<Flower> {
        let catalog = self.catalog.read();

        catalog
            .flowers
            .binary_search_by_key(&id, |flower| flower.id)
            .ok()
            .map(|index| catalog.flowers[index].clone())
    }

    fn list_all(&self) -> Vec<Flower> {
        self.catalog.read().flowers.clone()
    }
}
