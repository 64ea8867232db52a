use parking_lot::RwLock;

use crate::domain::cart::ports::CartRepository;
use crate::domain::flower::models::FlowerId;

/// In-memory cart holding flower ids in the order they were added.
#[derive(Debug, Default)]
pub struct InMemoryCartRepository {
    entries: RwLock<Vec<FlowerId>>,
}

impl InMemoryCartRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartRepository for InMemoryCartRepository {
    fn add(&self, flower_id: FlowerId) {
        self.entries.write().push(flower_id);
    }

    fn list_all(&self) -> Vec<FlowerId> {
        self.entries.read().clone()
    }
}
