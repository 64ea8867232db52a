use thiserror::Error;

use crate::domain::flower::models::FlowerId;

/// Error for cart operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("Flower not found: {0}")]
    FlowerNotFound(FlowerId),

    #[error("Cart total exceeds the representable range")]
    TotalOverflow,
}
