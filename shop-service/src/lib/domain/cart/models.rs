use rust_decimal::Decimal;

use crate::domain::flower::models::FlowerId;
use crate::domain::flower::models::FlowerName;
use crate::domain::flower::models::Price;

/// One unit of a flower as shown in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub id: FlowerId,
    pub name: FlowerName,
    pub price: Price,
}

/// Cart contents resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    pub items: Vec<CartLine>,
    pub total: Decimal,
}
