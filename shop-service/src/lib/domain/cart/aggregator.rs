//! Cart aggregation.
//!
//! Resolves raw cart entries against a catalog snapshot. Entries whose
//! flower is no longer in the catalog are skipped: they are neither listed
//! nor priced. The total is accumulated in cart insertion order with exact
//! decimal arithmetic, so the same cart always yields the same total.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::models::CartLine;
use crate::domain::cart::models::CartSummary;
use crate::domain::flower::models::Flower;
use crate::domain::flower::models::FlowerId;

/// Compute cart lines and total price.
///
/// # Arguments
/// * `entries` - Cart entries in insertion order (duplicates are separate units)
/// * `catalog` - Catalog snapshot to resolve entries against
///
/// # Errors
/// * `TotalOverflow` - The sum does not fit in a `Decimal`
pub fn compute(entries: &[FlowerId], catalog: &[Flower]) -> Result<CartSummary, CartError> {
    let index: HashMap<FlowerId, &Flower> =
        catalog.iter().map(|flower| (flower.id, flower)).collect();

    let mut items = Vec::with_capacity(entries.len());
    let mut total = Decimal::ZERO;

    for id in entries {
        let Some(flower) = index.get(id) else {
            tracing::debug!(flower_id = %id, "Skipping cart entry for missing flower");
            continue;
        };

        total = total
            .checked_add(flower.price.amount())
            .ok_or(CartError::TotalOverflow)?;
        items.push(CartLine {
            id: flower.id,
            name: flower.name.clone(),
            price: flower.price,
        });
    }

    Ok(CartSummary { items, total })
}
