use axum::extract::State;
use axum::http::StatusCode;
use rust_decimal::Decimal;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::cart::models::CartLine;
use crate::domain::cart::models::CartSummary;
use crate::domain::cart::ports::CartServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_cart(
    State(state): State<AppState>,
) -> Result<ApiSuccess<CartResponseData>, ApiError> {
    let summary = state.cart_service.get_cart().await?;

    Ok(ApiSuccess::new(StatusCode::OK, summary.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartResponseData {
    pub items: Vec<CartLineData>,
    pub total_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineData {
    pub id: u64,
    pub name: String,
    pub price: Decimal,
}

impl From<&CartLine> for CartLineData {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id.value(),
            name: line.name.as_str().to_string(),
            price: line.price.amount(),
        }
    }
}

impl From<CartSummary> for CartResponseData {
    fn from(summary: CartSummary) -> Self {
        Self {
            items: summary.items.iter().map(CartLineData::from).collect(),
            total_price: summary.total,
        }
    }
}
