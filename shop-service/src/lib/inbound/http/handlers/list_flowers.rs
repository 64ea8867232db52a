use axum::extract::State;
use axum::http::StatusCode;
use rust_decimal::Decimal;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::flower::models::Flower;
use crate::domain::flower::ports::FlowerServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_flowers(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<FlowerData>>, ApiError> {
    let flowers = state.flower_service.list_flowers().await;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        flowers.iter().map(FlowerData::from).collect(),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowerData {
    pub id: u64,
    pub name: String,
    pub color: String,
    pub price: Decimal,
}

impl From<&Flower> for FlowerData {
    fn from(flower: &Flower) -> Self {
        Self {
            id: flower.id.value(),
            name: flower.name.as_str().to_string(),
            color: flower.color.as_str().to_string(),
            price: flower.price.amount(),
        }
    }
}
