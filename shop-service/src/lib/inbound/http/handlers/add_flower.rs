use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::flower::errors::FlowerError;
use crate::domain::flower::models::Color;
use crate::domain::flower::models::FlowerName;
use crate::domain::flower::models::NewFlower;
use crate::domain::flower::models::Price;
use crate::domain::flower::ports::FlowerServicePort;
use crate::inbound::http::router::AppState;

pub async fn add_flower(
    State(state): State<AppState>,
    Json(body): Json<AddFlowerRequest>,
) -> Result<ApiSuccess<AddFlowerResponseData>, ApiError> {
    let flower = state
        .flower_service
        .add_flower(body.try_into_new_flower()?)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        AddFlowerResponseData {
            id: flower.id.value(),
        },
    ))
}

/// HTTP request body for adding a catalog item (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddFlowerRequest {
    name: String,
    color: String,
    price: Decimal,
}

impl AddFlowerRequest {
    fn try_into_new_flower(self) -> Result<NewFlower, FlowerError> {
        Ok(NewFlower::new(
            FlowerName::new(self.name)?,
            Color::new(self.color)?,
            Price::new(self.price)?,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddFlowerResponseData {
    pub id: u64,
}
