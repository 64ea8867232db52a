use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Form;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::cart::ports::CartServicePort;
use crate::domain::flower::models::FlowerId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn add_cart_item(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    Form(form): Form<AddCartItemForm>,
) -> Result<ApiSuccess<AddCartItemResponseData>, ApiError> {
    let flower_id = FlowerId(form.flower_id);

    state.cart_service.add_item(flower_id).await?;
    tracing::debug!(email = %user.email, flower_id = %flower_id, "Cart updated");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        AddCartItemResponseData {
            message: "Item added to cart".to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddCartItemForm {
    flower_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddCartItemResponseData {
    pub message: String,
}
