use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::User;
use crate::inbound::http::middleware::AuthenticatedUser;

pub async fn profile(
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<ProfileResponseData>, ApiError> {
    Ok(ApiSuccess::new(StatusCode::OK, (&user).into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileResponseData {
    pub username: String,
    pub email: String,
}

impl From<&User> for ProfileResponseData {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
        }
    }
}
