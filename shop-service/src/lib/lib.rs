pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::user;
pub use inbound::http::router::create_router;
pub use inbound::http::router::AppState;
pub use outbound::repositories;
