pub mod errors;
pub mod service;

pub use errors::TokenError;
pub use service::TokenService;
