use rust_decimal::Decimal;
use thiserror::Error;

/// Error for FlowerName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FlowerNameError {
    #[error("Flower name must not be empty")]
    Empty,
}

/// Error for Color validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("Color must not be empty")]
    Empty,
}

/// Error for Price validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PriceError {
    #[error("Price must not be negative, got {0}")]
    Negative(Decimal),

    #[error("Price must not exceed {max}, got {0}", max = crate::domain::flower::models::Price::MAX)]
    TooLarge(Decimal),
}

/// Top-level error for catalog operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FlowerError {
    #[error("Invalid flower name: {0}")]
    InvalidName(#[from] FlowerNameError),

    #[error("Invalid color: {0}")]
    InvalidColor(#[from] ColorError),

    #[error("Invalid price: {0}")]
    InvalidPrice(#[from] PriceError),
}
