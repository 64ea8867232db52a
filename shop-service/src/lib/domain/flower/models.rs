use std::fmt;

use rust_decimal::Decimal;

use crate::domain::flower::errors::ColorError;
use crate::domain::flower::errors::FlowerNameError;
use crate::domain::flower::errors::PriceError;

/// Catalog item.
///
/// Immutable once added; lives as long as the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flower {
    pub id: FlowerId,
    pub name: FlowerName,
    pub color: Color,
    pub price: Price,
}

/// Sequential catalog identifier, assigned by the catalog starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlowerId(pub u64);

impl FlowerId {
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Identifier following this one.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for FlowerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Non-empty flower name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowerName(String);

impl FlowerName {
    /// # Errors
    /// * `Empty` - Name is empty or whitespace only
    pub fn new(name: String) -> Result<Self, FlowerNameError> {
        if name.trim().is_empty() {
            return Err(FlowerNameError::Empty);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FlowerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Non-empty color label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Color(String);

impl Color {
    /// # Errors
    /// * `Empty` - Color is empty or whitespace only
    pub fn new(color: String) -> Result<Self, ColorError> {
        if color.trim().is_empty() {
            return Err(ColorError::Empty);
        }
        Ok(Self(color))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Decimal price between zero and `Price::MAX` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(Decimal);

impl Price {
    /// Largest accepted price (one billion).
    pub const MAX: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

    /// # Errors
    /// * `Negative` - Amount is below zero
    /// * `TooLarge` - Amount is above `Price::MAX`
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount < Decimal::ZERO {
            return Err(PriceError::Negative(amount));
        }
        if amount > Self::MAX {
            return Err(PriceError::TooLarge(amount));
        }
        Ok(Self(amount))
    }

    /// Wrap an amount without range checks, for exercising arithmetic limits.
    #[cfg(test)]
    pub(crate) fn unchecked(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated input for adding a catalog item; the id is assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFlower {
    pub name: FlowerName,
    pub color: Color,
    pub price: Price,
}

impl NewFlower {
    pub fn new(name: FlowerName, color: Color, price: Price) -> Self {
        Self { name, color, price }
    }

    /// Attach the identifier assigned by the catalog.
    pub fn with_id(self, id: FlowerId) -> Flower {
        Flower {
            id,
            name: self.name,
            color: self.color,
            price: self.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_rejects_negative() {
        assert!(Price::new(Decimal::ZERO).is_ok());
        assert!(Price::new(Decimal::new(75, 1)).is_ok());
        assert_eq!(
            Price::new(Decimal::new(-1, 2)),
            Err(PriceError::Negative(Decimal::new(-1, 2)))
        );
    }

    #[test]
    fn test_price_upper_bound() {
        assert!(Price::new(Price::MAX).is_ok());

        let above = Price::MAX + Decimal::new(1, 2);
        assert_eq!(Price::new(above), Err(PriceError::TooLarge(above)));

        let huge = Decimal::from_str_exact("70000000000000000000000000000").unwrap();
        assert_eq!(Price::new(huge), Err(PriceError::TooLarge(huge)));
    }

    #[test]
    fn test_blank_name_and_color_rejected() {
        assert_eq!(FlowerName::new("  ".to_string()), Err(FlowerNameError::Empty));
        assert_eq!(Color::new(String::new()), Err(ColorError::Empty));
        assert_eq!(FlowerName::new("Rose".to_string()).unwrap().as_str(), "Rose");
    }
}
