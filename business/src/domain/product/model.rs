use bigdecimal::BigDecimal;

use super::errors::ProductError;

/// Decimal places the price column keeps.
pub const PRICE_SCALE: i64 = 2;

/// Exclusive bound on the absolute price, the largest magnitude `NUMERIC(18, 2)` holds.
const PRICE_LIMIT: i64 = 10_000_000_000_000_000;

/// A catalog product as stored. The id is always assigned by storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: BigDecimal,
    pub provider: String,
}

/// A product that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: BigDecimal,
    pub provider: String,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: i32, name: String, price: BigDecimal, provider: String) -> Self {
        Self {
            id,
            name,
            price,
            provider,
        }
    }
}

impl NewProduct {
    pub fn new(name: impl Into<String>, price: BigDecimal, provider: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            provider: provider.into(),
        }
    }

    /// Attaches the id storage assigned on insert.
    pub fn into_product(self, id: i32) -> Product {
        Product::from_repository(id, self.name, self.price, self.provider)
    }
}

/// Rejects prices storage would round or could not hold, so a stored
/// product always reads back with the price it was written with.
pub fn check_price(price: &BigDecimal) -> Result<(), ProductError> {
    if price.with_scale(PRICE_SCALE) != *price || price.abs() >= BigDecimal::from(PRICE_LIMIT) {
        return Err(ProductError::InvalidPrice);
    }
    Ok(())
}

/// Removes repeated store ids while keeping the first occurrence order.
pub fn distinct_store_ids(store_ids: &[i32]) -> Vec<i32> {
    let mut seen = Vec::with_capacity(store_ids.len());
    for id in store_ids {
        if !seen.contains(id) {
            seen.push(*id);
        }
    }
    seen
}
