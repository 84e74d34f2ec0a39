use bigdecimal::BigDecimal;
use sqlx::FromRow;

use business::domain::product::model::Product;

/// Row shape returned by every product stored function.
#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub product_id: i32,
    pub name: String,
    pub price: BigDecimal,
    pub provider: String,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(self.product_id, self.name, self.price, self.provider)
    }
}
