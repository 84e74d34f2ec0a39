use sqlx::FromRow;

use business::domain::store::model::Store;

#[derive(Debug, FromRow)]
pub struct StoreEntity {
    pub store_id: i32,
    pub name: String,
}

impl StoreEntity {
    pub fn into_domain(self) -> Store {
        Store::from_repository(self.store_id, self.name)
    }
}
