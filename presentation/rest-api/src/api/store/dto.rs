use poem_openapi::Object;

use business::domain::store::model::Store;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct StoreDto {
    pub store_id: i32,
    pub name: String,
}

impl From<Store> for StoreDto {
    fn from(store: Store) -> Self {
        Self {
            store_id: store.id,
            name: store.name,
        }
    }
}
