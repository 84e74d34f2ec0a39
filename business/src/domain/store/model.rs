#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    pub id: i32,
    pub name: String,
}

impl Store {
    pub fn from_repository(id: i32, name: String) -> Self {
        Self { id, name }
    }
}
