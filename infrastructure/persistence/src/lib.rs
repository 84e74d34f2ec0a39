pub mod db;
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod store {
    pub mod associations;
    pub mod entity;
    pub mod repository;
}
