use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use poem::Route;
use poem::test::TestClient;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::{ProductSearch, ProductSortField, SortOrder};
use business::domain::store::model::Store;
use business::domain::store::repository::StoreRepository;
use logger::TracingLogger;

use crate::setup::dependency_injection::DependencyContainer;
use crate::setup::server::routes;

#[derive(Default)]
struct CatalogState {
    last_id: i32,
    products: BTreeMap<i32, Product>,
    stores: BTreeMap<i32, Store>,
    /// (product_id, store_id)
    links: BTreeSet<(i32, i32)>,
}

impl CatalogState {
    /// Mirrors the foreign key on the association table.
    fn check_stores(&self, store_ids: &[i32]) -> Result<(), RepositoryError> {
        if store_ids.iter().all(|id| self.stores.contains_key(id)) {
            Ok(())
        } else {
            Err(RepositoryError::DatabaseError)
        }
    }

    fn link(&mut self, product_id: i32, store_ids: &[i32]) {
        for store_id in store_ids {
            self.links.insert((product_id, *store_id));
        }
    }
}

/// Product and store adapters sharing one in-memory database.
#[derive(Default)]
pub struct InMemoryCatalog {
    state: Mutex<CatalogState>,
    failing: AtomicBool,
}

impl InMemoryCatalog {
    pub fn with_stores(stores: &[(i32, &str)]) -> Arc<Self> {
        let catalog = Self::default();
        {
            let mut state = catalog.lock_unchecked();
            for (id, name) in stores {
                state
                    .stores
                    .insert(*id, Store::from_repository(*id, name.to_string()));
            }
        }
        Arc::new(catalog)
    }

    /// Makes every later call fail as if the database were unreachable.
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn product_count(&self) -> usize {
        self.lock_unchecked().products.len()
    }

    pub fn links(&self) -> Vec<(i32, i32)> {
        self.lock_unchecked().links.iter().copied().collect()
    }

    fn lock_unchecked(&self) -> MutexGuard<'_, CatalogState> {
        self.state.lock().unwrap()
    }

    fn lock(&self) -> Result<MutexGuard<'_, CatalogState>, RepositoryError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(RepositoryError::DatabaseError);
        }
        Ok(self.lock_unchecked())
    }
}

#[async_trait]
impl ProductRepository for InMemoryCatalog {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.lock()?.products.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Product, RepositoryError> {
        self.lock()?
            .products
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn search(&self, search: &ProductSearch) -> Result<Vec<Product>, RepositoryError> {
        let state = self.lock()?;
        let filter = search.name_filter.to_lowercase();
        let mut products: Vec<Product> = state
            .products
            .values()
            .filter(|p| p.name.to_lowercase().contains(&filter))
            .cloned()
            .collect();

        products.sort_by(|a, b| {
            let ordering = match search.sort_field {
                ProductSortField::ProductId => a.id.cmp(&b.id),
                ProductSortField::Name => a.name.cmp(&b.name),
                ProductSortField::Price => a.price.cmp(&b.price),
                ProductSortField::Provider => a.provider.cmp(&b.provider),
            };
            let ordering = match search.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            };
            ordering.then(a.id.cmp(&b.id))
        });

        Ok(products
            .into_iter()
            .skip(search.page.offset() as usize)
            .take(search.page.size() as usize)
            .collect())
    }

    async fn create(&self, product: &NewProduct, store_ids: &[i32]) -> Result<i32, RepositoryError> {
        let mut state = self.lock()?;
        state.check_stores(store_ids)?;

        state.last_id += 1;
        let id = state.last_id;
        state.products.insert(id, product.clone().into_product(id));
        state.link(id, store_ids);
        Ok(id)
    }

    async fn update(&self, product: &Product, store_ids: &[i32]) -> Result<(), RepositoryError> {
        let mut state = self.lock()?;
        state.check_stores(store_ids)?;
        if !state.products.contains_key(&product.id) {
            // The UPDATE touches no row; inserting links would break the foreign key.
            return if store_ids.is_empty() {
                Ok(())
            } else {
                Err(RepositoryError::DatabaseError)
            };
        }

        state.products.insert(product.id, product.clone());
        state.links.retain(|(product_id, _)| *product_id != product.id);
        state.link(product.id, store_ids);
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut state = self.lock()?;
        state.products.remove(&id);
        state.links.retain(|(product_id, _)| *product_id != id);
        Ok(())
    }
}

#[async_trait]
impl StoreRepository for InMemoryCatalog {
    async fn get_by_id(&self, id: i32) -> Result<Store, RepositoryError> {
        self.lock()?
            .stores
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_by_product(&self, product_id: i32) -> Result<Vec<Store>, RepositoryError> {
        let state = self.lock()?;
        Ok(state
            .links
            .iter()
            .filter(|(p, _)| *p == product_id)
            .filter_map(|(_, s)| state.stores.get(s).cloned())
            .collect())
    }

    async fn get_products(&self, store_id: i32) -> Result<Vec<Product>, RepositoryError> {
        let state = self.lock()?;
        if !state.stores.contains_key(&store_id) {
            return Err(RepositoryError::NotFound);
        }
        Ok(state
            .links
            .iter()
            .filter(|(_, s)| *s == store_id)
            .filter_map(|(p, _)| state.products.get(p).cloned())
            .collect())
    }
}

/// Catalog seeded with three stores.
pub fn seeded_catalog() -> Arc<InMemoryCatalog> {
    InMemoryCatalog::with_stores(&[(1, "Downtown"), (2, "Harbor"), (3, "Airport")])
}

pub fn test_client(catalog: Arc<InMemoryCatalog>) -> TestClient<Route> {
    let container =
        DependencyContainer::with_repositories(catalog.clone(), catalog, Arc::new(TracingLogger));
    TestClient::new(routes(container, "http://localhost"))
}
