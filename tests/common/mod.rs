#![allow(dead_code)]
use async_trait::async_trait;
use catalog_cache::cache::enums::cache_engine::CacheEngine;
use catalog_cache::cache::errors::CacheError;
use catalog_cache::cache::structs::cache_client::CacheClient;
use catalog_cache::cache::structs::cache_connector_memory::CacheConnectorMemory;
use catalog_cache::cache::structs::circuit_breaker::CircuitBreaker;
use catalog_cache::cache::structs::system_clock::SystemClock;
use catalog_cache::cache::traits::cache_backend::CacheBackend;
use catalog_cache::cache::traits::clock::Clock;
use catalog_cache::catalog::structs::average_rating::AverageRating;
use catalog_cache::catalog::structs::catalog::Catalog;
use catalog_cache::catalog::structs::category::Category;
use catalog_cache::catalog::structs::category_input::CategoryInput;
use catalog_cache::catalog::structs::product::Product;
use catalog_cache::catalog::structs::product_input::ProductInput;
use catalog_cache::catalog::structs::product_update::ProductUpdate;
use catalog_cache::catalog::structs::review::Review;
use catalog_cache::catalog::structs::review_input::ReviewInput;
use catalog_cache::catalog::structs::variant::Variant;
use catalog_cache::catalog::structs::variant_input::VariantInput;
use catalog_cache::config::structs::cache_ttl_config::CacheTtlConfig;
use catalog_cache::config::structs::catalog_config::CatalogConfig;
use catalog_cache::config::structs::circuit_breaker_config::CircuitBreakerConfig;
use catalog_cache::config::structs::database_config::DatabaseConfig;
use catalog_cache::database::errors::StoreError;
use catalog_cache::database::structs::database_connector::DatabaseConnector;
use catalog_cache::database::traits::catalog_store::CatalogStore;
use catalog_cache::database::traits::catalog_transaction::CatalogTransaction;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

/// Shared state of [`RecordingStore`] and its transactions.
#[derive(Default)]
pub struct RecordingState {
    pub products: Mutex<Vec<Product>>,
    pub events: Mutex<Vec<String>>,
    pub queries: AtomicUsize,
    pub fail_insert: AtomicBool,
    next_id: AtomicUsize,
}

/// In-memory record store that logs transaction boundaries and counts reads.
#[derive(Clone, Default)]
pub struct RecordingStore {
    pub state: Arc<RecordingState>,
}

pub struct RecordingTransaction {
    state: Arc<RecordingState>,
    staged: Vec<Product>,
}

impl RecordingStore {
    pub fn new() -> RecordingStore {
        RecordingStore::default()
    }

    pub fn with_products(products: Vec<Product>) -> RecordingStore {
        let store = RecordingStore::default();
        *store.state.products.lock() = products;
        store
    }

    pub fn queries(&self) -> usize {
        self.state.queries.load(Ordering::SeqCst)
    }

    pub fn events(&self) -> Vec<String> {
        self.state.events.lock().clone()
    }

    pub fn fail_inserts(&self, fail: bool) {
        self.state.fail_insert.store(fail, Ordering::SeqCst);
    }

    fn read(&self) {
        self.state.queries.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl CatalogStore for RecordingStore {
    async fn list_products(&self, limit: i64, offset: i64) -> Result<Vec<Product>, StoreError> {
        self.read();
        Ok(self
            .state
            .products
            .lock()
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn find_product(&self, id: &str) -> Result<Option<Product>, StoreError> {
        self.read();
        Ok(self.state.products.lock().iter().find(|product| product.id == id).cloned())
    }

    async fn list_products_by_category(&self, category_id: &str) -> Result<Vec<Product>, StoreError> {
        self.read();
        Ok(self
            .state
            .products
            .lock()
            .iter()
            .filter(|product| product.category_id == category_id)
            .cloned()
            .collect())
    }

    async fn find_category(&self, id: &str) -> Result<Option<Category>, StoreError> {
        self.read();
        Ok(Some(Category { id: id.to_string(), name: "Kategorie".to_string(), description: None }))
    }

    async fn list_reviews(&self, _product_id: &str) -> Result<Vec<Review>, StoreError> {
        self.read();
        Ok(vec![])
    }

    async fn list_variants(&self, _product_id: &str) -> Result<Vec<Variant>, StoreError> {
        self.read();
        Ok(vec![])
    }

    async fn average_rating(&self, product_id: &str) -> Result<AverageRating, StoreError> {
        self.read();
        Ok(AverageRating { product_id: product_id.to_string(), average: None, count: 0 })
    }

    async fn begin(&self) -> Result<Box<dyn CatalogTransaction>, StoreError> {
        self.state.events.lock().push("BEGIN".to_string());
        Ok(Box::new(RecordingTransaction { state: self.state.clone(), staged: vec![] }))
    }
}

#[async_trait]
impl CatalogTransaction for RecordingTransaction {
    async fn find_product(&mut self, id: &str) -> Result<Option<Product>, StoreError> {
        Ok(self.state.products.lock().iter().find(|product| product.id == id).cloned())
    }

    async fn insert_product(&mut self, input: &ProductInput) -> Result<Product, StoreError> {
        self.state.events.lock().push("INSERT product".to_string());
        if self.state.fail_insert.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("insert rejected".to_string()));
        }
        let id = self.state.next_id.fetch_add(1, Ordering::SeqCst) + 100;
        let product = Product {
            id: format!("p-{}", id),
            name: input.name.clone(),
            description: input.description.clone(),
            price: input.price,
            stock: input.stock,
            category_id: input.category_id.clone(),
            created_at: 0,
        };
        self.staged.push(product.clone());
        Ok(product)
    }

    async fn insert_variant(&mut self, product_id: &str, input: &VariantInput) -> Result<Variant, StoreError> {
        self.state.events.lock().push("INSERT variant".to_string());
        Ok(Variant {
            id: format!("{}-v", product_id),
            product_id: product_id.to_string(),
            name: input.name.clone(),
            sku: input.sku.clone(),
            price: input.price,
            stock: input.stock,
        })
    }

    async fn update_product(&mut self, current: &Product, update: &ProductUpdate) -> Result<Product, StoreError> {
        let mut product = current.clone();
        if let Some(name) = &update.name {
            product.name = name.clone();
        }
        if let Some(price) = update.price {
            product.price = price;
        }
        self.staged.push(product.clone());
        Ok(product)
    }

    async fn delete_product(&mut self, id: &str) -> Result<bool, StoreError> {
        let mut products = self.state.products.lock();
        let before = products.len();
        products.retain(|product| product.id != id);
        Ok(products.len() != before)
    }

    async fn insert_category(&mut self, input: &CategoryInput) -> Result<Category, StoreError> {
        Ok(Category { id: "c-1".to_string(), name: input.name.clone(), description: input.description.clone() })
    }

    async fn insert_review(&mut self, input: &ReviewInput) -> Result<Review, StoreError> {
        Ok(Review {
            id: "r-1".to_string(),
            product_id: input.product_id.clone(),
            rating: input.rating,
            comment: input.comment.clone(),
            author: input.author.clone(),
            created_at: 0,
        })
    }

    async fn commit(self: Box<Self>) -> Result<(), StoreError> {
        let RecordingTransaction { state, staged } = *self;
        {
            let mut products = state.products.lock();
            for product in staged {
                products.retain(|existing| existing.id != product.id);
                products.insert(0, product);
            }
        }
        state.events.lock().push("COMMIT".to_string());
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), StoreError> {
        self.state.events.lock().push("ROLLBACK".to_string());
        Ok(())
    }
}

/// Memory backend that records every command it receives.
pub struct RecordingCache {
    pub inner: CacheConnectorMemory,
    pub commands: Mutex<Vec<String>>,
    /// Added to every call before it reaches `inner`.
    pub latency: Mutex<Option<Duration>>,
}

impl RecordingCache {
    pub fn new() -> RecordingCache {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> RecordingCache {
        RecordingCache {
            inner: CacheConnectorMemory::with_clock(clock),
            commands: Mutex::new(vec![]),
            latency: Mutex::new(None),
        }
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().clone()
    }

    pub fn deletes(&self) -> Vec<String> {
        self.commands().into_iter().filter(|command| command.starts_with("DEL")).collect()
    }

    pub fn clear_commands(&self) {
        self.commands.lock().clear();
    }

    async fn record(&self, command: String) {
        self.commands.lock().push(command);
        let latency = *self.latency.lock();
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl CacheBackend for RecordingCache {
    async fn ping(&self) -> Result<(), CacheError> {
        self.record("PING".to_string()).await;
        self.inner.ping().await
    }

    async fn reconnect(&self) -> Result<(), CacheError> {
        self.inner.reconnect().await
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        self.record(format!("GET {}", key)).await;
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<(), CacheError> {
        self.record(format!("SET {}", key)).await;
        self.inner.set(key, value, ttl).await
    }

    async fn delete(&self, keys: &[String]) -> Result<(), CacheError> {
        self.record(format!("DEL {}", keys.join(" "))).await;
        self.inner.delete(keys).await
    }

    async fn index_add(&self, index: &str, key: &str, ttl: Option<Duration>) -> Result<(), CacheError> {
        self.record(format!("SADD {} {}", index, key)).await;
        self.inner.index_add(index, key, ttl).await
    }

    async fn index_members(&self, index: &str) -> Result<Vec<String>, CacheError> {
        self.record(format!("SMEMBERS {}", index)).await;
        self.inner.index_members(index).await
    }

    async fn close(&self) -> Result<(), CacheError> {
        self.inner.close().await
    }
}

pub fn quiet_breaker() -> CircuitBreaker {
    CircuitBreaker::new(CircuitBreakerConfig {
        minimum_calls: 1_000,
        ..CircuitBreakerConfig::default()
    })
}

pub fn cache_client(backend: Arc<dyn CacheBackend>, breaker: CircuitBreaker) -> Arc<CacheClient> {
    Arc::new(CacheClient::with_backend(backend, CacheEngine::memory, breaker))
}

pub fn catalog_over(store: Arc<dyn CatalogStore>, cache: Option<Arc<CacheClient>>) -> Catalog {
    Catalog::new(store, cache, CacheTtlConfig::default(), CatalogConfig::default())
}

pub async fn sqlite_store() -> Arc<DatabaseConnector> {
    let config = DatabaseConfig {
        path: "sqlite::memory:".to_string(),
        ..DatabaseConfig::default()
    };
    Arc::new(DatabaseConnector::new(&config, true).await.unwrap())
}

pub fn product(id: &str, name: &str, price: f64) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        category_id: "fd5f2a5c-4c47-4e48-9d3b-0b8c1a6f3e21".to_string(),
        ..Product::default()
    }
}

pub fn product_input(name: &str, category_id: &str) -> ProductInput {
    ProductInput {
        name: name.to_string(),
        description: None,
        price: 99.99,
        stock: 50,
        category_id: category_id.to_string(),
        variants: vec![],
    }
}
