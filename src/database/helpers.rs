use crate::catalog::structs::product::Product;
use crate::catalog::structs::product_update::ProductUpdate;
use crate::database::enums::database_drivers::DatabaseDrivers;

/// Primary keys are generated here rather than by the database so both drivers agree.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub fn apply_update(current: &Product, update: &ProductUpdate) -> Product {
    Product {
        id: current.id.clone(),
        name: update.name.clone().unwrap_or_else(|| current.name.clone()),
        description: update.description.clone().or_else(|| current.description.clone()),
        price: update.price.unwrap_or(current.price),
        stock: update.stock.unwrap_or(current.stock),
        category_id: update.category_id.clone().unwrap_or_else(|| current.category_id.clone()),
        created_at: current.created_at,
    }
}

/// Schema statements, in creation order.
pub fn schema(engine: DatabaseDrivers) -> Vec<&'static str> {
    match engine {
        DatabaseDrivers::sqlite3 => vec![
            "CREATE TABLE IF NOT EXISTS categories (id TEXT PRIMARY KEY NOT NULL, name TEXT NOT NULL, description TEXT)",
            "CREATE TABLE IF NOT EXISTS products (id TEXT PRIMARY KEY NOT NULL, name TEXT NOT NULL, description TEXT, price REAL NOT NULL CHECK (price >= 0), stock INTEGER NOT NULL DEFAULT 0 CHECK (stock >= 0), category_id TEXT NOT NULL REFERENCES categories(id), created_at INTEGER NOT NULL)",
            "CREATE INDEX IF NOT EXISTS products_category_id ON products (category_id)",
            "CREATE TABLE IF NOT EXISTS variants (id TEXT PRIMARY KEY NOT NULL, product_id TEXT NOT NULL REFERENCES products(id) ON DELETE CASCADE, name TEXT NOT NULL, sku TEXT UNIQUE, price REAL, stock INTEGER NOT NULL DEFAULT 0 CHECK (stock >= 0))",
            "CREATE INDEX IF NOT EXISTS variants_product_id ON variants (product_id)",
            "CREATE TABLE IF NOT EXISTS reviews (id TEXT PRIMARY KEY NOT NULL, product_id TEXT NOT NULL REFERENCES products(id) ON DELETE CASCADE, rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5), comment TEXT, author TEXT, created_at INTEGER NOT NULL)",
            "CREATE INDEX IF NOT EXISTS reviews_product_id ON reviews (product_id)",
        ],
        DatabaseDrivers::pgsql => vec![
            "CREATE TABLE IF NOT EXISTS categories (id TEXT PRIMARY KEY NOT NULL, name TEXT NOT NULL, description TEXT)",
            "CREATE TABLE IF NOT EXISTS products (id TEXT PRIMARY KEY NOT NULL, name TEXT NOT NULL, description TEXT, price DOUBLE PRECISION NOT NULL CHECK (price >= 0), stock BIGINT NOT NULL DEFAULT 0 CHECK (stock >= 0), category_id TEXT NOT NULL REFERENCES categories(id), created_at BIGINT NOT NULL)",
            "CREATE INDEX IF NOT EXISTS products_category_id ON products (category_id)",
            "CREATE TABLE IF NOT EXISTS variants (id TEXT PRIMARY KEY NOT NULL, product_id TEXT NOT NULL REFERENCES products(id) ON DELETE CASCADE, name TEXT NOT NULL, sku TEXT UNIQUE, price DOUBLE PRECISION, stock BIGINT NOT NULL DEFAULT 0 CHECK (stock >= 0))",
            "CREATE INDEX IF NOT EXISTS variants_product_id ON variants (product_id)",
            "CREATE TABLE IF NOT EXISTS reviews (id TEXT PRIMARY KEY NOT NULL, product_id TEXT NOT NULL REFERENCES products(id) ON DELETE CASCADE, rating BIGINT NOT NULL CHECK (rating BETWEEN 1 AND 5), comment TEXT, author TEXT, created_at BIGINT NOT NULL)",
            "CREATE INDEX IF NOT EXISTS reviews_product_id ON reviews (product_id)",
        ],
    }
}
