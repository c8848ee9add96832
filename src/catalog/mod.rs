//! Catalog accessor with a read-through, write-invalidate cache.
//!
//! Every read looks up a templated key first, falls back to the record store on
//! a miss and repopulates the key with a per-template expiry. Every mutation
//! runs in one store transaction and, only after the commit succeeds, clears
//! each key whose result it could have changed.
//!
//! # Key templates
//!
//! | Key | Holds |
//! |-----|-------|
//! | `products:{limit}:{offset}` | one page of products |
//! | `products:index` | set of live page keys |
//! | `product:{id}` | a product, or `null` when it does not exist |
//! | `category:{id}` | a category, or `null` |
//! | `category:{id}:products` | products of a category |
//! | `reviews:{productId}` | reviews of a product |
//! | `variants:{productId}` | variants of a product |
//! | `rating:{productId}` | average rating aggregate |
//!
//! Cache failures of any kind are treated as misses. A failed invalidation is
//! retried in the background with exponential backoff; until then the key is
//! listed by `Catalog::pending_invalidations()`.

pub mod enums;
pub mod errors;
pub mod helpers;
pub mod impls;
pub mod structs;

#[cfg(test)]
mod tests;
