//! Catalog domain records, inputs and the accessor itself.

/// The accessor.
pub mod catalog;

/// Read-your-writes bypass tracking.
pub mod recent_writes;

pub mod product;
pub mod category;
pub mod review;
pub mod variant;
pub mod average_rating;

/// Inputs accepted by mutations.
pub mod product_input;
pub mod product_update;
pub mod variant_input;
pub mod category_input;
pub mod review_input;
