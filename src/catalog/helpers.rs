use crate::catalog::errors::CatalogError;

pub const MAX_NAME_LENGTH: usize = 255;

/// Ids end up inside cache keys; memcache rejects keys over 250 bytes.
pub const MAX_ID_LENGTH: usize = 128;

pub fn validate_name(field: &str, value: &str) -> Result<(), CatalogError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::ValidationFailed(format!("{} must not be empty", field)));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(CatalogError::ValidationFailed(format!("{} must be at most {} characters", field, MAX_NAME_LENGTH)));
    }
    Ok(())
}

pub fn validate_id(field: &str, value: &str) -> Result<(), CatalogError> {
    if value.trim().is_empty() {
        return Err(CatalogError::ValidationFailed(format!("{} is required", field)));
    }
    if value.len() > MAX_ID_LENGTH {
        return Err(CatalogError::ValidationFailed(format!("{} must be at most {} bytes", field, MAX_ID_LENGTH)));
    }
    Ok(())
}

pub fn validate_price(field: &str, value: f64) -> Result<(), CatalogError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CatalogError::ValidationFailed(format!("{} must be a non-negative number", field)));
    }
    Ok(())
}

pub fn validate_stock(value: i64) -> Result<(), CatalogError> {
    if value < 0 {
        return Err(CatalogError::ValidationFailed("stock must not be negative".to_string()));
    }
    Ok(())
}

/// Clamps pagination into `1..=max_limit` and a non-negative offset.
pub fn page(limit: Option<i64>, offset: Option<i64>, max_limit: i64) -> Result<(i64, i64), CatalogError> {
    let limit = limit.unwrap_or(max_limit.min(10));
    let offset = offset.unwrap_or(0);
    if limit < 1 || limit > max_limit {
        return Err(CatalogError::ValidationFailed(format!("limit must be between 1 and {}", max_limit)));
    }
    if offset < 0 {
        return Err(CatalogError::ValidationFailed("offset must not be negative".to_string()));
    }
    Ok((limit, offset))
}
