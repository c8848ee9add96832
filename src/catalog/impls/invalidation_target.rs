use crate::catalog::enums::invalidation_target::InvalidationTarget;
use std::fmt;

impl fmt::Display for InvalidationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidationTarget::Key(key) => write!(f, "{}", key),
            InvalidationTarget::ProductLists => write!(f, "products:*"),
        }
    }
}
