//! Build errors for the tracker builder.

use crate::tracker::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a page tracker.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Item equality not specified. Call .item_equality(eq) or .items_by_key(f) before .build()")]
    MissingItemEquality,

    #[error("Invalid tracker configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}
