use thiserror::Error;

use crate::shared::backend_error::BackendError;

/// Errors surfaced at the table's operation boundary.
///
/// None of these escape the component: each becomes a notification and a
/// log entry, and the last one is kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("Failed to load line items: {0}")]
    Fetch(BackendError),

    #[error("{0}")]
    Validation(String),

    #[error("{message}")]
    Mutation { message: String },

    #[error(
        "Partial delete (line item deleted: {line_item_deleted}, product deleted: {product_deleted})"
    )]
    PartialDelete {
        line_item_deleted: bool,
        product_deleted: bool,
    },

    #[error("Another change is still being submitted")]
    Busy,
}
