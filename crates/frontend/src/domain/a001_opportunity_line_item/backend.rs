use async_trait::async_trait;
use contracts::domain::a001_opportunity_line_item::aggregate::{LineItem, LineItemId};
use contracts::domain::a001_opportunity_line_item::request::UpdateStockRequest;
use contracts::domain::a001_opportunity_line_item::response::DeleteLineItemResponse;

use crate::shared::backend_error::BackendError;

/// Query and command endpoints the line item table depends on.
///
/// Calls resolve on the caller's task; nothing here is `Send`.
#[async_trait(?Send)]
pub trait LineItemBackend {
    async fn fetch_line_items(&self, opportunity_id: &str) -> Result<Vec<LineItem>, BackendError>;

    /// Delete the line item and its product
    async fn delete_line_item_and_product(
        &self,
        id: &LineItemId,
    ) -> Result<DeleteLineItemResponse, BackendError>;

    async fn update_stock_quantity(&self, request: &UpdateStockRequest) -> Result<(), BackendError>;
}
