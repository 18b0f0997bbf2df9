use super::aggregate::LineItemId;
use serde::{Deserialize, Serialize};

/// A stock quantity typed into the table but not saved yet.
///
/// `row_id` is `None` when the draft cell could not be tied to a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEdit {
    #[serde(rename = "rowId")]
    pub row_id: Option<LineItemId>,
    #[serde(rename = "newQuantity")]
    pub new_quantity: i64,
}

impl StockEdit {
    pub fn new(row_id: LineItemId, new_quantity: i64) -> Self {
        Self {
            row_id: Some(row_id),
            new_quantity,
        }
    }

    /// Build the wire payload; `None` when the edit has no row id
    pub fn to_request(&self) -> Option<UpdateStockRequest> {
        self.row_id.as_ref().map(|id| UpdateStockRequest {
            id: id.clone(),
            quantity_in_stock: self.new_quantity,
        })
    }
}

/// Body of `PUT .../line-items/{id}/stock`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStockRequest {
    pub id: LineItemId,
    #[serde(rename = "quantityInStock")]
    pub quantity_in_stock: i64,
}
