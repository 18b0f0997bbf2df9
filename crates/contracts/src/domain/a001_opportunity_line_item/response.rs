use serde::{Deserialize, Serialize};

/// Result of deleting a line item together with its product.
///
/// The backend may not do both in one transaction, so each half reports
/// separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteLineItemResponse {
    #[serde(rename = "lineItemDeleted")]
    pub line_item_deleted: bool,
    #[serde(rename = "productDeleted")]
    pub product_deleted: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl DeleteLineItemResponse {
    pub fn is_complete(&self) -> bool {
        self.line_item_deleted && self.product_deleted
    }
}
