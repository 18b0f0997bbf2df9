use contracts::domain::a001_opportunity_line_item::aggregate::LineItemId;
use contracts::domain::a001_opportunity_line_item::request::{StockEdit, UpdateStockRequest};

/// Stock quantities typed into the table, waiting for an explicit save.
///
/// Keeps first-edit order. A second edit of the same row replaces the value
/// in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingEdits {
    edits: Vec<StockEdit>,
}

impl PendingEdits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, edit: StockEdit) {
        let existing = edit
            .row_id
            .as_ref()
            .and_then(|id| self.edits.iter_mut().find(|e| e.row_id.as_ref() == Some(id)));
        match existing {
            Some(slot) => slot.new_quantity = edit.new_quantity,
            None => self.edits.push(edit),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn edits(&self) -> &[StockEdit] {
        &self.edits
    }

    /// Payloads for the edits that carry a row id, in order
    pub fn valid_requests(&self) -> Vec<UpdateStockRequest> {
        self.edits.iter().filter_map(StockEdit::to_request).collect()
    }

    pub fn value_for(&self, id: &LineItemId) -> Option<i64> {
        self.edits
            .iter()
            .find(|e| e.row_id.as_ref() == Some(id))
            .map(|e| e.new_quantity)
    }

    pub fn remove(&mut self, id: &LineItemId) {
        self.edits.retain(|e| e.row_id.as_ref() != Some(id));
    }

    pub fn clear(&mut self) {
        self.edits.clear();
    }
}

/// Parse the text of an edited stock cell
pub fn parse_stock_input(raw: &str) -> Result<i64, String> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .map_err(|e| format!("'{}' is not an integer: {}", trimmed, e))
}
