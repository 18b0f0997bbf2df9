use contracts::domain::a001_opportunity_line_item::aggregate::{LineItem, LineItemId};
use rust_decimal::Decimal;

use super::columns::{columns_for, ColumnSpec};
use crate::system::auth::Role;

/// Presentation of the stock cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Alert,
    Normal,
}

impl Emphasis {
    pub fn for_shortfall(shortfall: bool) -> Self {
        if shortfall {
            Emphasis::Alert
        } else {
            Emphasis::Normal
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Emphasis::Alert => "stock-cell stock-cell--shortfall",
            Emphasis::Normal => "stock-cell stock-cell--ok",
        }
    }

    pub fn style(self) -> &'static str {
        match self {
            Emphasis::Alert => "color: var(--color-error); font-weight: 600;",
            Emphasis::Normal => "color: var(--color-success);",
        }
    }
}

/// A line item with the fields derived on every fetch
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRow {
    pub item: LineItem,
    /// `None` when neither a computed nor a server total is available
    pub total: Option<Decimal>,
    pub shortfall: bool,
    pub emphasis: Emphasis,
}

impl RenderRow {
    pub fn from_item(item: LineItem) -> Self {
        let shortfall = item.stock_delta() < 0;
        if item.computed_total().is_none() {
            log::error!(
                "Line item {}: total of {} x {} overflows, using server total {:?}",
                item.id,
                item.unit_price,
                item.quantity,
                item.total_price
            );
        } else if item.has_total_mismatch() {
            log::debug!(
                "Line item {}: server total {:?} ignored, computed {:?}",
                item.id,
                item.total_price,
                item.computed_total()
            );
        }
        Self {
            total: item.display_total(),
            shortfall,
            emphasis: Emphasis::for_shortfall(shortfall),
            item,
        }
    }

    pub fn id(&self) -> &LineItemId {
        &self.item.id
    }

    pub fn emphasis_class(&self) -> &'static str {
        self.emphasis.class()
    }

    pub fn emphasis_style(&self) -> &'static str {
        self.emphasis.style()
    }
}

/// Render-ready table model. Replaced as a whole, never patched.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Backend order, not re-sorted
    pub rows: Vec<RenderRow>,
    pub is_empty: bool,
    pub has_products: bool,
    pub has_any_shortfall: bool,
    pub columns: Vec<ColumnSpec>,
}

impl ViewState {
    pub fn empty(columns: Vec<ColumnSpec>) -> Self {
        Self {
            rows: Vec::new(),
            is_empty: true,
            has_products: false,
            has_any_shortfall: false,
            columns,
        }
    }

    pub fn from_items(items: Vec<LineItem>, columns: Vec<ColumnSpec>) -> Self {
        if items.is_empty() {
            return Self::empty(columns);
        }

        let mut has_any_shortfall = false;
        let mut rows = Vec::with_capacity(items.len());
        for item in items {
            let row = RenderRow::from_item(item);
            // sticky for the whole list
            has_any_shortfall |= row.shortfall;
            rows.push(row);
        }

        Self {
            rows,
            is_empty: false,
            has_products: true,
            has_any_shortfall,
            columns,
        }
    }

    /// Same rows with another column set
    pub fn with_columns(&self, columns: Vec<ColumnSpec>) -> Self {
        Self {
            columns,
            ..self.clone()
        }
    }

    pub fn row(&self, id: &LineItemId) -> Option<&RenderRow> {
        self.rows.iter().find(|r| r.id() == id)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::empty(columns_for(Role::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_opportunity_line_item::test_support::item;
    use crate::domain::a001_opportunity_line_item::ui::list::columns::FIELD_VIEW_PRODUCT;
    use rust_decimal_macros::dec;

    fn columns() -> Vec<ColumnSpec> {
        columns_for(Role::Privileged)
    }

    #[test]
    fn test_mixed_rows_example() {
        let state = ViewState::from_items(vec![item("1", 10, 5), item("2", 3, 8)], columns());

        assert_eq!(state.rows.len(), 2);
        assert!(state.rows[0].shortfall);
        assert_eq!(state.rows[0].item.stock_delta(), -5);
        assert!(!state.rows[1].shortfall);
        assert_eq!(state.rows[1].item.stock_delta(), 5);
        assert!(state.has_any_shortfall);
        assert!(!state.is_empty);
        assert!(state.has_products);
    }

    #[test]
    fn test_shortfall_flag_is_sticky_across_later_rows() {
        let state = ViewState::from_items(
            vec![item("1", 4, 1), item("2", 1, 9), item("3", 0, 0)],
            columns(),
        );
        assert!(state.has_any_shortfall);
        assert_eq!(state.rows.iter().filter(|r| r.shortfall).count(), 1);
    }

    #[test]
    fn test_no_shortfall_when_stock_covers_everything() {
        let state = ViewState::from_items(vec![item("1", 5, 5), item("2", 0, 3)], columns());
        assert!(!state.has_any_shortfall);
        assert!(state.rows.iter().all(|r| r.emphasis == Emphasis::Normal));
    }

    #[test]
    fn test_negative_stock_is_a_shortfall() {
        let state = ViewState::from_items(vec![item("1", 0, -1)], columns());
        assert!(state.rows[0].shortfall);
    }

    #[test]
    fn test_emphasis_matches_shortfall_exactly() {
        let state = ViewState::from_items(
            vec![item("1", 10, 5), item("2", 3, 8), item("3", 7, 7)],
            columns(),
        );
        for row in &state.rows {
            assert_eq!(row.shortfall, row.emphasis == Emphasis::Alert);
            assert_eq!(!row.shortfall, row.emphasis == Emphasis::Normal);
        }
        assert_eq!(state.rows[0].emphasis_class(), "stock-cell stock-cell--shortfall");
        assert_eq!(state.rows[1].emphasis_class(), "stock-cell stock-cell--ok");
        assert_ne!(state.rows[0].emphasis_style(), state.rows[1].emphasis_style());
    }

    #[test]
    fn test_empty_input_gives_empty_state() {
        let state = ViewState::from_items(Vec::new(), columns());
        assert!(state.rows.is_empty());
        assert!(state.is_empty);
        assert!(!state.has_products);
        assert!(!state.has_any_shortfall);
        assert_eq!(state.columns, columns());
    }

    #[test]
    fn test_rows_keep_backend_order() {
        let state = ViewState::from_items(
            vec![item("c", 1, 1), item("a", 1, 1), item("b", 1, 1)],
            columns(),
        );
        let ids: Vec<_> = state.rows.iter().map(|r| r.id().value().to_string()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_total_is_recomputed() {
        let mut line = item("1", 3, 10);
        line.unit_price = dec!(19.99);
        line.total_price = Some(dec!(1));
        let state = ViewState::from_items(vec![line], columns());
        assert_eq!(state.rows[0].total, Some(dec!(59.97)));
    }

    #[test]
    fn test_extreme_values_render_without_panicking() {
        let mut huge = item("1", 2, 1);
        huge.unit_price = Decimal::MAX;
        huge.total_price = Some(dec!(12.50));
        let mut deep = item("2", 1, i64::MIN);
        deep.unit_price = Decimal::MAX;

        let state = ViewState::from_items(vec![huge, deep], columns());

        assert_eq!(state.rows[0].total, Some(dec!(12.50)));
        assert!(state.rows[0].shortfall);
        assert_eq!(state.rows[1].total, Some(Decimal::MAX));
        assert!(state.rows[1].shortfall);
        assert!(state.has_any_shortfall);
    }

    #[test]
    fn test_default_state_is_empty_and_restricted() {
        let state = ViewState::default();
        assert!(state.is_empty);
        assert!(!state
            .columns
            .iter()
            .any(|c| c.field_name == FIELD_VIEW_PRODUCT));
    }
}
