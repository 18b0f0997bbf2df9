use crate::system::auth::Role;

pub const FIELD_PRODUCT_NAME: &str = "productName";
pub const FIELD_UNIT_PRICE: &str = "unitPrice";
pub const FIELD_TOTAL_PRICE: &str = "totalPrice";
pub const FIELD_QUANTITY: &str = "quantity";
pub const FIELD_QUANTITY_IN_STOCK: &str = "quantityInStock";
pub const FIELD_DELETE: &str = "delete";
pub const FIELD_VIEW_PRODUCT: &str = "viewProduct";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Currency,
    Number,
    Action,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub label: &'static str,
    pub field_name: &'static str,
    pub kind: ColumnKind,
    pub editable: bool,
    /// Hidden from restricted users
    pub privileged_only: bool,
}

impl ColumnSpec {
    const fn new(label: &'static str, field_name: &'static str, kind: ColumnKind) -> Self {
        Self {
            label,
            field_name,
            kind,
            editable: false,
            privileged_only: false,
        }
    }

    const fn editable(mut self) -> Self {
        self.editable = true;
        self
    }

    const fn privileged_only(mut self) -> Self {
        self.privileged_only = true;
        self
    }
}

const CANONICAL_COLUMNS: [ColumnSpec; 7] = [
    ColumnSpec::new("Nom du produit", FIELD_PRODUCT_NAME, ColumnKind::Text),
    ColumnSpec::new("Prix unitaire", FIELD_UNIT_PRICE, ColumnKind::Currency),
    ColumnSpec::new("Prix Total", FIELD_TOTAL_PRICE, ColumnKind::Currency),
    ColumnSpec::new("Quantité", FIELD_QUANTITY, ColumnKind::Number),
    ColumnSpec::new("Quantité en Stock", FIELD_QUANTITY_IN_STOCK, ColumnKind::Number).editable(),
    ColumnSpec::new("Supprimer", FIELD_DELETE, ColumnKind::Action),
    ColumnSpec::new("Voir produit", FIELD_VIEW_PRODUCT, ColumnKind::Action).privileged_only(),
];

/// Column set for a role, in canonical order.
///
/// Computed from the canonical set every time, so applying the same role
/// twice gives the same columns.
pub fn columns_for(role: Role) -> Vec<ColumnSpec> {
    CANONICAL_COLUMNS
        .iter()
        .filter(|c| !(role.is_restricted() && c.privileged_only))
        .cloned()
        .collect()
}

pub fn has_column(columns: &[ColumnSpec], field_name: &str) -> bool {
    columns.iter().any(|c| c.field_name == field_name)
}
