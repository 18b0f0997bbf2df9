use crate::domain::common::{validate_record_key, AggregateId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Types
// ============================================================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LineItemId(String);

impl LineItemId {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl AggregateId for LineItemId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        validate_record_key(s).map(Self)
    }
}

impl TryFrom<String> for LineItemId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_string(&value)
    }
}

impl From<LineItemId> for String {
    fn from(id: LineItemId) -> Self {
        id.0
    }
}

impl std::fmt::Display for LineItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

impl ProductId {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        validate_record_key(s).map(Self)
    }
}

impl TryFrom<String> for ProductId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_string(&value)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Line item
// ============================================================================

/// One product line attached to an opportunity, as returned by the backend.
///
/// `quantity_in_stock` is signed: backorders can push it below zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: LineItemId,

    #[serde(rename = "productId")]
    pub product_id: ProductId,

    #[serde(rename = "productName", default)]
    pub product_name: String,

    #[serde(rename = "unitPrice")]
    pub unit_price: Decimal,

    #[serde(rename = "quantity")]
    pub quantity: u32,

    #[serde(rename = "quantityInStock")]
    pub quantity_in_stock: i64,

    /// Server-side total. Informational only, see [`LineItem::computed_total`].
    #[serde(rename = "totalPrice", default, skip_serializing_if = "Option::is_none")]
    pub total_price: Option<Decimal>,
}

impl LineItem {
    /// Unit price times requested quantity, `None` when it overflows `Decimal`
    pub fn computed_total(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }

    /// Total shown to the user: the computed one, else the server's
    pub fn display_total(&self) -> Option<Decimal> {
        self.computed_total().or(self.total_price)
    }

    /// On-hand stock minus requested quantity; negative means shortfall.
    ///
    /// Widened to `i128` so no `i64` stock value can overflow.
    pub fn stock_delta(&self) -> i128 {
        i128::from(self.quantity_in_stock) - i128::from(self.quantity)
    }

    /// True when both totals are known and differ
    pub fn has_total_mismatch(&self) -> bool {
        match (self.total_price, self.computed_total()) {
            (Some(server), Some(computed)) => server != computed,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_json() -> &'static str {
        r#"{
            "id": "00k5g000003AbCdEAA",
            "productId": "01t5g000001XyZwAAK",
            "productName": "Rameur Concept2",
            "unitPrice": "1250.50",
            "quantity": 3,
            "quantityInStock": 2,
            "totalPrice": "3751.50"
        }"#
    }

    #[test]
    fn test_line_item_deserializes_camel_case() {
        let item: LineItem = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(item.id.value(), "00k5g000003AbCdEAA");
        assert_eq!(item.product_id.value(), "01t5g000001XyZwAAK");
        assert_eq!(item.product_name, "Rameur Concept2");
        assert_eq!(item.unit_price, dec!(1250.50));
        assert_eq!(item.quantity, 3);
        assert_eq!(item.quantity_in_stock, 2);
        assert_eq!(item.total_price, Some(dec!(3751.50)));
    }

    #[test]
    fn test_computed_total_and_delta() {
        let item: LineItem = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(item.computed_total(), Some(dec!(3751.50)));
        assert_eq!(item.display_total(), Some(dec!(3751.50)));
        assert_eq!(item.stock_delta(), -1);
        assert!(!item.has_total_mismatch());
    }

    #[test]
    fn test_total_mismatch_is_detected() {
        let mut item: LineItem = serde_json::from_str(sample_json()).unwrap();
        item.total_price = Some(dec!(10));
        assert!(item.has_total_mismatch());
        item.total_price = None;
        assert!(!item.has_total_mismatch());
    }

    #[test]
    fn test_negative_stock_is_accepted() {
        let json = r#"{"id":"a1","productId":"p1","unitPrice":"5","quantity":1,"quantityInStock":-4}"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.quantity_in_stock, -4);
        assert_eq!(item.stock_delta(), -5);
        assert_eq!(item.product_name, "");
    }

    #[test]
    fn test_total_overflow_falls_back_to_server_total() {
        let json = r#"{"id":"a1","productId":"p1","unitPrice":"79228162514264337593543950335","quantity":2,"quantityInStock":1}"#;
        let mut item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.computed_total(), None);
        assert_eq!(item.display_total(), None);
        assert!(!item.has_total_mismatch());

        item.total_price = Some(dec!(1));
        assert_eq!(item.display_total(), Some(dec!(1)));
        assert!(!item.has_total_mismatch());
    }

    #[test]
    fn test_stock_delta_at_i64_bounds() {
        let json = r#"{"id":"a1","productId":"p1","unitPrice":"5","quantity":1,"quantityInStock":0}"#;
        let mut item: LineItem = serde_json::from_str(json).unwrap();

        item.quantity_in_stock = i64::MIN;
        assert_eq!(item.stock_delta(), i128::from(i64::MIN) - 1);

        item.quantity_in_stock = i64::MAX;
        item.quantity = u32::MAX;
        assert_eq!(item.stock_delta(), i128::from(i64::MAX) - i128::from(u32::MAX));
    }

    #[test]
    fn test_invalid_id_fails_to_decode() {
        let json = r#"{"id":"  ","productId":"p1","unitPrice":"5","quantity":1,"quantityInStock":1}"#;
        assert!(serde_json::from_str::<LineItem>(json).is_err());
    }
}
