use serde::{Deserialize, Serialize};

/// A single inventory row as it appears in the product table.
///
/// Quantity and price are kept as the raw text the user typed; the store
/// performs no numeric coercion, so "2.50" and "02.5" are different values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub quantity: String,
    pub price: String,
    pub created_at: String,
}
