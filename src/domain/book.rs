use serde::{Deserialize, Serialize};

/// A priced catalog item as stored in the `books` table.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Book {
    pub id: i32,
    pub name: String,
    /// Non-negative price, enforced by the table's check constraint.
    pub price: f64,
}

impl Book {
    #[must_use]
    pub fn new(id: i32, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}
