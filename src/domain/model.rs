use serde::{Deserialize, Serialize};
use std::fmt;

/// One shoe inventory entry, in file field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoeRecord {
    pub country: String,
    pub code: String,
    pub product: String,
    pub cost: u32,
    pub quantity: u32,
}

impl ShoeRecord {
    pub fn new(
        country: impl Into<String>,
        code: impl Into<String>,
        product: impl Into<String>,
        cost: u32,
        quantity: u32,
    ) -> Self {
        Self {
            country: country.into(),
            code: code.into(),
            product: product.into(),
            cost,
            quantity,
        }
    }

    /// Stock value, widened so `u32::MAX * u32::MAX` still fits.
    pub fn value(&self) -> u64 {
        u64::from(self.cost) * u64::from(self.quantity)
    }

    pub fn matches_code(&self, code: &str) -> bool {
        self.code.trim().to_uppercase() == code.trim().to_uppercase()
    }
}

impl fmt::Display for ShoeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {}, {})",
            self.country, self.code, self.product, self.cost, self.quantity
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemValue {
    pub product: String,
    pub cost: u32,
    pub quantity: u32,
    pub value: u64,
}

impl From<&ShoeRecord> for ItemValue {
    fn from(record: &ShoeRecord) -> Self {
        Self {
            product: record.product.clone(),
            cost: record.cost,
            quantity: record.quantity,
            value: record.value(),
        }
    }
}
