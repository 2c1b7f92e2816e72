use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ServiceError;

/// Stored item. `id` is assigned by the store and never reused.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub quantity: u64,
}

/// Validated creation input: non-empty name, non-negative integer quantity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub quantity: u64,
}

impl NewItem {
    /// Strict validation of a raw request body. Any missing or ill-typed
    /// field rejects the whole payload.
    pub fn from_json(body: &Value) -> Result<Self, ServiceError> {
        let name = body
            .get("name")
            .and_then(name_value)
            .ok_or_else(|| ServiceError::invalid("name must be a non-empty string"))?;
        let quantity = body
            .get("quantity")
            .and_then(quantity_value)
            .ok_or_else(|| ServiceError::invalid("quantity must be an integer >= 0"))?;
        Ok(Self { name, quantity })
    }

    pub fn into_item(self, id: String) -> Item {
        Item { id, name: self.name, quantity: self.quantity }
    }
}

/// Partial update.
///
/// Each field is validated on its own; a field that fails is dropped instead
/// of failing the request. Any string is accepted as a name, including an
/// empty one; only creation insists on a non-empty name. A body made only of
/// invalid fields produces an empty patch, and applying it leaves the item
/// untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub quantity: Option<u64>,
}

impl ItemPatch {
    pub fn from_json(body: &Value) -> Self {
        Self {
            name: body.get("name").and_then(Value::as_str).map(str::to_owned),
            quantity: body.get("quantity").and_then(quantity_value),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.quantity.is_none()
    }

    /// Replacement record: the current item with accepted fields overridden.
    pub fn apply(&self, current: &Item) -> Item {
        Item {
            id: current.id.clone(),
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            quantity: self.quantity.unwrap_or(current.quantity),
        }
    }
}

fn name_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

// JSON numbers with no fractional part count as integers, so `3.0` is 3.
// Quantities are stored as `u64`, so integral values of 2^64 or more (`1e20`)
// are out of range and rejected like negatives.
fn quantity_value(value: &Value) -> Option<u64> {
    let Value::Number(n) = value else { return None };
    if let Some(q) = n.as_u64() {
        return Some(q);
    }
    let f = n.as_f64()?;
    if f.fract() == 0.0 && f >= 0.0 && f < u64::MAX as f64 {
        Some(f as u64)
    } else {
        None
    }
}
