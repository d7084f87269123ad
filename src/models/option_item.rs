use serde::{Deserialize, Serialize};
use std::fmt;

use crate::node_id::NodeId;

/// A single selectable choice within a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptionItem {
    pub id: NodeId,
    pub category_id: NodeId,
    pub name: String,
    /// Added to the menu base price when selected. Never negative.
    pub additional_price: f64,
    pub display_order: i32,
}

impl OptionItem {
    pub fn new(category_id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id: NodeId::local(),
            category_id,
            name: name.into(),
            additional_price: 0.0,
            display_order: 0,
        }
    }

    pub fn with_additional_price(mut self, price: f64) -> Self {
        self.additional_price = price;
        self
    }
}

impl fmt::Display for OptionItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.additional_price > 0.0 {
            write!(f, "{} (+{:.2})", self.name, self.additional_price)
        } else {
            write!(f, "{}", self.name)
        }
    }
}
