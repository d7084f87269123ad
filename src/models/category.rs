use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::node_id::NodeId;

use super::option_item::OptionItem;

/// A named group of mutually-related options within a menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: NodeId,
    pub menu_id: Uuid,
    pub name: String,
    /// Maximum number of selectable options; at least 1 for a valid row.
    pub max_options: u32,
    pub is_required: bool,
    pub display_order: i32,
    pub options: Vec<OptionItem>,
}

impl Category {
    pub fn new(menu_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id: NodeId::local(),
            menu_id,
            name: name.into(),
            max_options: 1,
            is_required: true,
            display_order: 0,
            options: Vec::new(),
        }
    }

    pub fn with_options(mut self, options: Vec<OptionItem>) -> Self {
        self.options = options;
        self
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (pick up to {})", self.name, self.max_options)?;
        if self.is_required {
            write!(f, " [required]")?;
        }
        for option in &self.options {
            write!(f, "\n  - {}", option)?;
        }
        Ok(())
    }
}
