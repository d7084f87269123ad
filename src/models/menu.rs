use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::category::Category;

/// A sellable composite item: ordered categories of selectable options.
///
/// Menus in the canonical list always carry a store-assigned id; a menu
/// that is still being created lives in a [`super::NewMenu`] form instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Menu {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Base price, two fraction digits.
    pub price: f64,
    pub image_url: Option<String>,
    /// Sellable at all.
    pub is_active: bool,
    pub available_online: bool,
    pub available_onsite: bool,
    pub categories: Vec<Category>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Menu {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: String::new(),
            price,
            image_url: None,
            is_active: true,
            available_online: true,
            available_onsite: true,
            categories: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    /// Returns the menu with categories and nested options ordered by
    /// their `display_order`.
    pub fn sorted(mut self) -> Self {
        self.categories.sort_by_key(|c| c.display_order);
        for category in &mut self.categories {
            category.options.sort_by_key(|o| o.display_order);
        }
        self
    }
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", "=".repeat(self.name.len()))?;
        writeln!(f, "Price: {:.2}", self.price)?;

        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
        }

        if !self.is_active {
            writeln!(f, "(inactive)")?;
        }

        for category in &self.categories {
            writeln!(f, "\n{}", category)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OptionItem;
    use crate::node_id::NodeId;

    #[test]
    fn test_menu_new() {
        let menu = Menu::new("Lunch", 12.5);
        assert_eq!(menu.name, "Lunch");
        assert_eq!(menu.price, 12.5);
        assert!(menu.is_active);
        assert!(menu.categories.is_empty());
        assert!(menu.image_url.is_none());
    }

    #[test]
    fn test_menu_builder() {
        let menu = Menu::new("Dinner", 20.0)
            .with_description("Evening set")
            .with_image_url("https://img.example/d.png");

        assert_eq!(menu.description, "Evening set");
        assert_eq!(menu.image_url.as_deref(), Some("https://img.example/d.png"));
    }

    #[test]
    fn test_menu_sorted_orders_both_levels() {
        let menu_id = Uuid::new_v4();
        let mut second = Category::new(menu_id, "Size");
        second.display_order = 1;
        second.options = vec![
            OptionItem {
                id: NodeId::persisted("o2"),
                category_id: second.id.clone(),
                name: "Large".into(),
                additional_price: 2.5,
                display_order: 1,
            },
            OptionItem {
                id: NodeId::persisted("o1"),
                category_id: second.id.clone(),
                name: "Small".into(),
                additional_price: 0.0,
                display_order: 0,
            },
        ];
        let mut first = Category::new(menu_id, "Base");
        first.display_order = 0;

        let menu = Menu::new("Lunch", 10.0)
            .with_categories(vec![second, first])
            .sorted();

        assert_eq!(menu.categories[0].name, "Base");
        assert_eq!(menu.categories[1].name, "Size");
        assert_eq!(menu.categories[1].options[0].name, "Small");
        assert_eq!(menu.categories[1].options[1].name, "Large");
    }

    #[test]
    fn test_menu_json_roundtrip() {
        let menu = Menu::new("Combo", 9.99).with_description("With fries");
        let json = serde_json::to_string(&menu).unwrap();
        let parsed: Menu = serde_json::from_str(&json).unwrap();
        assert_eq!(menu, parsed);
    }

    #[test]
    fn test_menu_display() {
        let menu = Menu::new("Combo", 9.99);
        let output = format!("{}", menu);
        assert!(output.contains("Combo"));
        assert!(output.contains("Price: 9.99"));
    }
}
