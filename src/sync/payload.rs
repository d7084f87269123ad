//! Wire payload types for the two sync policies.
//!
//! Field names match what the backing store expects: snake_case fields,
//! ids omitted entirely on nodes the store has never seen (the store
//! assigns them), and a `_delete` marker on eagerly deleted nodes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::drafts::MenuDraft;
use crate::models::NewMenu;
use crate::price::parse_price;

/// Batched whole-menu commit payload.
///
/// Carries the scalar menu fields plus every category currently in the
/// draft. Locally removed nodes are simply absent: persisted ones were
/// already deleted eagerly, local ones never existed store-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuUpsert {
    /// None in the creation flow; the store assigns the menu id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_active: bool,
    pub available_online: bool,
    pub available_onsite: bool,
    pub categories: Vec<CategoryUpsert>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryUpsert {
    /// None when the node only exists in the draft.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub max_options: u32,
    pub is_required: bool,
    pub display_order: i32,
    pub options: Vec<OptionUpsert>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptionUpsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub additional_price: f64,
    pub display_order: i32,
}

impl MenuUpsert {
    /// Builds the commit payload from a draft.
    ///
    /// `price` is the already-validated menu price; option price texts
    /// that are still in progress fall back to 0.
    pub fn from_draft(draft: &MenuDraft, price: f64) -> Self {
        Self {
            id: Some(draft.menu_id),
            name: draft.name.clone(),
            description: draft.description.clone(),
            price,
            image_url: draft.image_url.clone(),
            is_active: draft.is_active,
            available_online: draft.available_online,
            available_onsite: draft.available_onsite,
            categories: draft
                .categories
                .iter()
                .map(|c| CategoryUpsert {
                    id: c.id.persisted_id().map(str::to_string),
                    name: c.name.clone(),
                    max_options: c.max_options,
                    is_required: c.is_required,
                    display_order: c.display_order,
                    options: c
                        .options
                        .iter()
                        .map(|o| OptionUpsert {
                            id: o.id.persisted_id().map(str::to_string),
                            name: o.name.clone(),
                            additional_price: parse_price(&o.additional_price_input)
                                .unwrap_or(0.0),
                            display_order: o.display_order,
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    /// Builds the creation payload. No node carries an id.
    pub fn from_new_menu(form: &NewMenu, price: f64) -> Self {
        Self {
            id: None,
            name: form.name.clone(),
            description: form.description.clone(),
            price,
            image_url: form.image_url.clone(),
            is_active: form.is_active,
            available_online: form.available_online,
            available_onsite: form.available_onsite,
            categories: form
                .categories
                .iter()
                .enumerate()
                .map(|(i, c)| CategoryUpsert {
                    id: None,
                    name: c.name.clone(),
                    max_options: c.max_options,
                    is_required: c.is_required,
                    display_order: i as i32,
                    options: c
                        .options
                        .iter()
                        .enumerate()
                        .map(|(j, o)| OptionUpsert {
                            id: None,
                            name: o.name.clone(),
                            additional_price: parse_price(&o.additional_price_input)
                                .unwrap_or(0.0),
                            display_order: j as i32,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Eager single-node delete payload, scoped to the owning menu.
///
/// Exactly one node carries the `_delete` marker; an option target is
/// nested inside its parent category entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuNodeDelete {
    pub menu_id: Uuid,
    pub categories: Vec<CategoryDeleteEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryDeleteEntry {
    pub id: String,
    #[serde(rename = "_delete", default, skip_serializing_if = "std::ops::Not::not")]
    pub delete: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionDeleteEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptionDeleteEntry {
    pub id: String,
    #[serde(rename = "_delete")]
    pub delete: bool,
}

impl MenuNodeDelete {
    /// Payload deleting one persisted category (store cascades options).
    pub fn category(menu_id: Uuid, category_id: impl Into<String>) -> Self {
        Self {
            menu_id,
            categories: vec![CategoryDeleteEntry {
                id: category_id.into(),
                delete: true,
                options: Vec::new(),
            }],
        }
    }

    /// Payload deleting one persisted option, nested in its category.
    pub fn option(
        menu_id: Uuid,
        category_id: impl Into<String>,
        option_id: impl Into<String>,
    ) -> Self {
        Self {
            menu_id,
            categories: vec![CategoryDeleteEntry {
                id: category_id.into(),
                delete: false,
                options: vec![OptionDeleteEntry {
                    id: option_id.into(),
                    delete: true,
                }],
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drafts::{CategoryField, OptionField};
    use crate::models::{Category, Menu, NewCategory, NewOption, OptionItem};
    use crate::node_id::NodeId;
    use serde_json::json;

    fn persisted_menu() -> Menu {
        let mut menu = Menu::new("Lunch", 12.5);
        for (i, name) in ["Size", "Extras"].iter().enumerate() {
            let mut category = Category::new(menu.id, *name);
            category.id = NodeId::persisted(format!("cat-{}", i + 1));
            category.display_order = i as i32;
            category.options = vec![OptionItem {
                id: NodeId::persisted(format!("opt-{}", i + 1)),
                category_id: category.id.clone(),
                name: "Base".into(),
                additional_price: 0.0,
                display_order: 0,
            }];
            menu.categories.push(category);
        }
        menu
    }

    #[test]
    fn test_from_draft_keeps_persisted_ids_drops_local_ones() {
        let menu = persisted_menu();
        let draft = MenuDraft::from_menu(&menu)
            .with_category_field(0, CategoryField::Name("Sizes".into()))
            .with_category_added("New category");

        let payload = MenuUpsert::from_draft(&draft, 12.5);

        // Two persisted categories (one modified, one untouched) plus one
        // local one: three entries, exactly one without an id.
        assert_eq!(payload.categories.len(), 3);
        let missing_ids = payload.categories.iter().filter(|c| c.id.is_none()).count();
        assert_eq!(missing_ids, 1);
        assert_eq!(payload.categories[0].id.as_deref(), Some("cat-1"));
        assert_eq!(payload.categories[0].name, "Sizes");
    }

    #[test]
    fn test_from_draft_option_ids_follow_same_rule() {
        let menu = persisted_menu();
        let draft = MenuDraft::from_menu(&menu)
            .with_option_added(0, "New option")
            .with_option_field(0, 1, OptionField::AdditionalPrice("2,50".into()));

        let payload = MenuUpsert::from_draft(&draft, 12.5);

        let options = &payload.categories[0].options;
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].id.as_deref(), Some("opt-1"));
        assert!(options[1].id.is_none());
        assert_eq!(options[1].additional_price, 2.5);
    }

    #[test]
    fn test_from_draft_in_progress_option_price_falls_back_to_zero() {
        let menu = persisted_menu();
        let draft = MenuDraft::from_menu(&menu)
            .with_option_field(0, 0, OptionField::AdditionalPrice(".".into()));

        let payload = MenuUpsert::from_draft(&draft, 12.5);
        assert_eq!(payload.categories[0].options[0].additional_price, 0.0);
    }

    #[test]
    fn test_from_new_menu_carries_no_ids() {
        let mut form = NewMenu::new("Lunch");
        form.price_input = "12.5".into();
        let mut category = NewCategory::new("Size");
        category.options = vec![NewOption::new("Small"), {
            let mut large = NewOption::new("Large");
            large.additional_price_input = "2.50".into();
            large
        }];
        form.categories.push(category);

        let payload = MenuUpsert::from_new_menu(&form, 12.5);

        assert!(payload.id.is_none());
        assert_eq!(payload.categories.len(), 1);
        assert!(payload.categories[0].id.is_none());
        let options = &payload.categories[0].options;
        assert!(options.iter().all(|o| o.id.is_none()));
        assert_eq!(options[0].additional_price, 0.0);
        assert_eq!(options[1].additional_price, 2.5);
        assert_eq!(options[1].display_order, 1);
    }

    #[test]
    fn test_category_delete_wire_shape() {
        let menu_id = Uuid::new_v4();
        let payload = MenuNodeDelete::category(menu_id, "cat-1");

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "menu_id": menu_id,
                "categories": [{"id": "cat-1", "_delete": true}],
            })
        );
    }

    #[test]
    fn test_option_delete_wire_shape() {
        let menu_id = Uuid::new_v4();
        let payload = MenuNodeDelete::option(menu_id, "cat-1", "opt-2");

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "menu_id": menu_id,
                "categories": [{
                    "id": "cat-1",
                    "options": [{"id": "opt-2", "_delete": true}],
                }],
            })
        );
    }

    #[test]
    fn test_upsert_serializes_without_null_ids() {
        let menu = persisted_menu();
        let draft = MenuDraft::from_menu(&menu).with_category_added("New category");
        let payload = MenuUpsert::from_draft(&draft, 12.5);

        let value = serde_json::to_value(&payload).unwrap();
        let added = &value["categories"][2];
        assert!(added.get("id").is_none());
        assert_eq!(added["display_order"], 2);
    }
}
