use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Menu;
use crate::node_id::NodeId;
use crate::price::normalize_price_input;

/// A field update on the menu scalars.
///
/// `Price` carries raw input text; it is run through the normalizer
/// before storage and a rejected keystroke keeps the previous text.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuField {
    Name(String),
    Description(String),
    Price(String),
    ImageUrl(Option<String>),
    IsActive(bool),
    AvailableOnline(bool),
    AvailableOnsite(bool),
}

/// A field update on one category.
///
/// `MaxOptions` carries raw input text; anything unparsable coerces to 0,
/// which the creation validation rejects later.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryField {
    Name(String),
    MaxOptions(String),
    IsRequired(bool),
}

/// A field update on one option.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionField {
    Name(String),
    AdditionalPrice(String),
}

/// Deep working copy of one menu's mutable fields.
///
/// Every mutation is a pure `&self -> Self` method: the containing
/// structures are rebuilt rather than mutated in place, and the caller
/// swaps the whole entry in the [`super::DraftStore`]. A reader holding a
/// clone therefore never observes a half-applied change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuDraft {
    pub menu_id: Uuid,
    pub name: String,
    pub description: String,
    /// Normalized price input text (backs a text field until commit).
    pub price_input: String,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub available_online: bool,
    pub available_onsite: bool,
    pub categories: Vec<CategoryDraft>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryDraft {
    pub id: NodeId,
    pub name: String,
    pub max_options: u32,
    pub is_required: bool,
    pub display_order: i32,
    pub options: Vec<OptionDraft>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptionDraft {
    pub id: NodeId,
    pub name: String,
    /// Normalized price input text.
    pub additional_price_input: String,
    pub display_order: i32,
}

impl MenuDraft {
    /// Deep-copies a canonical menu into a fresh draft.
    pub fn from_menu(menu: &Menu) -> Self {
        Self {
            menu_id: menu.id,
            name: menu.name.clone(),
            description: menu.description.clone(),
            price_input: format_price(menu.price),
            image_url: menu.image_url.clone(),
            is_active: menu.is_active,
            available_online: menu.available_online,
            available_onsite: menu.available_onsite,
            categories: menu
                .categories
                .iter()
                .map(|c| CategoryDraft {
                    id: c.id.clone(),
                    name: c.name.clone(),
                    max_options: c.max_options,
                    is_required: c.is_required,
                    display_order: c.display_order,
                    options: c
                        .options
                        .iter()
                        .map(|o| OptionDraft {
                            id: o.id.clone(),
                            name: o.name.clone(),
                            additional_price_input: format_price(o.additional_price),
                            display_order: o.display_order,
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    pub fn category(&self, index: usize) -> Option<&CategoryDraft> {
        self.categories.get(index)
    }

    pub fn option(&self, category_index: usize, option_index: usize) -> Option<&OptionDraft> {
        self.categories.get(category_index)?.options.get(option_index)
    }

    /// Applies a scalar field update.
    pub fn with_field(&self, field: MenuField) -> Self {
        let mut next = self.clone();
        match field {
            MenuField::Name(v) => next.name = v,
            MenuField::Description(v) => next.description = v,
            MenuField::Price(raw) => {
                next.price_input = normalize_price_input(&self.price_input, &raw)
            }
            MenuField::ImageUrl(v) => next.image_url = v,
            MenuField::IsActive(v) => next.is_active = v,
            MenuField::AvailableOnline(v) => next.available_online = v,
            MenuField::AvailableOnsite(v) => next.available_onsite = v,
        }
        next
    }

    /// Appends a category with a fresh local id.
    ///
    /// `display_order` is the current category count; the default name is
    /// injected by the caller (localization lives outside this crate).
    pub fn with_category_added(&self, default_name: &str) -> Self {
        let mut next = self.clone();
        next.categories.push(CategoryDraft {
            id: NodeId::local(),
            name: default_name.to_string(),
            max_options: 1,
            is_required: true,
            display_order: self.categories.len() as i32,
            options: Vec::new(),
        });
        next
    }

    /// Applies a field update to the category at `index`.
    ///
    /// An out-of-range index leaves the draft unchanged.
    pub fn with_category_field(&self, index: usize, field: CategoryField) -> Self {
        let mut next = self.clone();
        if let Some(category) = next.categories.get_mut(index) {
            match field {
                CategoryField::Name(v) => category.name = v,
                CategoryField::MaxOptions(raw) => {
                    category.max_options = raw.trim().parse().unwrap_or(0)
                }
                CategoryField::IsRequired(v) => category.is_required = v,
            }
        }
        next
    }

    /// Splices out the category at `index`.
    pub fn with_category_removed(&self, index: usize) -> Self {
        let mut next = self.clone();
        if index < next.categories.len() {
            next.categories.remove(index);
        }
        next
    }

    /// Appends an option with a fresh local id to the category at
    /// `category_index`.
    pub fn with_option_added(&self, category_index: usize, default_name: &str) -> Self {
        let mut next = self.clone();
        if let Some(category) = next.categories.get_mut(category_index) {
            category.options.push(OptionDraft {
                id: NodeId::local(),
                name: default_name.to_string(),
                additional_price_input: "0".to_string(),
                display_order: category.options.len() as i32,
            });
        }
        next
    }

    /// Applies a field update to one option.
    pub fn with_option_field(
        &self,
        category_index: usize,
        option_index: usize,
        field: OptionField,
    ) -> Self {
        let mut next = self.clone();
        if let Some(option) = next
            .categories
            .get_mut(category_index)
            .and_then(|c| c.options.get_mut(option_index))
        {
            match field {
                OptionField::Name(v) => option.name = v,
                OptionField::AdditionalPrice(raw) => {
                    option.additional_price_input =
                        normalize_price_input(&option.additional_price_input, &raw)
                }
            }
        }
        next
    }

    /// Splices out one option.
    pub fn with_option_removed(&self, category_index: usize, option_index: usize) -> Self {
        let mut next = self.clone();
        if let Some(category) = next.categories.get_mut(category_index) {
            if option_index < category.options.len() {
                category.options.remove(option_index);
            }
        }
        next
    }
}

/// Formats a stored price back into normalized input text.
fn format_price(price: f64) -> String {
    let text = format!("{:.2}", price);
    match text.strip_suffix(".00") {
        Some(whole) => whole.to_string(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, OptionItem};

    fn sample_menu() -> Menu {
        let mut menu = Menu::new("Lunch", 12.5);
        let mut category = Category::new(menu.id, "Size");
        category.id = NodeId::persisted("cat-1");
        category.options = vec![OptionItem {
            id: NodeId::persisted("opt-1"),
            category_id: category.id.clone(),
            name: "Small".into(),
            additional_price: 0.0,
            display_order: 0,
        }];
        menu.categories = vec![category];
        menu
    }

    #[test]
    fn test_from_menu_copies_structure() {
        let menu = sample_menu();
        let draft = MenuDraft::from_menu(&menu);

        assert_eq!(draft.menu_id, menu.id);
        assert_eq!(draft.price_input, "12.50");
        assert_eq!(draft.categories.len(), 1);
        assert_eq!(draft.categories[0].id, NodeId::persisted("cat-1"));
        assert_eq!(draft.categories[0].options[0].additional_price_input, "0");
    }

    #[test]
    fn test_with_field_price_normalizes() {
        let draft = MenuDraft::from_menu(&sample_menu());
        let updated = draft.with_field(MenuField::Price("12,5".into()));
        assert_eq!(updated.price_input, "12.5");

        // Rejected keystroke keeps the previous text.
        let unchanged = updated.with_field(MenuField::Price("12.5x".into()));
        assert_eq!(unchanged.price_input, "12.5");
    }

    #[test]
    fn test_with_field_does_not_mutate_original() {
        let draft = MenuDraft::from_menu(&sample_menu());
        let _updated = draft.with_field(MenuField::Name("Brunch".into()));
        assert_eq!(draft.name, "Lunch");
    }

    #[test]
    fn test_with_category_added_defaults() {
        let draft = MenuDraft::from_menu(&sample_menu());
        let updated = draft.with_category_added("New category");

        assert_eq!(updated.categories.len(), 2);
        let added = &updated.categories[1];
        assert!(added.id.is_local());
        assert_eq!(added.name, "New category");
        assert_eq!(added.max_options, 1);
        assert!(added.is_required);
        assert_eq!(added.display_order, 1);
        assert!(added.options.is_empty());
    }

    #[test]
    fn test_with_category_field_coerces_max_options() {
        let draft = MenuDraft::from_menu(&sample_menu());
        let updated = draft.with_category_field(0, CategoryField::MaxOptions("3".into()));
        assert_eq!(updated.categories[0].max_options, 3);

        let invalid = updated.with_category_field(0, CategoryField::MaxOptions("lots".into()));
        assert_eq!(invalid.categories[0].max_options, 0);
    }

    #[test]
    fn test_with_option_added_defaults() {
        let draft = MenuDraft::from_menu(&sample_menu());
        let updated = draft.with_option_added(0, "New option");

        let options = &updated.categories[0].options;
        assert_eq!(options.len(), 2);
        assert!(options[1].id.is_local());
        assert_eq!(options[1].additional_price_input, "0");
        assert_eq!(options[1].display_order, 1);
    }

    #[test]
    fn test_with_option_field_price_normalizes() {
        let draft = MenuDraft::from_menu(&sample_menu());
        let updated =
            draft.with_option_field(0, 0, OptionField::AdditionalPrice("2,50".into()));
        assert_eq!(updated.categories[0].options[0].additional_price_input, "2.50");
    }

    #[test]
    fn test_out_of_range_indices_are_noops() {
        let draft = MenuDraft::from_menu(&sample_menu());

        assert_eq!(draft.with_category_removed(5), draft);
        assert_eq!(draft.with_option_removed(0, 5), draft);
        assert_eq!(draft.with_option_added(5, "x"), draft);
        assert_eq!(
            draft.with_category_field(5, CategoryField::IsRequired(false)),
            draft
        );
    }

    #[test]
    fn test_format_price_trims_whole_values() {
        assert_eq!(format_price(12.0), "12");
        assert_eq!(format_price(12.5), "12.50");
        assert_eq!(format_price(0.0), "0");
    }
}
