use serde::{Deserialize, Serialize};

/// Form data for the menu creation flow.
///
/// Creation is committed immediately on submit and never staged in the
/// draft store, so these types carry no ids at all; the store assigns
/// every id in the response to the next fetch.
///
/// Price fields hold normalized input text (see [`crate::price`]) because
/// they back text inputs until submit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewMenu {
    pub name: String,
    pub description: String,
    pub price_input: String,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub available_online: bool,
    pub available_onsite: bool,
    pub categories: Vec<NewCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub max_options: u32,
    pub is_required: bool,
    pub options: Vec<NewOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewOption {
    pub name: String,
    pub additional_price_input: String,
}

impl NewMenu {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_active: true,
            available_online: true,
            available_onsite: true,
            ..Default::default()
        }
    }
}

impl NewCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_options: 1,
            is_required: true,
            options: Vec::new(),
        }
    }
}

impl NewOption {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            additional_price_input: "0".to_string(),
        }
    }
}
