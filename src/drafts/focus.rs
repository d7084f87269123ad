use crate::node_id::NodeId;

/// Inline-edit focus for the open editor.
///
/// One slot per nesting level: at most one category and at most one
/// option can be in the inline-edit sub-state at a time. Focusing a
/// second node replaces the slot; the previous node simply leaves edit
/// mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditFocus {
    category: Option<NodeId>,
    option: Option<NodeId>,
}

impl EditFocus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus_category(&mut self, id: NodeId) {
        self.category = Some(id);
    }

    pub fn focus_option(&mut self, id: NodeId) {
        self.option = Some(id);
    }

    pub fn clear_category(&mut self) {
        self.category = None;
    }

    pub fn clear_option(&mut self) {
        self.option = None;
    }

    pub fn clear(&mut self) {
        self.category = None;
        self.option = None;
    }

    pub fn category(&self) -> Option<&NodeId> {
        self.category.as_ref()
    }

    pub fn option(&self) -> Option<&NodeId> {
        self.option.as_ref()
    }

    pub fn is_category_focused(&self, id: &NodeId) -> bool {
        self.category.as_ref() == Some(id)
    }

    pub fn is_option_focused(&self, id: &NodeId) -> bool {
        self.option.as_ref() == Some(id)
    }
}
