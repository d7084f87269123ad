mod category;
mod menu;
mod new_menu;
mod option_item;

pub use category::Category;
pub use menu::Menu;
pub use new_menu::{NewCategory, NewMenu, NewOption};
pub use option_item::OptionItem;
