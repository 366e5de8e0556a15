//! UI Components

pub mod item_card;
pub mod list_view;
pub mod nav;

pub use item_card::ItemCard;
pub use list_view::ListView;
pub use nav::Nav;
