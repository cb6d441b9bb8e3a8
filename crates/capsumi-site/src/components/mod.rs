pub mod icons;
pub mod modal;
pub mod navbar;
pub mod page_section;
pub mod theme_toggle;
pub mod tile_grid;
