pub mod app;
pub mod ar_view;
pub mod grid_overlay;
pub mod nav_menu;
pub mod notice;
pub mod overlay_controls;
pub mod thumbnail_strip;
pub mod tools_menu;
