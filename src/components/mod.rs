pub mod app;
pub mod caught_overlay;
pub mod hud;
pub mod intro_overlay;
pub mod memorize_panel;
pub mod play_grid;
pub mod time_display;
