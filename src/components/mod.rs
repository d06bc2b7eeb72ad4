pub mod app;
pub mod brewing_overlay;
pub mod surface;
pub mod tray;
pub mod welcome_overlay;
