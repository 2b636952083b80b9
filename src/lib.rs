pub mod app;
pub mod hud;
pub mod logging;
