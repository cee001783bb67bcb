mod app;
mod input;
mod overlay;
mod sidebar;
mod status;
mod theme;
mod transcript;

pub use app::render_app;
