pub mod render_settings;
pub mod scene;
