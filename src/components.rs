pub mod about_screen;
pub mod app_icon;
pub mod header;
pub mod icon;
pub mod license_screen;
pub mod preference;
pub mod settings_app;
pub mod toast;
