pub mod clipboard;
pub mod image;
