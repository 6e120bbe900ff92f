pub mod app;
pub mod clipboard;
