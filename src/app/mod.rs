mod app;
mod pages_create;
mod pages_settings;
mod tasks;
mod top_bar;

pub use app::ImagenApp;
