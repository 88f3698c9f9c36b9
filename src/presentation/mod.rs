pub mod app;
pub mod components;
pub mod screen;
pub mod theme;
