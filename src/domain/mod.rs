pub mod models;
pub mod scan;
pub mod settings;
pub mod state;
