pub mod app;
pub mod config;
pub mod paths;
pub mod script_loader;
