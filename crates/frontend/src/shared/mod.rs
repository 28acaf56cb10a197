pub mod config_loader;
pub mod dom_panels;
pub mod reloader;
