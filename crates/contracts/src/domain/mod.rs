pub mod panel;
pub mod reload;
pub mod switcher;
