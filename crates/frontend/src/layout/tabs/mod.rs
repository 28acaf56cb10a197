//! Tab management module
//!
//! Содержит:
//! - `tab_bar` - компонент TabBar с кнопками панелей
//! - `tab_labels` - заголовки кнопок

pub mod tab_bar;
pub mod tab_labels;

pub use tab_bar::TabBar;
pub use tab_labels::tab_label;
