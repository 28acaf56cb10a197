//! Platform-independent core of the tab board.
//!
//! - `domain` - panels, the switching algorithm and the periodic reloader
//! - `shared` - configuration and error types shared with the front end

pub mod domain;
pub mod shared;
