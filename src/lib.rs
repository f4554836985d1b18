pub mod buffer;
pub mod config;
pub mod dir;
pub mod editor;
pub mod error;
pub mod event;
pub mod logging;
pub mod persist;
