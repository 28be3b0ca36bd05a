pub mod api;
pub mod config;
pub mod consts;
pub mod error;
pub mod progress;
pub mod selection;
