// src/lib.rs
pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod logging;
pub mod metadata;
pub mod mode;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
