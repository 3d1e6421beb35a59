pub mod common;
pub mod completions;
pub mod config;
pub mod delete;
pub mod download;
pub mod list;
pub mod open;
pub mod upload;
