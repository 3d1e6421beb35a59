//! Cloud Gallery Desktop Application
//!
//! Browse, upload, download, and delete files in an object-storage bucket.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod services;
mod state;

use dioxus::desktop::{Config, WindowBuilder};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cloud_gallery=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Cloud Gallery...");

    let config = Config::new().with_window(WindowBuilder::new().with_title("Cloud Gallery"));

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
