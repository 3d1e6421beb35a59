//! UI Components
//!
//! Gallery widgets for the desktop application.

mod file_tile;
mod gallery_grid;
mod ui;
mod upload_bar;

pub use file_tile::FileTile;
pub use gallery_grid::GalleryGrid;
pub use ui::{ButtonVariant, UiButton, APP_STYLES};
pub use upload_bar::UploadBar;
