//! cloud-gallery-core - Core library for Cloud Gallery
//!
//! This crate contains the file models, the backend API client, and the
//! gallery view-model shared by the Cloud Gallery interfaces (desktop, CLI).

pub mod api;
pub mod config;
pub mod error;
pub mod gallery;
pub mod models;
pub mod naming;
pub mod notify;
pub mod util;

pub use api::{FileApi, HttpFileApi};
pub use config::GalleryConfig;
pub use error::{Error, Result};
pub use gallery::{
    Confirmation, DeleteOutcome, DownloadedFile, GalleryPhase, GalleryState, GalleryViewModel,
    UploadOutcome,
};
pub use models::{FileCard, FileRecord, LocalFile};
pub use naming::display_name;
pub use notify::{Notice, NoticeLevel, Notifier};
