//! Collaborator interfaces and their file-backed implementations.
//!
//! Games are stored as one JSON file each; presets, comments, and saved
//! devices are JSONL so that adding an entry is a single-line append.
//!
//! ```text
//! <data>/games/<game_id>.json
//! <data>/comments/<game_id>.jsonl
//! <data>/devices/<uid>.jsonl
//! <data>/presets.jsonl
//! ```

mod auth;
mod comments;
mod devices;
mod error;
mod games;
mod jsonl;
mod phone_db;
mod presets;
mod stores;

pub use auth::LocalAuth;
pub use comments::CommentManager;
pub use devices::DeviceManager;
pub use error::StorageError;
pub use games::GameManager;
pub use phone_db::{MIN_QUERY_CHARS, PhoneDatabase};
pub use presets::PresetManager;
pub use stores::{AuthProvider, CommentStore, DeviceStore, PresetStore, RecordStore};

use std::path::Path;

use crate::config::Config;

/// Every file-backed store, opened under one data directory.
pub struct Stores {
    pub games: GameManager,
    pub comments: CommentManager,
    pub presets: PresetManager,
    pub devices: DeviceManager,
    pub auth: LocalAuth,
}

impl Stores {
    /// Opens all stores under the configured data directory.
    pub fn open(config: &Config) -> Result<Self, StorageError> {
        let root = config.data_path()?;
        Self::open_at(&root, config.comment_page_size)
    }

    /// Opens all stores under `root`.
    pub fn open_at(root: &Path, comment_page_size: usize) -> Result<Self, StorageError> {
        Ok(Self {
            games: GameManager::with_path(root.join("games"))?,
            comments: CommentManager::with_path(root.join("comments"), comment_page_size)?,
            presets: PresetManager::with_path(root.join("presets.jsonl")),
            devices: DeviceManager::with_path(root.join("devices"))?,
            auth: LocalAuth::new(),
        })
    }
}
