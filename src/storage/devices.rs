use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use tracing::info;

use super::error::StorageError;
use super::jsonl::{self, generate_id, safe_file_stem};
use super::stores::DeviceStore;
use crate::model::{PhoneDbItem, SavedDevice};

/// Stores each user's saved phones in `{uid}.jsonl`.
pub struct DeviceManager {
    base_path: PathBuf,
}

impl DeviceManager {
    /// Creates a manager rooted at the given path, creating it if needed.
    pub fn with_path(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let base_path = path.into();
        fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    fn devices_path(&self, uid: &str) -> PathBuf {
        self.base_path
            .join(format!("{}.jsonl", safe_file_stem(uid)))
    }
}

impl DeviceStore for DeviceManager {
    fn devices(&self, uid: &str) -> Result<Vec<SavedDevice>, StorageError> {
        jsonl::read_all(&self.devices_path(uid))
    }

    fn add_device(&mut self, uid: &str, spec: PhoneDbItem) -> Result<SavedDevice, StorageError> {
        let existing = self.devices(uid)?;
        let id = generate_id("device", Utc::now(), |id| existing.iter().any(|d| d.id == id));
        let device = SavedDevice { id, spec };
        jsonl::append(&self.devices_path(uid), &device)?;
        info!(uid, device_id = %device.id, name = %device.spec.name, "saved device");
        Ok(device)
    }

    fn remove_device(&mut self, uid: &str, id: &str) -> Result<(), StorageError> {
        let mut devices = self.devices(uid)?;
        let before = devices.len();
        devices.retain(|d| d.id != id);
        if devices.len() == before {
            return Err(StorageError::DeviceNotFound(id.to_string()));
        }
        jsonl::write_all(&self.devices_path(uid), &devices)
    }
}
