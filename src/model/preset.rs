use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::TestRecord;
use super::status::EmulatorBuildType;

/// A named, reusable bundle of device and emulator settings.
///
/// Carries only environment fields; status, issue, result, and media fields
/// are never part of a preset. Blank fields are treated as absent when the
/// preset is applied. The build type is kept as the raw stored string and
/// decoded with [`EmulatorBuildType::from_stored`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TestPreset {
    pub id: String,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,

    pub device_model: String,
    pub gpu_model: String,
    pub driver_version: String,
    pub ram: String,
    pub android_version: String,

    pub app: String,
    pub app_version: String,
    pub emulator_build_type: String,
    pub wrapper: String,
    pub performance_mode: String,

    pub accuracy_level: String,
    pub resolution_scale: String,
    pub async_shader: String,
    pub frame_skip: String,

    pub docked_mode: String,
    pub disk_shader_cache: String,
    pub reactive_flushing: String,
    pub cpu_backend: String,
    pub audio_output_engine: String,
    pub window_adapting_filter: String,

    pub spu_threads: String,
    pub spu_block_size: String,

    pub wine_version: String,
    pub box64_version: String,
    pub box64_preset: String,
    pub dxvk_version: String,
    pub vkd3d_version: String,
    pub turnip_version: String,
    pub controller_support: String,
}

impl TestPreset {
    /// Captures the environment subset of a resolved test record.
    pub fn from_record(
        id: impl Into<String>,
        name: impl Into<String>,
        created_at: DateTime<Utc>,
        record: &TestRecord,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            created_at: Some(created_at),
            device_model: record.device_model.clone(),
            gpu_model: record.gpu_model.clone(),
            driver_version: record.driver_version.clone(),
            ram: record.ram.clone(),
            android_version: record.android_version.clone(),
            app: record.app.clone(),
            app_version: record.app_version.clone(),
            emulator_build_type: record.emulator_build_type.as_str().to_string(),
            wrapper: record.wrapper.clone(),
            performance_mode: record.performance_mode.clone(),
            accuracy_level: record.accuracy_level.clone(),
            resolution_scale: record.resolution_scale.clone(),
            async_shader: record.async_shader.clone(),
            frame_skip: record.frame_skip.clone(),
            docked_mode: record.docked_mode.clone(),
            disk_shader_cache: record.disk_shader_cache.clone(),
            reactive_flushing: record.reactive_flushing.clone(),
            cpu_backend: record.cpu_backend.clone(),
            audio_output_engine: record.audio_output_engine.clone(),
            window_adapting_filter: record.window_adapting_filter.clone(),
            spu_threads: record.spu_threads.clone(),
            spu_block_size: record.spu_block_size.clone(),
            wine_version: record.wine_version.clone(),
            box64_version: record.box64_version.clone(),
            box64_preset: record.box64_preset.clone(),
            dxvk_version: record.dxvk_version.clone(),
            vkd3d_version: record.vkd3d_version.clone(),
            turnip_version: record.turnip_version.clone(),
            controller_support: record.controller_support.clone(),
        }
    }

    /// Decoded build type, or `None` when the preset does not carry one.
    pub fn build_type(&self) -> Option<EmulatorBuildType> {
        (!self.emulator_build_type.trim().is_empty())
            .then(|| EmulatorBuildType::from_stored(&self.emulator_build_type))
    }
}
