use std::fmt;

use serde::{Deserialize, Serialize};

use super::status::{
    EmulatorBuildType, IssueType, Reproducibility, TestStatus, default_on_unknown,
    none_on_unknown,
};
use super::validation::{ValidationError, split_test_id};

/// Canonical identifier of a test record: `"{game_id}_{updated_at_millis}"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TestId {
    pub game_id: String,
    pub millis: i64,
}

impl TestId {
    pub fn new(game_id: impl Into<String>, millis: i64) -> Self {
        Self {
            game_id: game_id.into(),
            millis,
        }
    }

    /// Parses a canonical test id string.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let (game_id, millis) = split_test_id(raw)?;
        Ok(Self { game_id, millis })
    }
}

#[mutants::skip]
impl fmt::Display for TestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.game_id, self.millis)
    }
}

/// One compatibility test submission for a game on a given device and
/// software stack.
///
/// Every descriptor is stored as the resolved plain string; the
/// selected/custom pairing only exists in the edit form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TestRecord {
    #[serde(deserialize_with = "default_on_unknown")]
    pub status: TestStatus,

    // Device and environment
    pub device_model: String,
    pub gpu_model: String,
    pub driver_version: String,
    pub ram: String,
    pub android_version: String,

    // App and emulator
    pub app: String,
    pub app_version: String,
    #[serde(deserialize_with = "default_on_unknown")]
    pub emulator_build_type: EmulatorBuildType,
    pub wrapper: String,
    pub performance_mode: String,
    pub game_version: String,

    // Emulator settings (all non-PC platforms)
    pub accuracy_level: String,
    pub resolution_scale: String,
    pub async_shader: String,
    pub frame_skip: String,

    // Switch
    pub docked_mode: String,
    pub disk_shader_cache: String,
    pub reactive_flushing: String,
    pub cpu_backend: String,
    pub audio_output_engine: String,
    pub window_adapting_filter: String,

    // PS3
    pub spu_threads: String,
    pub spu_block_size: String,

    // PC
    pub wine_version: String,
    pub box64_version: String,
    pub box64_preset: String,
    pub dxvk_version: String,
    pub vkd3d_version: String,
    pub turnip_version: String,
    pub controller_support: String,
    pub download_size: String,

    // Issue details, only meaningful when `status` is NOT_WORKING
    #[serde(deserialize_with = "none_on_unknown")]
    pub issue_type: Option<IssueType>,
    #[serde(deserialize_with = "none_on_unknown")]
    pub reproducibility: Option<Reproducibility>,
    pub workaround: String,
    pub issue_note: String,

    // Results
    pub resolution_width: String,
    pub resolution_height: String,
    pub fps_min: String,
    pub fps_max: String,
    pub media_link: String,

    // Attribution
    pub from_account: bool,
    pub author_uid: Option<String>,
    pub author_name: Option<String>,

    pub updated_at_millis: i64,
}

impl TestRecord {
    /// Returns the canonical id of this record within the given game.
    pub fn test_id(&self, game_id: &str) -> TestId {
        TestId::new(game_id, self.updated_at_millis)
    }

    /// Clears issue details unless the status is NOT_WORKING.
    pub fn clear_issue_fields_unless_failing(&mut self) {
        if self.status.is_failing() {
            return;
        }
        self.issue_type = None;
        self.reproducibility = None;
        self.workaround.clear();
        self.issue_note.clear();
    }
}
