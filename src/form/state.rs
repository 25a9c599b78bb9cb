//! Edit-form state for a test record.

use crate::model::{
    EmulatorBuildType, FieldSet, IssueType, PhoneDbItem, PlatformClass, Reproducibility,
    TestPreset, TestRecord, TestStatus, UserProfile,
};

use super::field::ChoiceField;
use super::options::{
    ACCURACY_LEVELS, ANDROID_VERSIONS, AUDIO_OUTPUT_ENGINES, BOX64_PRESETS, BOX64_VERSIONS,
    CONTROLLER_SUPPORT, CPU_BACKENDS, DOCKED_MODES, DXVK_VERSIONS, FRAME_SKIPS,
    PERFORMANCE_MODES, RAM_SIZES, RESOLUTION_SCALES, SPU_BLOCK_SIZES, SPU_THREADS, TOGGLES,
    TURNIP_VERSIONS, VKD3D_VERSIONS, WINDOW_ADAPTING_FILTERS, WINE_VERSIONS, WRAPPERS,
};

fn filled(s: &str) -> bool {
    !s.trim().is_empty()
}

/// Overwrites `target` with `value` unless `value` is blank.
fn set_text(target: &mut String, value: &str) {
    if filled(value) {
        *target = value.to_string();
    }
}

/// All editable state of the test edit screen.
///
/// Enumerated fields are stored directly; configurable fields are
/// [`ChoiceField`] pairs; free-text fields are plain strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TestForm {
    platform: PlatformClass,

    pub status: TestStatus,
    pub emulator_build_type: EmulatorBuildType,
    pub issue_type: Option<IssueType>,
    pub reproducibility: Option<Reproducibility>,

    pub device_model: String,
    pub gpu_model: String,
    pub driver_version: String,
    pub ram: ChoiceField,
    pub android_version: ChoiceField,

    pub app: ChoiceField,
    pub app_version: String,
    pub wrapper: ChoiceField,
    pub performance_mode: ChoiceField,
    pub game_version: String,

    pub accuracy_level: ChoiceField,
    pub resolution_scale: ChoiceField,
    pub async_shader: ChoiceField,
    pub frame_skip: ChoiceField,

    pub docked_mode: ChoiceField,
    pub disk_shader_cache: ChoiceField,
    pub reactive_flushing: ChoiceField,
    pub cpu_backend: ChoiceField,
    pub audio_output_engine: ChoiceField,
    pub window_adapting_filter: ChoiceField,

    pub spu_threads: ChoiceField,
    pub spu_block_size: ChoiceField,

    pub wine_version: ChoiceField,
    pub box64_version: ChoiceField,
    pub box64_preset: ChoiceField,
    pub dxvk_version: ChoiceField,
    pub vkd3d_version: ChoiceField,
    pub turnip_version: ChoiceField,
    pub controller_support: ChoiceField,
    pub download_size: String,

    pub workaround: String,
    pub issue_note: String,

    pub resolution_width: String,
    pub resolution_height: String,
    pub fps_min: String,
    pub fps_max: String,
    pub media_link: String,
}

impl TestForm {
    /// Creates an empty form for a game of the given platform.
    pub fn new(platform: PlatformClass) -> Self {
        Self {
            platform,
            ..Self::default()
        }
    }

    pub fn platform(&self) -> PlatformClass {
        self.platform
    }

    /// Changes the platform, which changes the app options and required fields.
    pub fn set_platform(&mut self, platform: PlatformClass) {
        self.platform = platform;
    }

    pub fn field_set(&self) -> FieldSet {
        self.platform.field_set()
    }

    /// Loads every field from a previously persisted record.
    ///
    /// Choice fields are matched against their option lists; blank persisted
    /// values leave the current field state alone. Enumerations, resolution,
    /// FPS, and other free-text fields are copied as is.
    pub fn prefill_from(&mut self, record: &TestRecord) {
        self.status = record.status;
        self.emulator_build_type = record.emulator_build_type;
        self.issue_type = record.issue_type;
        self.reproducibility = record.reproducibility;

        self.device_model = record.device_model.clone();
        self.gpu_model = record.gpu_model.clone();
        self.driver_version = record.driver_version.clone();
        self.app_version = record.app_version.clone();
        self.game_version = record.game_version.clone();
        self.download_size = record.download_size.clone();
        self.workaround = record.workaround.clone();
        self.issue_note = record.issue_note.clone();
        self.resolution_width = record.resolution_width.clone();
        self.resolution_height = record.resolution_height.clone();
        self.fps_min = record.fps_min.clone();
        self.fps_max = record.fps_max.clone();
        self.media_link = record.media_link.clone();

        self.ram.set_field(RAM_SIZES, &record.ram);
        self.android_version
            .set_field(ANDROID_VERSIONS, &record.android_version);
        self.app.set_field(self.platform.app_options(), &record.app);
        self.wrapper.set_field(WRAPPERS, &record.wrapper);
        self.performance_mode
            .set_field(PERFORMANCE_MODES, &record.performance_mode);
        self.apply_tunables(
            &record.accuracy_level,
            &record.resolution_scale,
            &record.async_shader,
            &record.frame_skip,
        );
        self.apply_switch(
            &record.docked_mode,
            &record.disk_shader_cache,
            &record.reactive_flushing,
            &record.cpu_backend,
            &record.audio_output_engine,
            &record.window_adapting_filter,
        );
        self.spu_threads.set_field(SPU_THREADS, &record.spu_threads);
        self.spu_block_size
            .set_field(SPU_BLOCK_SIZES, &record.spu_block_size);
        self.apply_pc(
            &record.wine_version,
            &record.box64_version,
            &record.box64_preset,
            &record.dxvk_version,
            &record.vkd3d_version,
            &record.turnip_version,
            &record.controller_support,
        );
    }

    /// Merges a preset into the form.
    ///
    /// Only fields the preset carries (non-blank) change; status, issue,
    /// result, and media fields are never touched.
    pub fn apply_preset(&mut self, preset: &TestPreset) {
        set_text(&mut self.device_model, &preset.device_model);
        set_text(&mut self.gpu_model, &preset.gpu_model);
        set_text(&mut self.driver_version, &preset.driver_version);
        set_text(&mut self.app_version, &preset.app_version);
        if let Some(build_type) = preset.build_type() {
            self.emulator_build_type = build_type;
        }

        self.ram.set_field(RAM_SIZES, &preset.ram);
        self.android_version
            .set_field(ANDROID_VERSIONS, &preset.android_version);
        self.app.set_field(self.platform.app_options(), &preset.app);
        self.wrapper.set_field(WRAPPERS, &preset.wrapper);
        self.performance_mode
            .set_field(PERFORMANCE_MODES, &preset.performance_mode);
        self.apply_tunables(
            &preset.accuracy_level,
            &preset.resolution_scale,
            &preset.async_shader,
            &preset.frame_skip,
        );
        self.apply_switch(
            &preset.docked_mode,
            &preset.disk_shader_cache,
            &preset.reactive_flushing,
            &preset.cpu_backend,
            &preset.audio_output_engine,
            &preset.window_adapting_filter,
        );
        self.spu_threads.set_field(SPU_THREADS, &preset.spu_threads);
        self.spu_block_size
            .set_field(SPU_BLOCK_SIZES, &preset.spu_block_size);
        self.apply_pc(
            &preset.wine_version,
            &preset.box64_version,
            &preset.box64_preset,
            &preset.dxvk_version,
            &preset.vkd3d_version,
            &preset.turnip_version,
            &preset.controller_support,
        );
    }

    /// Fills device model and RAM from a phone database entry.
    pub fn apply_device(&mut self, device: &PhoneDbItem) {
        set_text(&mut self.device_model, &device.name);
        self.ram.set_field(RAM_SIZES, &device.ram);
    }

    fn apply_tunables(&mut self, accuracy: &str, scale: &str, async_shader: &str, frame_skip: &str) {
        self.accuracy_level.set_field(ACCURACY_LEVELS, accuracy);
        self.resolution_scale.set_field(RESOLUTION_SCALES, scale);
        self.async_shader.set_field(TOGGLES, async_shader);
        self.frame_skip.set_field(FRAME_SKIPS, frame_skip);
    }

    fn apply_switch(
        &mut self,
        docked: &str,
        disk_cache: &str,
        reactive_flushing: &str,
        cpu_backend: &str,
        audio: &str,
        filter: &str,
    ) {
        self.docked_mode.set_field(DOCKED_MODES, docked);
        self.disk_shader_cache.set_field(TOGGLES, disk_cache);
        self.reactive_flushing.set_field(TOGGLES, reactive_flushing);
        self.cpu_backend.set_field(CPU_BACKENDS, cpu_backend);
        self.audio_output_engine
            .set_field(AUDIO_OUTPUT_ENGINES, audio);
        self.window_adapting_filter
            .set_field(WINDOW_ADAPTING_FILTERS, filter);
    }

    #[allow(clippy::too_many_arguments)]
    fn apply_pc(
        &mut self,
        wine: &str,
        box64: &str,
        box64_preset: &str,
        dxvk: &str,
        vkd3d: &str,
        turnip: &str,
        controller: &str,
    ) {
        self.wine_version.set_field(WINE_VERSIONS, wine);
        self.box64_version.set_field(BOX64_VERSIONS, box64);
        self.box64_preset.set_field(BOX64_PRESETS, box64_preset);
        self.dxvk_version.set_field(DXVK_VERSIONS, dxvk);
        self.vkd3d_version.set_field(VKD3D_VERSIONS, vkd3d);
        self.turnip_version.set_field(TURNIP_VERSIONS, turnip);
        self.controller_support
            .set_field(CONTROLLER_SUPPORT, controller);
    }

    /// Returns `true` if the form may be submitted.
    ///
    /// The base fields are always required, the issue note is required for
    /// NOT_WORKING, and accuracy, scale, and frame skip are required on
    /// platforms that use emulator settings.
    pub fn is_valid(&self) -> bool {
        let base = self.android_version.is_filled()
            && filled(&self.device_model)
            && filled(&self.gpu_model)
            && filled(&self.driver_version)
            && self.ram.is_filled()
            && self.wrapper.is_filled()
            && self.performance_mode.is_filled()
            && self.app.is_filled()
            && filled(&self.app_version)
            && filled(&self.game_version)
            && filled(&self.resolution_width)
            && filled(&self.resolution_height)
            && filled(&self.fps_min)
            && filled(&self.fps_max);

        let issue = !self.status.is_failing() || filled(&self.issue_note);

        let emulator = !self.platform.requires_emulator_settings()
            || (self.accuracy_level.is_filled()
                && self.resolution_scale.is_filled()
                && self.frame_skip.is_filled());

        base && issue && emulator
    }

    /// Builds the record to persist from the current form state.
    ///
    /// Every field is resolved and trimmed; issue fields are cleared unless
    /// the status is NOT_WORKING; attribution comes from `user`.
    pub fn to_record(&self, updated_at_millis: i64, user: Option<&UserProfile>) -> TestRecord {
        let mut record = TestRecord {
            status: self.status,
            device_model: self.device_model.trim().to_string(),
            gpu_model: self.gpu_model.trim().to_string(),
            driver_version: self.driver_version.trim().to_string(),
            ram: self.ram.value(),
            android_version: self.android_version.value(),
            app: self.app.value(),
            app_version: self.app_version.trim().to_string(),
            emulator_build_type: self.emulator_build_type,
            wrapper: self.wrapper.value(),
            performance_mode: self.performance_mode.value(),
            game_version: self.game_version.trim().to_string(),
            accuracy_level: self.accuracy_level.value(),
            resolution_scale: self.resolution_scale.value(),
            async_shader: self.async_shader.value(),
            frame_skip: self.frame_skip.value(),
            docked_mode: self.docked_mode.value(),
            disk_shader_cache: self.disk_shader_cache.value(),
            reactive_flushing: self.reactive_flushing.value(),
            cpu_backend: self.cpu_backend.value(),
            audio_output_engine: self.audio_output_engine.value(),
            window_adapting_filter: self.window_adapting_filter.value(),
            spu_threads: self.spu_threads.value(),
            spu_block_size: self.spu_block_size.value(),
            wine_version: self.wine_version.value(),
            box64_version: self.box64_version.value(),
            box64_preset: self.box64_preset.value(),
            dxvk_version: self.dxvk_version.value(),
            vkd3d_version: self.vkd3d_version.value(),
            turnip_version: self.turnip_version.value(),
            controller_support: self.controller_support.value(),
            download_size: self.download_size.trim().to_string(),
            issue_type: self.issue_type,
            reproducibility: self.reproducibility,
            workaround: self.workaround.trim().to_string(),
            issue_note: self.issue_note.trim().to_string(),
            resolution_width: self.resolution_width.trim().to_string(),
            resolution_height: self.resolution_height.trim().to_string(),
            fps_min: self.fps_min.trim().to_string(),
            fps_max: self.fps_max.trim().to_string(),
            media_link: self.media_link.trim().to_string(),
            from_account: user.is_some(),
            author_uid: user.map(|u| u.uid.clone()),
            author_name: user.map(|u| u.display_name.clone()),
            updated_at_millis,
        };
        record.clear_issue_fields_unless_failing();
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::options::OTHER;

    /// A form with every base field filled in.
    fn base_form(platform: &str) -> TestForm {
        let mut form = TestForm::new(PlatformClass::classify(platform));
        form.status = TestStatus::Working;
        form.android_version.select("14");
        form.device_model = "Pixel 8".to_string();
        form.gpu_model = "Mali-G715".to_string();
        form.driver_version = "v47".to_string();
        form.ram.select("8 GB");
        form.wrapper.select("None");
        form.performance_mode.select("Default");
        form.app.set_custom("My Emulator");
        form.app_version = "1.2.3".to_string();
        form.game_version = "1.0.0".to_string();
        form.resolution_width = "1280".to_string();
        form.resolution_height = "720".to_string();
        form.fps_min = "25".to_string();
        form.fps_max = "30".to_string();
        form
    }

    fn record() -> TestRecord {
        TestRecord {
            status: TestStatus::NotWorking,
            device_model: "Galaxy S23".to_string(),
            gpu_model: "Adreno 740".to_string(),
            driver_version: "Turnip 24.3".to_string(),
            ram: "8 GB".to_string(),
            android_version: "Android 14 QPR2".to_string(),
            app: "Eden".to_string(),
            app_version: "0.0.3".to_string(),
            emulator_build_type: EmulatorBuildType::Nightly,
            wrapper: "None".to_string(),
            performance_mode: "Performance".to_string(),
            game_version: "1.6.0".to_string(),
            accuracy_level: "High".to_string(),
            resolution_scale: "1x".to_string(),
            frame_skip: "off".to_string(),
            docked_mode: "Docked".to_string(),
            issue_type: Some(IssueType::Graphics),
            reproducibility: Some(Reproducibility::Sometimes),
            issue_note: "flickering shadows".to_string(),
            resolution_width: "1920".to_string(),
            resolution_height: "1080".to_string(),
            fps_min: "20".to_string(),
            fps_max: "30".to_string(),
            updated_at_millis: 1_700_000_000_000,
            ..TestRecord::default()
        }
    }

    mod validity {
        use super::*;

        #[test]
        fn pc_working_valid_without_emulator_settings() {
            let form = base_form("PC");
            assert!(form.accuracy_level.value().is_empty());
            assert!(form.is_valid());
        }

        #[test]
        fn not_working_requires_issue_note() {
            let mut form = base_form("PC");
            form.status = TestStatus::NotWorking;
            assert!(!form.is_valid());
            form.issue_note = "crashes on boot".to_string();
            assert!(form.is_valid());
        }

        #[test]
        fn workaround_not_required() {
            let mut form = base_form("PC");
            form.status = TestStatus::NotWorking;
            form.issue_note = "crashes on boot".to_string();
            assert!(form.workaround.is_empty());
            assert!(form.is_valid());
        }

        #[test]
        fn whitespace_issue_note_is_blank() {
            let mut form = base_form("PC");
            form.status = TestStatus::NotWorking;
            form.issue_note = "   ".to_string();
            assert!(!form.is_valid());
        }

        #[test]
        fn switch_requires_emulator_settings() {
            let mut form = base_form("Nintendo Switch");
            form.status = TestStatus::Untested;
            assert!(!form.is_valid());
            form.accuracy_level.select("Normal");
            assert!(!form.is_valid());
            form.resolution_scale.select("1x");
            assert!(!form.is_valid());
            form.frame_skip.select("Off");
            assert!(form.is_valid());
        }

        #[test]
        fn other_platform_requires_emulator_settings() {
            let mut form = base_form("Arcade");
            assert!(!form.is_valid());
            form.accuracy_level.select("Normal");
            form.resolution_scale.select("1x");
            form.frame_skip.set_custom("4");
            assert!(form.is_valid());
        }

        #[test]
        fn async_shader_not_required() {
            let mut form = base_form("PS3");
            form.accuracy_level.select("Normal");
            form.resolution_scale.select("1x");
            form.frame_skip.select("Off");
            assert!(form.async_shader.value().is_empty());
            assert!(form.is_valid());
        }

        #[test]
        fn other_sentinel_with_blank_custom_is_invalid() {
            let mut form = base_form("PC");
            form.ram.set_custom("  ");
            assert!(!form.is_valid());
        }

        #[test]
        fn each_base_field_is_required() {
            let clears: [fn(&mut TestForm); 14] = [
                |f| f.android_version = ChoiceField::default(),
                |f| f.device_model.clear(),
                |f| f.gpu_model.clear(),
                |f| f.driver_version = " ".to_string(),
                |f| f.ram = ChoiceField::default(),
                |f| f.wrapper = ChoiceField::default(),
                |f| f.performance_mode = ChoiceField::default(),
                |f| f.app = ChoiceField::new(OTHER, ""),
                |f| f.app_version.clear(),
                |f| f.game_version.clear(),
                |f| f.resolution_width.clear(),
                |f| f.resolution_height.clear(),
                |f| f.fps_min.clear(),
                |f| f.fps_max.clear(),
            ];
            for (i, clear) in clears.iter().enumerate() {
                let mut form = base_form("PC");
                clear(&mut form);
                assert!(!form.is_valid(), "clearing base field #{i} kept the form valid");
            }
        }

        #[test]
        fn empty_form_is_invalid() {
            assert!(!TestForm::new(PlatformClass::Pc).is_valid());
        }
    }

    mod prefill {
        use super::*;

        #[test]
        fn matched_options_selected() {
            let mut form = TestForm::new(PlatformClass::Switch);
            form.prefill_from(&record());
            assert_eq!(form.ram, ChoiceField::new("8 GB", ""));
            assert_eq!(form.app, ChoiceField::new("Eden", ""));
            assert_eq!(form.accuracy_level, ChoiceField::new("High", ""));
            assert_eq!(form.docked_mode, ChoiceField::new("Docked", ""));
        }

        #[test]
        fn unmatched_values_become_custom() {
            let mut form = TestForm::new(PlatformClass::Switch);
            form.prefill_from(&record());
            assert_eq!(
                form.android_version,
                ChoiceField::new(OTHER, "Android 14 QPR2")
            );
            // exact matching only: "off" does not match "Off"
            assert_eq!(form.frame_skip, ChoiceField::new(OTHER, "off"));
        }

        #[test]
        fn app_matched_against_platform_options() {
            let mut form = TestForm::new(PlatformClass::Pc);
            form.prefill_from(&record());
            assert_eq!(form.app, ChoiceField::new(OTHER, "Eden"));
        }

        #[test]
        fn blank_values_leave_defaults() {
            let mut form = TestForm::new(PlatformClass::Switch);
            form.wrapper.select("Box64");
            let mut r = record();
            r.wrapper = String::new();
            form.prefill_from(&r);
            assert_eq!(form.wrapper, ChoiceField::new("Box64", ""));
        }

        #[test]
        fn enums_and_plain_fields_copied() {
            let mut form = TestForm::new(PlatformClass::Switch);
            form.prefill_from(&record());
            assert_eq!(form.status, TestStatus::NotWorking);
            assert_eq!(form.emulator_build_type, EmulatorBuildType::Nightly);
            assert_eq!(form.issue_type, Some(IssueType::Graphics));
            assert_eq!(form.reproducibility, Some(Reproducibility::Sometimes));
            assert_eq!(form.resolution_width, "1920");
            assert_eq!(form.resolution_height, "1080");
            assert_eq!(form.fps_min, "20");
            assert_eq!(form.fps_max, "30");
            assert_eq!(form.device_model, "Galaxy S23");
            assert_eq!(form.issue_note, "flickering shadows");
        }

        #[test]
        fn prefilled_record_round_trips() {
            let mut form = TestForm::new(PlatformClass::Switch);
            let original = record();
            form.prefill_from(&original);
            assert!(form.is_valid());
            assert_eq!(form.to_record(original.updated_at_millis, None), original);
        }
    }

    mod preset {
        use super::*;

        #[test]
        fn partial_merge_leaves_other_fields() {
            let mut form = TestForm::new(PlatformClass::Switch);
            form.gpu_model = "Adreno 750".to_string();
            form.wrapper.select("Box64");
            let preset = TestPreset {
                android_version: "14".to_string(),
                device_model: "Pixel 8".to_string(),
                ..TestPreset::default()
            };
            form.apply_preset(&preset);
            assert_eq!(form.android_version, ChoiceField::new("14", ""));
            assert_eq!(form.device_model, "Pixel 8");
            assert_eq!(form.gpu_model, "Adreno 750");
            assert_eq!(form.wrapper, ChoiceField::new("Box64", ""));
        }

        #[test]
        fn never_touches_result_fields() {
            let mut form = base_form("PC");
            form.status = TestStatus::NotWorking;
            form.issue_note = "crash".to_string();
            let before = form.clone();
            let preset = TestPreset {
                app: "Winlator".to_string(),
                ..TestPreset::default()
            };
            form.apply_preset(&preset);
            assert_eq!(form.status, before.status);
            assert_eq!(form.issue_note, before.issue_note);
            assert_eq!(form.fps_min, before.fps_min);
            assert_eq!(form.resolution_width, before.resolution_width);
            assert_eq!(form.app, ChoiceField::new("Winlator", ""));
        }

        #[test]
        fn unknown_build_type_falls_back_to_stable() {
            let mut form = TestForm::new(PlatformClass::Switch);
            form.emulator_build_type = EmulatorBuildType::Canary;
            let preset = TestPreset {
                emulator_build_type: "NOT_A_REAL_VALUE".to_string(),
                ..TestPreset::default()
            };
            form.apply_preset(&preset);
            assert_eq!(form.emulator_build_type, EmulatorBuildType::Stable);
        }

        #[test]
        fn blank_build_type_leaves_current() {
            let mut form = TestForm::new(PlatformClass::Switch);
            form.emulator_build_type = EmulatorBuildType::Canary;
            form.apply_preset(&TestPreset::default());
            assert_eq!(form.emulator_build_type, EmulatorBuildType::Canary);
        }

        #[test]
        fn empty_preset_is_noop() {
            let mut form = base_form("Nintendo Switch");
            let before = form.clone();
            form.apply_preset(&TestPreset::default());
            assert_eq!(form, before);
        }

        #[test]
        fn unmatched_preset_value_becomes_custom() {
            let mut form = TestForm::new(PlatformClass::Pc);
            let preset = TestPreset {
                dxvk_version: "2.5-async".to_string(),
                ..TestPreset::default()
            };
            form.apply_preset(&preset);
            assert_eq!(form.dxvk_version, ChoiceField::new(OTHER, "2.5-async"));
        }
    }

    #[test]
    fn apply_device_sets_model_and_ram() {
        let mut form = TestForm::new(PlatformClass::Switch);
        form.gpu_model = "Adreno 740".to_string();
        form.apply_device(&PhoneDbItem {
            name: "Galaxy S23".to_string(),
            cpu: "Snapdragon 8 Gen 2".to_string(),
            ram: "8 GB".to_string(),
        });
        assert_eq!(form.device_model, "Galaxy S23");
        assert_eq!(form.ram, ChoiceField::new("8 GB", ""));
        assert_eq!(form.gpu_model, "Adreno 740");
    }

    mod to_record {
        use super::*;

        #[test]
        fn resolves_choice_fields() {
            let form = base_form("PC");
            let record = form.to_record(42, None);
            assert_eq!(record.app, "My Emulator");
            assert_eq!(record.ram, "8 GB");
            assert_eq!(record.updated_at_millis, 42);
        }

        #[test]
        fn trims_text_fields() {
            let mut form = base_form("PC");
            form.device_model = "  Pixel 8 ".to_string();
            assert_eq!(form.to_record(0, None).device_model, "Pixel 8");
        }

        #[test]
        fn clears_issue_fields_when_working() {
            let mut form = base_form("PC");
            form.issue_type = Some(IssueType::Crash);
            form.issue_note = "leftover".to_string();
            form.workaround = "leftover".to_string();
            let record = form.to_record(0, None);
            assert_eq!(record.issue_type, None);
            assert_eq!(record.issue_note, "");
            assert_eq!(record.workaround, "");
        }

        #[test]
        fn anonymous_attribution() {
            let record = base_form("PC").to_record(0, None);
            assert!(!record.from_account);
            assert_eq!(record.author_uid, None);
            assert_eq!(record.author_name, None);
        }

        #[test]
        fn account_attribution() {
            let user = UserProfile {
                uid: "u1".to_string(),
                display_name: "Sam".to_string(),
                photo_url: None,
            };
            let record = base_form("PC").to_record(0, Some(&user));
            assert!(record.from_account);
            assert_eq!(record.author_uid.as_deref(), Some("u1"));
            assert_eq!(record.author_name.as_deref(), Some("Sam"));
        }
    }
}
