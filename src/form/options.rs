//! Fixed option lists for the edit form's choice fields.
//!
//! Lists never contain the [`OTHER`] sentinel; it is always offered last.
//! Emulator app options depend on the platform, see
//! [`PlatformClass::app_options`](crate::model::PlatformClass::app_options).

/// Sentinel option meaning "use the custom text instead".
pub const OTHER: &str = "Other";

pub static ANDROID_VERSIONS: &[&str] = &["15", "14", "13", "12", "11", "10", "9"];

pub static RAM_SIZES: &[&str] = &["4 GB", "6 GB", "8 GB", "12 GB", "16 GB", "24 GB"];

pub static WRAPPERS: &[&str] = &["None", "Box64", "FEX-Emu", "Hangover"];

pub static PERFORMANCE_MODES: &[&str] = &["Default", "Performance", "Balanced", "Battery Saver"];

pub static ACCURACY_LEVELS: &[&str] = &["Normal", "High", "Extreme"];

pub static RESOLUTION_SCALES: &[&str] = &["0.5x", "0.75x", "1x", "1.5x", "2x", "3x"];

/// Shared by async shaders, disk shader cache, and reactive flushing.
pub static TOGGLES: &[&str] = &["On", "Off"];

pub static FRAME_SKIPS: &[&str] = &["Off", "1", "2", "3", "Auto"];

pub static DOCKED_MODES: &[&str] = &["Docked", "Handheld"];

pub static CPU_BACKENDS: &[&str] = &["Dynarmic", "NCE"];

pub static AUDIO_OUTPUT_ENGINES: &[&str] = &["Auto", "cubeb", "SDL2", "Null"];

pub static WINDOW_ADAPTING_FILTERS: &[&str] = &[
    "Nearest Neighbor",
    "Bilinear",
    "Bicubic",
    "Gaussian",
    "ScaleForce",
    "AMD FSR",
];

pub static SPU_THREADS: &[&str] = &["Auto", "1", "2", "3", "4", "5", "6"];

pub static SPU_BLOCK_SIZES: &[&str] = &["Safe", "Mega", "Giga"];

pub static WINE_VERSIONS: &[&str] = &["wine-9.0", "wine-8.0", "proton-9.0", "proton-8.0"];

pub static BOX64_VERSIONS: &[&str] = &["0.3.2", "0.3.0", "0.2.8"];

pub static BOX64_PRESETS: &[&str] = &["Stability", "Compatibility", "Intermediate", "Performance"];

pub static DXVK_VERSIONS: &[&str] = &["2.4", "2.3", "2.2", "1.10.3"];

pub static VKD3D_VERSIONS: &[&str] = &["2.13", "2.12", "2.11"];

pub static TURNIP_VERSIONS: &[&str] = &["System", "Turnip v24.3", "Turnip v24.1", "Turnip v24.0"];

pub static CONTROLLER_SUPPORT: &[&str] = &["Full", "Partial", "None"];
