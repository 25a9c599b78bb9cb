use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse platform category derived from a game's free-text platform string.
///
/// Determines which emulator apps are offered and which platform-specific
/// fields the edit form shows and requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PlatformClass {
    Switch,
    Pc,
    Ps3,
    #[default]
    Other,
}

/// Which groups of platform-specific fields apply to a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSet {
    /// Wine, Box64, VKD3D, DXVK, Turnip, controller support, download size.
    pub pc_fields: bool,
    /// SPU thread count and SPU block size.
    pub ps3_fields: bool,
    /// Docked mode, disk shader cache, reactive flushing, CPU backend,
    /// audio output engine, window adapting filter.
    pub switch_fields: bool,
    /// Accuracy level, resolution scale, async shaders, frame skip.
    pub emulator_settings: bool,
}

static SWITCH_APPS: &[&str] = &["Eden", "Citron", "Sudachi", "Yuzu", "Strato", "Skyline"];
static PC_APPS: &[&str] = &["Winlator", "GameHub", "Mobox", "Box64Droid", "ExaGear"];
static PS3_APPS: &[&str] = &["RPCS3", "aPS3e"];
static OTHER_APPS: &[&str] = &[
    "RetroArch",
    "AetherSX2",
    "NetherSX2",
    "Dolphin",
    "PPSSPP",
    "DuckStation",
    "Vita3K",
];

impl PlatformClass {
    /// Classifies a platform string. Matching is case-insensitive and
    /// substring-based, checked in the order Switch, PC, PS3.
    pub fn classify(platform: &str) -> Self {
        let p = platform.to_lowercase();
        if p.contains("switch") || p.contains("nintendo") {
            Self::Switch
        } else if p.contains("pc") || p.contains("windows") {
            Self::Pc
        } else if p.contains("playstation") || p.contains("ps3") {
            Self::Ps3
        } else {
            Self::Other
        }
    }

    /// Returns the field groups shown for this platform.
    pub fn field_set(self) -> FieldSet {
        FieldSet {
            pc_fields: self == Self::Pc,
            ps3_fields: self == Self::Ps3,
            switch_fields: self == Self::Switch,
            emulator_settings: self.requires_emulator_settings(),
        }
    }

    /// Returns `true` if accuracy, scale, and frame skip must be filled in.
    ///
    /// PC games run through a compatibility wrapper rather than an emulator.
    pub fn requires_emulator_settings(self) -> bool {
        self != Self::Pc
    }

    /// Returns the emulator (or wrapper host) apps offered for this platform.
    pub fn app_options(self) -> &'static [&'static str] {
        match self {
            Self::Switch => SWITCH_APPS,
            Self::Pc => PC_APPS,
            Self::Ps3 => PS3_APPS,
            Self::Other => OTHER_APPS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Switch => "Switch",
            Self::Pc => "PC",
            Self::Ps3 => "PS3",
            Self::Other => "Other",
        }
    }
}

#[mutants::skip]
impl fmt::Display for PlatformClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
