use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// An enum persisted as one of a fixed set of strings.
pub(crate) trait StoredEnum: Sized + Copy + 'static {
    fn members() -> &'static [Self];

    fn stored_str(self) -> &'static str;

    /// Decodes a stored string, or `None` if no member matches exactly.
    fn parse_stored(raw: &str) -> Option<Self> {
        Self::members()
            .iter()
            .copied()
            .find(|m| m.stored_str() == raw)
    }
}

/// Deserializes a stored enum, using the default for unknown strings.
pub(crate) fn default_on_unknown<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: StoredEnum + Default,
{
    let raw = String::deserialize(deserializer)?;
    Ok(T::parse_stored(&raw).unwrap_or_else(|| {
        warn!(value = %raw, "unknown stored value, using default");
        T::default()
    }))
}

/// Deserializes an optional stored enum, reading unknown strings as `None`.
pub(crate) fn none_on_unknown<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: StoredEnum,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| {
        let value = T::parse_stored(&raw);
        if value.is_none() {
            warn!(value = %raw, "unknown stored value, dropping it");
        }
        value
    }))
}

macro_rules! stored_enum {
    ($ty:ty) => {
        impl StoredEnum for $ty {
            fn members() -> &'static [Self] {
                Self::all()
            }

            fn stored_str(self) -> &'static str {
                self.as_str()
            }
        }
    };
}

stored_enum!(TestStatus);
stored_enum!(IssueType);
stored_enum!(Reproducibility);
stored_enum!(EmulatorBuildType);

/// Outcome of a compatibility test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestStatus {
    Working,
    #[default]
    Untested,
    NotWorking,
}

static ALL_STATUSES: &[TestStatus] = &[
    TestStatus::Working,
    TestStatus::Untested,
    TestStatus::NotWorking,
];

impl TestStatus {
    /// Returns the stored string representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            TestStatus::Working => "WORKING",
            TestStatus::Untested => "UNTESTED",
            TestStatus::NotWorking => "NOT_WORKING",
        }
    }

    /// Returns all statuses.
    pub fn all() -> &'static [TestStatus] {
        ALL_STATUSES
    }

    /// Returns `true` if this status carries issue details.
    pub fn is_failing(&self) -> bool {
        matches!(self, TestStatus::NotWorking)
    }
}

#[mutants::skip]
impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of problem reported with a failing test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueType {
    Crash,
    BlackScreen,
    Graphics,
    Audio,
    Performance,
    SoftLock,
    Other,
}

static ALL_ISSUE_TYPES: &[IssueType] = &[
    IssueType::Crash,
    IssueType::BlackScreen,
    IssueType::Graphics,
    IssueType::Audio,
    IssueType::Performance,
    IssueType::SoftLock,
    IssueType::Other,
];

impl IssueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::Crash => "CRASH",
            IssueType::BlackScreen => "BLACK_SCREEN",
            IssueType::Graphics => "GRAPHICS",
            IssueType::Audio => "AUDIO",
            IssueType::Performance => "PERFORMANCE",
            IssueType::SoftLock => "SOFT_LOCK",
            IssueType::Other => "OTHER",
        }
    }

    pub fn all() -> &'static [IssueType] {
        ALL_ISSUE_TYPES
    }
}

#[mutants::skip]
impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How reliably a reported issue occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reproducibility {
    Always,
    Often,
    Sometimes,
    Rarely,
}

static ALL_REPRODUCIBILITY: &[Reproducibility] = &[
    Reproducibility::Always,
    Reproducibility::Often,
    Reproducibility::Sometimes,
    Reproducibility::Rarely,
];

impl Reproducibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reproducibility::Always => "ALWAYS",
            Reproducibility::Often => "OFTEN",
            Reproducibility::Sometimes => "SOMETIMES",
            Reproducibility::Rarely => "RARELY",
        }
    }

    pub fn all() -> &'static [Reproducibility] {
        ALL_REPRODUCIBILITY
    }
}

#[mutants::skip]
impl fmt::Display for Reproducibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Release channel of the emulator build used for a test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmulatorBuildType {
    #[default]
    Stable,
    Nightly,
    Canary,
    Custom,
}

static ALL_BUILD_TYPES: &[EmulatorBuildType] = &[
    EmulatorBuildType::Stable,
    EmulatorBuildType::Nightly,
    EmulatorBuildType::Canary,
    EmulatorBuildType::Custom,
];

impl EmulatorBuildType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmulatorBuildType::Stable => "STABLE",
            EmulatorBuildType::Nightly => "NIGHTLY",
            EmulatorBuildType::Canary => "CANARY",
            EmulatorBuildType::Custom => "CUSTOM",
        }
    }

    pub fn all() -> &'static [EmulatorBuildType] {
        ALL_BUILD_TYPES
    }

    /// Decodes a build type stored as a loose string (e.g. inside a preset).
    ///
    /// Unknown values fall back to [`EmulatorBuildType::Stable`].
    pub fn from_stored(raw: &str) -> Self {
        Self::parse_stored(raw).unwrap_or_default()
    }
}

#[mutants::skip]
impl fmt::Display for EmulatorBuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
