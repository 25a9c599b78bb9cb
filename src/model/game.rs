use serde::{Deserialize, Serialize};

use super::platform::PlatformClass;
use super::record::TestRecord;

/// A catalog entry and its test history.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub title: String,
    pub platform: String,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub test_results: Vec<TestRecord>,
}

impl Game {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        platform: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            platform: platform.into(),
            is_favorite: false,
            test_results: Vec::new(),
        }
    }

    /// Returns the platform category of this game.
    pub fn platform_class(&self) -> PlatformClass {
        PlatformClass::classify(&self.platform)
    }

    /// Finds the test record with the given `updated_at_millis`.
    pub fn find_test(&self, millis: i64) -> Option<&TestRecord> {
        self.test_results
            .iter()
            .find(|t| t.updated_at_millis == millis)
    }

    /// Adds a new test record.
    pub fn add_test(&mut self, record: TestRecord) {
        self.test_results.push(record);
    }

    /// Replaces the test record identified by `millis`, returning the old one.
    ///
    /// Returns `None` (and leaves the game untouched) if no record matches.
    pub fn replace_test(&mut self, millis: i64, record: TestRecord) -> Option<TestRecord> {
        self.test_results
            .iter_mut()
            .find(|t| t.updated_at_millis == millis)
            .map(|slot| std::mem::replace(slot, record))
    }

    /// Returns test records newest first.
    pub fn tests_newest_first(&self) -> Vec<&TestRecord> {
        let mut tests: Vec<&TestRecord> = self.test_results.iter().collect();
        tests.sort_by(|a, b| b.updated_at_millis.cmp(&a.updated_at_millis));
        tests
    }
}
