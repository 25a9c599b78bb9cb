//! Collaborator interfaces consumed by the screen controllers.
//!
//! Controllers receive these as explicit parameters; the file-backed
//! managers in this module tree are the local implementations.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use super::error::StorageError;
use crate::model::{
    CommentAuthor, Game, PhoneDbItem, SavedDevice, TestComment, TestPreset, TestRecord,
    UserProfile,
};

/// Games and their test history.
pub trait RecordStore {
    /// Returns the current snapshot of a game, or `None` if it is unknown.
    fn get_game(&self, game_id: &str) -> Result<Option<Game>, StorageError>;

    /// Subscribes to changes of one game. The receiver starts with the
    /// current snapshot and sees every later write.
    fn subscribe(&mut self, game_id: &str) -> Result<watch::Receiver<Option<Game>>, StorageError>;

    /// Inserts or replaces a game.
    fn save_game(&mut self, game: &Game) -> Result<(), StorageError>;

    /// Adds a test. Fails if the game already has a test with the same
    /// `updated_at_millis`.
    fn submit_new_test(&mut self, game_id: &str, record: TestRecord) -> Result<(), StorageError>;

    /// Replaces the test identified by `test_millis`. The stored record keeps
    /// `test_millis` as its timestamp.
    fn edit_test(
        &mut self,
        game_id: &str,
        test_millis: i64,
        record: TestRecord,
    ) -> Result<(), StorageError>;

    /// Flips the favorite flag, returning the new value.
    fn toggle_favorite(&mut self, game_id: &str) -> Result<bool, StorageError>;
}

/// Comments on games and individual tests.
pub trait CommentStore {
    /// Comments in the currently loaded page window, grouped by test key.
    fn comments_by_test(
        &self,
        game_id: &str,
    ) -> Result<BTreeMap<String, Vec<TestComment>>, StorageError>;

    fn add_comment(
        &mut self,
        game_id: &str,
        test_millis: Option<i64>,
        text: &str,
        author: CommentAuthor,
        now: DateTime<Utc>,
    ) -> Result<TestComment, StorageError>;

    /// Changes the text of a comment owned by `editor`.
    fn edit_comment(
        &mut self,
        game_id: &str,
        comment_id: &str,
        new_text: &str,
        editor: Option<&UserProfile>,
        now: DateTime<Utc>,
    ) -> Result<TestComment, StorageError>;

    /// Widens the page window by one page. Returns `false` when everything
    /// is already loaded.
    fn load_more_comments_for_game(&mut self, game_id: &str) -> Result<bool, StorageError>;
}

/// Named settings presets.
pub trait PresetStore {
    fn get_all_presets(&self) -> Result<Vec<TestPreset>, StorageError>;

    /// Inserts or replaces a preset, assigning an id if it has none.
    fn save_preset(&mut self, preset: TestPreset) -> Result<TestPreset, StorageError>;

    fn rename_preset(&mut self, id: &str, new_name: &str) -> Result<(), StorageError>;

    fn delete_preset(&mut self, id: &str) -> Result<(), StorageError>;

    /// Suggested name for the next preset (`"Preset N"`).
    fn next_default_name(&self) -> Result<String, StorageError>;
}

/// Phones saved to a user's profile.
pub trait DeviceStore {
    fn devices(&self, uid: &str) -> Result<Vec<SavedDevice>, StorageError>;

    fn add_device(&mut self, uid: &str, spec: PhoneDbItem) -> Result<SavedDevice, StorageError>;

    fn remove_device(&mut self, uid: &str, id: &str) -> Result<(), StorageError>;
}

/// Identity of the current user.
pub trait AuthProvider {
    fn current_user(&self) -> Option<&UserProfile>;

    fn sign_in(&mut self, user: UserProfile);

    fn sign_out(&mut self);

    fn update_display_name(&mut self, name: &str) -> Result<(), StorageError>;
}
