use chrono::{DateTime, Utc};
use tracing::info;

use super::action::{Action, Notice};
use crate::model::{CommentAuthor, TestComment, TestPreset, UserProfile};
use crate::storage::{
    AuthProvider, CommentStore, PresetStore, RecordStore, StorageError, Stores,
};

/// The stores and identity an [`Action`] is applied against.
pub struct Collaborators<'a> {
    pub records: &'a mut dyn RecordStore,
    pub presets: &'a mut dyn PresetStore,
    pub comments: &'a mut dyn CommentStore,
    pub user: Option<&'a UserProfile>,
    /// Describes the device for anonymous comments.
    pub device: &'a str,
}

impl<'a> Collaborators<'a> {
    /// Borrows every collaborator from the file-backed stores.
    pub fn from_stores(stores: &'a mut Stores, device: &'a str) -> Self {
        Self {
            records: &mut stores.games,
            presets: &mut stores.presets,
            comments: &mut stores.comments,
            user: stores.auth.current_user(),
            device,
        }
    }
}

/// What applying an action did, for the caller to reflect on screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Nothing,
    Notify(Notice),
    /// A test record was stored; the edit screen can close.
    Saved { preset: Option<TestPreset> },
    Comment(TestComment),
    Navigate { game_id: String, test_millis: i64 },
    /// Whether another comment page was loaded.
    CommentsLoaded(bool),
    /// The new favorite flag.
    Favorite(bool),
}

/// Performs the store side effects of `action`.
pub fn apply_action(
    action: Action,
    collab: &mut Collaborators<'_>,
    now: DateTime<Utc>,
) -> Result<Outcome, StorageError> {
    match action {
        Action::None => Ok(Outcome::Nothing),
        Action::Notify(notice) => Ok(Outcome::Notify(notice)),
        Action::SubmitNew {
            game_id,
            record,
            preset,
        } => {
            collab.records.submit_new_test(&game_id, record)?;
            let preset = save_preset(collab.presets, preset)?;
            Ok(Outcome::Saved { preset })
        }
        Action::EditTest {
            game_id,
            test_millis,
            record,
            preset,
        } => {
            collab.records.edit_test(&game_id, test_millis, record)?;
            let preset = save_preset(collab.presets, preset)?;
            Ok(Outcome::Saved { preset })
        }
        Action::AddComment {
            game_id,
            test_millis,
            text,
        } => {
            let author = CommentAuthor::from_user(collab.user, collab.device);
            let comment = collab
                .comments
                .add_comment(&game_id, test_millis, &text, author, now)?;
            Ok(Outcome::Comment(comment))
        }
        Action::EditComment {
            game_id,
            comment_id,
            text,
        } => {
            let comment =
                collab
                    .comments
                    .edit_comment(&game_id, &comment_id, &text, collab.user, now)?;
            Ok(Outcome::Comment(comment))
        }
        Action::OpenTest {
            game_id,
            test_millis,
        } => Ok(Outcome::Navigate {
            game_id,
            test_millis,
        }),
        Action::LoadMoreComments { game_id } => Ok(Outcome::CommentsLoaded(
            collab.comments.load_more_comments_for_game(&game_id)?,
        )),
        Action::ToggleFavorite { game_id } => {
            Ok(Outcome::Favorite(collab.records.toggle_favorite(&game_id)?))
        }
    }
}

/// Saves the preset requested alongside a submit, naming it `"Preset N"`
/// when no name was given.
fn save_preset(
    presets: &mut dyn PresetStore,
    preset: Option<TestPreset>,
) -> Result<Option<TestPreset>, StorageError> {
    let Some(mut preset) = preset else {
        return Ok(None);
    };
    if preset.name.trim().is_empty() {
        preset.name = presets.next_default_name()?;
    }
    let saved = presets.save_preset(preset)?;
    info!(preset_id = %saved.id, "saved preset from submitted test");
    Ok(Some(saved))
}
