use std::time::{Duration, Instant};

use tracing::debug;

use super::action::{Action, Notice};
use super::guard::ActionGuard;
use crate::model::{TestComment, UserProfile, validate_comment_text};

/// Draft state for writing a comment on a game or one of its tests.
#[derive(Debug, Clone)]
pub struct CommentComposer {
    game_id: String,
    test_millis: Option<i64>,
    draft: String,
    editing: Option<String>,
    guard: ActionGuard,
}

impl CommentComposer {
    /// `test_millis` ties new comments to a test; `None` comments on the game.
    pub fn new(game_id: impl Into<String>, test_millis: Option<i64>, debounce: Duration) -> Self {
        Self {
            game_id: game_id.into(),
            test_millis,
            draft: String::new(),
            editing: None,
            guard: ActionGuard::new(debounce),
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Id of the comment being edited, if any.
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Switches to editing `comment`, loading its text into the draft.
    ///
    /// Returns `false` and changes nothing unless `user` owns the comment.
    pub fn start_edit(&mut self, comment: &TestComment, user: Option<&UserProfile>) -> bool {
        if !comment.author.is_owned_by(user) {
            debug!(comment_id = %comment.id, "not the comment author");
            return false;
        }
        self.editing = Some(comment.id.clone());
        self.draft = comment.text.clone();
        true
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.draft.clear();
    }

    /// Builds the add or edit action for the current draft.
    ///
    /// The draft is cleared once an action is produced.
    pub fn submit(&mut self, now: Instant) -> Action {
        if !self.guard.try_accept(now) {
            debug!(game_id = %self.game_id, "dropped repeated comment submit");
            return Action::None;
        }
        let Ok(text) = validate_comment_text(&self.draft) else {
            return Action::Notify(Notice::EmptyComment);
        };
        self.draft.clear();
        let game_id = self.game_id.clone();
        match self.editing.take() {
            Some(comment_id) => Action::EditComment {
                game_id,
                comment_id,
                text,
            },
            None => Action::AddComment {
                game_id,
                test_millis: self.test_millis,
                text,
            },
        }
    }
}
