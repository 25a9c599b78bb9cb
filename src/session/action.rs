//! Actions returned by the screen controllers.

use std::fmt;

use crate::model::{TestPreset, TestRecord};

/// A message shown to the user instead of performing an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The edit form failed its validity check.
    FillAllFields,
    /// A comment was submitted with no text.
    EmptyComment,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Self::FillAllFields => "Please fill in all fields",
            Self::EmptyComment => "Comment cannot be empty",
        }
    }
}

#[mutants::skip]
impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// An action that a controller returns for the caller to apply.
///
/// [`apply_action`](super::apply_action) performs the store side effects.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Show a notice.
    Notify(Notice),
    /// Store a new test record, optionally saving its settings as a preset.
    SubmitNew {
        game_id: String,
        record: TestRecord,
        preset: Option<TestPreset>,
    },
    /// Replace the test record identified by `test_millis`.
    EditTest {
        game_id: String,
        test_millis: i64,
        record: TestRecord,
        preset: Option<TestPreset>,
    },
    AddComment {
        game_id: String,
        test_millis: Option<i64>,
        text: String,
    },
    EditComment {
        game_id: String,
        comment_id: String,
        text: String,
    },
    /// Navigate to one test record.
    OpenTest { game_id: String, test_millis: i64 },
    /// Fetch the next page of comments.
    LoadMoreComments { game_id: String },
    ToggleFavorite { game_id: String },
}
