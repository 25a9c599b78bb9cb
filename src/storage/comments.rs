use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::error::StorageError;
use super::jsonl::{self, generate_id, safe_file_stem};
use super::stores::CommentStore;
use crate::model::{CommentAuthor, TestComment, TestId, UserProfile, validate_comment_text};

/// Stores comments as one JSONL file per game and pages them newest first.
///
/// Each game starts with one page visible; `load_more_comments_for_game`
/// widens the window.
pub struct CommentManager {
    base_path: PathBuf,
    page_size: usize,
    visible: HashMap<String, usize>,
}

impl CommentManager {
    /// Creates a manager rooted at the given path, creating it if needed.
    pub fn with_path(path: impl Into<PathBuf>, page_size: usize) -> Result<Self, StorageError> {
        let base_path = path.into();
        fs::create_dir_all(&base_path)?;
        Ok(Self {
            base_path,
            page_size: page_size.max(1),
            visible: HashMap::new(),
        })
    }

    fn comments_path(&self, game_id: &str) -> PathBuf {
        self.base_path
            .join(format!("{}.jsonl", safe_file_stem(game_id)))
    }

    /// All comments of a game, newest first.
    pub fn all_comments(&self, game_id: &str) -> Result<Vec<TestComment>, StorageError> {
        let mut comments: Vec<TestComment> = jsonl::read_all(&self.comments_path(game_id))?;
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(comments)
    }

    fn visible_count(&self, game_id: &str) -> usize {
        self.visible
            .get(game_id)
            .copied()
            .unwrap_or(self.page_size)
    }
}

impl CommentStore for CommentManager {
    fn comments_by_test(
        &self,
        game_id: &str,
    ) -> Result<BTreeMap<String, Vec<TestComment>>, StorageError> {
        let mut grouped: BTreeMap<String, Vec<TestComment>> = BTreeMap::new();
        for comment in self
            .all_comments(game_id)?
            .into_iter()
            .take(self.visible_count(game_id))
        {
            grouped
                .entry(comment.test_key().to_string())
                .or_default()
                .push(comment);
        }
        Ok(grouped)
    }

    fn add_comment(
        &mut self,
        game_id: &str,
        test_millis: Option<i64>,
        text: &str,
        author: CommentAuthor,
        now: DateTime<Utc>,
    ) -> Result<TestComment, StorageError> {
        let text = validate_comment_text(text)?;
        let existing = self.all_comments(game_id)?;
        let id = generate_id(&safe_file_stem(game_id), now, |candidate| {
            existing.iter().any(|c| c.id == candidate)
        });
        let comment = TestComment {
            id,
            game_id: game_id.to_string(),
            test_id: test_millis.map(|millis| TestId::new(game_id, millis).to_string()),
            test_millis,
            author,
            text,
            created_at: now,
            edited_at: None,
        };
        jsonl::append(&self.comments_path(game_id), &comment)?;
        debug!(game_id, comment_id = %comment.id, "added comment");
        Ok(comment)
    }

    fn edit_comment(
        &mut self,
        game_id: &str,
        comment_id: &str,
        new_text: &str,
        editor: Option<&UserProfile>,
        now: DateTime<Utc>,
    ) -> Result<TestComment, StorageError> {
        let text = validate_comment_text(new_text)?;
        let path = self.comments_path(game_id);
        let mut comments: Vec<TestComment> = jsonl::read_all(&path)?;
        let comment = comments
            .iter_mut()
            .find(|c| c.id == comment_id)
            .ok_or_else(|| StorageError::CommentNotFound(comment_id.to_string()))?;
        if !comment.author.is_owned_by(editor) {
            return Err(StorageError::NotCommentAuthor(comment_id.to_string()));
        }
        comment.text = text;
        comment.edited_at = Some(now);
        let edited = comment.clone();
        jsonl::write_all(&path, &comments)?;
        debug!(game_id, comment_id, "edited comment");
        Ok(edited)
    }

    fn load_more_comments_for_game(&mut self, game_id: &str) -> Result<bool, StorageError> {
        let total = self.all_comments(game_id)?.len();
        let current = self.visible_count(game_id);
        if current >= total {
            return Ok(false);
        }
        self.visible
            .insert(game_id.to_string(), current + self.page_size);
        Ok(true)
    }
}
