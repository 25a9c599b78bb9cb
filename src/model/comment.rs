use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserProfile;

/// Who wrote a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommentAuthor {
    /// A signed-in user.
    Account {
        uid: String,
        name: String,
        photo_url: Option<String>,
    },
    /// A user without an account, identified only by their device string.
    Anonymous { device: String },
}

impl CommentAuthor {
    /// Builds the author for the current user, or an anonymous author
    /// described by `device` when nobody is signed in.
    pub fn from_user(user: Option<&UserProfile>, device: &str) -> Self {
        match user {
            Some(u) => Self::Account {
                uid: u.uid.clone(),
                name: u.display_name.clone(),
                photo_url: u.photo_url.clone(),
            },
            None => Self::Anonymous {
                device: device.to_string(),
            },
        }
    }

    /// Returns `true` if `user` wrote comments attributed to this author.
    ///
    /// Anonymous comments are never editable.
    pub fn is_owned_by(&self, user: Option<&UserProfile>) -> bool {
        match (self, user) {
            (Self::Account { uid, .. }, Some(u)) => *uid == u.uid,
            _ => false,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Self::Account { name, .. } => name,
            Self::Anonymous { device } => device,
        }
    }
}

/// A free-text comment on a game, optionally tied to one test record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestComment {
    pub id: String,
    pub game_id: String,
    pub test_id: Option<String>,
    pub test_millis: Option<i64>,
    pub author: CommentAuthor,
    pub text: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub edited_at: Option<DateTime<Utc>>,
}

/// Grouping key for comments that are not tied to a particular test.
pub const GAME_COMMENT_KEY: &str = "";

impl TestComment {
    pub fn from_account(&self) -> bool {
        matches!(self.author, CommentAuthor::Account { .. })
    }

    /// Key used to group comments by test (`GAME_COMMENT_KEY` for game-level comments).
    pub fn test_key(&self) -> &str {
        self.test_id.as_deref().unwrap_or(GAME_COMMENT_KEY)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn user(uid: &str) -> UserProfile {
        UserProfile {
            uid: uid.to_string(),
            display_name: "Sam".to_string(),
            photo_url: None,
        }
    }

    fn comment(author: CommentAuthor, test_id: Option<&str>) -> TestComment {
        TestComment {
            id: "c1".to_string(),
            game_id: "botw".to_string(),
            test_id: test_id.map(str::to_string),
            test_millis: None,
            author,
            text: "runs fine".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
            edited_at: None,
        }
    }

    #[test]
    fn author_from_signed_in_user() {
        let author = CommentAuthor::from_user(Some(&user("u1")), "Pixel 8");
        assert_eq!(
            author,
            CommentAuthor::Account {
                uid: "u1".to_string(),
                name: "Sam".to_string(),
                photo_url: None,
            }
        );
    }

    #[test]
    fn author_anonymous_uses_device() {
        let author = CommentAuthor::from_user(None, "Pixel 8");
        assert_eq!(author.display_name(), "Pixel 8");
    }

    #[test]
    fn ownership_requires_matching_uid() {
        let author = CommentAuthor::from_user(Some(&user("u1")), "");
        assert!(author.is_owned_by(Some(&user("u1"))));
        assert!(!author.is_owned_by(Some(&user("u2"))));
        assert!(!author.is_owned_by(None));
    }

    #[test]
    fn anonymous_never_owned() {
        let author = CommentAuthor::from_user(None, "Pixel 8");
        assert!(!author.is_owned_by(Some(&user("u1"))));
        assert!(!author.is_owned_by(None));
    }

    #[test]
    fn from_account_flag() {
        assert!(comment(CommentAuthor::from_user(Some(&user("u1")), ""), None).from_account());
        assert!(!comment(CommentAuthor::from_user(None, "dev"), None).from_account());
    }

    #[test]
    fn test_key_defaults_to_game_key() {
        let author = CommentAuthor::from_user(None, "dev");
        assert_eq!(comment(author.clone(), None).test_key(), GAME_COMMENT_KEY);
        assert_eq!(comment(author, Some("botw_1")).test_key(), "botw_1");
    }

    #[test]
    fn serde_round_trip() {
        let c = comment(CommentAuthor::from_user(Some(&user("u1")), ""), Some("botw_1"));
        let json = serde_json::to_string(&c).unwrap();
        let deserialized: TestComment = serde_json::from_str(&json).unwrap();
        assert_eq!(c, deserialized);
    }
}
