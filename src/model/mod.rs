mod comment;
mod game;
mod platform;
mod preset;
mod record;
mod status;
mod user;
mod validation;

pub use comment::{CommentAuthor, GAME_COMMENT_KEY, TestComment};
pub use game::Game;
pub use platform::{FieldSet, PlatformClass};
pub use preset::TestPreset;
pub use record::{TestId, TestRecord};
pub use status::{EmulatorBuildType, IssueType, Reproducibility, TestStatus};
pub use user::{PhoneDbItem, SavedDevice, UserProfile};
pub use validation::{ValidationError, validate_comment_text, validate_name};
