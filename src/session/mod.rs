//! Screen controllers.
//!
//! Each controller owns the state of one screen, takes user input as method
//! calls, and returns an [`Action`]. [`apply_action`] performs the resulting
//! store side effects so controllers stay free of I/O.

mod action;
mod comments;
mod dispatch;
mod edit;
mod guard;
mod list;

pub use action::{Action, Notice};
pub use comments::CommentComposer;
pub use dispatch::{Collaborators, Outcome, apply_action};
pub use edit::{LoadState, TestEditSession};
pub use guard::ActionGuard;
pub use list::{DEFAULT_PREFETCH, GameListSession, needs_more};
