use std::time::{Duration, Instant};

use tracing::debug;

use super::action::Action;
use super::guard::ActionGuard;

/// How close to the end of the loaded comments the user may scroll before
/// the next page is requested.
pub const DEFAULT_PREFETCH: usize = 5;

/// Returns `true` when the item at index `last_visible` is within
/// `prefetch` items of the end of a list of `loaded` items.
pub fn needs_more(last_visible: usize, loaded: usize, prefetch: usize) -> bool {
    loaded > 0 && last_visible.saturating_add(prefetch).saturating_add(1) >= loaded
}

/// Navigation and paging state for the game list and game detail screens.
#[derive(Debug, Clone)]
pub struct GameListSession {
    nav_guard: ActionGuard,
    prefetch: usize,
    requested_at: Option<(String, usize)>,
}

impl GameListSession {
    pub fn new(debounce: Duration) -> Self {
        Self::with_prefetch(debounce, DEFAULT_PREFETCH)
    }

    pub fn with_prefetch(debounce: Duration, prefetch: usize) -> Self {
        Self {
            nav_guard: ActionGuard::new(debounce),
            prefetch,
            requested_at: None,
        }
    }

    /// Opens one test record. Taps within the debounce window of the last
    /// accepted tap are dropped so only one screen gets pushed.
    pub fn open_test(&mut self, now: Instant, game_id: &str, test_millis: i64) -> Action {
        if !self.nav_guard.try_accept(now) {
            debug!(game_id, test_millis, "dropped repeated navigation");
            return Action::None;
        }
        Action::OpenTest {
            game_id: game_id.to_string(),
            test_millis,
        }
    }

    pub fn toggle_favorite(&self, game_id: &str) -> Action {
        Action::ToggleFavorite {
            game_id: game_id.to_string(),
        }
    }

    /// Requests the next comment page when the user nears the end of what
    /// is loaded.
    ///
    /// At most one request is issued per loaded count, so scrolling around
    /// while a page is in flight (or once everything is loaded) asks for
    /// nothing more.
    pub fn on_comments_scrolled(
        &mut self,
        game_id: &str,
        last_visible: usize,
        loaded: usize,
    ) -> Action {
        if !needs_more(last_visible, loaded, self.prefetch) {
            return Action::None;
        }
        if let Some((id, count)) = &self.requested_at
            && id == game_id
            && *count == loaded
        {
            return Action::None;
        }
        self.requested_at = Some((game_id.to_string(), loaded));
        Action::LoadMoreComments {
            game_id: game_id.to_string(),
        }
    }
}
