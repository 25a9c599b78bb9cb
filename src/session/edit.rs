//! Test edit screen controller: creating a new test record or editing an
//! existing one.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info};

use super::action::{Action, Notice};
use super::guard::ActionGuard;
use crate::form::TestForm;
use crate::model::{FieldSet, Game, PhoneDbItem, TestPreset, UserProfile};

/// What the screen can currently show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// No game snapshot has arrived yet.
    Loading,
    Ready,
    GameNotFound,
    /// The game exists but has no test with the requested timestamp.
    TestNotFound,
}

/// State for the test edit screen.
#[derive(Debug, Clone)]
pub struct TestEditSession {
    game_id: String,
    target: Option<i64>,
    form: TestForm,
    load_state: LoadState,
    prefilled_for: Option<i64>,
    save_as_preset: Option<String>,
    submit_guard: ActionGuard,
    notice: Option<Notice>,
}

impl TestEditSession {
    /// Creates a session for `game_id`. `target` is the `updated_at_millis`
    /// of the record to edit, or `None` for a new record.
    pub fn new(game_id: impl Into<String>, target: Option<i64>, debounce: Duration) -> Self {
        Self {
            game_id: game_id.into(),
            target,
            form: TestForm::default(),
            load_state: LoadState::Loading,
            prefilled_for: None,
            save_as_preset: None,
            submit_guard: ActionGuard::new(debounce),
            notice: None,
        }
    }

    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    pub fn target(&self) -> Option<i64> {
        self.target
    }

    pub fn form(&self) -> &TestForm {
        &self.form
    }

    /// Mutable access for user input.
    pub fn form_mut(&mut self) -> &mut TestForm {
        &mut self.form
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn field_set(&self) -> FieldSet {
        self.form.field_set()
    }

    pub fn is_valid(&self) -> bool {
        self.form.is_valid()
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Folds a new game snapshot into the session.
    ///
    /// When editing, the record is loaded into the form only the first time
    /// it is seen for the target; later snapshots of the same game keep the
    /// user's edits. Returns `true` if the form was prefilled.
    pub fn on_game_update(&mut self, game: Option<&Game>) -> bool {
        let Some(game) = game else {
            self.load_state = LoadState::GameNotFound;
            return false;
        };
        self.form.set_platform(game.platform_class());

        let Some(millis) = self.target else {
            self.load_state = LoadState::Ready;
            return false;
        };
        let Some(record) = game.find_test(millis) else {
            self.load_state = LoadState::TestNotFound;
            return false;
        };
        self.load_state = LoadState::Ready;

        if self.prefilled_for == Some(millis) {
            debug!(game_id = %self.game_id, millis, "record already prefilled");
            return false;
        }
        self.form.prefill_from(record);
        self.prefilled_for = Some(millis);
        info!(game_id = %self.game_id, millis, "prefilled form from record");
        true
    }

    /// Reads the latest snapshot from a game subscription.
    pub fn observe(&mut self, rx: &mut watch::Receiver<Option<Game>>) -> bool {
        let game = rx.borrow_and_update().clone();
        self.on_game_update(game.as_ref())
    }

    /// Merges a saved preset into the form.
    pub fn apply_preset(&mut self, preset: &TestPreset) {
        self.form.apply_preset(preset);
        debug!(preset_id = %preset.id, "applied preset");
    }

    /// Fills device fields from a saved device or phone database hit.
    pub fn apply_device(&mut self, device: &PhoneDbItem) {
        self.form.apply_device(device);
    }

    /// Requests that the submitted settings also be saved as a preset.
    pub fn set_save_as_preset(&mut self, name: Option<String>) {
        self.save_as_preset = name;
    }

    /// Validates the form and builds the submit action.
    ///
    /// Triggers within the debounce window of the last accepted one are
    /// dropped. Edits keep the target timestamp so the record's id (and the
    /// comments attached to it) stay the same.
    pub fn submit(
        &mut self,
        now: Instant,
        timestamp: DateTime<Utc>,
        user: Option<&UserProfile>,
    ) -> Action {
        if self.load_state != LoadState::Ready {
            return Action::None;
        }
        if !self.submit_guard.try_accept(now) {
            debug!(game_id = %self.game_id, "dropped repeated submit");
            return Action::None;
        }
        if !self.form.is_valid() {
            self.notice = Some(Notice::FillAllFields);
            return Action::Notify(Notice::FillAllFields);
        }
        self.notice = None;

        let millis = self.target.unwrap_or_else(|| timestamp.timestamp_millis());
        let record = self.form.to_record(millis, user);
        let preset = self
            .save_as_preset
            .as_deref()
            .map(|name| TestPreset::from_record(String::new(), name, timestamp, &record));
        let game_id = self.game_id.clone();

        match self.target {
            None => Action::SubmitNew {
                game_id,
                record,
                preset,
            },
            Some(test_millis) => Action::EditTest {
                game_id,
                test_millis,
                record,
                preset,
            },
        }
    }
}
