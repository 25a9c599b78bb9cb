use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tokio::sync::watch;
use tracing::{debug, info};

use super::error::StorageError;
use super::jsonl::safe_file_stem;
use super::stores::RecordStore;
use crate::model::{Game, TestRecord};

/// Stores each game (with its test history) as one JSON file and notifies
/// subscribers after every write.
pub struct GameManager {
    base_path: PathBuf,
    watchers: HashMap<String, watch::Sender<Option<Game>>>,
}

impl GameManager {
    /// Creates a manager rooted at the given path, creating it if needed.
    pub fn with_path(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let base_path = path.into();
        fs::create_dir_all(&base_path)?;
        Ok(Self {
            base_path,
            watchers: HashMap::new(),
        })
    }

    fn game_path(&self, game_id: &str) -> PathBuf {
        self.base_path
            .join(format!("{}.json", safe_file_stem(game_id)))
    }

    fn load(&self, game_id: &str) -> Result<Game, StorageError> {
        self.get_game(game_id)?
            .ok_or_else(|| StorageError::GameNotFound(game_id.to_string()))
    }

    fn write(&mut self, game: &Game) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(game)?;
        fs::write(self.game_path(&game.id), json)?;
        self.prune_watchers();
        if let Some(tx) = self.watchers.get(&game.id) {
            tx.send_replace(Some(game.clone()));
            debug!(game_id = %game.id, "notified game subscribers");
        }
        Ok(())
    }

    /// Drops senders whose receivers are all gone.
    fn prune_watchers(&mut self) {
        self.watchers.retain(|_, tx| tx.receiver_count() > 0);
    }

    /// Lists all stored games sorted by title.
    pub fn list_games(&self) -> Result<Vec<Game>, StorageError> {
        let mut games = fs::read_dir(&self.base_path)?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
            .map(|path| {
                let content = fs::read_to_string(&path)?;
                serde_json::from_str(&content).map_err(StorageError::Json)
            })
            .collect::<Result<Vec<Game>, StorageError>>()?;
        games.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(games)
    }

    /// Lists games marked as favorite, sorted by title.
    pub fn favorites(&self) -> Result<Vec<Game>, StorageError> {
        Ok(self
            .list_games()?
            .into_iter()
            .filter(|g| g.is_favorite)
            .collect())
    }
}

impl RecordStore for GameManager {
    fn get_game(&self, game_id: &str) -> Result<Option<Game>, StorageError> {
        let path = self.game_path(game_id);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn subscribe(&mut self, game_id: &str) -> Result<watch::Receiver<Option<Game>>, StorageError> {
        self.prune_watchers();
        if let Some(tx) = self.watchers.get(game_id) {
            return Ok(tx.subscribe());
        }
        let (tx, rx) = watch::channel(self.get_game(game_id)?);
        self.watchers.insert(game_id.to_string(), tx);
        Ok(rx)
    }

    fn save_game(&mut self, game: &Game) -> Result<(), StorageError> {
        self.write(game)
    }

    fn submit_new_test(&mut self, game_id: &str, record: TestRecord) -> Result<(), StorageError> {
        let mut game = self.load(game_id)?;
        let millis = record.updated_at_millis;
        if game.find_test(millis).is_some() {
            return Err(StorageError::DuplicateTest {
                game_id: game_id.to_string(),
                millis,
            });
        }
        info!(game_id, millis, "adding test record");
        game.add_test(record);
        self.write(&game)
    }

    fn edit_test(
        &mut self,
        game_id: &str,
        test_millis: i64,
        mut record: TestRecord,
    ) -> Result<(), StorageError> {
        if record.updated_at_millis != test_millis {
            debug!(
                game_id,
                test_millis,
                given = record.updated_at_millis,
                "keeping the edited test's timestamp"
            );
            record.updated_at_millis = test_millis;
        }
        let mut game = self.load(game_id)?;
        game.replace_test(test_millis, record)
            .ok_or_else(|| StorageError::TestNotFound {
                game_id: game_id.to_string(),
                millis: test_millis,
            })?;
        info!(game_id, millis = test_millis, "updated test record");
        self.write(&game)
    }

    fn toggle_favorite(&mut self, game_id: &str) -> Result<bool, StorageError> {
        let mut game = self.load(game_id)?;
        game.is_favorite = !game.is_favorite;
        self.write(&game)?;
        Ok(game.is_favorite)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::model::{EmulatorBuildType, TestStatus};

    fn make_manager() -> (tempfile::TempDir, GameManager) {
        let dir = tempdir().unwrap();
        let manager = GameManager::with_path(dir.path()).unwrap();
        (dir, manager)
    }

    fn make_game() -> Game {
        Game::new("botw", "Breath of the Wild", "Nintendo Switch")
    }

    fn record(millis: i64) -> TestRecord {
        TestRecord {
            updated_at_millis: millis,
            device_model: "Pixel 8".to_string(),
            ..TestRecord::default()
        }
    }

    #[test]
    fn unknown_game_is_none() {
        let (_dir, manager) = make_manager();
        assert_eq!(manager.get_game("nope").unwrap(), None);
    }

    #[test]
    fn save_and_load_game() {
        let (_dir, mut manager) = make_manager();
        let mut game = make_game();
        game.add_test(record(1));
        manager.save_game(&game).unwrap();
        assert_eq!(manager.get_game("botw").unwrap(), Some(game));
    }

    #[test]
    fn submit_new_test_appends() {
        let (_dir, mut manager) = make_manager();
        manager.save_game(&make_game()).unwrap();
        manager.submit_new_test("botw", record(1)).unwrap();
        manager.submit_new_test("botw", record(2)).unwrap();
        let game = manager.get_game("botw").unwrap().unwrap();
        assert_eq!(game.test_results.len(), 2);
    }

    #[test]
    fn submit_to_unknown_game_fails() {
        let (_dir, mut manager) = make_manager();
        let result = manager.submit_new_test("nope", record(1));
        assert!(matches!(result, Err(StorageError::GameNotFound(id)) if id == "nope"));
    }

    #[test]
    fn edit_test_replaces_record() {
        let (_dir, mut manager) = make_manager();
        manager.save_game(&make_game()).unwrap();
        manager.submit_new_test("botw", record(1)).unwrap();
        let mut updated = record(1);
        updated.status = TestStatus::Working;
        manager.edit_test("botw", 1, updated.clone()).unwrap();
        let game = manager.get_game("botw").unwrap().unwrap();
        assert_eq!(game.test_results, vec![updated]);
    }

    #[test]
    fn duplicate_millis_rejected() {
        let (_dir, mut manager) = make_manager();
        manager.save_game(&make_game()).unwrap();
        manager.submit_new_test("botw", record(5)).unwrap();
        let mut second = record(5);
        second.device_model = "Galaxy S23".to_string();
        let result = manager.submit_new_test("botw", second);
        assert!(matches!(
            result,
            Err(StorageError::DuplicateTest { millis: 5, .. })
        ));

        let mut edited = record(5);
        edited.device_model = "Pixel 9".to_string();
        manager.edit_test("botw", 5, edited.clone()).unwrap();
        let game = manager.get_game("botw").unwrap().unwrap();
        assert_eq!(game.test_results, vec![edited]);
    }

    #[test]
    fn edit_keeps_target_millis() {
        let (_dir, mut manager) = make_manager();
        manager.save_game(&make_game()).unwrap();
        manager.submit_new_test("botw", record(1)).unwrap();
        manager.edit_test("botw", 1, record(99)).unwrap();
        let game = manager.get_game("botw").unwrap().unwrap();
        assert!(game.find_test(1).is_some());
        assert!(game.find_test(99).is_none());
    }

    #[test]
    fn unknown_build_type_in_stored_game_loads() {
        let (dir, manager) = make_manager();
        let json = r#"{
            "id": "botw",
            "title": "Breath of the Wild",
            "platform": "Nintendo Switch",
            "test_results": [
                {"status": "WORKING", "emulator_build_type": "BETA", "updated_at_millis": 7}
            ]
        }"#;
        fs::write(dir.path().join("botw.json"), json).unwrap();
        let game = manager.get_game("botw").unwrap().unwrap();
        let test = game.find_test(7).unwrap();
        assert_eq!(test.status, TestStatus::Working);
        assert_eq!(test.emulator_build_type, EmulatorBuildType::Stable);
    }

    #[test]
    fn edit_missing_test_fails() {
        let (_dir, mut manager) = make_manager();
        manager.save_game(&make_game()).unwrap();
        let result = manager.edit_test("botw", 5, record(5));
        assert!(matches!(
            result,
            Err(StorageError::TestNotFound { millis: 5, .. })
        ));
    }

    #[test]
    fn toggle_favorite_flips() {
        let (_dir, mut manager) = make_manager();
        manager.save_game(&make_game()).unwrap();
        assert!(manager.toggle_favorite("botw").unwrap());
        assert_eq!(manager.favorites().unwrap().len(), 1);
        assert!(!manager.toggle_favorite("botw").unwrap());
        assert!(manager.favorites().unwrap().is_empty());
    }

    #[test]
    fn list_games_sorted_by_title() {
        let (_dir, mut manager) = make_manager();
        manager.save_game(&Game::new("b", "Zelda", "Switch")).unwrap();
        manager.save_game(&Game::new("a", "Astral Chain", "Switch")).unwrap();
        let titles: Vec<String> = manager
            .list_games()
            .unwrap()
            .into_iter()
            .map(|g| g.title)
            .collect();
        assert_eq!(titles, vec!["Astral Chain", "Zelda"]);
    }

    #[test]
    fn game_id_with_slash_stays_in_directory() {
        let (dir, mut manager) = make_manager();
        manager.save_game(&Game::new("a/b", "Slash", "PC")).unwrap();
        assert!(dir.path().join("a_b.json").exists());
        assert!(manager.get_game("a/b").unwrap().is_some());
    }

    mod subscribe {
        use super::*;

        #[test]
        fn starts_with_current_snapshot() {
            let (_dir, mut manager) = make_manager();
            manager.save_game(&make_game()).unwrap();
            let rx = manager.subscribe("botw").unwrap();
            assert_eq!(*rx.borrow(), Some(make_game()));
        }

        #[test]
        fn unknown_game_snapshot_is_none() {
            let (_dir, mut manager) = make_manager();
            let rx = manager.subscribe("nope").unwrap();
            assert_eq!(*rx.borrow(), None);
        }

        #[test]
        fn writes_are_observed() {
            let (_dir, mut manager) = make_manager();
            manager.save_game(&make_game()).unwrap();
            let mut rx = manager.subscribe("botw").unwrap();
            assert!(!rx.has_changed().unwrap());
            manager.submit_new_test("botw", record(7)).unwrap();
            assert!(rx.has_changed().unwrap());
            let game = rx.borrow_and_update().clone().unwrap();
            assert!(game.find_test(7).is_some());
        }

        #[test]
        fn subscribers_share_one_channel() {
            let (_dir, mut manager) = make_manager();
            manager.save_game(&make_game()).unwrap();
            let rx1 = manager.subscribe("botw").unwrap();
            let rx2 = manager.subscribe("botw").unwrap();
            manager.toggle_favorite("botw").unwrap();
            assert!(rx1.borrow().as_ref().unwrap().is_favorite);
            assert!(rx2.borrow().as_ref().unwrap().is_favorite);
        }

        #[test]
        fn dropped_subscribers_are_pruned() {
            let (_dir, mut manager) = make_manager();
            manager.save_game(&make_game()).unwrap();
            manager.subscribe("other").unwrap();
            let rx = manager.subscribe("botw").unwrap();
            assert_eq!(manager.watchers.len(), 1);

            drop(rx);
            manager.toggle_favorite("botw").unwrap();
            assert!(manager.watchers.is_empty());
        }

        #[test]
        fn resubscribe_after_drop_sees_latest() {
            let (_dir, mut manager) = make_manager();
            manager.save_game(&make_game()).unwrap();
            drop(manager.subscribe("botw").unwrap());
            manager.toggle_favorite("botw").unwrap();
            let rx = manager.subscribe("botw").unwrap();
            assert!(rx.borrow().as_ref().unwrap().is_favorite);
        }
    }
}
