//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every mealboard operation, whichever UI drives it.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs** (textual selectors such as `tue.2` become [`MealSelector`]s)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It holds no business logic and performs no terminal I/O.
//!
//! `MealboardApi<S: Storage>` is generic over the persistence backend:
//! `FileStorage` in production, `MemStorage` in tests.

use crate::commands;
use crate::draft::MealDraft;
use crate::error::{MealError, Result};
use crate::model::{MealType, Weekday};
use crate::selector::MealSelector;
use crate::store::meal_store::MealStore;
use crate::store::Storage;
use rand::Rng;
use std::path::PathBuf;

/// The main API facade for mealboard operations.
///
/// Owns the one [`MealStore`] of the session. UI clients hold the API and
/// call its methods; they never keep meal state of their own.
pub struct MealboardApi<S: Storage> {
    store: MealStore<S>,
    config_dir: PathBuf,
}

impl<S: Storage> MealboardApi<S> {
    pub fn new(store: MealStore<S>, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    pub fn create_meal(&mut self, draft: &MealDraft) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, draft)
    }

    pub fn update_meal(
        &mut self,
        selector: &str,
        patch: &commands::MealPatch,
    ) -> Result<commands::CmdResult> {
        let selector = parse_selector(selector)?;
        commands::update::run(&mut self.store, &selector, patch)
    }

    pub fn replace_meal(
        &mut self,
        selector: &str,
        draft: &MealDraft,
    ) -> Result<commands::CmdResult> {
        let selector = parse_selector(selector)?;
        commands::update::replace(&mut self.store, &selector, draft)
    }

    pub fn delete_meals<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::delete::run(&mut self.store, &selectors)
    }

    pub fn move_meal(
        &mut self,
        selector: &str,
        day: Weekday,
        index: Option<usize>,
    ) -> Result<commands::CmdResult> {
        let selector = parse_selector(selector)?;
        commands::move_meal::run(&mut self.store, &selector, day, index)
    }

    pub fn list_days(&self, day: Option<Weekday>) -> Result<commands::CmdResult> {
        let config = self.load_config()?;
        commands::list::run(&self.store, day, &config)
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        let config = self.load_config()?;
        commands::stats::run(&self.store, &config)
    }

    pub fn suggest<R: Rng>(
        &mut self,
        rng: &mut R,
        meal_type: Option<MealType>,
        add_to: Option<Weekday>,
    ) -> Result<commands::CmdResult> {
        commands::suggest::run(&mut self.store, rng, meal_type, add_to)
    }

    pub fn say(&mut self, phrase: &str) -> Result<commands::CmdResult> {
        commands::say::run(&mut self.store, phrase)
    }

    pub fn export(&self) -> Result<commands::CmdResult> {
        commands::transfer::export(&self.store)
    }

    pub fn import(&mut self, bytes: &[u8]) -> Result<commands::CmdResult> {
        commands::transfer::import(&mut self.store, bytes)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn load_config(&self) -> Result<crate::config::MealboardConfig> {
        crate::config::MealboardConfig::load(&self.config_dir)
    }

    pub fn store(&self) -> &MealStore<S> {
        &self.store
    }
}

fn parse_selector(input: &str) -> Result<MealSelector> {
    input.parse().map_err(MealError::Api)
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<MealSelector>> {
    inputs.iter().map(|s| parse_selector(s.as_ref())).collect()
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, DayView, MealPatch, MessageLevel, WeekStats};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemStorage;
    use tempfile::TempDir;

    fn api() -> (MealboardApi<MemStorage>, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = MealStore::open(MemStorage::new()).unwrap();
        (MealboardApi::new(store, dir.path().to_path_buf()), dir)
    }

    #[test]
    fn dispatches_mutations_by_selector() {
        let (mut api, _dir) = api();
        api.create_meal(&MealDraft::new("Oatmeal", "300", "monday", "breakfast"))
            .unwrap();

        let patch = MealPatch {
            calories: Some("350".into()),
            ..MealPatch::default()
        };
        api.update_meal("mon.1", &patch).unwrap();
        api.move_meal("mon.1", Weekday::Tuesday, Some(0)).unwrap();

        let listed = api.list_days(Some(Weekday::Tuesday)).unwrap();
        assert_eq!(listed.listed_days[0].meals[0].calories, 350);

        api.delete_meals(&["tue.1"]).unwrap();
        assert!(api.store().board().is_empty());
    }

    #[test]
    fn empty_selector_is_an_api_error() {
        let (mut api, _dir) = api();
        assert!(matches!(
            api.delete_meals(&[" "]),
            Err(MealError::Api(_))
        ));
    }

    #[test]
    fn list_uses_configured_target() {
        let (mut api, _dir) = api();
        api.config(ConfigAction::Set("calorie-target".into(), "200".into()))
            .unwrap();
        api.create_meal(&MealDraft::new("Soup", "250", "friday", "lunch"))
            .unwrap();

        let listed = api.list_days(Some(Weekday::Friday)).unwrap();
        assert!(listed.listed_days[0].over_target);
        let stats = api.stats().unwrap().stats.unwrap();
        assert_eq!(stats.over_target, vec![Weekday::Friday]);
    }
}
