use super::Storage;
use crate::board::{AggregateScope, Board};
use crate::draft::MealDraft;
use crate::error::Result;
use crate::model::{Meal, MealId, Nutrition, Weekday};
use crate::snapshot::Snapshot;

/// The board plus its persistence.
///
/// Every mutation that reaches the board is followed by a write of the full
/// snapshot, including tolerated no-ops (deleting or moving an unknown id).
/// Rejected operations (validation, unknown id on update) write nothing.
///
/// Writes are fire-and-forget: a failure is logged, kept for
/// [`MealStore::take_write_failure`], and the in-memory change stands.
pub struct MealStore<S: Storage> {
    board: Board,
    storage: S,
    write_failure: Option<String>,
}

impl<S: Storage> MealStore<S> {
    /// Loads the board from storage. Nothing stored yet means an empty week.
    ///
    /// A stored snapshot that cannot be decoded is an error; the store does not
    /// open over it, so the data is never overwritten.
    pub fn open(storage: S) -> Result<Self> {
        let board = match storage.read()? {
            Some(bytes) => Board::from_snapshot(Snapshot::from_json(&bytes)?),
            None => Board::new(),
        };
        tracing::debug!(meals = board.len(), "board loaded");

        Ok(Self {
            board,
            storage,
            write_failure: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn create(&mut self, draft: &MealDraft) -> Result<Meal> {
        let meal = self.board.create(draft)?;
        tracing::debug!(id = %meal.id, day = %meal.day, "meal created");
        self.persist();
        Ok(meal)
    }

    pub fn update(&mut self, id: &MealId, draft: &MealDraft) -> Result<Meal> {
        let meal = self.board.update(id, draft)?;
        tracing::debug!(id = %meal.id, day = %meal.day, "meal updated");
        self.persist();
        Ok(meal)
    }

    pub fn delete(&mut self, id: &MealId) -> Option<Meal> {
        let removed = self.board.delete(id);
        tracing::debug!(%id, found = removed.is_some(), "meal deleted");
        self.persist();
        removed
    }

    pub fn move_meal(
        &mut self,
        id: &MealId,
        target_day: Weekday,
        target_index: usize,
    ) -> Option<(Meal, usize)> {
        let moved = self.board.move_meal(id, target_day, target_index);
        tracing::debug!(%id, day = %target_day, found = moved.is_some(), "meal moved");
        self.persist();
        moved
    }

    /// Replaces the board and persists the result.
    pub fn replace(&mut self, snapshot: Snapshot) {
        self.board.load(snapshot);
        tracing::debug!(meals = self.board.len(), "board replaced");
        self.persist();
    }

    pub fn snapshot(&self) -> Snapshot {
        self.board.snapshot()
    }

    pub fn aggregate(&self, scope: AggregateScope) -> Nutrition {
        self.board.aggregate(scope)
    }

    /// Returns and clears the last persistence failure, if any.
    pub fn take_write_failure(&mut self) -> Option<String> {
        self.write_failure.take()
    }

    fn persist(&mut self) {
        let outcome = self
            .board
            .snapshot()
            .to_json()
            .and_then(|bytes| self.storage.write(&bytes));

        if let Err(e) = outcome {
            tracing::warn!(error = %e, "failed to persist board");
            self.write_failure = Some(e.to_string());
        }
    }
}
