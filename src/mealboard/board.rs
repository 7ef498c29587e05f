//! # The Board
//!
//! [`Board`] is the authoritative meal collection: seven ordered day buckets,
//! Monday first. It does no I/O; persistence lives in
//! [`MealStore`](crate::store::meal_store::MealStore), which wraps a board.
//!
//! ## Invariants
//!
//! - Meal ids are unique across all buckets.
//! - A meal sits in exactly one bucket and its `day` field names that bucket.
//! - Operations never reorder meals they do not touch.
//!
//! ## Failure Model
//!
//! Every check (validation, id lookup) happens before the first write, so an
//! operation either fully applies or leaves the board exactly as it was.
//!
//! Aggregates are never stored. [`Board::aggregate`] sums the current buckets
//! on each call.

use crate::draft::MealDraft;
use crate::error::{MealError, Result};
use crate::model::{Meal, MealId, Nutrition, Weekday};
use crate::selector::MealSelector;
use crate::snapshot::{MealRecord, Snapshot};
use std::collections::HashSet;

/// What [`Board::aggregate`] sums over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateScope {
    Week,
    Day(Weekday),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    days: [Vec<Meal>; 7],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let mut board = Self::new();
        board.load(snapshot);
        board
    }

    // --- Mutations ---

    /// Validates the draft and appends a new meal to the end of its day.
    pub fn create(&mut self, draft: &MealDraft) -> Result<Meal> {
        let fields = draft.validate()?;
        let id = self.fresh_id();
        let meal = fields.into_meal(id);
        self.days[meal.day.index()].push(meal.clone());
        Ok(meal)
    }

    /// Overwrites a meal's fields, keeping its id.
    ///
    /// When the day is unchanged the meal keeps its position. When the day
    /// changes the meal leaves its old bucket and becomes the last entry of
    /// the new one.
    pub fn update(&mut self, id: &MealId, draft: &MealDraft) -> Result<Meal> {
        let (day, index) = self
            .locate(id)
            .ok_or_else(|| MealError::MealNotFound(id.clone()))?;
        let fields = draft.validate()?;
        let meal = fields.into_meal(id.clone());

        if meal.day == day {
            self.days[day.index()][index] = meal.clone();
        } else {
            self.days[day.index()].remove(index);
            self.days[meal.day.index()].push(meal.clone());
        }
        Ok(meal)
    }

    /// Removes a meal. Unknown ids are ignored.
    pub fn delete(&mut self, id: &MealId) -> Option<Meal> {
        let (day, index) = self.locate(id)?;
        Some(self.days[day.index()].remove(index))
    }

    /// Relocates a meal to `target_index` within `target_day`.
    ///
    /// The index is clamped to the destination bucket's length after the
    /// meal has been taken out, so `usize::MAX` means "last". Unknown ids are
    /// ignored. Returns the meal and its final position.
    pub fn move_meal(
        &mut self,
        id: &MealId,
        target_day: Weekday,
        target_index: usize,
    ) -> Option<(Meal, usize)> {
        let (day, index) = self.locate(id)?;
        let mut meal = self.days[day.index()].remove(index);
        meal.day = target_day;

        let bucket = &mut self.days[target_day.index()];
        let position = target_index.min(bucket.len());
        bucket.insert(position, meal.clone());
        Some((meal, position))
    }

    /// Replaces the whole collection with the snapshot's contents.
    ///
    /// The day a record is filed under becomes its `day`. Records repeating
    /// an id already loaded are dropped.
    pub fn load(&mut self, snapshot: Snapshot) {
        let mut seen = HashSet::new();
        let mut days: [Vec<Meal>; 7] = Default::default();

        for day in Weekday::ALL {
            for record in snapshot.day(day) {
                if !seen.insert(record.id.clone()) {
                    tracing::warn!(id = %record.id, %day, "dropping meal with duplicate id");
                    continue;
                }
                days[day.index()].push(record.clone().into_meal(day));
            }
        }

        self.days = days;
    }

    // --- Derived views ---

    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = Snapshot::new();
        for day in Weekday::ALL {
            let records = self.day(day).iter().map(MealRecord::from).collect();
            snapshot.set_day(day, records);
        }
        snapshot
    }

    pub fn aggregate(&self, scope: AggregateScope) -> Nutrition {
        match scope {
            AggregateScope::Week => Nutrition::of(self.iter()),
            AggregateScope::Day(day) => Nutrition::of(self.day(day)),
        }
    }

    // --- Queries ---

    pub fn day(&self, day: Weekday) -> &[Meal] {
        &self.days[day.index()]
    }

    /// Every meal in week order, then position order.
    pub fn iter(&self) -> impl Iterator<Item = &Meal> {
        self.days.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Vec::is_empty)
    }

    pub fn get(&self, id: &MealId) -> Option<&Meal> {
        self.locate(id)
            .map(|(day, index)| &self.days[day.index()][index])
    }

    pub fn locate(&self, id: &MealId) -> Option<(Weekday, usize)> {
        Weekday::ALL.into_iter().find_map(|day| {
            self.day(day)
                .iter()
                .position(|meal| &meal.id == id)
                .map(|index| (day, index))
        })
    }

    /// Turns a selector into the id of the meal it names, if any.
    pub fn resolve(&self, selector: &MealSelector) -> Option<MealId> {
        match selector {
            MealSelector::Id(id) => self.get(id).map(|meal| meal.id.clone()),
            MealSelector::Slot { day, position } => position
                .checked_sub(1)
                .and_then(|index| self.day(*day).get(index))
                .map(|meal| meal.id.clone()),
        }
    }

    fn fresh_id(&self) -> MealId {
        loop {
            let id = MealId::generate();
            if self.locate(&id).is_none() {
                return id;
            }
        }
    }
}
