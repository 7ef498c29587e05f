use crate::config::MealboardConfig;
use crate::model::{Meal, Nutrition, Weekday};
use crate::store::meal_store::MealStore;
use crate::store::Storage;
use crate::suggest::SampleMeal;

pub mod config;
pub mod create;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod move_meal;
pub mod say;
pub mod stats;
pub mod suggest;
pub mod transfer;
pub mod update;

pub use stats::WeekStats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// One day column as a UI should draw it.
#[derive(Debug, Clone)]
pub struct DayView {
    pub day: Weekday,
    pub meals: Vec<Meal>,
    pub totals: Nutrition,
    /// Calories exceed the configured daily target.
    pub over_target: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_meals: Vec<Meal>,
    pub listed_days: Vec<DayView>,
    pub week_totals: Option<Nutrition>,
    pub stats: Option<WeekStats>,
    pub suggestion: Option<SampleMeal>,
    pub exported: Option<String>,
    pub config: Option<MealboardConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_days(mut self, days: Vec<DayView>) -> Self {
        self.listed_days = days;
        self
    }

    pub fn with_config(mut self, config: MealboardConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Surfaces a failed background write as a warning.
    pub(crate) fn note_write_failure<S: Storage>(&mut self, store: &mut MealStore<S>) {
        if let Some(failure) = store.take_write_failure() {
            self.add_message(CmdMessage::warning(format!(
                "Changes kept in memory but not saved: {}",
                failure
            )));
        }
    }
}

/// A partial edit: only the fields that are `Some` change.
#[derive(Debug, Clone, Default)]
pub struct MealPatch {
    pub name: Option<String>,
    pub calories: Option<String>,
    pub protein: Option<String>,
    pub carbs: Option<String>,
    pub fat: Option<String>,
    pub day: Option<String>,
    pub meal_type: Option<String>,
    pub category: Option<String>,
    pub notes: Option<String>,
}

impl MealPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.calories.is_none()
            && self.protein.is_none()
            && self.carbs.is_none()
            && self.fat.is_none()
            && self.day.is_none()
            && self.meal_type.is_none()
            && self.category.is_none()
            && self.notes.is_none()
    }
}
