//! User-submitted meal fields, before validation.
//!
//! A [`MealDraft`] carries text exactly as a form or command line produced it.
//! [`MealDraft::validate`] turns it into [`MealFields`], the checked values a
//! board stores. Validation never touches the board, so a rejected draft cannot
//! leave a partial mutation behind.
//!
//! Coercion rules:
//! - `name` is trimmed and must not be empty.
//! - `calories` must be a non-negative number. Decimals are truncated
//!   (`"350.7"` becomes 350).
//! - `protein`, `carbs`, `fat` follow the same rule but may be absent or blank.
//! - `day` and `meal_type` are parsed case-insensitively.
//! - `category` and `notes` are trimmed; blank means absent.

use crate::error::{MealError, Result};
use crate::model::{Meal, MealId, MealType, Weekday};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealDraft {
    pub name: String,
    pub calories: String,
    pub protein: Option<String>,
    pub carbs: Option<String>,
    pub fat: Option<String>,
    pub day: String,
    pub meal_type: String,
    pub category: Option<String>,
    pub notes: Option<String>,
}

impl MealDraft {
    pub fn new(
        name: impl Into<String>,
        calories: impl Into<String>,
        day: impl Into<String>,
        meal_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            calories: calories.into(),
            day: day.into(),
            meal_type: meal_type.into(),
            ..Self::default()
        }
    }

    pub fn with_macros(
        mut self,
        protein: Option<String>,
        carbs: Option<String>,
        fat: Option<String>,
    ) -> Self {
        self.protein = protein;
        self.carbs = carbs;
        self.fat = fat;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Pre-fills a draft from an existing meal, the way an edit form does.
    pub fn from_meal(meal: &Meal) -> Self {
        Self {
            name: meal.name.clone(),
            calories: meal.calories.to_string(),
            protein: meal.protein.map(|v| v.to_string()),
            carbs: meal.carbs.map(|v| v.to_string()),
            fat: meal.fat.map(|v| v.to_string()),
            day: meal.day.to_string(),
            meal_type: meal.meal_type.to_string(),
            category: meal.category.clone(),
            notes: meal.notes.clone(),
        }
    }

    pub fn validate(&self) -> Result<MealFields> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(MealError::validation("name", "cannot be empty"));
        }

        let calories = parse_count("calories", &self.calories)?;
        let protein = parse_optional_count("protein", self.protein.as_deref())?;
        let carbs = parse_optional_count("carbs", self.carbs.as_deref())?;
        let fat = parse_optional_count("fat", self.fat.as_deref())?;

        let day = self
            .day
            .parse::<Weekday>()
            .map_err(|e| MealError::validation("day", e))?;
        let meal_type = self
            .meal_type
            .parse::<MealType>()
            .map_err(|e| MealError::validation("type", e))?;

        Ok(MealFields {
            name: name.to_string(),
            calories,
            protein,
            carbs,
            fat,
            day,
            meal_type,
            category: non_blank(self.category.as_deref()),
            notes: non_blank(self.notes.as_deref()),
        })
    }
}

/// Validated meal fields; everything a meal has except its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealFields {
    pub name: String,
    pub calories: u32,
    pub protein: Option<u32>,
    pub carbs: Option<u32>,
    pub fat: Option<u32>,
    pub day: Weekday,
    pub meal_type: MealType,
    pub category: Option<String>,
    pub notes: Option<String>,
}

impl MealFields {
    pub fn into_meal(self, id: MealId) -> Meal {
        Meal {
            id,
            name: self.name,
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
            day: self.day,
            meal_type: self.meal_type,
            category: self.category,
            notes: self.notes,
        }
    }
}

/// Coerces free text into a non-negative whole number.
pub fn parse_count(field: &'static str, raw: &str) -> Result<u32> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(MealError::validation(field, "cannot be empty"));
    }
    if let Ok(value) = text.parse::<u32>() {
        return Ok(value);
    }

    let value: f64 = text
        .parse()
        .map_err(|_| MealError::validation(field, format!("'{}' is not a number", text)))?;
    if !value.is_finite() {
        return Err(MealError::validation(
            field,
            format!("'{}' is not a number", text),
        ));
    }
    if value < 0.0 {
        return Err(MealError::validation(field, "must not be negative"));
    }
    if value.trunc() > f64::from(u32::MAX) {
        return Err(MealError::validation(field, "is too large"));
    }
    Ok(value.trunc() as u32)
}

fn parse_optional_count(field: &'static str, raw: Option<&str>) -> Result<Option<u32>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => parse_count(field, text).map(Some),
    }
}

fn non_blank(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
