//! Canned meal suggestions.
//!
//! Picks a sample meal from a small fixed catalogue. The random source is
//! passed in so callers (and tests) control it.

use crate::draft::MealDraft;
use crate::model::{MealType, Weekday};
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleMeal {
    pub name: &'static str,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub category: &'static str,
    pub meal_type: MealType,
}

impl SampleMeal {
    /// A draft placing this sample on `day`, as its natural meal type.
    pub fn to_draft(&self, day: Weekday) -> MealDraft {
        MealDraft::new(
            self.name,
            self.calories.to_string(),
            day.as_str(),
            self.meal_type.as_str(),
        )
        .with_macros(
            Some(self.protein.to_string()),
            Some(self.carbs.to_string()),
            Some(self.fat.to_string()),
        )
        .with_category(self.category)
    }
}

const fn sample(
    name: &'static str,
    calories: u32,
    protein: u32,
    carbs: u32,
    fat: u32,
    category: &'static str,
    meal_type: MealType,
) -> SampleMeal {
    SampleMeal {
        name,
        calories,
        protein,
        carbs,
        fat,
        category,
        meal_type,
    }
}

pub const SAMPLE_MEALS: [SampleMeal; 8] = [
    sample("Greek Yogurt Parfait", 320, 18, 42, 8, "vegetarian", MealType::Breakfast),
    sample("Veggie Omelette", 380, 24, 10, 26, "vegetarian", MealType::Breakfast),
    sample("Quinoa Buddha Bowl", 520, 19, 68, 18, "vegan", MealType::Lunch),
    sample("Grilled Chicken Salad", 450, 38, 20, 22, "high-protein", MealType::Lunch),
    sample("Salmon with Roasted Vegetables", 610, 42, 30, 34, "pescatarian", MealType::Dinner),
    sample("Lentil Curry", 540, 24, 76, 14, "vegan", MealType::Dinner),
    sample("Apple with Peanut Butter", 270, 7, 30, 16, "vegetarian", MealType::Snack),
    sample("Hummus and Carrot Sticks", 210, 7, 24, 10, "vegan", MealType::Snack),
];

/// Picks a sample, restricted to `meal_type` when given.
pub fn suggest<R: Rng>(rng: &mut R, meal_type: Option<MealType>) -> SampleMeal {
    let matching: Vec<&SampleMeal> = SAMPLE_MEALS
        .iter()
        .filter(|s| meal_type.map_or(true, |t| s.meal_type == t))
        .collect();

    match matching.choose(rng) {
        Some(pick) => **pick,
        None => SAMPLE_MEALS[rng.gen_range(0..SAMPLE_MEALS.len())],
    }
}
