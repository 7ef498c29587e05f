use crate::commands::helpers::fmt_meal;
use crate::commands::{CmdMessage, CmdResult};
use crate::draft::MealDraft;
use crate::error::Result;
use crate::store::meal_store::MealStore;
use crate::store::Storage;

pub fn run<S: Storage>(store: &mut MealStore<S>, draft: &MealDraft) -> Result<CmdResult> {
    let meal = store.create(draft)?;
    let position = store.board().day(meal.day).len();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Meal added ({}.{}): {}",
        meal.day.short(),
        position,
        fmt_meal(&meal.name, meal.calories)
    )));
    result.note_write_failure(store);
    result.affected_meals.push(meal);
    Ok(result)
}
