use crate::commands::helpers::fmt_meal;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::selector::MealSelector;
use crate::store::meal_store::MealStore;
use crate::store::Storage;

/// Deletes the selected meals. Selectors that match nothing are skipped.
///
/// All selectors are resolved against the board as it was before the first
/// deletion, so `mon.1 mon.2` removes the first two Monday meals. Ids go to
/// the store even when unknown, so the board is still written back.
pub fn run<S: Storage>(store: &mut MealStore<S>, selectors: &[MealSelector]) -> Result<CmdResult> {
    let resolved: Vec<_> = selectors
        .iter()
        .map(|sel| match sel {
            MealSelector::Id(id) => (sel, Some(id.clone())),
            MealSelector::Slot { .. } => (sel, store.board().resolve(sel)),
        })
        .collect();
    let mut result = CmdResult::default();

    for (selector, id) in resolved {
        let removed = match id {
            Some(id) => store.delete(&id),
            None => None,
        };
        match removed {
            Some(meal) => {
                result.add_message(CmdMessage::success(format!(
                    "Meal deleted ({}): {}",
                    meal.day,
                    fmt_meal(&meal.name, meal.calories)
                )));
                result.affected_meals.push(meal);
            }
            None => result.add_message(CmdMessage::warning(format!(
                "No meal matches {}, nothing deleted",
                selector
            ))),
        }
    }

    result.note_write_failure(store);
    Ok(result)
}
