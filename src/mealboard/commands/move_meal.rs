use crate::commands::helpers::resolve_selector;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Weekday;
use crate::selector::MealSelector;
use crate::store::meal_store::MealStore;
use crate::store::Storage;

/// Moves a meal to `target_day`, at `target_index` (0-based) or last when `None`.
///
/// A slot selector that matches nothing is an error; an unknown id is
/// tolerated and reported as a warning.
pub fn run<S: Storage>(
    store: &mut MealStore<S>,
    selector: &MealSelector,
    target_day: Weekday,
    target_index: Option<usize>,
) -> Result<CmdResult> {
    let id = match selector {
        MealSelector::Slot { .. } => resolve_selector(store.board(), selector)?,
        MealSelector::Id(id) => id.clone(),
    };
    let mut result = CmdResult::default();

    match store.move_meal(&id, target_day, target_index.unwrap_or(usize::MAX)) {
        Some((meal, position)) => {
            result.add_message(CmdMessage::success(format!(
                "Meal moved to {}.{}: {}",
                target_day.short(),
                position + 1,
                meal.name
            )));
            result.affected_meals.push(meal);
        }
        None => result.add_message(CmdMessage::warning(format!(
            "No meal matches {}, nothing moved",
            selector
        ))),
    }

    result.note_write_failure(store);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MealError;
    use crate::model::MealId;
    use crate::store::memory::fixtures::StoreFixture;

    fn names(fixture: &StoreFixture, day: Weekday) -> Vec<String> {
        fixture
            .store
            .board()
            .day(day)
            .iter()
            .map(|m| m.name.clone())
            .collect()
    }

    #[test]
    fn moves_to_position_on_other_day() {
        let mut fixture = StoreFixture::new()
            .with_meal("A", 100, Weekday::Monday, "lunch")
            .with_meal("X", 100, Weekday::Tuesday, "lunch")
            .with_meal("Y", 100, Weekday::Tuesday, "lunch");

        let sel = "mon.1".parse().unwrap();
        let result = run(&mut fixture.store, &sel, Weekday::Tuesday, Some(1)).unwrap();

        assert!(result.messages[0].content.contains("tue.2"));
        assert_eq!(names(&fixture, Weekday::Tuesday), vec!["X", "A", "Y"]);
        assert!(names(&fixture, Weekday::Monday).is_empty());
    }

    #[test]
    fn no_index_means_last() {
        let mut fixture = StoreFixture::new()
            .with_meal("A", 100, Weekday::Monday, "lunch")
            .with_meal("B", 100, Weekday::Monday, "lunch");
        let sel = "mon.1".parse().unwrap();
        run(&mut fixture.store, &sel, Weekday::Monday, None).unwrap();
        assert_eq!(names(&fixture, Weekday::Monday), vec!["B", "A"]);
    }

    #[test]
    fn unknown_id_is_a_warning_but_missing_slot_is_an_error() {
        let mut fixture = StoreFixture::new().with_meals(1, Weekday::Monday);

        let by_id = MealSelector::Id(MealId::from("ghost"));
        let result = run(&mut fixture.store, &by_id, Weekday::Friday, None).unwrap();
        assert!(result.affected_meals.is_empty());

        let slot = "fri.4".parse().unwrap();
        let err = run(&mut fixture.store, &slot, Weekday::Monday, None).unwrap_err();
        assert!(matches!(err, MealError::Api(_)));
        assert_eq!(fixture.store.board().len(), 1);
    }
}
