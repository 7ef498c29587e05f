use crate::commands::helpers::{fmt_meal, resolve_selector};
use crate::commands::{CmdMessage, CmdResult, MealPatch};
use crate::draft::MealDraft;
use crate::error::{MealError, Result};
use crate::model::Meal;
use crate::selector::MealSelector;
use crate::store::meal_store::MealStore;
use crate::store::Storage;

/// Applies a partial edit: unspecified fields keep their current values.
pub fn run<S: Storage>(
    store: &mut MealStore<S>,
    selector: &MealSelector,
    patch: &MealPatch,
) -> Result<CmdResult> {
    let current = selected_meal(store, selector)?;

    let draft = apply_patch(MealDraft::from_meal(&current), patch);
    let updated = store.update(&current.id, &draft)?;
    Ok(report(store, &current, updated))
}

/// Replaces every field of the selected meal with the draft's.
pub fn replace<S: Storage>(
    store: &mut MealStore<S>,
    selector: &MealSelector,
    draft: &MealDraft,
) -> Result<CmdResult> {
    let current = selected_meal(store, selector)?;

    let updated = store.update(&current.id, draft)?;
    Ok(report(store, &current, updated))
}

fn selected_meal<S: Storage>(store: &MealStore<S>, selector: &MealSelector) -> Result<Meal> {
    let id = resolve_selector(store.board(), selector)?;
    store
        .board()
        .get(&id)
        .cloned()
        .ok_or(MealError::MealNotFound(id))
}

fn report<S: Storage>(store: &mut MealStore<S>, before: &Meal, after: Meal) -> CmdResult {
    let mut result = CmdResult::default();
    let summary = fmt_meal(&after.name, after.calories);
    let content = if before.day != after.day {
        format!(
            "Meal updated and moved {} -> {}: {}",
            before.day, after.day, summary
        )
    } else {
        format!("Meal updated ({}): {}", after.day, summary)
    };
    result.add_message(CmdMessage::success(content));
    result.note_write_failure(store);
    result.affected_meals.push(after);
    result
}

fn apply_patch(mut draft: MealDraft, patch: &MealPatch) -> MealDraft {
    if let Some(name) = &patch.name {
        draft.name = name.clone();
    }
    if let Some(calories) = &patch.calories {
        draft.calories = calories.clone();
    }
    if let Some(day) = &patch.day {
        draft.day = day.clone();
    }
    if let Some(meal_type) = &patch.meal_type {
        draft.meal_type = meal_type.clone();
    }
    // Optional fields: an empty value clears them
    if patch.protein.is_some() {
        draft.protein = patch.protein.clone();
    }
    if patch.carbs.is_some() {
        draft.carbs = patch.carbs.clone();
    }
    if patch.fat.is_some() {
        draft.fat = patch.fat.clone();
    }
    if patch.category.is_some() {
        draft.category = patch.category.clone();
    }
    if patch.notes.is_some() {
        draft.notes = patch.notes.clone();
    }
    draft
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Weekday;
    use crate::store::memory::fixtures::StoreFixture;

    fn sel(s: &str) -> MealSelector {
        s.parse().unwrap()
    }

    #[test]
    fn patch_changes_only_given_fields() {
        let mut fixture = StoreFixture::new().with_meal("Oatmeal", 300, Weekday::Monday, "breakfast");
        let patch = MealPatch {
            calories: Some("350".into()),
            protein: Some("12".into()),
            ..MealPatch::default()
        };

        let result = run(&mut fixture.store, &sel("mon.1"), &patch).unwrap();
        let meal = &result.affected_meals[0];
        assert_eq!(meal.name, "Oatmeal");
        assert_eq!(meal.calories, 350);
        assert_eq!(meal.protein, Some(12));
        assert_eq!(meal.day, Weekday::Monday);
    }

    #[test]
    fn empty_optional_value_clears_field() {
        let mut fixture = StoreFixture::new().with_meal("Oatmeal", 300, Weekday::Monday, "breakfast");
        let set = MealPatch {
            notes: Some("with honey".into()),
            ..MealPatch::default()
        };
        run(&mut fixture.store, &sel("mon.1"), &set).unwrap();
        let clear = MealPatch {
            notes: Some(String::new()),
            ..MealPatch::default()
        };
        let result = run(&mut fixture.store, &sel("mon.1"), &clear).unwrap();
        assert_eq!(result.affected_meals[0].notes, None);
    }

    #[test]
    fn changing_day_moves_meal_to_end() {
        let mut fixture = StoreFixture::new()
            .with_meal("A", 100, Weekday::Monday, "lunch")
            .with_meal("B", 100, Weekday::Sunday, "lunch");
        let patch = MealPatch {
            day: Some("sunday".into()),
            ..MealPatch::default()
        };
        let result = run(&mut fixture.store, &sel("mon.1"), &patch).unwrap();

        assert!(result.messages[0].content.contains("monday -> sunday"));
        let sunday: Vec<_> = fixture
            .store
            .board()
            .day(Weekday::Sunday)
            .iter()
            .map(|m| m.name.clone())
            .collect();
        assert_eq!(sunday, vec!["B", "A"]);
    }

    #[test]
    fn unknown_meal_is_an_error() {
        let mut fixture = StoreFixture::new();
        let err = run(&mut fixture.store, &sel("missing-id"), &MealPatch::default()).unwrap_err();
        assert!(matches!(err, MealError::MealNotFound(_)));
    }

    #[test]
    fn replace_overwrites_everything() {
        let mut fixture = StoreFixture::new().with_meal("Oatmeal", 300, Weekday::Monday, "breakfast");
        let draft = MealDraft::new("Pancakes", "500", "monday", "breakfast");
        let result = replace(&mut fixture.store, &sel("mon.1"), &draft).unwrap();
        assert_eq!(result.affected_meals[0].name, "Pancakes");
        assert_eq!(fixture.store.board().len(), 1);
    }
}
