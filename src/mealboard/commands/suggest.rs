use crate::commands::create;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{MealType, Weekday};
use crate::store::meal_store::MealStore;
use crate::store::Storage;
use crate::suggest::suggest;
use rand::Rng;

/// Suggests a sample meal and, when `add_to` names a day, adds it there.
pub fn run<S: Storage, R: Rng>(
    store: &mut MealStore<S>,
    rng: &mut R,
    meal_type: Option<MealType>,
    add_to: Option<Weekday>,
) -> Result<CmdResult> {
    let pick = suggest(rng, meal_type);

    let mut result = match add_to {
        Some(day) => create::run(store, &pick.to_draft(day))?,
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(format!(
                "How about {} for {}? ({} cal, {})",
                pick.name, pick.meal_type, pick.calories, pick.category
            )));
            result
        }
    };
    result.suggestion = Some(pick);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemStorage;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn suggestion_only_leaves_board_alone() {
        let mut store = MealStore::open(MemStorage::new()).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let result = run(&mut store, &mut rng, Some(MealType::Dinner), None).unwrap();

        assert_eq!(result.suggestion.unwrap().meal_type, MealType::Dinner);
        assert!(store.board().is_empty());
        assert_eq!(store.storage().write_count(), 0);
    }

    #[test]
    fn suggestion_can_be_added() {
        let mut store = MealStore::open(MemStorage::new()).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let result = run(&mut store, &mut rng, None, Some(Weekday::Saturday)).unwrap();

        let pick = result.suggestion.unwrap();
        let saturday = store.board().day(Weekday::Saturday);
        assert_eq!(saturday.len(), 1);
        assert_eq!(saturday[0].name, pick.name);
        assert_eq!(saturday[0].calories, pick.calories);
    }
}
