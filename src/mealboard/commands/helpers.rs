use crate::board::{AggregateScope, Board};
use crate::commands::DayView;
use crate::error::{MealError, Result};
use crate::model::{MealId, Weekday};
use crate::selector::MealSelector;

/// Resolves a selector that must name an existing meal.
pub fn resolve_selector(board: &Board, selector: &MealSelector) -> Result<MealId> {
    board.resolve(selector).ok_or_else(|| match selector {
        MealSelector::Id(id) => MealError::MealNotFound(id.clone()),
        MealSelector::Slot { .. } => MealError::Api(format!("No meal at {}", selector)),
    })
}

pub fn day_view(board: &Board, day: Weekday, calorie_target: Option<u32>) -> DayView {
    let totals = board.aggregate(AggregateScope::Day(day));
    DayView {
        day,
        meals: board.day(day).to_vec(),
        totals,
        over_target: calorie_target.is_some_and(|t| totals.calories > u64::from(t)),
    }
}

pub fn fmt_meal(name: &str, calories: u32) -> String {
    format!("{} ({} cal)", name, calories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn resolve_reports_missing_slot_and_id() {
        let fixture = StoreFixture::new().with_meals(1, Weekday::Monday);
        let board = fixture.store.board();

        assert!(resolve_selector(board, &"mon.1".parse().unwrap()).is_ok());
        assert!(matches!(
            resolve_selector(board, &"mon.2".parse().unwrap()),
            Err(MealError::Api(_))
        ));
        assert!(matches!(
            resolve_selector(board, &"abc".parse().unwrap()),
            Err(MealError::MealNotFound(_))
        ));
    }

    #[test]
    fn day_view_flags_days_over_target() {
        let fixture = StoreFixture::new().with_meals(3, Weekday::Friday);
        let board = fixture.store.board();

        let view = day_view(board, Weekday::Friday, Some(500));
        assert_eq!(view.meals.len(), 3);
        assert_eq!(view.totals.calories, 600);
        assert!(view.over_target);
        assert!(!day_view(board, Weekday::Friday, None).over_target);
        assert!(!day_view(board, Weekday::Friday, Some(600)).over_target);
    }
}
