use crate::board::AggregateScope;
use crate::commands::helpers::day_view;
use crate::commands::CmdResult;
use crate::config::MealboardConfig;
use crate::error::Result;
use crate::model::Weekday;
use crate::store::meal_store::MealStore;
use crate::store::Storage;

/// Builds the board view: every day, or just `day` when given.
pub fn run<S: Storage>(
    store: &MealStore<S>,
    day: Option<Weekday>,
    config: &MealboardConfig,
) -> Result<CmdResult> {
    let board = store.board();
    let days: Vec<Weekday> = match day {
        Some(day) => vec![day],
        None => Weekday::ALL.to_vec(),
    };
    let views = days
        .into_iter()
        .map(|d| day_view(board, d, config.calorie_target))
        .collect();

    let mut result = CmdResult::default().with_listed_days(views);
    result.week_totals = Some(store.aggregate(AggregateScope::Week));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_all_seven_days_with_week_totals() {
        let fixture = StoreFixture::new()
            .with_meal("Toast", 250, Weekday::Monday, "breakfast")
            .with_meal("Curry", 700, Weekday::Saturday, "dinner");

        let result = run(&fixture.store, None, &MealboardConfig::default()).unwrap();
        assert_eq!(result.listed_days.len(), 7);
        assert_eq!(result.listed_days[0].day, Weekday::Monday);
        assert_eq!(result.listed_days[5].meals[0].name, "Curry");
        assert_eq!(result.week_totals.unwrap().calories, 950);
    }

    #[test]
    fn lists_single_day() {
        let fixture = StoreFixture::new().with_meals(2, Weekday::Thursday);
        let result = run(
            &fixture.store,
            Some(Weekday::Thursday),
            &MealboardConfig::default(),
        )
        .unwrap();
        assert_eq!(result.listed_days.len(), 1);
        assert_eq!(result.listed_days[0].totals.calories, 300);
    }
}
