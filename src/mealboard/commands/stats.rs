use crate::board::AggregateScope;
use crate::commands::CmdResult;
use crate::config::MealboardConfig;
use crate::error::Result;
use crate::model::{MealType, Nutrition, Weekday};
use crate::store::meal_store::MealStore;
use crate::store::Storage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekStats {
    pub totals: Nutrition,
    pub daily: Vec<(Weekday, Nutrition)>,
    pub meal_count: usize,
    /// Days with at least one meal.
    pub planned_days: usize,
    /// Mean calories over planned days.
    pub average_calories: u64,
    /// Highest-calorie day; the earliest one on ties.
    pub busiest_day: Option<Weekday>,
    pub by_type: Vec<(MealType, usize)>,
    pub calorie_target: Option<u32>,
    pub over_target: Vec<Weekday>,
}

pub fn compute<S: Storage>(store: &MealStore<S>, config: &MealboardConfig) -> WeekStats {
    let board = store.board();
    let daily: Vec<(Weekday, Nutrition)> = Weekday::ALL
        .into_iter()
        .map(|day| (day, board.aggregate(AggregateScope::Day(day))))
        .collect();

    let planned_days = Weekday::ALL
        .into_iter()
        .filter(|day| !board.day(*day).is_empty())
        .count();
    let totals = store.aggregate(AggregateScope::Week);
    let average_calories = match planned_days {
        0 => 0,
        n => totals.calories / n as u64,
    };

    let busiest_day = daily
        .iter()
        .filter(|(_, n)| n.calories > 0)
        .fold(None::<(Weekday, u64)>, |best, (day, n)| match best {
            Some((_, top)) if top >= n.calories => best,
            _ => Some((*day, n.calories)),
        })
        .map(|(day, _)| day);

    let by_type = MealType::ALL
        .into_iter()
        .map(|t| (t, board.iter().filter(|m| m.meal_type == t).count()))
        .collect();

    let over_target = match config.calorie_target {
        Some(target) => daily
            .iter()
            .filter(|(_, n)| n.calories > u64::from(target))
            .map(|(day, _)| *day)
            .collect(),
        None => Vec::new(),
    };

    WeekStats {
        totals,
        daily,
        meal_count: board.len(),
        planned_days,
        average_calories,
        busiest_day,
        by_type,
        calorie_target: config.calorie_target,
        over_target,
    }
}

pub fn run<S: Storage>(store: &MealStore<S>, config: &MealboardConfig) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.stats = Some(compute(store, config));
    Ok(result)
}
