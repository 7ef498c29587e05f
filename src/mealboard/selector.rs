//! # Meal Selectors
//!
//! Meal ids are stable but long, so UI clients may also point at a meal by its
//! slot on the board: the day followed by the 1-based position within that day.
//!
//! | Input         | Selector                                |
//! |---------------|-----------------------------------------|
//! | `tue.2`       | second meal on Tuesday                  |
//! | `monday:1`    | first meal on Monday                    |
//! | anything else | a meal id, matched exactly              |
//!
//! Slots are resolved against the current board with
//! [`Board::resolve`](crate::board::Board::resolve); they are only meaningful
//! until the next mutation.

use crate::model::{MealId, Weekday};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MealSelector {
    Id(MealId),
    Slot { day: Weekday, position: usize },
}

impl fmt::Display for MealSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealSelector::Id(id) => write!(f, "{}", id),
            MealSelector::Slot { day, position } => write!(f, "{}.{}", day.short(), position),
        }
    }
}

impl FromStr for MealSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty meal selector".to_string());
        }

        if let Some((day, position)) = s.split_once(['.', ':']) {
            if let (Ok(day), Ok(position)) = (day.parse::<Weekday>(), position.parse::<usize>()) {
                return Ok(MealSelector::Slot { day, position });
            }
        }

        Ok(MealSelector::Id(MealId::from(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_slots() {
        assert_eq!(
            "tue.2".parse::<MealSelector>().unwrap(),
            MealSelector::Slot {
                day: Weekday::Tuesday,
                position: 2
            }
        );
        assert_eq!(
            "Sunday:1".parse::<MealSelector>().unwrap(),
            MealSelector::Slot {
                day: Weekday::Sunday,
                position: 1
            }
        );
    }

    #[test]
    fn everything_else_is_an_id() {
        assert_eq!(
            "1700000000000".parse::<MealSelector>().unwrap(),
            MealSelector::Id(MealId::from("1700000000000"))
        );
        assert_eq!(
            "tue.x".parse::<MealSelector>().unwrap(),
            MealSelector::Id(MealId::from("tue.x"))
        );
        assert!("  ".parse::<MealSelector>().is_err());
    }

    #[test]
    fn displays_short_slot_form() {
        let sel = MealSelector::Slot {
            day: Weekday::Friday,
            position: 3,
        };
        assert_eq!(sel.to_string(), "fri.3");
    }
}
