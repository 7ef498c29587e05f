use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days, in board order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Position of the day in the week, Monday = 0.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    pub fn short(self) -> &'static str {
        &self.as_str()[..3]
    }

    pub fn today() -> Self {
        use chrono::Datelike;
        chrono::Local::now().weekday().into()
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|day| lowered == day.as_str() || lowered == day.short())
            .ok_or_else(|| format!("unknown weekday '{}'", s.trim()))
    }
}

impl TryFrom<String> for Weekday {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Weekday::ALL[day.num_days_from_monday() as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        MealType::ALL
            .into_iter()
            .find(|t| lowered == t.as_str())
            .ok_or_else(|| format!("unknown meal type '{}'", s.trim()))
    }
}

impl TryFrom<String> for MealType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Opaque meal identity. Stable for the lifetime of the meal.
///
/// Fresh ids are UUID v4 strings. Boards written by older clients used
/// millisecond timestamps, sometimes stored as JSON numbers, so decoding
/// accepts numbers too and keeps their textual form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct MealId(String);

impl MealId {
    pub fn generate() -> Self {
        MealId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MealId {
    fn from(value: &str) -> Self {
        MealId(value.to_string())
    }
}

impl From<String> for MealId {
    fn from(value: String) -> Self {
        MealId(value)
    }
}

impl<'de> Deserialize<'de> for MealId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = MealId;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string or numeric meal id")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<MealId, E> {
                if v.trim().is_empty() {
                    return Err(E::custom("meal id cannot be empty"));
                }
                Ok(MealId(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<MealId, E> {
                Ok(MealId(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<MealId, E> {
                Ok(MealId(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<MealId, E> {
                if v.fract() == 0.0 && v.is_finite() {
                    Ok(MealId(format!("{:.0}", v)))
                } else {
                    Ok(MealId(v.to_string()))
                }
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    pub id: MealId,
    pub name: String,
    pub calories: u32,
    pub protein: Option<u32>,
    pub carbs: Option<u32>,
    pub fat: Option<u32>,
    pub day: Weekday,
    pub meal_type: MealType,
    pub category: Option<String>,
    pub notes: Option<String>,
}

impl Meal {
    pub fn nutrition(&self) -> Nutrition {
        Nutrition {
            calories: u64::from(self.calories),
            protein: u64::from(self.protein.unwrap_or(0)),
            carbs: u64::from(self.carbs.unwrap_or(0)),
            fat: u64::from(self.fat.unwrap_or(0)),
        }
    }
}

/// Summed nutrition over a set of meals. Missing macros count as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Nutrition {
    pub calories: u64,
    pub protein: u64,
    pub carbs: u64,
    pub fat: u64,
}

impl Nutrition {
    pub fn of<'a>(meals: impl IntoIterator<Item = &'a Meal>) -> Self {
        meals.into_iter().map(Meal::nutrition).sum()
    }
}

impl Add for Nutrition {
    type Output = Nutrition;

    fn add(self, rhs: Nutrition) -> Nutrition {
        Nutrition {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
        }
    }
}

impl std::iter::Sum for Nutrition {
    fn sum<I: Iterator<Item = Nutrition>>(iter: I) -> Self {
        iter.fold(Nutrition::default(), Add::add)
    }
}
