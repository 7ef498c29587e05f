//! # Snapshot Format
//!
//! A snapshot is the whole board as one JSON document: an object keyed by the
//! lowercase weekday name, each holding the ordered meal records of that day.
//!
//! ```json
//! {
//!   "monday": [
//!     { "id": "4f0c…", "name": "Oatmeal", "calories": 300, "day": "monday", "type": "breakfast" }
//!   ],
//!   "tuesday": [],
//!   ...
//! }
//! ```
//!
//! Key names are part of the persisted format and never change: `id`, `name`,
//! `calories`, `protein`, `carbs`, `fat`, `day`, `type`, `category`, `notes`.
//!
//! Writing emits all seven days in week order and omits absent optional fields.
//! Reading is lenient about encodings older boards used: numbers stored as
//! strings, numeric ids, records without `day`, capitalised type names, missing
//! days, or a bare `null` document. The shape itself (object of arrays of
//! records) is not negotiable; anything else is a decoding error.
//!
//! Two repairs happen while reading, each logged with `warn!`:
//! - a day spelled twice (`"monday"` and `"Mon"`) keeps the meals of both
//!   keys, in document order
//! - a record whose `type` is not a known meal type is skipped

use crate::draft::parse_count;
use crate::error::Result;
use crate::model::{Meal, MealId, MealType, Weekday};
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Snapshot {
    days: BTreeMap<Weekday, Vec<MealRecord>>,
}

impl<'de> Deserialize<'de> for Snapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(SnapshotVisitor)
    }
}

struct SnapshotVisitor;

impl<'de> Visitor<'de> for SnapshotVisitor {
    type Value = Snapshot;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping weekday names to lists of meals")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Snapshot, A::Error> {
        let mut snapshot = Snapshot::new();
        let mut seen = BTreeSet::new();

        while let Some(key) = map.next_key::<String>()? {
            let day: Weekday = key.parse().map_err(<A::Error as de::Error>::custom)?;
            let stored: Vec<StoredRecord> = map.next_value()?;
            let records = stored.into_iter().filter_map(StoredRecord::into_record);

            if !seen.insert(day) {
                tracing::warn!(%key, %day, "day appears twice, appending its meals");
            }
            snapshot.days.entry(day).or_default().extend(records);
        }
        Ok(snapshot)
    }
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the records for one day, replacing whatever was there.
    pub fn set_day(&mut self, day: Weekday, records: Vec<MealRecord>) {
        self.days.insert(day, records);
    }

    pub fn day(&self, day: Weekday) -> &[MealRecord] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Days present in the document, in week order.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &[MealRecord])> {
        self.days.iter().map(|(day, records)| (*day, records.as_slice()))
    }

    pub fn meal_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Snapshot> {
        let parsed: Option<Snapshot> = serde_json::from_slice(bytes)?;
        Ok(parsed.unwrap_or_default())
    }
}

/// One meal as it appears in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealRecord {
    pub id: MealId,
    pub name: String,
    pub calories: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<Weekday>,
    #[serde(rename = "type")]
    pub meal_type: MealType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A record as read back from storage, before its meal type is checked.
#[derive(Deserialize)]
struct StoredRecord {
    id: MealId,
    name: String,
    #[serde(deserialize_with = "lenient::count")]
    calories: u32,
    #[serde(default, deserialize_with = "lenient::optional_count")]
    protein: Option<u32>,
    #[serde(default, deserialize_with = "lenient::optional_count")]
    carbs: Option<u32>,
    #[serde(default, deserialize_with = "lenient::optional_count")]
    fat: Option<u32>,
    #[serde(default)]
    day: Option<Weekday>,
    #[serde(rename = "type")]
    meal_type: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    notes: Option<String>,
}

impl StoredRecord {
    fn into_record(self) -> Option<MealRecord> {
        let meal_type = match self.meal_type.parse::<MealType>() {
            Ok(meal_type) => meal_type,
            Err(reason) => {
                tracing::warn!(id = %self.id, name = %self.name, %reason, "skipping meal with unknown type");
                return None;
            }
        };
        Some(MealRecord {
            id: self.id,
            name: self.name,
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
            day: self.day,
            meal_type,
            category: self.category,
            notes: self.notes,
        })
    }
}

impl MealRecord {
    /// Builds the meal this record describes. The day the record is filed
    /// under wins over the record's own `day` field.
    pub fn into_meal(self, day: Weekday) -> Meal {
        Meal {
            id: self.id,
            name: self.name,
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
            day,
            meal_type: self.meal_type,
            category: self.category,
            notes: self.notes,
        }
    }
}

impl From<&Meal> for MealRecord {
    fn from(meal: &Meal) -> Self {
        Self {
            id: meal.id.clone(),
            name: meal.name.clone(),
            calories: meal.calories,
            protein: meal.protein,
            carbs: meal.carbs,
            fat: meal.fat,
            day: Some(meal.day),
            meal_type: meal.meal_type,
            category: meal.category.clone(),
            notes: meal.notes.clone(),
        }
    }
}

mod lenient {
    use super::parse_count;
    use serde::de::{self, Deserializer, Visitor};
    use std::fmt;

    struct CountVisitor;

    impl<'de> Visitor<'de> for CountVisitor {
        type Value = Option<u32>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a non-negative number or numeric string")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            u32::try_from(v)
                .map(Some)
                .map_err(|_| E::custom(format!("{} is too large", v)))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            if v < 0 {
                return Err(E::custom(format!("{} is negative", v)));
            }
            self.visit_u64(v as u64)
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            parse_count("number", &v.to_string())
                .map(Some)
                .map_err(E::custom)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            if v.trim().is_empty() {
                return Ok(None);
            }
            parse_count("number", v).map(Some).map_err(E::custom)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }
    }

    pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        deserializer
            .deserialize_any(CountVisitor)?
            .ok_or_else(|| de::Error::custom("calories cannot be empty"))
    }

    pub fn optional_count<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<u32>, D::Error> {
        deserializer.deserialize_any(CountVisitor)
    }
}
