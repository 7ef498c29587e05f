use super::Storage;
use crate::error::{MealError, Result};
use std::cell::RefCell;

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// Uses `RefCell` so `Storage` can take `&self`; mealboard is single-threaded.
#[derive(Default)]
pub struct MemStorage {
    blob: RefCell<Option<Vec<u8>>>,
    writes: RefCell<usize>,
    simulate_write_error: RefCell<bool>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with an existing snapshot, as if written by an earlier session.
    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        let storage = Self::new();
        *storage.blob.borrow_mut() = Some(bytes.into());
        storage
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }

    pub fn contents(&self) -> Option<Vec<u8>> {
        self.blob.borrow().clone()
    }
}

impl Storage for MemStorage {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.blob.borrow().clone())
    }

    fn write(&self, bytes: &[u8]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(MealError::Store("Simulated write error".to_string()));
        }
        *self.blob.borrow_mut() = Some(bytes.to_vec());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::draft::MealDraft;
    use crate::model::Weekday;
    use crate::store::meal_store::MealStore;

    pub struct StoreFixture {
        pub store: MealStore<MemStorage>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: MealStore::open(MemStorage::new()).unwrap(),
            }
        }

        pub fn with_meal(mut self, name: &str, calories: u32, day: Weekday, meal_type: &str) -> Self {
            let draft = MealDraft::new(name, calories.to_string(), day.as_str(), meal_type);
            self.store.create(&draft).unwrap();
            self
        }

        pub fn with_meals(mut self, count: usize, day: Weekday) -> Self {
            for i in 0..count {
                let draft = MealDraft::new(
                    format!("Test Meal {}", i + 1),
                    ((i + 1) * 100).to_string(),
                    day.as_str(),
                    "lunch",
                );
                self.store.create(&draft).unwrap();
            }
            self
        }
    }
}
