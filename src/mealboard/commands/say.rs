use crate::commands::create;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::phrase::parse_phrase;
use crate::store::meal_store::MealStore;
use crate::store::Storage;

/// Adds a meal from a spoken phrase such as "add toast for breakfast on monday".
pub fn run<S: Storage>(store: &mut MealStore<S>, phrase: &str) -> Result<CmdResult> {
    let draft = parse_phrase(phrase)?;
    create::run(store, &draft)
}
