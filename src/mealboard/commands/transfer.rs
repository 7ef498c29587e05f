//! Export and import of whole boards as snapshot JSON.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MealError, Result};
use crate::snapshot::Snapshot;
use crate::store::meal_store::MealStore;
use crate::store::Storage;

pub fn export<S: Storage>(store: &MealStore<S>) -> Result<CmdResult> {
    let bytes = store.snapshot().to_json()?;
    let json = String::from_utf8(bytes)
        .map_err(|e| MealError::Store(format!("snapshot is not UTF-8: {}", e)))?;

    let mut result = CmdResult::default();
    result.exported = Some(json);
    Ok(result)
}

/// Replaces the board with an exported snapshot.
pub fn import<S: Storage>(store: &mut MealStore<S>, bytes: &[u8]) -> Result<CmdResult> {
    let snapshot = Snapshot::from_json(bytes)?;
    let incoming = snapshot.meal_count();
    let replaced = store.board().len();
    store.replace(snapshot);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Board imported: {} meals (replaced {})",
        store.board().len(),
        replaced
    )));
    if incoming > store.board().len() {
        result.add_message(CmdMessage::warning(format!(
            "{} meals with duplicate ids were skipped",
            incoming - store.board().len()
        )));
    }
    result.note_write_failure(store);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Weekday;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn export_then_import_restores_board() {
        let source = StoreFixture::new()
            .with_meal("Toast", 250, Weekday::Monday, "breakfast")
            .with_meal("Curry", 700, Weekday::Saturday, "dinner");
        let json = export(&source.store).unwrap().exported.unwrap();

        let mut target = StoreFixture::new().with_meals(4, Weekday::Sunday);
        let result = import(&mut target.store, json.as_bytes()).unwrap();

        assert!(result.messages[0].content.contains("replaced 4"));
        assert_eq!(target.store.board(), source.store.board());
    }

    #[test]
    fn bad_import_leaves_board_alone() {
        let mut target = StoreFixture::new().with_meals(2, Weekday::Sunday);
        assert!(import(&mut target.store, b"{\"monday\": 5}").is_err());
        assert_eq!(target.store.board().len(), 2);
    }

    #[test]
    fn reports_skipped_duplicates() {
        let mut target = StoreFixture::new();
        let doc = br#"{"monday": [
            {"id": "1", "name": "A", "calories": 1, "type": "lunch"},
            {"id": "1", "name": "B", "calories": 1, "type": "lunch"}
        ]}"#;
        let result = import(&mut target.store, doc).unwrap();
        assert_eq!(target.store.board().len(), 1);
        assert!(result.messages[1].content.contains("1 meals"));
    }
}
