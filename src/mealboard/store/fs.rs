use super::Storage;
use crate::error::{MealError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DATA_FILENAME: &str = "meals.json";

pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(MealError::Io)?;
        }
        Ok(())
    }
}

impl Storage for FileStorage {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(self.data_file()) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(MealError::Io(e)),
        }
    }

    fn write(&self, bytes: &[u8]) -> Result<()> {
        self.ensure_dir()?;

        // Write to a sibling temp file first so a crash never leaves a torn snapshot
        let tmp_file = self.root.join(format!(".meals-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, bytes).map_err(MealError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, self.data_file()) {
            let _ = fs::remove_file(&tmp_file);
            return Err(MealError::Io(e));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_before_write_is_none() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path().join("missing"));
        assert!(storage.read().unwrap().is_none());
    }

    #[test]
    fn write_creates_dir_and_overwrites() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path().join("nested").join("board"));

        storage.write(b"{\"monday\": []}").unwrap();
        storage.write(b"{}").unwrap();

        assert_eq!(storage.read().unwrap().as_deref(), Some(&b"{}"[..]));
        let leftovers: Vec<_> = fs::read_dir(storage.root())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn failed_rename_cleans_up_temp_file() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf());
        // A non-empty directory where the data file belongs makes the rename fail.
        fs::create_dir_all(storage.data_file()).unwrap();
        fs::write(storage.data_file().join("keep"), b"x").unwrap();

        assert!(matches!(storage.write(b"{}"), Err(MealError::Io(_))));
        let leftovers: Vec<_> = fs::read_dir(storage.root())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
