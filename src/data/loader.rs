use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::data::codec;
use crate::error::BankError;
use crate::store::CategoryStore;

pub const DEFAULT_BANK_PATH: &str = "questions.json";

/// Reads and decodes a bank file.
pub fn load_store<P: AsRef<Path>>(path: P) -> Result<CategoryStore, BankError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let store = codec::from_json_slice(&bytes)?;

    info!(
        "Loaded {} categories ({} questions) from {}",
        store.len(),
        store.question_count(),
        path.display()
    );
    Ok(store)
}

/// Like [`load_store`], but a missing file yields an empty store.
pub fn load_store_or_default<P: AsRef<Path>>(path: P) -> Result<CategoryStore, BankError> {
    let path = path.as_ref();
    if !path.exists() {
        info!("{} does not exist, starting with an empty bank", path.display());
        return Ok(CategoryStore::new());
    }
    load_store(path)
}

/// Writes the whole store, replacing any previous file contents.
pub fn save_store<P: AsRef<Path>>(store: &CategoryStore, path: P) -> Result<(), BankError> {
    let path = path.as_ref();
    let bytes = codec::to_json_bytes(store)?;
    fs::write(path, &bytes)?;

    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Answer, Question};
    use tempfile::TempDir;

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bank.json");

        let mut store = CategoryStore::new();
        store.add_category("Math").unwrap();
        store
            .save_question("Math", Question::new("Q1", "2+2", Answer::classic("4").unwrap()))
            .unwrap();

        save_store(&store, &path).unwrap();
        assert_eq!(load_store(&path).unwrap(), store);
    }

    #[test]
    fn test_save_overwrites_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bank.json");

        let mut store = CategoryStore::new();
        store.add_category("Math").unwrap();
        store.add_category("History").unwrap();
        save_store(&store, &path).unwrap();

        store.remove_category("History").unwrap();
        save_store(&store, &path).unwrap();
        assert_eq!(load_store(&path).unwrap().category_names(), vec!["Math"]);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");

        assert!(matches!(load_store(&path), Err(BankError::Io(_))));
        assert!(load_store_or_default(&path).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bank.json");
        fs::write(&path, r#"{"Math": [{"title": "Q1"}]}"#).unwrap();

        assert!(matches!(load_store(&path), Err(BankError::Format(_))));
    }
}
