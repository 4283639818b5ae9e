//! 持久化存储
//!
//! `KeyValueStorage` 对应按键名读写文本的存储槽；
//! `VocabularyStore` 负责整个词汇列表的加载与整体覆盖保存。

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::Result;
use crate::models::VocabularyEntry;

/// 键值文本存储
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

/// 基于目录的存储，每个键对应 `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key);
        let tmp = path.with_extension("json.tmp");
        // 先写临时文件再重命名，避免留下写了一半的数据
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// 词汇列表存储接口
pub trait VocabularyStore {
    /// 加载全部条目，缺失或损坏时返回空列表
    fn load(&self) -> Vec<VocabularyEntry>;
    /// 整体覆盖保存
    fn save(&mut self, entries: &[VocabularyEntry]) -> Result<()>;
}

impl<T: VocabularyStore + ?Sized> VocabularyStore for Box<T> {
    fn load(&self) -> Vec<VocabularyEntry> {
        (**self).load()
    }

    fn save(&mut self, entries: &[VocabularyEntry]) -> Result<()> {
        (**self).save(entries)
    }
}

/// 将词汇列表以 JSON 文本存放在固定键名下
#[derive(Debug, Clone)]
pub struct SlotStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> SlotStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: KeyValueStorage> VocabularyStore for SlotStore<S> {
    fn load(&self) -> Vec<VocabularyEntry> {
        let content = match self.storage.get_item(&self.key) {
            Ok(Some(content)) => content,
            Ok(None) => {
                debug!(key = %self.key, "storage slot is empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read storage slot, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(key = %self.key, error = %e, "malformed vocabulary data, starting empty");
                Vec::new()
            }
        }
    }

    fn save(&mut self, entries: &[VocabularyEntry]) -> Result<()> {
        let content = serde_json::to_string(entries)?;
        self.storage.set_item(&self.key, &content)?;
        debug!(key = %self.key, count = entries.len(), "vocabulary saved");
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::memory::MemoryStorage;
    use super::*;

    fn entry(id: &str, english: &str, vietnamese: &str) -> VocabularyEntry {
        VocabularyEntry {
            id: id.to_string(),
            english: english.to_string(),
            vietnamese: vietnamese.to_string(),
        }
    }

    #[test]
    fn test_load_missing_slot_is_empty() {
        let store = SlotStore::new(MemoryStorage::default(), "vocabs");
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        let mut storage = MemoryStorage::default();
        storage.items.insert("vocabs".to_string(), "{not json".to_string());
        assert!(SlotStore::new(storage, "vocabs").load().is_empty());

        let mut storage = MemoryStorage::default();
        storage
            .items
            .insert("vocabs".to_string(), r#"[{"id":"1","english":"Hi"}]"#.to_string());
        assert!(SlotStore::new(storage, "vocabs").load().is_empty());

        let mut storage = MemoryStorage::default();
        storage
            .items
            .insert("vocabs".to_string(), r#"{"id":"1"}"#.to_string());
        assert!(SlotStore::new(storage, "vocabs").load().is_empty());
    }

    #[test]
    fn test_load_reads_stored_format() {
        let mut storage = MemoryStorage::default();
        storage.items.insert(
            "vocabs".to_string(),
            r#"[{"id":"1700000000000","english":"Hello","vietnamese":"Xin chào"}]"#.to_string(),
        );
        let entries = SlotStore::new(storage, "vocabs").load();
        assert_eq!(entries, vec![entry("1700000000000", "Hello", "Xin chào")]);
    }

    #[test]
    fn test_save_load_round_trip_is_idempotent() {
        let mut store = SlotStore::new(MemoryStorage::default(), "vocabs");
        let entries = vec![entry("a", "Hello", "Xin chào"), entry("b", "Book", "Sách")];

        store.save(&entries).unwrap();
        let first = store.storage().items["vocabs"].clone();

        let loaded = store.load();
        assert_eq!(loaded, entries);
        store.save(&loaded).unwrap();
        let second = store.storage().items["vocabs"].clone();

        assert_eq!(first, second);
        assert_eq!(store.storage().writes, 2);
    }

    #[test]
    fn test_file_storage_slot() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());

        assert_eq!(storage.get_item("vocabs").unwrap(), None);

        storage.set_item("vocabs", "[]").unwrap();
        assert_eq!(storage.get_item("vocabs").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("vocabs.json").exists());
        assert!(!dir.path().join("vocabs.json.tmp").exists());

        storage.set_item("vocabs", "[1]").unwrap();
        assert_eq!(storage.get_item("vocabs").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_file_backed_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let entries = vec![entry("a", "Hello", "Xin chào")];

        let mut store = SlotStore::new(FileStorage::new(dir.path()), "vocabs");
        store.save(&entries).unwrap();

        let reopened = SlotStore::new(FileStorage::new(dir.path()), "vocabs");
        assert_eq!(reopened.load(), entries);
    }
}
