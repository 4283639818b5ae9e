use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 单个词汇条目（英文 - 越南文）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub id: String,
    pub english: String,
    pub vietnamese: String,
}

impl VocabularyEntry {
    pub fn new(english: String, vietnamese: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            english,
            vietnamese,
        }
    }
}

/// 运行时词汇列表（保持插入顺序）
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    entries: Vec<VocabularyEntry>,
}

impl Vocabulary {
    pub fn from_entries(entries: Vec<VocabularyEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&VocabularyEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// 查找英文单词冲突（忽略大小写），`exclude_id` 为正在编辑的条目
    pub fn find_english_conflict(
        &self,
        english: &str,
        exclude_id: Option<&str>,
    ) -> Option<&VocabularyEntry> {
        let needle = english.to_lowercase();
        self.entries.iter().find(|entry| {
            entry.english.to_lowercase() == needle && exclude_id != Some(entry.id.as_str())
        })
    }

    /// 追加新条目，返回新条目
    pub fn push(&mut self, english: String, vietnamese: String) -> &VocabularyEntry {
        let mut entry = VocabularyEntry::new(english, vietnamese);
        while self.get(&entry.id).is_some() {
            entry.id = Uuid::new_v4().to_string();
        }
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// 原地更新条目内容，id 和位置不变
    pub fn update(&mut self, id: &str, english: String, vietnamese: String) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.english = english;
                entry.vietnamese = vietnamese;
                true
            }
            None => false,
        }
    }

    /// 按 id 删除一个条目
    pub fn remove(&mut self, id: &str) -> Option<VocabularyEntry> {
        let index = self.position(id)?;
        Some(self.entries.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vocabulary {
        let mut vocabulary = Vocabulary::default();
        vocabulary.push("Hello".to_string(), "Xin chào".to_string());
        vocabulary.push("Book".to_string(), "Sách".to_string());
        vocabulary.push("Water".to_string(), "Nước".to_string());
        vocabulary
    }

    #[test]
    fn test_push_keeps_order_and_unique_ids() {
        let vocabulary = sample();
        let english: Vec<&str> = vocabulary
            .entries()
            .iter()
            .map(|e| e.english.as_str())
            .collect();
        assert_eq!(english, vec!["Hello", "Book", "Water"]);

        let ids = &vocabulary.entries();
        assert_ne!(ids[0].id, ids[1].id);
        assert_ne!(ids[1].id, ids[2].id);
        assert_ne!(ids[0].id, ids[2].id);
    }

    #[test]
    fn test_conflict_is_case_insensitive() {
        let vocabulary = sample();
        let hit = vocabulary.find_english_conflict("hELLO", None).unwrap();
        assert_eq!(hit.english, "Hello");
        assert!(vocabulary.find_english_conflict("Tree", None).is_none());
    }

    #[test]
    fn test_conflict_excludes_edited_entry() {
        let vocabulary = sample();
        let hello_id = vocabulary.entries()[0].id.clone();
        let book_id = vocabulary.entries()[1].id.clone();

        assert!(vocabulary
            .find_english_conflict("HELLO", Some(&hello_id))
            .is_none());
        assert!(vocabulary
            .find_english_conflict("hello", Some(&book_id))
            .is_some());
    }

    #[test]
    fn test_update_in_place() {
        let mut vocabulary = sample();
        let id = vocabulary.entries()[1].id.clone();

        assert!(vocabulary.update(&id, "Notebook".to_string(), "Vở".to_string()));
        assert_eq!(vocabulary.position(&id), Some(1));
        let entry = vocabulary.get(&id).unwrap();
        assert_eq!(entry.english, "Notebook");
        assert_eq!(entry.vietnamese, "Vở");

        assert!(!vocabulary.update("missing", "x".to_string(), "y".to_string()));
    }

    #[test]
    fn test_remove_only_target() {
        let mut vocabulary = sample();
        let id = vocabulary.entries()[1].id.clone();

        let removed = vocabulary.remove(&id).unwrap();
        assert_eq!(removed.english, "Book");
        assert_eq!(vocabulary.len(), 2);
        assert!(vocabulary.get(&id).is_none());
        assert_eq!(vocabulary.entries()[0].english, "Hello");
        assert_eq!(vocabulary.entries()[1].english, "Water");

        assert!(vocabulary.remove(&id).is_none());
        assert_eq!(vocabulary.len(), 2);
    }
}
