//! 词汇列表控制器
//!
//! 持有词汇列表、存储、表单与删除确认状态。
//! 每次成功修改列表后立即整体写回存储。

use tracing::{error, info};

use crate::error::{CommandError, ValidationError};
use crate::models::{Vocabulary, VocabularyEntry};
use crate::storage::VocabularyStore;

/// 表单模式
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Add,
    Edit(String), // 正在编辑的条目 ID
}

/// 表单状态
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Form {
    pub english: String,
    pub vietnamese: String,
    pub mode: FormMode,
}

impl Form {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// 删除确认状态
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeleteDialog {
    #[default]
    Idle,
    PendingConfirmation(VocabularyEntry),
}

/// 操作结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(String),
    Updated(String),
    Deleted(String),
    Dismissed,
}

impl Outcome {
    /// 成功提示
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Outcome::Added(_) => Some("Thêm thành công"),
            Outcome::Updated(_) => Some("Cập nhật thành công"),
            Outcome::Deleted(_) => Some("Xóa thành công"),
            Outcome::Dismissed => None,
        }
    }
}

pub struct VocabularyController<S> {
    vocabulary: Vocabulary,
    store: S,
    form: Form,
    delete_dialog: DeleteDialog,
}

impl<S: VocabularyStore> VocabularyController<S> {
    /// 从存储加载词汇列表
    pub fn new(store: S) -> Self {
        let vocabulary = Vocabulary::from_entries(store.load());
        info!(count = vocabulary.len(), "vocabulary loaded");
        Self {
            vocabulary,
            store,
            form: Form::default(),
            delete_dialog: DeleteDialog::Idle,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    /// 供输入框直接修改文本
    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    pub fn delete_dialog(&self) -> &DeleteDialog {
        &self.delete_dialog
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    // ============ 添加/编辑 ============

    /// 提交表单：添加模式下新增，编辑模式下提交修改
    pub fn submit(&mut self) -> Result<Outcome, CommandError> {
        match self.form.mode.clone() {
            FormMode::Add => self.add(),
            FormMode::Edit(id) => self.commit_edit(&id),
        }
    }

    fn add(&mut self) -> Result<Outcome, CommandError> {
        let (english, vietnamese) = self.validated_input(None)?;
        let id = self.vocabulary.push(english, vietnamese).id.clone();
        self.form.reset();
        info!(%id, "entry added");
        self.persist()?;
        Ok(Outcome::Added(id))
    }

    fn commit_edit(&mut self, id: &str) -> Result<Outcome, CommandError> {
        let (english, vietnamese) = self.validated_input(Some(id))?;
        self.vocabulary.update(id, english, vietnamese);
        self.form.reset();
        info!(%id, "entry updated");
        self.persist()?;
        Ok(Outcome::Updated(id.to_string()))
    }

    /// 进入编辑模式，不修改列表
    pub fn edit(&mut self, id: &str) -> bool {
        let Some(entry) = self.vocabulary.get(id) else {
            return false;
        };
        self.form = Form {
            english: entry.english.clone(),
            vietnamese: entry.vietnamese.clone(),
            mode: FormMode::Edit(entry.id.clone()),
        };
        true
    }

    fn validated_input(&self, editing: Option<&str>) -> Result<(String, String), ValidationError> {
        let english = self.form.english.trim();
        let vietnamese = self.form.vietnamese.trim();

        if english.is_empty() || vietnamese.is_empty() {
            return Err(ValidationError::EmptyField);
        }
        if let Some(existing) = self.vocabulary.find_english_conflict(english, editing) {
            return Err(ValidationError::DuplicateEnglish(existing.english.clone()));
        }

        Ok((english.to_string(), vietnamese.to_string()))
    }

    // ============ 删除 ============

    /// 标记待删除并打开确认框
    pub fn request_delete(&mut self, id: &str) -> bool {
        match self.vocabulary.get(id) {
            Some(entry) => {
                self.delete_dialog = DeleteDialog::PendingConfirmation(entry.clone());
                true
            }
            None => false,
        }
    }

    /// 确认删除；没有待删除条目时仅关闭确认框
    pub fn confirm_delete(&mut self) -> Result<Outcome, CommandError> {
        let pending = std::mem::take(&mut self.delete_dialog);
        let DeleteDialog::PendingConfirmation(entry) = pending else {
            return Ok(Outcome::Dismissed);
        };

        if self.vocabulary.remove(&entry.id).is_none() {
            return Ok(Outcome::Dismissed);
        }
        // 删除正在编辑的条目时回到添加模式
        if self.form.mode == FormMode::Edit(entry.id.clone()) {
            self.form.reset();
        }
        info!(id = %entry.id, "entry deleted");
        self.persist()?;
        Ok(Outcome::Deleted(entry.id))
    }

    pub fn cancel_delete(&mut self) {
        self.delete_dialog = DeleteDialog::Idle;
    }

    fn persist(&mut self) -> Result<(), CommandError> {
        self.store
            .save(self.vocabulary.entries())
            .inspect_err(|e| error!(error = %e, "failed to save vocabulary"))?;
        Ok(())
    }
}
