//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use std::time::{Duration, Instant};

use crate::controller::{DeleteDialog, VocabularyController};
use crate::models::VocabularyEntry;
use crate::storage::VocabularyStore;

/// 提示消息显示时长
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// 应用状态
pub struct App {
    pub controller: VocabularyController<Box<dyn VocabularyStore>>,
    pub selected_index: usize,
    pub focus: Focus,
    pub input_field: InputField,
    pub notice: Option<Notice>,
}

/// 应用模式（由焦点和删除确认状态推导）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal, // 浏览列表
    Typing, // 在表单中输入
    Confirm,
}

/// 焦点位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Table,
    Form,
}

/// 输入字段类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    English,
    Vietnamese,
}

impl InputField {
    pub fn next(self) -> Self {
        match self {
            InputField::English => InputField::Vietnamese,
            InputField::Vietnamese => InputField::English,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// 短暂显示的提示消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub shown_at: Instant,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= NOTICE_TTL
    }
}

impl App {
    /// 创建新的应用实例
    pub fn new(controller: VocabularyController<Box<dyn VocabularyStore>>) -> Self {
        Self {
            controller,
            selected_index: 0,
            focus: Focus::Table,
            input_field: InputField::English,
            notice: None,
        }
    }

    pub fn mode(&self) -> AppMode {
        if matches!(
            self.controller.delete_dialog(),
            DeleteDialog::PendingConfirmation(_)
        ) {
            return AppMode::Confirm;
        }
        match self.focus {
            Focus::Table => AppMode::Normal,
            Focus::Form => AppMode::Typing,
        }
    }

    /// 获取当前选中的条目
    pub fn selected_entry(&self) -> Option<&VocabularyEntry> {
        self.controller
            .vocabulary()
            .entries()
            .get(self.selected_index)
    }

    /// 获取当前选中的条目 ID
    pub fn selected_id(&self) -> Option<String> {
        self.selected_entry().map(|entry| entry.id.clone())
    }

    /// 确保选中索引有效
    pub fn clamp_selection(&mut self) {
        let len = self.controller.vocabulary().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// 清除过期的提示
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
        }
    }
}
