//! 业务逻辑处理 (Update/Dispatch)
//!
//! 将 Action 分发给词汇控制器，并维护选中行、焦点和提示消息

use tracing::{debug, warn};

use super::actions::Action;
use super::state::{App, AppMode, Focus, InputField, Notice};
use crate::controller::Outcome;
use crate::error::CommandError;

impl App {
    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action) -> bool {
        let mode = self.mode();
        match action {
            Action::Quit => return true,
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),

            Action::FocusForm => self.focus_form(),
            Action::StartEdit => self.start_edit(),
            Action::StartDelete => self.start_delete(),

            Action::Cancel => match mode {
                AppMode::Confirm => self.controller.cancel_delete(),
                AppMode::Typing => self.focus = Focus::Table,
                AppMode::Normal => {}
            },

            Action::Submit => match mode {
                AppMode::Typing => self.submit_form(),
                AppMode::Confirm => self.confirm_delete(),
                AppMode::Normal => {}
            },

            Action::SwitchField => {
                if mode == AppMode::Typing {
                    self.input_field = self.input_field.next();
                }
            }

            Action::Input(c) => {
                if mode == AppMode::Typing {
                    self.active_input_mut().push(c);
                }
            }

            Action::DeleteChar => {
                if mode == AppMode::Typing {
                    self.active_input_mut().pop();
                }
            }
        }
        false
    }

    // ============ 导航相关 ============

    /// 向上移动选择
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.controller.vocabulary().len() {
            self.selected_index += 1;
        }
    }

    fn select_id(&mut self, id: &str) {
        if let Some(index) = self.controller.vocabulary().position(id) {
            self.selected_index = index;
        }
    }

    // ============ 表单相关 ============

    pub fn focus_form(&mut self) {
        self.focus = Focus::Form;
        self.input_field = InputField::English;
    }

    fn active_input_mut(&mut self) -> &mut String {
        let form = self.controller.form_mut();
        match self.input_field {
            InputField::English => &mut form.english,
            InputField::Vietnamese => &mut form.vietnamese,
        }
    }

    /// 开始编辑选中的条目
    pub fn start_edit(&mut self) {
        if let Some(id) = self.selected_id() {
            if self.controller.edit(&id) {
                self.focus_form();
            }
        }
    }

    /// 提交表单（添加或保存修改）
    pub fn submit_form(&mut self) {
        match self.controller.submit() {
            Ok(outcome) => {
                if let Outcome::Added(id) = &outcome {
                    self.select_id(id);
                }
                self.input_field = InputField::English;
                self.notify(&outcome);
            }
            Err(e) => self.report(e),
        }
    }

    // ============ 删除相关 ============

    /// 打开删除确认框
    pub fn start_delete(&mut self) {
        if let Some(id) = self.selected_id() {
            self.controller.request_delete(&id);
        }
    }

    /// 执行确认删除
    pub fn confirm_delete(&mut self) {
        let result = self.controller.confirm_delete();
        self.clamp_selection();
        match result {
            Ok(outcome) => self.notify(&outcome),
            Err(e) => self.report(e),
        }
    }

    // ============ 提示消息 ============

    fn notify(&mut self, outcome: &Outcome) {
        if let Some(message) = outcome.message() {
            self.notice = Some(Notice::success(message));
        }
    }

    fn report(&mut self, error: CommandError) {
        match &error {
            CommandError::Invalid(reason) => debug!(?reason, "form rejected"),
            CommandError::Persist(source) => warn!(error = %source, "change not persisted"),
        }
        self.notice = Some(Notice::error(error.to_string()));
    }
}
