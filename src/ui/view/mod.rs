//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
};

use super::state::{App, AppMode, InputField, NoticeKind};
use crate::controller::{DeleteDialog, FormMode};
use crate::models::VocabularyEntry;
use components::{render_button, render_dialog_framework, render_input_widget};
use layouts::centered_rect;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Length(3), // 表单
            Constraint::Min(5),    // 列表
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_form(frame, app, chunks[1]);
    render_table(frame, app, chunks[2]);
    render_help(frame, app, chunks[3]);

    // 渲染弹窗
    if let DeleteDialog::PendingConfirmation(entry) = app.controller.delete_dialog() {
        render_confirm_dialog(frame, entry);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("📘 Quản Lý Từ Vựng")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(40),
            Constraint::Percentage(20),
        ])
        .split(area);

    let typing = app.mode() == AppMode::Typing;
    let form = app.controller.form();

    render_input_widget(
        frame,
        chunks[0],
        "Từ tiếng Anh",
        &form.english,
        typing && app.input_field == InputField::English,
        Color::Yellow,
    );
    render_input_widget(
        frame,
        chunks[1],
        "Nghĩa tiếng Việt",
        &form.vietnamese,
        typing && app.input_field == InputField::Vietnamese,
        Color::Yellow,
    );

    let label = submit_label(&form.mode);
    let color = if typing { Color::Cyan } else { Color::Gray };
    render_button(frame, chunks[2], label, color);
}

/// 提交按钮文字随表单模式切换
fn submit_label(mode: &FormMode) -> &'static str {
    match mode {
        FormMode::Add => "+ Thêm",
        FormMode::Edit(_) => "Lưu",
    }
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let vocabulary = app.controller.vocabulary();
    let block = Block::default().title("Danh sách từ vựng").borders(Borders::ALL);

    if vocabulary.is_empty() {
        let empty = Paragraph::new("Chưa có từ vựng nào, nhấn 'a' để thêm")
            .style(Style::default().fg(Color::Gray))
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(empty, area);
        return;
    }

    let editing_id = match &app.controller.form().mode {
        FormMode::Edit(id) => Some(id.as_str()),
        FormMode::Add => None,
    };

    let rows: Vec<Row> = vocabulary
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let actions = if i == app.selected_index {
                "[e] Sửa  [d] Xóa"
            } else {
                ""
            };
            let style = if editing_id == Some(entry.id.as_str()) {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(entry.english.as_str()),
                Cell::from(entry.vietnamese.as_str()),
                Cell::from(actions),
            ])
            .style(style)
        })
        .collect();

    let header = Row::new(vec!["Từ tiếng Anh", "Nghĩa tiếng Việt", "Hành động"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(35),
            Constraint::Percentage(35),
            Constraint::Percentage(30),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED),
    );

    let mut state = TableState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.mode() {
        AppMode::Normal => "[a] Thêm  [e] Sửa  [d] Xóa  [j/k] Di chuyển  [q] Thoát",
        AppMode::Typing => "[Tab] Đổi ô  [Enter] Xác nhận  [Esc] Về danh sách",
        AppMode::Confirm => "[y] Xóa  [n] Hủy",
    };

    let mut spans = vec![Span::styled(help_text, Style::default().fg(Color::Gray))];
    if let Some(notice) = &app.notice {
        let color = match notice.kind {
            NoticeKind::Success => Color::Green,
            NoticeKind::Error => Color::Red,
        };
        spans.push(Span::raw("  |  "));
        spans.push(Span::styled(
            notice.text.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }

    let help = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

fn render_confirm_dialog(frame: &mut Frame, entry: &VocabularyEntry) {
    let area = centered_rect(50, 30, frame.area());
    let inner = render_dialog_framework(frame, area, "⚠️ Xác nhận xóa", Color::Red);

    let text = format!(
        "Bạn có chắc chắn muốn xóa từ này?\n\n{} - {}\n\n[y] Xóa  [n] Hủy",
        entry.english, entry.vietnamese
    );
    let dialog = Paragraph::new(text)
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true });
    frame.render_widget(dialog, inner);
}
