mod config;
mod controller;
mod error;
mod logging;
mod models;
mod storage;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::info;

use crate::config::Config;
use crate::controller::VocabularyController;
use crate::error::Result;
use crate::storage::{FileStorage, SlotStore, VocabularyStore};
use crate::ui::{App, render};

/// 事件轮询间隔，保证提示消息能按时消失
const TICK_RATE: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let data_dir = config::data_dir()?;
    let config = Config::load(&data_dir)?;
    logging::init(&data_dir, &config)?;

    let storage = FileStorage::new(&data_dir);
    let data_path = storage.slot_path(&config.storage_key);
    info!(path = %data_path.display(), "starting vocab-manager");

    let store: Box<dyn VocabularyStore> = Box::new(SlotStore::new(storage, &config.storage_key));
    let mut app = App::new(VocabularyController::new(store));

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("exiting");
    println!("Dữ liệu được lưu tại {}", data_path.display());

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| render(f, app))?;

        if !event::poll(TICK_RATE)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && ui::handle_key_event(app, key.code) {
                break;
            }
        }
    }
    Ok(())
}
