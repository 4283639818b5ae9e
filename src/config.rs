//! 配置
//!
//! 数据目录固定为 `~/.local/share/vocab-manager/`，
//! 其中可选的 `config.toml` 用于覆盖默认值。

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::error::{AppError, Result};

pub const APP_DIR_NAME: &str = "vocab-manager";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 词汇列表的存储键名
    pub storage_key: String,
    /// 未设置 RUST_LOG 时使用的日志级别
    pub log_level: String,
    /// 日志文件名（位于数据目录下）
    pub log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: "vocabs".to_string(),
            log_level: "info".to_string(),
            log_file: "vocab-manager.log".to_string(),
        }
    }
}

impl Config {
    /// 从数据目录读取配置，文件不存在时使用默认值
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config = toml::from_str(&content).map_err(|source| AppError::Config {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "config loaded");
        Ok(config)
    }
}

/// 获取数据目录路径 (~/.local/share/vocab-manager/)
pub fn data_dir() -> Result<PathBuf> {
    let dir = dirs::data_dir()
        .ok_or(AppError::DataDirUnavailable)?
        .join(APP_DIR_NAME);

    fs::create_dir_all(&dir)?;

    Ok(dir)
}
