//! 统一错误类型
//!
//! - `AppError`: 启动和持久化过程中的系统错误
//! - `ValidationError`: 表单校验错误，Display 即为展示给用户的提示
//! - `CommandError`: 控制器操作的失败结果

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O 错误: {0}")]
    Io(#[from] io::Error),

    #[error("无法获取用户数据目录")]
    DataDirUnavailable,

    #[error("配置文件 {path} 解析失败: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("词汇序列化失败: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("日志初始化失败: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

/// 表单校验错误（可恢复，不修改数据）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Không được để trống")]
    EmptyField,

    /// 携带已存在条目的英文单词
    #[error("Từ tiếng Anh đã tồn tại")]
    DuplicateEnglish(String),
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// 详细原因写入日志，界面只显示简短提示
    #[error("Lưu dữ liệu thất bại")]
    Persist(#[from] AppError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_are_user_facing() {
        assert_eq!(ValidationError::EmptyField.to_string(), "Không được để trống");
        assert_eq!(
            ValidationError::DuplicateEnglish("hello".to_string()).to_string(),
            "Từ tiếng Anh đã tồn tại"
        );
    }

    #[test]
    fn test_command_error_wraps_validation_transparently() {
        let err = CommandError::from(ValidationError::EmptyField);
        assert_eq!(err.to_string(), "Không được để trống");
    }
}
