//! 粘贴配置模块
//!
//! # 设计思路
//!
//! 把原本隐式的全局状态（系统临时目录、固定文件前缀、解码上限）显式建模为
//! `PasteSettings`，可从 JSON 文件加载，也可由调用方直接构造，方便测试隔离。
//!
//! # 实现思路
//!
//! - 所有字段都有默认值，JSON 中缺失的字段按默认值补齐。
//! - 配置文件不存在或解析失败时回退到默认配置，不阻塞粘贴流程。
//! - 前缀为空或包含路径分隔符时回退到默认前缀，避免清理逻辑误删整个临时目录。

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::image_handler::{DEFAULT_MAX_DECODED_BYTES, DEFAULT_MAX_DECODED_PIXELS};
use crate::storage::{DEFAULT_FILE_PREFIX, TempArtifactStore};

fn default_file_prefix() -> String {
    DEFAULT_FILE_PREFIX.to_string()
}

fn default_max_decoded_pixels() -> u64 {
    DEFAULT_MAX_DECODED_PIXELS
}

fn default_max_decoded_bytes() -> u64 {
    DEFAULT_MAX_DECODED_BYTES
}

/// 粘贴解析配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasteSettings {
    /// 临时图片目录，未设置时使用系统临时目录
    #[serde(default)]
    pub temp_dir: Option<String>,
    /// 临时图片文件名前缀
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
    #[serde(default = "default_max_decoded_pixels")]
    pub max_decoded_pixels: u64,
    #[serde(default = "default_max_decoded_bytes")]
    pub max_decoded_bytes: u64,
}

impl Default for PasteSettings {
    fn default() -> Self {
        Self {
            temp_dir: None,
            file_prefix: default_file_prefix(),
            max_decoded_pixels: DEFAULT_MAX_DECODED_PIXELS,
            max_decoded_bytes: DEFAULT_MAX_DECODED_BYTES,
        }
    }
}

impl PasteSettings {
    /// 实际生效的临时目录
    pub fn resolved_temp_dir(&self) -> PathBuf {
        match self.temp_dir.as_deref() {
            Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => std::env::temp_dir(),
        }
    }

    /// 实际生效的文件前缀
    pub fn resolved_file_prefix(&self) -> &str {
        let prefix = self.file_prefix.as_str();
        if prefix.is_empty() || prefix.contains(['/', '\\']) {
            log::warn!("⚠️ 无效的临时文件前缀 {:?}，使用默认前缀", prefix);
            return DEFAULT_FILE_PREFIX;
        }
        prefix
    }

    /// 按配置构建临时图片存储
    pub fn artifact_store(&self) -> TempArtifactStore {
        TempArtifactStore::new(self.resolved_temp_dir(), self.resolved_file_prefix())
    }
}

/// 从 JSON 文件加载配置，失败时回退默认值
pub fn load_settings_from_path(path: &Path) -> PasteSettings {
    if !path.exists() {
        return PasteSettings::default();
    }

    let parsed = fs::read_to_string(path)
        .map_err(AppError::from)
        .and_then(|content| {
            serde_json::from_str::<PasteSettings>(&content)
                .map_err(|e| AppError::Settings(format!("解析配置文件失败: {}", e)))
        });

    match parsed {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("⚠️ 读取配置 '{}' 失败，使用默认配置: {}", path.display(), err);
            PasteSettings::default()
        }
    }
}

/// 以格式化 JSON 写入配置
pub fn save_settings_to_path(path: &Path, settings: &PasteSettings) -> Result<(), AppError> {
    let content = serde_json::to_string_pretty(settings)
        .map_err(|e| AppError::Settings(format!("序列化配置失败: {}", e)))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, content)?;
    Ok(())
}
