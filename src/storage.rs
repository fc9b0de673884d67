//! 临时图片存储模块（保留命名空间）
//!
//! # 设计思路
//!
//! 剪贴板中只有图片时，需要把图片落盘成一个 PNG 文件再把路径交给终端。
//! 这些文件统一放在临时目录下，并使用固定前缀 `<prefix><uuid>.png` 命名，
//! 形成一个“保留命名空间”：
//! - 写入新文件前，删除命名空间内所有旧文件（后写者负责清理，无引用计数）
//! - 只识别前缀，绝不触碰临时目录中的其他文件
//!
//! # 实现思路
//!
//! - 目录由配置注入（`PasteSettings::temp_dir`），未配置时回退到系统临时目录。
//! - 目录不存在时自动 `create_dir_all`，避免上层判断。
//! - 清理是尽力而为：单个文件删除失败只记日志，不影响后续写入。
//! - “清理 + 写入”在进程内由全局互斥锁串行化，保证同一进程并发调用后
//!   命名空间内仍然只剩一个文件。跨进程竞争不做保证。

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use once_cell::sync::Lazy;

use crate::error::AppError;

/// 默认保留前缀
pub const DEFAULT_FILE_PREFIX: &str = "clipboard-paste-";

/// 临时文件扩展名
pub const ARTIFACT_EXTENSION: &str = "png";

/// 进程内“清理 + 写入”互斥锁
static NAMESPACE_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

fn lock_namespace() -> MutexGuard<'static, ()> {
    // 锁内没有需要保护的数据，中毒后直接继续使用
    NAMESPACE_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// 临时图片存储
#[derive(Debug, Clone)]
pub struct TempArtifactStore {
    dir: PathBuf,
    prefix: String,
}

impl TempArtifactStore {
    /// 使用指定目录与前缀创建存储
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
        }
    }

    /// 系统临时目录 + 默认前缀
    pub fn system_default() -> Self {
        Self::new(std::env::temp_dir(), DEFAULT_FILE_PREFIX)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// 判断文件名是否属于保留命名空间
    ///
    /// 按原始字节比较，非 UTF-8 文件名同样能被识别
    pub fn is_reserved_name(&self, file_name: &OsStr) -> bool {
        file_name.as_encoded_bytes().starts_with(self.prefix.as_bytes())
    }

    /// 生成新的全局唯一文件名
    pub fn new_artifact_name(&self) -> String {
        format!("{}{}.{}", self.prefix, uuid::Uuid::new_v4(), ARTIFACT_EXTENSION)
    }

    /// 列出命名空间内现有的文件
    pub fn list_artifacts(&self) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(&self.dir) else {
            return Vec::new();
        };

        entries
            .flatten()
            .filter(|entry| self.is_reserved_name(&entry.file_name()))
            .map(|entry| entry.path())
            .collect()
    }

    /// 删除命名空间内的全部旧文件
    ///
    /// # 返回
    /// 成功删除的条目数。单个条目删除失败只记录日志。
    pub fn purge_stale(&self) -> usize {
        let mut removed = 0;

        for path in self.list_artifacts() {
            let result = if path.is_dir() {
                fs::remove_dir_all(&path)
            } else {
                fs::remove_file(&path)
            };

            match result {
                Ok(()) => removed += 1,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    log::warn!("⚠️ 清理旧临时文件失败 '{}': {}", path.display(), e);
                }
            }
        }

        if removed > 0 {
            log::debug!("🧹 已清理 {} 个旧临时文件", removed);
        }

        removed
    }

    /// 清理旧文件后写入一个新文件
    ///
    /// # 返回
    /// - `Ok(PathBuf)` — 新文件的绝对路径
    /// - `Err(AppError)` — 目录不可用或写入失败（已写入的半成品会被删除）
    pub fn replace_with(&self, bytes: &[u8]) -> Result<PathBuf, AppError> {
        let _guard = lock_namespace();

        self.ensure_dir()?;
        self.purge_stale();

        let path = self.absolute_dir()?.join(self.new_artifact_name());
        if let Err(e) = fs::write(&path, bytes) {
            let _ = fs::remove_file(&path);
            return Err(AppError::Io(e));
        }

        log::info!("💾 已写入临时图片 {} ({} bytes)", path.display(), bytes.len());
        Ok(path)
    }

    fn ensure_dir(&self) -> Result<(), AppError> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|e| {
                AppError::Storage(format!("创建临时目录 '{}' 失败: {}", self.dir.display(), e))
            })?;
        }
        Ok(())
    }

    fn absolute_dir(&self) -> Result<PathBuf, AppError> {
        if self.dir.is_absolute() {
            return Ok(self.dir.clone());
        }
        std::path::absolute(&self.dir).map_err(|e| {
            AppError::Storage(format!("解析临时目录 '{}' 绝对路径失败: {}", self.dir.display(), e))
        })
    }
}
