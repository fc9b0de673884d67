//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `ImageHandler` 只负责流程编排，处理链路固定为：
//! 1. 按 PNG → TIFF 的固定顺序取第一份图片数据
//! 2. 整理为 PNG 字节（TIFF 需转换，失败即视为“无图片”）
//! 3. 清理保留命名空间并写入新文件
//! 4. 通知监听者，返回转义后的路径
//!
//! 任何一步失败都只记录日志并返回 `None`：粘贴动作不能因为一份坏数据而失败，
//! 调用方也没有可执行的恢复手段。写入失败时不会回头尝试另一种图片格式。

use std::time::Instant;

use crate::clipboard::{ClipboardSnapshot, RasterFormat, shell_escape};
use crate::error::AppError;
use crate::events::{PasteEvent, PasteListener};
use crate::storage::TempArtifactStore;

use super::ImageConfig;
use super::pipeline::normalize_to_png;

/// 图片提取器
pub struct ImageHandler {
    config: ImageConfig,
    store: TempArtifactStore,
    listener: Box<dyn PasteListener>,
}

impl ImageHandler {
    pub fn new(config: ImageConfig, store: TempArtifactStore, listener: Box<dyn PasteListener>) -> Self {
        Self {
            config,
            store,
            listener,
        }
    }

    pub fn store(&self) -> &TempArtifactStore {
        &self.store
    }

    /// 把剪贴板图片保存为临时 PNG 文件并返回转义后的路径
    ///
    /// # 返回
    /// - `Some(path)`：文件已写入，监听者已收到 `ImageDidPaste`
    /// - `None`：没有图片、转换失败或写入失败
    pub fn extract_image_as_tempfile(&self, snapshot: &dyn ClipboardSnapshot) -> Option<String> {
        let (format, bytes) = RasterFormat::PREFERENCE
            .into_iter()
            .find_map(|format| snapshot.image_data(format).map(|bytes| (format, bytes)))?;

        match self.save_as_tempfile(format, bytes) {
            Ok(escaped) => Some(escaped),
            Err(err) => {
                log::warn!("⚠️ 剪贴板图片（{}）未能粘贴: {}", format.mime_type(), err);
                None
            }
        }
    }

    fn save_as_tempfile(&self, format: RasterFormat, bytes: Vec<u8>) -> Result<String, AppError> {
        let started = Instant::now();
        let input_len = bytes.len();

        let png = normalize_to_png(format, bytes, &self.config)?;
        let path = self.store.replace_with(&png)?;

        self.listener.notify(PasteEvent::ImageDidPaste);

        log::info!(
            "🖼️ 剪贴板图片已落盘 - 来源: {} 输入: {} bytes 耗时: {}ms",
            format.mime_type(),
            input_len,
            started.elapsed().as_millis()
        );

        Ok(shell_escape(&path.to_string_lossy()))
    }
}
