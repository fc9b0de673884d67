//! 系统剪贴板快照（arboard）
//!
//! # 设计思路
//!
//! 通过 `arboard` 读取操作系统剪贴板，实现 `ClipboardSnapshot`：
//! - 文件列表 → `FileReference::LocalPath`
//! - 文本 → 纯文本
//! - 图片：arboard 只提供 RGBA 像素，这里按需编码为 PNG 暴露；TIFF 不单独提供
//!
//! 除标准剪贴板外还支持“选区”剪贴板（Linux PRIMARY selection）。
//! 其他平台没有对应概念，打开选区剪贴板会直接返回错误。
//!
//! # 实现思路
//!
//! - 每个访问器各自读取一次，读取失败（包括“内容不可用”）一律视为不存在。
//! - `arboard::Clipboard` 需要 `&mut`，用 `RefCell` 包装以满足只读视图接口；
//!   快照本身只在单线程中使用。

use std::cell::RefCell;

use crate::error::AppError;
use crate::image_handler::pipeline::encode_rgba_as_png;

use super::snapshot::{ClipboardSnapshot, FileReference, RasterFormat};

/// 剪贴板种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipboardKind {
    /// 标准剪贴板（复制 / 粘贴）
    #[default]
    Standard,
    /// 选区剪贴板（选中即复制）
    Selection,
}

/// 系统剪贴板的只读视图
pub struct SystemSnapshot {
    clipboard: RefCell<arboard::Clipboard>,
    kind: ClipboardKind,
}

impl SystemSnapshot {
    /// 打开指定种类的系统剪贴板
    ///
    /// # 返回
    /// - `Err(AppError::Clipboard)` — 无法访问剪贴板，或当前平台不支持选区剪贴板
    pub fn open(kind: ClipboardKind) -> Result<Self, AppError> {
        if kind == ClipboardKind::Selection && !cfg!(target_os = "linux") {
            return Err(AppError::Clipboard("当前平台不支持选区剪贴板".to_string()));
        }

        let clipboard = arboard::Clipboard::new().map_err(|e| AppError::Clipboard(e.to_string()))?;
        Ok(Self {
            clipboard: RefCell::new(clipboard),
            kind,
        })
    }

    pub fn kind(&self) -> ClipboardKind {
        self.kind
    }

    fn read<T>(
        &self,
        what: &str,
        op: impl FnOnce(arboard::Get<'_>) -> Result<T, arboard::Error>,
    ) -> Option<T> {
        let mut clipboard = self.clipboard.borrow_mut();
        let request = clipboard.get();

        #[cfg(target_os = "linux")]
        let request = {
            use arboard::{GetExtLinux, LinuxClipboardKind};
            match self.kind {
                ClipboardKind::Standard => request.clipboard(LinuxClipboardKind::Clipboard),
                ClipboardKind::Selection => request.clipboard(LinuxClipboardKind::Primary),
            }
        };

        match op(request) {
            Ok(value) => Some(value),
            Err(arboard::Error::ContentNotAvailable) => None,
            Err(e) => {
                log::debug!("读取剪贴板{}失败: {}", what, e);
                None
            }
        }
    }
}

impl ClipboardSnapshot for SystemSnapshot {
    fn file_references(&self) -> Vec<FileReference> {
        self.read("文件列表", |get| get.file_list())
            .unwrap_or_default()
            .into_iter()
            .map(FileReference::LocalPath)
            .collect()
    }

    fn plain_text(&self) -> Option<String> {
        self.read("文本", |get| get.text())
    }

    fn image_data(&self, format: RasterFormat) -> Option<Vec<u8>> {
        if format != RasterFormat::Png {
            return None;
        }

        let image = self.read("图片", |get| get.image())?;
        let width = u32::try_from(image.width).ok()?;
        let height = u32::try_from(image.height).ok()?;

        match encode_rgba_as_png(width, height, image.bytes.into_owned()) {
            Ok(png) => Some(png),
            Err(err) => {
                log::warn!("⚠️ 剪贴板图片编码为 PNG 失败: {}", err);
                None
            }
        }
    }
}
