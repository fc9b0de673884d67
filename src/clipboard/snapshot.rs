//! 剪贴板快照模块
//!
//! # 设计思路
//!
//! 解析器只通过 `ClipboardSnapshot` 读取剪贴板，既不拥有也不修改底层数据：
//! - 系统剪贴板由 `system::SystemSnapshot` 实现（arboard）
//! - 测试与嵌入场景使用内存实现 `MemorySnapshot`
//!
//! 系统剪贴板随时可能被其他进程覆盖，因此解析器每个层级只读取一次自己关心的内容，
//! 不假设多次读取之间内容不变。

use std::fmt;
use std::path::PathBuf;

/// 图片格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RasterFormat {
    Png,
    Tiff,
}

impl RasterFormat {
    /// 按优先级排列：PNG 无需转换，排在前面
    pub const PREFERENCE: [RasterFormat; 2] = [RasterFormat::Png, RasterFormat::Tiff];

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Tiff => "image/tiff",
        }
    }
}

/// 剪贴板内容类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    FileReferenceList,
    PlainText,
    RasterImage(RasterFormat),
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileReferenceList => f.write_str("file-references"),
            Self::PlainText => f.write_str("text/plain"),
            Self::RasterImage(format) => f.write_str(format.mime_type()),
        }
    }
}

/// 文件系统对象引用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileReference {
    /// 本地文件路径
    LocalPath(PathBuf),
    /// 非本地资源定位符（如 `https://...`），保存其规范字符串形式
    Url(String),
}

/// 剪贴板只读视图
pub trait ClipboardSnapshot {
    /// 文件引用列表；没有时返回空列表
    fn file_references(&self) -> Vec<FileReference>;

    /// 纯文本内容
    fn plain_text(&self) -> Option<String>;

    /// 指定格式的图片字节
    fn image_data(&self, format: RasterFormat) -> Option<Vec<u8>>;

    /// 当前存在的内容类别
    ///
    /// 默认实现会逐一读取全部内容，系统剪贴板上开销较大，仅用于诊断。
    fn available_kinds(&self) -> Vec<ContentKind> {
        let mut kinds = Vec::new();
        if !self.file_references().is_empty() {
            kinds.push(ContentKind::FileReferenceList);
        }
        if self.plain_text().is_some_and(|text| !text.is_empty()) {
            kinds.push(ContentKind::PlainText);
        }
        for format in RasterFormat::PREFERENCE {
            if self.image_data(format).is_some() {
                kinds.push(ContentKind::RasterImage(format));
            }
        }
        kinds
    }
}

/// 内存中的剪贴板快照
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshot {
    files: Vec<FileReference>,
    text: Option<String>,
    png: Option<Vec<u8>>,
    tiff: Option<Vec<u8>>,
}

impl MemorySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, file: FileReference) -> Self {
        self.files.push(file);
        self
    }

    pub fn with_files(mut self, files: impl IntoIterator<Item = FileReference>) -> Self {
        self.files.extend(files);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_image(mut self, format: RasterFormat, bytes: Vec<u8>) -> Self {
        match format {
            RasterFormat::Png => self.png = Some(bytes),
            RasterFormat::Tiff => self.tiff = Some(bytes),
        }
        self
    }
}

impl ClipboardSnapshot for MemorySnapshot {
    fn file_references(&self) -> Vec<FileReference> {
        self.files.clone()
    }

    fn plain_text(&self) -> Option<String> {
        self.text.clone()
    }

    fn image_data(&self, format: RasterFormat) -> Option<Vec<u8>> {
        match format {
            RasterFormat::Png => self.png.clone(),
            RasterFormat::Tiff => self.tiff.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn available_kinds_reports_everything_present() {
        let snapshot = MemorySnapshot::new()
            .with_text("hi")
            .with_image(RasterFormat::Tiff, vec![1]);

        assert_eq!(
            snapshot.available_kinds(),
            vec![ContentKind::PlainText, ContentKind::RasterImage(RasterFormat::Tiff)]
        );
        assert!(MemorySnapshot::new().available_kinds().is_empty());
    }

    #[test]
    fn empty_text_is_not_listed() {
        let snapshot = MemorySnapshot::new().with_text("");
        assert!(snapshot.available_kinds().is_empty());
    }

    #[test]
    fn content_kind_display() {
        assert_eq!(ContentKind::RasterImage(RasterFormat::Png).to_string(), "image/png");
        assert_eq!(ContentKind::FileReferenceList.to_string(), "file-references");
    }
}
