//! 剪贴板内容解析器
//!
//! # 设计思路
//!
//! 把多格式剪贴板解析为“一段可直接粘贴进终端的字符串”。解析按层级进行，
//! 每一层是一个独立的 `ResolveStrategy`，前一层完整尝试且没有结果时才进入下一层：
//!
//! 1. 文件引用：本地路径做 shell 转义，其余引用原样输出，用单个空格连接
//! 2. 纯文本：原样输出，不转义
//! 3. 图片：落盘为临时 PNG，输出转义后的路径
//!
//! 所有层级都没有结果时返回 `None`，这是正常情况（剪贴板为空或格式不支持）。
//!
//! # 实现思路
//!
//! - 层级顺序固定在 `ContentResolver::new` 中，驱动逻辑只做“第一个 `Some` 胜出”。
//! - 各层级可以单独构造和测试。
//! - 返回的字符串保证非空。

use crate::events::PasteListener;
use crate::image_handler::{ImageConfig, ImageHandler};
use crate::settings::PasteSettings;

use super::shell::shell_escape;
use super::snapshot::{ClipboardSnapshot, FileReference};

/// 单个解析层级
pub trait ResolveStrategy {
    /// 层级名称（用于日志）
    fn name(&self) -> &'static str;

    fn resolve(&self, snapshot: &dyn ClipboardSnapshot) -> Option<String>;
}

/// 第 1 层：文件引用
#[derive(Debug, Default, Clone, Copy)]
pub struct FileReferenceTier;

impl FileReferenceTier {
    fn render(reference: &FileReference) -> String {
        match reference {
            FileReference::LocalPath(path) => shell_escape(&path.to_string_lossy()),
            FileReference::Url(url) => url.clone(),
        }
    }
}

impl ResolveStrategy for FileReferenceTier {
    fn name(&self) -> &'static str {
        "file-references"
    }

    fn resolve(&self, snapshot: &dyn ClipboardSnapshot) -> Option<String> {
        let references = snapshot.file_references();
        if references.is_empty() {
            return None;
        }

        let joined = references
            .iter()
            .map(Self::render)
            .collect::<Vec<_>>()
            .join(" ");

        // 唯一的引用渲染为空串时才继续下一层，保证返回值非空
        if joined.is_empty() {
            log::warn!("⚠️ 剪贴板中的文件引用为空，继续尝试下一层");
            return None;
        }

        Some(joined)
    }
}

/// 第 2 层：纯文本
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextTier;

impl ResolveStrategy for PlainTextTier {
    fn name(&self) -> &'static str {
        "plain-text"
    }

    fn resolve(&self, snapshot: &dyn ClipboardSnapshot) -> Option<String> {
        snapshot.plain_text().filter(|text| !text.is_empty())
    }
}

/// 第 3 层：图片
pub struct RasterImageTier {
    handler: ImageHandler,
}

impl RasterImageTier {
    pub fn new(handler: ImageHandler) -> Self {
        Self { handler }
    }
}

impl ResolveStrategy for RasterImageTier {
    fn name(&self) -> &'static str {
        "raster-image"
    }

    fn resolve(&self, snapshot: &dyn ClipboardSnapshot) -> Option<String> {
        self.handler.extract_image_as_tempfile(snapshot)
    }
}

/// 剪贴板内容解析器
pub struct ContentResolver {
    tiers: Vec<Box<dyn ResolveStrategy>>,
}

impl ContentResolver {
    /// 按配置构建解析器，图片粘贴事件发送给 `listener`
    pub fn new(settings: &PasteSettings, listener: Box<dyn PasteListener>) -> Self {
        let handler = ImageHandler::new(ImageConfig::from(settings), settings.artifact_store(), listener);
        Self::with_tiers(vec![
            Box::new(FileReferenceTier),
            Box::new(PlainTextTier),
            Box::new(RasterImageTier::new(handler)),
        ])
    }

    /// 使用自定义层级（按给定顺序尝试）
    pub fn with_tiers(tiers: Vec<Box<dyn ResolveStrategy>>) -> Self {
        Self { tiers }
    }

    /// 解析剪贴板，返回第一个有结果的层级的输出
    pub fn resolve_opinionated_string(&self, snapshot: &dyn ClipboardSnapshot) -> Option<String> {
        for tier in &self.tiers {
            if let Some(resolved) = tier.resolve(snapshot) {
                log::debug!("📋 剪贴板解析命中层级: {}", tier.name());
                return Some(resolved);
            }
        }

        log::debug!("📋 剪贴板中没有可粘贴的内容");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{MemorySnapshot, RasterFormat};
    use crate::events::NoopListener;
    use std::cell::Cell;
    use std::path::PathBuf;
    use std::rc::Rc;

    struct CountingTier {
        hits: Rc<Cell<u32>>,
        output: Option<&'static str>,
    }

    impl ResolveStrategy for CountingTier {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn resolve(&self, _snapshot: &dyn ClipboardSnapshot) -> Option<String> {
            self.hits.set(self.hits.get() + 1);
            self.output.map(str::to_string)
        }
    }

    #[test]
    fn local_paths_are_escaped_and_urls_are_not() {
        let snapshot = MemorySnapshot::new()
            .with_file(FileReference::LocalPath(PathBuf::from("/Users/a/My File.txt")))
            .with_file(FileReference::Url("https://example.com/a?b=c&d".to_string()));

        assert_eq!(
            FileReferenceTier.resolve(&snapshot).as_deref(),
            Some("/Users/a/My\\ File.txt https://example.com/a?b=c&d")
        );
    }

    #[test]
    fn empty_reference_list_falls_through() {
        assert!(FileReferenceTier.resolve(&MemorySnapshot::new()).is_none());
    }

    #[test]
    fn empty_joined_rendering_falls_through() {
        let snapshot = MemorySnapshot::new()
            .with_file(FileReference::Url(String::new()))
            .with_text("fallback");
        let resolver = ContentResolver::with_tiers(vec![Box::new(FileReferenceTier), Box::new(PlainTextTier)]);

        assert_eq!(resolver.resolve_opinionated_string(&snapshot).as_deref(), Some("fallback"));
    }

    #[test]
    fn empty_items_keep_their_separators() {
        let snapshot = MemorySnapshot::new()
            .with_file(FileReference::Url(String::new()))
            .with_file(FileReference::LocalPath(PathBuf::from("/a b")))
            .with_text("ignored");

        assert_eq!(FileReferenceTier.resolve(&snapshot).as_deref(), Some(" /a\\ b"));
    }

    #[test]
    fn several_empty_items_still_short_circuit() {
        let snapshot = MemorySnapshot::new()
            .with_files([FileReference::Url(String::new()), FileReference::Url(String::new())])
            .with_text("ignored");
        let resolver = ContentResolver::with_tiers(vec![Box::new(FileReferenceTier), Box::new(PlainTextTier)]);

        assert_eq!(resolver.resolve_opinionated_string(&snapshot).as_deref(), Some(" "));
    }

    #[test]
    fn empty_text_is_not_a_result() {
        let snapshot = MemorySnapshot::new().with_text("");
        assert!(PlainTextTier.resolve(&snapshot).is_none());
    }

    #[test]
    fn first_some_wins_and_later_tiers_are_skipped() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let third = Rc::new(Cell::new(0));
        let resolver = ContentResolver::with_tiers(vec![
            Box::new(CountingTier { hits: Rc::clone(&first), output: None }),
            Box::new(CountingTier { hits: Rc::clone(&second), output: Some("second") }),
            Box::new(CountingTier { hits: Rc::clone(&third), output: Some("third") }),
        ]);

        let resolved = resolver.resolve_opinionated_string(&MemorySnapshot::new());
        assert_eq!(resolved.as_deref(), Some("second"));
        assert_eq!((first.get(), second.get(), third.get()), (1, 1, 0));
    }

    #[test]
    fn text_wins_over_image() {
        let dir = tempfile::tempdir().expect("temp dir");
        let settings = PasteSettings {
            temp_dir: Some(dir.path().to_string_lossy().into_owned()),
            ..PasteSettings::default()
        };
        let resolver = ContentResolver::new(&settings, Box::new(NoopListener));
        let snapshot = MemorySnapshot::new()
            .with_text("a b")
            .with_image(RasterFormat::Png, b"png".to_vec());

        assert_eq!(resolver.resolve_opinionated_string(&snapshot).as_deref(), Some("a b"));
        assert!(settings.artifact_store().list_artifacts().is_empty());
    }
}
