//! MIME 类型 → 平台剪贴板格式标识
//!
//! # 设计思路
//!
//! 终端侧只知道 MIME 字符串（如 `text/plain`、`image/png`），剪贴板需要的是平台
//! 格式标识（统一类型标识符，UTI）。映射分三步：
//! 1. 显式覆盖：`text/plain` 固定映射为 `public.utf8-plain-text`。通用查表会得到
//!    `public.plain-text`，并非所有读取方都接受它。
//! 2. 查询 `TypeRegistry`，命中则使用规范标识。
//! 3. 未命中时直接用原始字符串作为标识（尽力透传，不视为错误）。
//!
//! 平台类型表被抽象为 `TypeRegistry`，测试可以注入假的注册表。

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

/// 平台剪贴板格式标识
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlatformFormatId(String);

impl PlatformFormatId {
    /// 规范纯文本格式
    pub const PLAIN_TEXT: &'static str = "public.utf8-plain-text";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn plain_text() -> Self {
        Self::new(Self::PLAIN_TEXT)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlatformFormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 平台类型注册表：MIME → 规范类型标识
pub trait TypeRegistry {
    fn resolve_canonical_type(&self, mime: &str) -> Option<String>;
}

/// 内置 MIME → UTI 映射表
static BUILTIN_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("text/plain", "public.plain-text"),
        ("text/html", "public.html"),
        ("text/rtf", "public.rtf"),
        ("application/rtf", "public.rtf"),
        ("text/csv", "public.comma-separated-values-text"),
        ("text/markdown", "net.daringfireball.markdown"),
        ("text/xml", "public.xml"),
        ("application/xml", "public.xml"),
        ("text/uri-list", "public.url"),
        ("application/json", "public.json"),
        ("application/pdf", "com.adobe.pdf"),
        ("application/zip", "public.zip-archive"),
        ("image/png", "public.png"),
        ("image/tiff", "public.tiff"),
        ("image/jpeg", "public.jpeg"),
        ("image/gif", "com.compuserve.gif"),
        ("image/bmp", "com.microsoft.bmp"),
        ("image/svg+xml", "public.svg-image"),
        ("image/webp", "org.webmproject.webp"),
    ])
});

/// 基于内置映射表的注册表
///
/// 查询前去掉首尾空白并转为小写；带参数的 MIME（`;charset=...`）不做拆分，按未知处理。
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinTypeRegistry;

impl TypeRegistry for BuiltinTypeRegistry {
    fn resolve_canonical_type(&self, mime: &str) -> Option<String> {
        let key = mime.trim().to_ascii_lowercase();
        BUILTIN_TYPES.get(key.as_str()).map(|uti| (*uti).to_string())
    }
}

/// 使用内置注册表映射
pub fn map_content_type(mime: &str) -> PlatformFormatId {
    map_content_type_with(&BuiltinTypeRegistry, mime)
}

/// 使用指定注册表映射
pub fn map_content_type_with(registry: &dyn TypeRegistry, mime: &str) -> PlatformFormatId {
    if mime == "text/plain" {
        return PlatformFormatId::plain_text();
    }

    match registry.resolve_canonical_type(mime) {
        Some(canonical) => PlatformFormatId::new(canonical),
        None => {
            log::debug!("未知 MIME 类型 {:?}，按原样作为格式标识", mime);
            PlatformFormatId::new(mime)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRegistry(Option<&'static str>);

    impl TypeRegistry for FixedRegistry {
        fn resolve_canonical_type(&self, _mime: &str) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    #[test]
    fn plain_text_override_beats_registry() {
        let registry = FixedRegistry(Some("com.example.something-else"));
        assert_eq!(
            map_content_type_with(&registry, "text/plain"),
            PlatformFormatId::plain_text()
        );
        assert_eq!(map_content_type("text/plain").as_str(), "public.utf8-plain-text");
    }

    #[test]
    fn registry_hit_is_used() {
        let registry = FixedRegistry(Some("public.png"));
        assert_eq!(map_content_type_with(&registry, "image/png").as_str(), "public.png");
        assert_eq!(map_content_type("image/tiff").as_str(), "public.tiff");
    }

    #[test]
    fn registry_miss_falls_back_to_input() {
        let registry = FixedRegistry(None);
        assert_eq!(
            map_content_type_with(&registry, "bogus/not-a-type").as_str(),
            "bogus/not-a-type"
        );
    }

    #[test]
    fn builtin_lookup_is_case_insensitive() {
        assert_eq!(map_content_type("Image/PNG").as_str(), "public.png");
        assert_eq!(map_content_type(" text/html ").as_str(), "public.html");
    }

    #[test]
    fn parameterised_types_pass_through() {
        assert_eq!(
            map_content_type("text/plain;charset=utf-8").as_str(),
            "text/plain;charset=utf-8"
        );
    }
}
