//! 剪贴板解析模块
//!
//! # 设计思路
//!
//! 统一管理“剪贴板 → 终端输入”的核心能力：
//! - **快照**：`ClipboardSnapshot` 只读视图，系统剪贴板与内存实现可互换
//! - **类型映射**：MIME 字符串 → 平台格式标识，未知类型透传
//! - **解析**：文件引用 > 纯文本 > 图片，逐层尝试，第一个结果胜出
//! - **转义**：只对本地文件路径做 shell 转义
//!
//! # 实现思路
//!
//! - 解析器从不写剪贴板，只读取快照；图片落盘由 `image_handler` 负责。
//! - 所有失败都在本模块内降级为 `None`，对外不暴露错误。
//! - 子模块按职责拆分：映射归 `type_mapper`，层级归 `resolver`，系统读取归 `system`。

mod resolver;
mod shell;
mod snapshot;
mod system;
mod type_mapper;

pub use resolver::{
    ContentResolver,
    FileReferenceTier,
    PlainTextTier,
    RasterImageTier,
    ResolveStrategy,
};
pub use shell::{ESCAPE_CHARACTERS, shell_escape};
pub use snapshot::{ClipboardSnapshot, ContentKind, FileReference, MemorySnapshot, RasterFormat};
pub use system::{ClipboardKind, SystemSnapshot};
pub use type_mapper::{
    BuiltinTypeRegistry,
    PlatformFormatId,
    TypeRegistry,
    map_content_type,
    map_content_type_with,
};
