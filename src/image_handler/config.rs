//! # 配置模块
//!
//! ## 设计思路
//!
//! 将图片转换阶段的资源上限集中到 `ImageConfig`，保证超大 TIFF 不会在粘贴时
//! 占满内存。PNG 数据原样落盘，不受这些上限约束。

use crate::settings::PasteSettings;

/// 默认解码像素上限（`width * height`）。
pub const DEFAULT_MAX_DECODED_PIXELS: u64 = 40_000_000;

/// 默认解码内存上限（按 RGBA 估算，字节）。
pub const DEFAULT_MAX_DECODED_BYTES: u64 = 160 * 1024 * 1024;

/// 图片转换配置。
#[derive(Debug, Clone)]
pub struct ImageConfig {
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
    /// 解码阶段允许的预计内存上限（按 RGBA 估算，字节）。
    pub max_decoded_bytes: u64,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            max_decoded_pixels: DEFAULT_MAX_DECODED_PIXELS,
            max_decoded_bytes: DEFAULT_MAX_DECODED_BYTES,
        }
    }
}

impl From<&PasteSettings> for ImageConfig {
    fn from(settings: &PasteSettings) -> Self {
        Self {
            max_decoded_pixels: settings.max_decoded_pixels,
            max_decoded_bytes: settings.max_decoded_bytes,
        }
    }
}
