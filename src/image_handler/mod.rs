//! # 图片处理模块（image_handler）
//!
//! ## 设计思路
//!
//! 剪贴板里只有图片时，终端无法直接粘贴像素，只能粘贴一个文件路径。
//! 该模块把“取图 → 格式整理 → 落盘 → 通知”按职责拆分为多个子模块：
//!
//! - `handler`：编排整条处理流水线（`extract_image_as_tempfile`）
//! - `pipeline`：TIFF → PNG 转换、像素 / 内存上限
//! - `config/error`：配置与错误
//!
//! ## 调用链
//!
//! ```text
//! clipboard::resolver（第 3 层）
//!    ↓
//! handler.rs（取图 + 阶段耗时日志）
//!    ├─ pipeline.rs（PNG 透传 / TIFF 转 PNG）
//!    └─ storage.rs（清理旧文件 + 写入新文件）
//!    ↓
//! events.rs（ImageDidPaste）
//! ```

mod config;
mod error;
mod handler;
pub(crate) mod pipeline;

pub use config::{DEFAULT_MAX_DECODED_BYTES, DEFAULT_MAX_DECODED_PIXELS, ImageConfig};
pub use error::ImageError;
pub use handler::ImageHandler;
