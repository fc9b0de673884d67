//! # 剪贴板粘贴解析 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │        调用方（终端输入注入 / 菜单命令 / 快捷键）          │
//! │                                                          │
//! │   resolve_opinionated_string(snapshot) → Option<String>  │
//! │   PasteListener ← ImageDidPaste（toast 等 UI 自行渲染）   │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓
//! ┌───────┴──────────────────────────────────────────────────┐
//! │                      本库 (Rust)                         │
//! │                                                          │
//! │  ┌─ clipboard ──── 快照 · 类型映射 · 分层解析 · 转义      │
//! │  │   └─ system        arboard 系统剪贴板                 │
//! │  │                                                       │
//! │  ├─ image_handler ── PNG 透传 / TIFF 转 PNG · 落盘编排    │
//! │  ├─ storage ──────── 临时文件保留命名空间（清理 + 写入）  │
//! │  ├─ events ───────── ImageDidPaste 通知                  │
//! │  ├─ settings ─────── JSON 配置                           │
//! │  └─ error ────────── AppError (统一错误类型)             │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`clipboard`] | 剪贴板快照、MIME 映射、分层解析、shell 转义 |
//! | [`image_handler`] | 剪贴板图片整理为 PNG 并落盘为临时文件 |
//! | [`storage`] | 临时目录中 `<prefix><uuid>.png` 文件的清理与写入 |
//! | [`events`] | 图片粘贴事件与可注入的监听者 |
//! | [`settings`] | 临时目录、文件前缀、解码上限等配置 |
//! | [`error`] | 统一错误类型 `AppError`，仅在内部流转 |

pub mod error;
pub mod clipboard;
pub mod events;
pub mod image_handler;
pub mod settings;
pub mod storage;
