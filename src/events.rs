//! 粘贴事件模块
//!
//! # 设计思路
//!
//! 图片被落盘并粘贴时需要通知外部（如 toast 提示）。这里不依赖任何全局事件总线，
//! 而是由调用方在构造解析器时注入一个 `PasteListener`：
//! - `std::sync::mpsc::Sender<PasteEvent>`：事件进入通道，由 UI 线程消费
//! - `FnListener`：包装任意闭包
//! - `NoopListener`：不关心事件时使用
//!
//! 通知是“发出即忘”的：监听方断开或处理失败都不会影响粘贴结果。

use std::sync::mpsc::Sender;

/// 图片粘贴事件名，供宿主 UI 注册监听
pub const IMAGE_DID_PASTE_EVENT: &str = "image-did-paste";

/// 粘贴链路对外发出的事件（无负载）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteEvent {
    /// 剪贴板图片已写入临时文件并作为路径粘贴
    ImageDidPaste,
}

impl PasteEvent {
    /// 稳定的事件名
    pub fn name(self) -> &'static str {
        match self {
            Self::ImageDidPaste => IMAGE_DID_PASTE_EVENT,
        }
    }
}

/// 事件监听者
pub trait PasteListener {
    fn notify(&self, event: PasteEvent);
}

/// 丢弃全部事件
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopListener;

impl PasteListener for NoopListener {
    fn notify(&self, _event: PasteEvent) {}
}

impl PasteListener for Sender<PasteEvent> {
    fn notify(&self, event: PasteEvent) {
        if self.send(event).is_err() {
            log::debug!("事件接收端已关闭，丢弃 {}", event.name());
        }
    }
}

/// 闭包监听者
pub struct FnListener<F>(pub F);

impl<F> PasteListener for FnListener<F>
where
    F: Fn(PasteEvent),
{
    fn notify(&self, event: PasteEvent) {
        (self.0)(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::sync::mpsc;

    #[test]
    fn sender_delivers_event() {
        let (tx, rx) = mpsc::channel();
        tx.notify(PasteEvent::ImageDidPaste);
        assert_eq!(rx.try_recv().ok(), Some(PasteEvent::ImageDidPaste));
    }

    #[test]
    fn closed_channel_is_ignored() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        tx.notify(PasteEvent::ImageDidPaste);
    }

    #[test]
    fn closure_listener_is_called() {
        let hits = Cell::new(0);
        let listener = FnListener(|_: PasteEvent| hits.set(hits.get() + 1));
        listener.notify(PasteEvent::ImageDidPaste);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn event_name_is_stable() {
        assert_eq!(PasteEvent::ImageDidPaste.name(), "image-did-paste");
    }
}
