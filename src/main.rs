//! # 剪贴板粘贴解析 — 命令行入口
//!
//! 本文件仅负责日志初始化、参数解析与结果输出。
//! 解析逻辑分布在各子模块中，详见 `lib.rs` 架构文档。

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc;

use clap::Parser;
use clipboard_paste::clipboard::{ClipboardKind, ClipboardSnapshot, ContentResolver, SystemSnapshot, map_content_type};
use clipboard_paste::events::PasteEvent;
use clipboard_paste::settings::{PasteSettings, load_settings_from_path};

/// 把当前剪贴板内容解析为可直接粘贴进终端的字符串
#[derive(Debug, Parser)]
#[command(name = "clipboard-paste", version, about)]
struct Cli {
    /// 读取选区剪贴板（Linux PRIMARY）
    #[arg(long)]
    selection: bool,

    /// 临时图片目录（默认使用系统临时目录）
    #[arg(long)]
    temp_dir: Option<PathBuf>,

    /// 临时图片文件名前缀
    #[arg(long)]
    prefix: Option<String>,

    /// JSON 配置文件
    #[arg(long)]
    settings: Option<PathBuf>,

    /// 只列出剪贴板中存在的内容类别
    #[arg(long)]
    kinds: bool,

    /// 只打印 MIME 类型对应的平台格式标识
    #[arg(long, value_name = "MIME")]
    mime: Option<String>,
}

fn build_settings(cli: &Cli) -> PasteSettings {
    let mut settings = cli
        .settings
        .as_deref()
        .map(load_settings_from_path)
        .unwrap_or_default();

    if let Some(dir) = &cli.temp_dir {
        settings.temp_dir = Some(dir.to_string_lossy().into_owned());
    }
    if let Some(prefix) = &cli.prefix {
        settings.file_prefix = prefix.clone();
    }
    settings
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Some(mime) = cli.mime.as_deref() {
        println!("{}", map_content_type(mime));
        return ExitCode::SUCCESS;
    }

    let kind = if cli.selection {
        ClipboardKind::Selection
    } else {
        ClipboardKind::Standard
    };

    let snapshot = match SystemSnapshot::open(kind) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            log::error!("无法打开剪贴板: {err}");
            return ExitCode::FAILURE;
        }
    };

    if cli.kinds {
        for content_kind in snapshot.available_kinds() {
            println!("{content_kind}");
        }
        return ExitCode::SUCCESS;
    }

    let settings = build_settings(&cli);
    let (tx, rx) = mpsc::channel::<PasteEvent>();
    let resolver = ContentResolver::new(&settings, Box::new(tx));

    let resolved = resolver.resolve_opinionated_string(&snapshot);

    for event in rx.try_iter() {
        eprintln!("{}", event.name());
    }

    match resolved {
        Some(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        None => {
            log::info!("剪贴板中没有可粘贴的内容");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_settings_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "temp_dir": "/from/file", "file_prefix": "file-" }"#)
            .expect("write settings");

        let cli = Cli::parse_from([
            "clipboard-paste",
            "--settings",
            path.to_str().expect("utf-8 path"),
            "--prefix",
            "flag-",
        ]);
        let settings = build_settings(&cli);

        assert_eq!(settings.temp_dir.as_deref(), Some("/from/file"));
        assert_eq!(settings.file_prefix, "flag-");
    }

    #[test]
    fn defaults_without_flags() {
        let cli = Cli::parse_from(["clipboard-paste"]);
        assert_eq!(build_settings(&cli), PasteSettings::default());
        assert!(!cli.selection);
    }
}
