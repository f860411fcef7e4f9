//! Logging configuration.
//!
//! - Development: Debug level, output to the Webview console
//! - Production: Info level, output to the platform log dir + stdout

use log::LevelFilter;
use tauri_plugin_log::{Target, TargetKind, TimezoneStrategy};

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Create the logging builder for the current build environment.
///
/// Returns a builder that can be passed to `.plugin()` in the Tauri
/// builder.
pub fn get_builder() -> tauri_plugin_log::Builder {
    let is_dev = is_development();
    let default_log_level = if is_dev {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = tauri_plugin_log::Builder::new()
        .timezone_strategy(TimezoneStrategy::UseLocal)
        .level(default_log_level)
        // Skip tauri internal event logs and wry (WebView) noise.
        // The Webview target re-emits via log://log events, so letting
        // those through would trigger themselves.
        .filter(move |metadata| {
            let is_basic_noise = metadata.target().starts_with("tauri::")
                || metadata.target().contains("tauri-")
                || metadata.target().starts_with("wry::");

            if is_dev {
                // Keep ipc::request logs for debugging in development
                !is_basic_noise
            } else {
                !is_basic_noise && !metadata.target().contains("ipc::request")
            }
        })
        .format(move |out, message, record| {
            // Format: 2026-08-23 10:30:45.123 INFO [catalog.rs:72] [vf_app::catalog] added project ...
            let uses_ansi = !is_dev;
            let (level_color, reset) = if uses_ansi {
                (
                    match record.level() {
                        log::Level::Error => "\x1b[31;1m",
                        log::Level::Warn => "\x1b[33m",
                        log::Level::Info => "\x1b[32m",
                        log::Level::Debug => "\x1b[34m",
                        log::Level::Trace => "\x1b[36m",
                    },
                    "\x1b[0m",
                )
            } else {
                ("", "")
            };

            let file = record.file().unwrap_or("unknown");
            let line = record.line().unwrap_or(0);
            let target = record.target();

            out.finish(format_args!(
                "{} {}{} [{}:{}] [{}] {}{}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                level_color,
                record.level(),
                file,
                line,
                target,
                message,
                reset
            ))
        });

    if is_dev {
        builder = builder.target(Target::new(TargetKind::Webview));
    } else {
        builder = builder
            .target(Target::new(TargetKind::LogDir {
                file_name: Some("vizfolio.log".to_string()),
            }))
            .target(Target::new(TargetKind::Stdout));
    }

    builder
}
