//! Logging setup and helpers for keeping player input readable in logs.
//!
//! Gameplay text goes to the console; diagnostics go through `log`. When a log
//! file is configured the two never interleave on the terminal.

use std::io::Write;

use crate::config::LoggingConfig;

/// Longest slice of player input echoed into a log line.
const MAX_PREVIEW: usize = 120;

/// Escape player input for single-line logging. Control characters become
/// visible escapes and long input is cut with an ellipsis.
///
/// Only player-controlled text passes through here: command lines and room ids.
pub fn escape_log(s: &str) -> String {
    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW) + 8);
    for (count, ch) in s.chars().enumerate() {
        if count >= MAX_PREVIEW {
            out.push('…');
            break;
        }
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                use std::fmt::Write;
                let _ = write!(&mut out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

/// Map a config level name onto a filter. Unknown names fall back to `Warn`.
pub fn level_from_name(name: &str) -> log::LevelFilter {
    match name.trim().to_ascii_lowercase().as_str() {
        "off" => log::LevelFilter::Off,
        "error" => log::LevelFilter::Error,
        "warn" | "warning" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        _ => log::LevelFilter::Warn,
    }
}

/// Initialise the global logger. CLI verbosity (`-v`, `-vv`) overrides the configured level.
pub fn init_logging(config: Option<&LoggingConfig>, verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    let base_level = match verbosity {
        0 => config
            .map(|c| level_from_name(&c.level))
            .unwrap_or(log::LevelFilter::Warn),
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let log_file = config
        .and_then(|c| c.file.as_ref())
        .and_then(|path| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .ok()
        });

    if let Some(file) = log_file {
        let file = std::sync::Mutex::new(file);
        builder.format(move |_fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            if let Ok(mut guard) = file.lock() {
                let _ = writeln!(guard, "{} [{}] {}", ts, record.level(), record.args());
            }
            Ok(())
        });
    } else {
        builder.format(|fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
        });
    }
    let _ = builder.try_init();
}
