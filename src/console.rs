//! Logging to the browser console.
//!
//! [`WasmLog`] forwards [`log`] records to `console.*`, prefixing every
//! message with its level in a per-level colour.

use std::sync::Once;
use web_sys::console;

static LOGGER: WasmLog = WasmLog;
static INIT: Once = Once::new();

/// A [`log::Log`] implementation backed by `web_sys::console`.
#[derive(Debug, Default)]
pub struct WasmLog;

impl log::Log for WasmLog {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let (name, color) = level_style(record.level());
        let msg = format!("%c{}\t{}", name, record.args()).into();
        let color = color.into();
        match record.level() {
            log::Level::Error => console::error_2(&msg, &color),
            log::Level::Warn => console::warn_2(&msg, &color),
            log::Level::Info => console::info_2(&msg, &color),
            log::Level::Debug | log::Level::Trace => console::log_2(&msg, &color),
        }
    }

    fn flush(&self) {}
}

/// Returns the label and CSS colour used for a level.
fn level_style(level: log::Level) -> (&'static str, &'static str) {
    match level {
        log::Level::Trace => ("trace", "color:plum"),
        log::Level::Debug => ("debug", "color:cyan"),
        log::Level::Info => ("info", "color:mediumseagreen"),
        log::Level::Warn => ("warn", "color:goldenrod"),
        log::Level::Error => ("error", "color:red"),
    }
}

/// Installs [`WasmLog`] as the global logger and routes panics to the console.
///
/// Only the first call has an effect.
pub fn init(level: log::LevelFilter) {
    INIT.call_once(|| {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level);
        }
    });
}
