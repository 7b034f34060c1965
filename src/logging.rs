//! Console Logging
//!
//! `tracing-subscriber` fmt output forwarded line by line to the browser
//! console. No timestamps (`SystemTime` is unavailable on wasm32).

use std::io;

use tracing::Level;

/// Console method a formatted line goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleMethod {
    Error,
    Warn,
    Log,
    Debug,
}

fn console_method(line: &str) -> ConsoleMethod {
    match line.split_whitespace().next() {
        Some("ERROR") => ConsoleMethod::Error,
        Some("WARN") => ConsoleMethod::Warn,
        Some("DEBUG") | Some("TRACE") => ConsoleMethod::Debug,
        _ => ConsoleMethod::Log,
    }
}

/// Drain the buffer into one line without the trailing newline
fn take_line(buf: &mut Vec<u8>) -> Option<String> {
    let line = String::from_utf8_lossy(buf).trim_end().to_string();
    buf.clear();
    if line.is_empty() {
        None
    } else {
        Some(line)
    }
}

/// Collects one formatted event and emits it on drop
#[derive(Default)]
struct ConsoleWriter {
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(line) = take_line(&mut self.buf) {
            let value = wasm_bindgen::JsValue::from(line.as_str());
            match console_method(&line) {
                ConsoleMethod::Error => web_sys::console::error_1(&value),
                ConsoleMethod::Warn => web_sys::console::warn_1(&value),
                ConsoleMethod::Log => web_sys::console::log_1(&value),
                ConsoleMethod::Debug => web_sys::console::debug_1(&value),
            }
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}

/// Install the global subscriber at `level` (unknown names mean `info`)
pub fn init(level: &str) {
    let level = level.parse::<Level>().unwrap_or(Level::INFO);
    let result = tracing_subscriber::fmt()
        .with_ansi(false)
        .without_time()
        .with_max_level(level)
        .with_writer(ConsoleWriter::default)
        .try_init();
    if let Err(err) = result {
        web_sys::console::warn_1(&format!("logging already initialised: {}", err).into());
    }
}
