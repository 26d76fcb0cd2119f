//! Colored stderr backend for the `log` facade.
use std::io::{self, Write};

use log::{Level, LevelFilter, Log, Metadata, Record};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::error::{DemoError, DemoResult};

/// Structured form of a log record, captured before rendering.
#[derive(Debug, Clone)]
pub struct LogMessage {
    pub level: Level,
    pub timepoint: chrono::NaiveDateTime,
    pub message: String,
    pub module: String,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub thread_name: Option<String>,
}

impl LogMessage {
    pub fn from_record(record: &Record<'_>) -> Self {
        Self {
            level: record.level(),
            timepoint: chrono::Local::now().naive_local(),
            message: record.args().to_string(),
            module: record.module_path().unwrap_or("<unknown>").to_string(),
            file: record.file().map(|s| s.to_string()),
            line: record.line(),
            thread_name: std::thread::current().name().map(|s| s.to_string()),
        }
    }

    pub fn write_to(&self, out: &mut impl WriteColor) -> io::Result<()> {
        write!(out, "[{} ", self.timepoint.format("%Y-%m-%d %H:%M:%S%.3f"))?;
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(level_color(self.level))).set_bold(true);
        out.set_color(&spec)?;
        write!(out, "{:<5}", self.level)?;
        out.reset()?;
        write!(out, " {}", self.module)?;
        if let Some(thread) = &self.thread_name {
            write!(out, " ({thread})")?;
        }
        if let (Some(file), Some(line)) = (&self.file, self.line) {
            write!(out, " {file}:{line}")?;
        }
        writeln!(out, "] {}", self.message)
    }
}

fn level_color(level: Level) -> Color {
    match level {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Info => Color::Green,
        Level::Debug => Color::Blue,
        Level::Trace => Color::Magenta,
    }
}

/// Map the number of `-v` flags to a level filter.
pub fn level_from_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub struct TermLogger {
    level: LevelFilter,
    color: ColorChoice,
}

impl TermLogger {
    pub fn new(level: LevelFilter, color: ColorChoice) -> Self {
        Self { level, color }
    }

    /// Install as the global logger. Fails if a logger is already set.
    pub fn install(self) -> DemoResult<()> {
        let level = self.level;
        log::set_logger(Box::leak(Box::new(self)))
            .map_err(|e| DemoError::Logger(e.to_string()))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for TermLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = LogMessage::from_record(record);
        let mut stderr = StandardStream::stderr(self.color);
        // Nowhere left to report a failing stderr.
        let _ = message.write_to(&mut stderr);
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}
