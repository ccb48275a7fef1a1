//! Run logger
//!
//! Built once in `main` from `--verbose` and handed down by reference.

use std::fmt::Display;

use chrono::Local;

use crate::consts::APP_NAME;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Level {
    Debug,
    Info,
    Warn,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARNING",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Logger {
    min_level: Level,
    use_color: bool,
}

impl Logger {
    pub(crate) fn new(verbose: bool, use_color: bool) -> Self {
        Self {
            min_level: if verbose { Level::Debug } else { Level::Info },
            use_color,
        }
    }

    /// Warnings only; used by tests
    #[cfg(test)]
    pub(crate) fn quiet() -> Self {
        Self {
            min_level: Level::Warn,
            use_color: false,
        }
    }

    pub(crate) fn enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    pub(crate) fn debug(&self, msg: impl Display) {
        self.log(Level::Debug, msg);
    }

    pub(crate) fn info(&self, msg: impl Display) {
        self.log(Level::Info, msg);
    }

    pub(crate) fn warn(&self, msg: impl Display) {
        self.log(Level::Warn, msg);
    }

    fn log(&self, level: Level, msg: impl Display) {
        if self.enabled(level) {
            eprintln!("{}", format_line(level, &msg.to_string()));
        }
    }

    /// Print the file about to be downloaded, green on a terminal
    pub(crate) fn announce(&self, file_name: &str) {
        if self.use_color {
            println!("\x1b[32m{file_name}\x1b[0m");
        } else {
            println!("{file_name}");
        }
    }
}

fn format_line(level: Level, msg: &str) -> String {
    format!(
        "{} - {} - {} - {}",
        Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
        APP_NAME,
        level.as_str(),
        msg
    )
}
