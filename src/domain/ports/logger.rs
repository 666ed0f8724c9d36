//! LayoutLogger port
//!
//! Severity and channel follow the storefront's system log conventions.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Error,
    Warning,
    Notice,
    Info,
    Debug,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogChannel {
    System,
    Exception,
}

impl fmt::Display for LogChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogChannel::System => f.write_str("system"),
            LogChannel::Exception => f.write_str("exception"),
        }
    }
}

pub trait LayoutLogger: Send + Sync {
    fn log(&self, message: &str, severity: Severity, channel: LogChannel);
}
