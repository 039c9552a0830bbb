//! CLI command messaging system
//!
//! Consistent console output for the `snapshot` and `configure` commands and
//! for failures reported before or after the TUI runs.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

impl MessageKind {
    fn label(self) -> &'static str {
        match self {
            Self::Info => "\x1b[1;33m[INFO]\x1b[0m",
            Self::Success => "\x1b[1;32m[SUCCESS]\x1b[0m",
            Self::Error => "\x1b[1;31m[ERROR]\x1b[0m",
        }
    }
}

/// Formats a titled message; details go on the same line after a tab.
pub fn format_message(kind: MessageKind, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{} {}", kind.label(), title)
    } else {
        format!("{} {}\t {}", kind.label(), title, details)
    }
}

pub fn print_message(kind: MessageKind, title: &str, details: &str) {
    match kind {
        MessageKind::Error => eprintln!("{}", format_message(kind, title, details)),
        _ => println!("{}", format_message(kind, title, details)),
    }
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::MessageKind::Info,
            $title,
            &format!($($details)*),
        )
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::MessageKind::Success,
            $title,
            &format!($($details)*),
        )
    };
}

#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_message($crate::cli_messages::MessageKind::Error, $title, "")
    };
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::MessageKind::Error,
            $title,
            &format!($($details)*),
        )
    };
}
