//! Console messages printed around the session lifecycle

use crate::environment::Environment;

// Bold cyan, bold green, reset
const COLOR_INFO: &str = "\x1b[1;36m";
const COLOR_SUCCESS: &str = "\x1b[1;32m";
const COLOR_RESET: &str = "\x1b[0m";

/// A lifecycle message with a colored severity label.
#[derive(Debug, Clone)]
pub enum SessionMessage {
    Info(String),
    Success(String),
}

impl SessionMessage {
    fn label(&self) -> (&'static str, &'static str) {
        match self {
            Self::Info(_) => ("INFO", COLOR_INFO),
            Self::Success(_) => ("SUCCESS", COLOR_SUCCESS),
        }
    }

    /// Print the message to stdout with its label.
    pub fn print(&self) {
        let (label, color) = self.label();
        let msg = match self {
            Self::Info(msg) | Self::Success(msg) => msg,
        };
        println!("{}[{}]{} {}", color, label, COLOR_RESET, msg);
    }
}

/// Announce which mode is starting and against which environment.
pub fn print_session_starting(mode: &str, environment: &Environment) {
    SessionMessage::Info(format!("Starting {} mode ({} environment)", mode, environment)).print();
}

pub fn print_session_shutdown() {
    SessionMessage::Info("Shutting down...".to_string()).print();
}

pub fn print_session_exit_success() {
    SessionMessage::Success("Triptych exited successfully".to_string()).print();
}
