//! Colored console output for command results
//!
//! Used outside the TUI, e.g. for headless-mode notices and fatal errors.

/// Print an informational line, with optional tab-separated details.
pub fn print_info(title: &str, details: &str) {
    if details.is_empty() {
        println!("\x1b[1;33m[INFO]\x1b[0m {}", title);
    } else {
        println!("\x1b[1;33m[INFO]\x1b[0m {}\t {}", title, details);
    }
}

/// Print an error line, followed by a details line when present.
pub fn print_error(title: &str, details: Option<&str>) {
    println!("\x1b[1;31m[ERROR]\x1b[0m {}", title);
    if let Some(details) = details {
        println!("\x1b[1;31m[ERROR]\x1b[0m Details: {}", details);
    }
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_error($title, Some(format!($($details)*).as_str()))
    };
}
