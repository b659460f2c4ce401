//! Terminal output helpers
//!
//! All user-facing messages go through these functions so that styling stays
//! consistent: plain progress lines on stdout, warnings and errors on stderr.

use console::Style;

/// Print an informational progress message
pub fn info(message: &str) {
    println!("{message}");
}

/// Print a warning to stderr
pub fn warn(message: &str) {
    eprintln!(
        "{} {}",
        Style::new().yellow().bold().apply_to("Warning:"),
        message
    );
}

/// Print an error to stderr
pub fn error(message: &str) {
    eprintln!(
        "{} {}",
        Style::new().red().bold().apply_to("Error:"),
        message
    );
}

/// Print a dimmed hint line to stderr
pub fn hint(message: &str) {
    eprintln!("{}", Style::new().dim().apply_to(message));
}

/// Render a duration in seconds as a rough human-readable uptime
pub fn format_uptime(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    if seconds < 60.0 {
        pluralize(seconds as u64, "second")
    } else if seconds < 3600.0 {
        pluralize((seconds / 60.0) as u64, "minute")
    } else if seconds < 86400.0 {
        pluralize((seconds / 3600.0) as u64, "hour")
    } else {
        pluralize((seconds / 86400.0) as u64, "day")
    }
}

fn pluralize(amount: u64, unit: &str) -> String {
    if amount == 1 {
        format!("1 {unit}")
    } else {
        format!("{amount} {unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uptime_seconds() {
        assert_eq!(format_uptime(0.0), "0 seconds");
        assert_eq!(format_uptime(1.0), "1 second");
        assert_eq!(format_uptime(59.9), "59 seconds");
    }

    #[test]
    fn test_format_uptime_minutes() {
        assert_eq!(format_uptime(60.0), "1 minute");
        assert_eq!(format_uptime(150.0), "2 minutes");
    }

    #[test]
    fn test_format_uptime_hours_and_days() {
        assert_eq!(format_uptime(3600.0), "1 hour");
        assert_eq!(format_uptime(7200.0), "2 hours");
        assert_eq!(format_uptime(86400.0 * 3.0), "3 days");
    }

    #[test]
    fn test_format_uptime_negative_clamps_to_zero() {
        assert_eq!(format_uptime(-5.0), "0 seconds");
    }
}
