//! Progress bar utilities.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while the export tree is listed and planned.
pub fn create_spinner(message: &str) -> ProgressBar {
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg} ({elapsed})")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());

    let spinner = ProgressBar::new_spinner().with_style(style);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Create a progress bar for item counts.
pub fn create_item_bar(total: u64, message: &str) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner:.green}} {} [{{bar:40.cyan/blue}}] {{pos}}/{{len}} {{per_sec}}",
                message
            ))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    bar
}

/// Item bar, or a hidden one when progress display is off.
pub fn item_bar(show: bool, total: usize, message: &str) -> ProgressBar {
    if show {
        create_item_bar(total as u64, message)
    } else {
        ProgressBar::hidden()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_bar_hidden_when_quiet() {
        assert!(item_bar(false, 3, "Renaming").is_hidden());
        assert_eq!(item_bar(true, 3, "Renaming").length(), Some(3));
    }

    #[test]
    fn test_spinner_keeps_message() {
        let spinner = create_spinner("Scanning export tree...");
        assert_eq!(spinner.message(), "Scanning export tree...");
        spinner.finish_and_clear();
    }
}
