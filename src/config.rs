use std::io::IsTerminal;

/// Check if colors should be enabled.
/// Respects NO_COLOR standard (https://no-color.org/) and TTY detection.
pub fn colors_enabled() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    std::io::stdout().is_terminal()
}

/// Set up color handling based on environment.
/// Call this early in main().
pub fn setup_colors() {
    if !colors_enabled() {
        colored::control::set_override(false);
    }
}
