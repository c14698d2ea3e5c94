//! Visual theme and styling.

use console::Style;

/// mealfinder's visual theme.
#[derive(Debug, Clone)]
pub struct MenuTheme {
    /// Style for date headlines (magenta bold).
    pub header: Style,
    /// Style for dining period names (bold).
    pub period: Style,
    /// Style for category/station names.
    pub category: Style,
    /// Style for secondary text: placeholders, upstream ids, query echoes.
    pub dim: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for emphasized values (bold).
    pub highlight: Style,
}

impl Default for MenuTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            header: Style::new().bold().magenta(),
            period: Style::new().bold(),
            category: Style::new().underlined(),
            dim: Style::new().dim(),
            error: Style::new().red().bold(),
            highlight: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            period: Style::new(),
            category: Style::new(),
            dim: Style::new(),
            error: Style::new(),
            highlight: Style::new(),
        }
    }

    /// Pick styled or plain based on the terminal.
    pub fn auto() -> Self {
        if console::colors_enabled() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}
