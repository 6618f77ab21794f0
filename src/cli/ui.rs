use crate::core::theme::Theme;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use console::style;
use std::time::Duration;

/// How long a transient error stays on an attended terminal.
pub const ERROR_DISPLAY_DURATION: Duration = Duration::from_secs(3);

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    ResultValue,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::ResultValue => style(text).green().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Accent color for table headers, per theme.
fn accent_color(theme: Theme) -> comfy_table::Color {
    match theme {
        Theme::Light => comfy_table::Color::Blue,
        Theme::Dark => comfy_table::Color::Cyan,
    }
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str, theme: Theme) -> Cell {
    Cell::new(text)
        .fg(accent_color(theme))
        .add_attribute(Attribute::Bold)
}

/// Shows an error message in place of the result line. On an attended
/// terminal the message auto-clears after `ERROR_DISPLAY_DURATION`;
/// otherwise it is printed and left alone so piped output does not stall.
pub fn show_transient_error(message: &str) {
    let line = style_text(&format!("Error: {message}"), StyleType::Error);

    if console::user_attended() {
        let term = console::Term::stdout();
        let _ = term.write_line(&line);
        std::thread::sleep(ERROR_DISPLAY_DURATION);
        let _ = term.clear_last_lines(1);
    } else {
        println!("{line}");
    }
}
