use super::ui;
use crate::core::history::HistoryLog;
use crate::core::theme::Theme;
use anyhow::Result;
use comfy_table::Cell;

/// Renders the recent conversions, most recent first.
pub fn run(history: &HistoryLog, theme: Theme) -> Result<()> {
    println!(
        "{}\n",
        ui::style_text("Conversion History", ui::StyleType::Title)
    );

    if history.is_empty() {
        println!(
            "{}",
            ui::style_text("No conversions yet", ui::StyleType::Subtle)
        );
        return Ok(());
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Conversion", theme),
        ui::header_cell("Time", theme),
    ]);

    for (conversion, time) in history.render() {
        table.add_row(vec![Cell::new(conversion), Cell::new(time)]);
    }

    println!("{table}");
    Ok(())
}

/// Empties the history log and its persisted state.
pub fn clear(history: &mut HistoryLog) -> Result<()> {
    history.clear();
    println!("Conversion history cleared");
    Ok(())
}
