use crate::core::theme::Theme;
use crate::store::StateStore;
use anyhow::Result;

/// Sets the theme explicitly, or toggles it when no value is given, then
/// prints the active theme.
pub fn run(store: &dyn StateStore, requested: Option<Theme>) -> Result<()> {
    let current = Theme::load(store);
    let next = requested.unwrap_or_else(|| current.toggled());

    if next != current {
        next.save(store);
    }
    println!("Theme: {next}");
    Ok(())
}
