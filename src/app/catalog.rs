use crate::domain::models::CommandItem;
use crate::infrastructure::catalog::dedupe;
use crate::theme::PaletteType;

pub const QUIT: &str = "app.quit";
pub const RELOAD: &str = "app.reload";
pub const CLEAR_HISTORY: &str = "history.clear";
pub const THEME_PREFIX: &str = "theme.";

/// Commands the host always offers, after whatever the catalog file adds.
#[must_use]
pub fn builtin_commands() -> Vec<CommandItem> {
    let mut commands = vec![
        CommandItem::new(RELOAD, "Reload Commands")
            .with_group("Application")
            .with_icon("↻")
            .with_shortcut("r"),
        CommandItem::new(CLEAR_HISTORY, "Clear History")
            .with_group("Application")
            .with_icon("✗"),
        CommandItem::new(QUIT, "Quit")
            .with_group("Application")
            .with_icon("⏻")
            .with_shortcut("q"),
    ];

    commands.extend(PaletteType::all().iter().map(|p| {
        CommandItem::new(format!("{THEME_PREFIX}{}", p.key()), format!("Theme: {}", p.label()))
            .with_group("Theme")
            .with_icon("◐")
    }));

    commands
}

/// User commands first, then built-ins; ids stay unique.
#[must_use]
pub fn assemble(user: Vec<CommandItem>) -> Vec<CommandItem> {
    let mut items = user;
    items.extend(builtin_commands());
    dedupe(items)
}
