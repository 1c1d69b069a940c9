use crate::app::command::Command;
use crate::domain::models::CommandItem;
use crate::theme::PaletteType;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Vec<Command>),
    NotHandled,
}

/// Why the palette went from open to closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Toggle,
    Escape,
    OutsideClick,
    Selected,
    External,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Host ---
    HistoryNext,
    HistoryPrev,
    Dispatch(CommandItem),                   // Run a command the palette resolved
    ReloadCatalog,                           // Re-read the catalog file
    CatalogLoaded(Result<Vec<CommandItem>, String>),
    SwitchTheme(PaletteType),
    ClearHistory,

    // --- Palette Lifecycle ---
    TogglePalette,             // Global shortcut
    OpenPalette,               // Explicit open request
    ClosePalette(CloseReason), // Escape, backdrop click, ...
    SetOpen(bool),             // Host drives visibility
    FocusQuery,                // Deferred focus fired

    // --- Palette Input ---
    QueryInput(char),
    QueryBackspace,
    QueryClear,
    CursorDown,
    CursorUp,
    HoverEntry(usize), // Global index under the pointer
    ClickEntry(usize), // Global index clicked
    Submit,            // Enter

    // --- Host-supplied Palette Inputs ---
    ReplaceItems(Vec<CommandItem>),
    SetPlaceholder(String),
}
