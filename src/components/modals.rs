pub mod command_palette;
pub mod helpers;

pub use command_palette::{
    entry_at, palette_layout, query_cursor, CommandPaletteModal, PaletteLayout,
};
