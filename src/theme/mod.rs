use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod catppuccin;
pub mod nord;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header_logo: Style,
    pub header_active: Style,
    pub header_item: Style,
    pub header: Style,

    pub footer_segment_key: Style,
    pub footer: Style,

    pub query: Style,
    pub query_placeholder: Style,
    pub group_header: Style,
    pub icon: Style,
    pub shortcut_hint: Style,

    pub status_info: Style,
    pub status_error: Style,
    pub timestamp: Style,

    pub list_selected: Style,
    pub list_item: Style,
    pub dimmed: Style,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    #[default]
    CatppuccinMocha,
    Nord,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::CatppuccinMocha => "Catppuccin (Mocha)",
            PaletteType::Nord => "Nord",
        }
    }

    /// Suffix used in the `theme.<key>` built-in command ids.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            PaletteType::CatppuccinMocha => "catppuccinmocha",
            PaletteType::Nord => "nord",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.key() == key)
    }

    #[must_use]
    pub fn all() -> &'static [PaletteType] {
        &[PaletteType::CatppuccinMocha, PaletteType::Nord]
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::CatppuccinMocha => Self::from_palette(&catppuccin::CATPPUCCIN_MOCHA),
            PaletteType::Nord => Self::from_palette(&nord::NORD),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),

            header_logo: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_active: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().bg(p.surface0).fg(p.text),
            header: Style::default().bg(p.base).fg(p.text),

            footer_segment_key: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            footer: Style::default().bg(p.crust).fg(p.subtext0),

            query: Style::default().fg(p.text),
            query_placeholder: Style::default().fg(p.overlay0).add_modifier(Modifier::ITALIC),
            group_header: Style::default().fg(p.mauve).add_modifier(Modifier::BOLD),
            icon: Style::default().fg(p.peach),
            shortcut_hint: Style::default()
                .bg(dim_color(p.surface0, 0.8))
                .fg(p.subtext1),

            status_info: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.red)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            timestamp: Style::default().fg(p.subtext0).add_modifier(Modifier::DIM),

            list_selected: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.text),
            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::CatppuccinMocha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_keys_round_trip() {
        for p in PaletteType::all() {
            assert_eq!(PaletteType::from_key(p.key()), Some(*p));
        }
        assert_eq!(PaletteType::from_key("solarized"), None);
    }

    #[test]
    fn test_palette_type_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            theme: PaletteType,
        }
        let w: Wrapper = toml::from_str("theme = \"nord\"").unwrap();
        assert_eq!(w.theme, PaletteType::Nord);
    }
}
