use super::palette::Palette;
use ratatui::style::Color;

// Polar Night for surfaces, Snow Storm for text, Frost and Aurora for accents.
pub const NORD: Palette = Palette {
    base: Color::Rgb(46, 52, 64), // nord0
    crust: Color::Rgb(41, 46, 57), // below nord0
    text: Color::Rgb(236, 239, 244), // nord6
    subtext0: Color::Rgb(216, 222, 233), // nord4
    subtext1: Color::Rgb(229, 233, 240), // nord5
    surface0: Color::Rgb(59, 66, 82), // nord1
    surface2: Color::Rgb(76, 86, 106), // nord3
    overlay0: Color::Rgb(97, 110, 136),
    blue: Color::Rgb(136, 192, 208), // nord8
    green: Color::Rgb(163, 190, 140), // nord14
    peach: Color::Rgb(208, 135, 112), // nord12
    red: Color::Rgb(191, 97, 106), // nord11
    mauve: Color::Rgb(180, 142, 173), // nord15
};
