use ratatui::style::Color;

/// Runtime theme colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub grey0: Color,
    pub grey1: Color,

    // Semantic colors
    pub accent: Color,
    pub focus: Color,
    pub liked: Color,
    pub dot_active: Color,
    pub dot_inactive: Color,
    pub disabled: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Material dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            grey0: Color::Rgb(0x7c, 0x6f, 0x64),
            grey1: Color::Rgb(0x92, 0x83, 0x74),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            focus: Color::Rgb(0xd8, 0xa6, 0x57),
            liked: Color::Rgb(0xea, 0x69, 0x62),
            dot_active: Color::Rgb(0xd4, 0xbe, 0x98),
            dot_inactive: Color::Rgb(0x5a, 0x52, 0x4c),
            disabled: Color::Rgb(0x50, 0x49, 0x45),
        }
    }
}
