use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x007fb4ca);
pub const SECONDARY: Color = Color::from_u32(0x002d4f67);
pub const NEUTRAL: Color = Color::from_u32(0x00404040);
pub const BACKGROUND: Color = Color::from_u32(0x000d0d0d);
pub const ACCENT: Color = Color::from_u32(0x00e6c384);
