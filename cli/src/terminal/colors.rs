use colored::Color;

pub const PRIMARY: Color = Color::BrightWhite;
pub const ACCENT: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const MAC_ADDR: Color = Color::BrightYellow;
pub const IPV4_ADDR: Color = Color::BrightBlue;
pub const VENDOR: Color = Color::BrightGreen;
pub const FLAG_SET: Color = Color::BrightMagenta;
pub const FLAG_UNSET: Color = Color::BrightBlack;
