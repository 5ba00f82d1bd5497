use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const REACHABLE: Color = Color::Green;
pub const UNREACHABLE: Color = Color::BrightBlack;
pub const FAILED: Color = Color::Red;
