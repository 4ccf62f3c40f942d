//! Color constants for the capture screen

use ratatui::style::Color;

// Slate readout
pub const SLATE_BG: Color = Color::Rgb(20, 20, 24);
pub const VALUE_FG: Color = Color::Rgb(255, 196, 0);
pub const LABEL_FG: Color = Color::DarkGray;
pub const SELECTED_FG: Color = Color::Rgb(255, 240, 160);

// Take mode labels
pub const SERIES_FG: Color = Color::Cyan;
pub const REHEARSAL_FG: Color = Color::Magenta;
pub const PLATE_FG: Color = Color::Blue;

// Status bar
pub const STATUS_BAR_BG: Color = Color::Rgb(30, 30, 50);
pub const STATUS_BAR_FG: Color = Color::White;

// QR overlay
pub const OVERLAY_BG: Color = Color::White;
pub const OVERLAY_FG: Color = Color::Black;

// Effect log
pub const REJECTED_FG: Color = Color::Red;
