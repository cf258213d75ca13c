use ratatui::style::Color;

use crate::snapshot::Tag;

pub struct Theme {
    #[allow(dead_code)] // Background color field for future use
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub function: Color,  // Yellow for frame headers
    pub type_name: Color, // Cyan for type annotations
    pub bar_idle: Color,
    pub bar_comparing: Color,
    pub bar_swapping: Color,
    pub bar_sorted: Color,
    pub bar_checking: Color,
    pub bar_found: Color,
    pub bar_eliminated: Color,
    pub bar_range: Color,
    pub bar_jump_block: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    status_bg: Color::Rgb(50, 50, 70),         // Slightly lighter BG for the status bar
    function: Color::Rgb(249, 226, 175),       // Yellow for function names
    type_name: Color::Rgb(148, 226, 213),      // Cyan/teal for type annotations
    bar_idle: Color::Rgb(166, 173, 200),
    bar_comparing: Color::Rgb(249, 226, 175),  // Yellow
    bar_swapping: Color::Rgb(250, 179, 135),   // Orange
    bar_sorted: Color::Rgb(166, 227, 161),     // Green
    bar_checking: Color::Rgb(249, 226, 175),   // Yellow
    bar_found: Color::Rgb(166, 227, 161),      // Green
    bar_eliminated: Color::Rgb(108, 112, 134), // Grey
    bar_range: Color::Rgb(137, 180, 250),      // Blue
    bar_jump_block: Color::Rgb(203, 166, 247), // Mauve
};

impl Theme {
    pub fn tag_color(&self, tag: Tag) -> Color {
        match tag {
            Tag::Idle => self.bar_idle,
            Tag::Comparing => self.bar_comparing,
            Tag::Swapping => self.bar_swapping,
            Tag::Sorted => self.bar_sorted,
            Tag::Checking => self.bar_checking,
            Tag::Found => self.bar_found,
            Tag::Eliminated => self.bar_eliminated,
            Tag::Range => self.bar_range,
            Tag::JumpBlock => self.bar_jump_block,
        }
    }
}
