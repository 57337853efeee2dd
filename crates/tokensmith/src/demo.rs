//! A sample theme exercising every token category.

use crate::theme::Theme;

impl Theme {
    /// Returns the `my-theme` sample theme.
    ///
    /// Used by the CLI when no theme file is given, and handy as a starting
    /// point for new themes.
    pub fn demo() -> Self {
        Theme::new("my-theme")
            .palette("black", "#000")
            .palette("white", "#fff")
            .palette("red", "#f00")
            .palette("blue", "#00f")
            .palette("gray", "#808080")
            .spacing("xs", "0.25rem")
            .spacing("sm", "0.5rem")
            .spacing("md", "1rem")
            .spacing("lg", "1.5rem")
            .spacing("xl", "2rem")
            .size("small", "2rem")
            .size("medium", "2.5rem")
            .size("large", "3rem")
            .z_index("surface", "1")
            .z_index("modal", "10")
            .z_index("dropdown", "5")
            .container("sm", "40rem")
            .container("md", "64rem")
            .container("lg", "80rem")
            .light_bg("root", "white palette")
            .light_bg("surface", "gray palette")
            .light_bg("accent", "blue palette")
            .dark_bg("root", "black palette")
            .dark_bg("surface", "gray palette")
            .dark_bg("accent", "blue palette")
    }
}
