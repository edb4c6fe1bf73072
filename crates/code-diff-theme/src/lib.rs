use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub is_dark: bool,

    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_panel: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,

    // Diff colors
    pub diff_added_bg: Color,
    pub diff_removed_bg: Color,
    pub diff_added_fg: Color,
    pub diff_removed_fg: Color,
    pub gutter_fg: Color,
    pub cursor_bg: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Table colors
    pub table_header_bg: Color,
    pub table_header_fg: Color,
    pub table_row_fg: Color,
    pub table_row_bg_normal: Color,
    pub table_row_bg_alt: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Pick the palette for the dark-theme flag
    pub fn for_dark_mode(is_dark: bool) -> Self {
        if is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            is_dark: true,

            bg_primary: tailwind::SLATE.c950,
            bg_secondary: tailwind::SLATE.c900,
            bg_panel: tailwind::SLATE.c800,

            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c200,
            text_muted: tailwind::SLATE.c400,

            accent_primary: tailwind::CYAN.c400,
            accent_secondary: tailwind::CYAN.c600,

            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            status_warning: tailwind::YELLOW.c400,
            status_info: tailwind::BLUE.c400,

            diff_added_bg: tailwind::GREEN.c950,
            diff_removed_bg: tailwind::RED.c950,
            diff_added_fg: tailwind::GREEN.c300,
            diff_removed_fg: tailwind::RED.c300,
            gutter_fg: tailwind::SLATE.c600,
            cursor_bg: tailwind::CYAN.c600,

            selected_bg: tailwind::BLUE.c400,
            selected_fg: Color::White,

            table_header_bg: tailwind::BLUE.c500,
            table_header_fg: tailwind::SLATE.c200,
            table_row_fg: tailwind::SLATE.c200,
            table_row_bg_normal: tailwind::SLATE.c950,
            table_row_bg_alt: tailwind::SLATE.c900,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,

            bg_primary: tailwind::SLATE.c50,
            bg_secondary: tailwind::SLATE.c100,
            bg_panel: tailwind::SLATE.c200,

            text_primary: tailwind::SLATE.c900,
            text_secondary: tailwind::SLATE.c800,
            text_muted: tailwind::SLATE.c500,

            accent_primary: tailwind::CYAN.c700,
            accent_secondary: tailwind::CYAN.c500,

            status_success: tailwind::GREEN.c700,
            status_error: tailwind::RED.c700,
            status_warning: tailwind::AMBER.c700,
            status_info: tailwind::BLUE.c700,

            diff_added_bg: tailwind::GREEN.c100,
            diff_removed_bg: tailwind::RED.c100,
            diff_added_fg: tailwind::GREEN.c800,
            diff_removed_fg: tailwind::RED.c800,
            gutter_fg: tailwind::SLATE.c400,
            cursor_bg: tailwind::CYAN.c300,

            selected_bg: tailwind::BLUE.c600,
            selected_fg: Color::White,

            table_header_bg: tailwind::BLUE.c200,
            table_header_fg: tailwind::SLATE.c900,
            table_row_fg: tailwind::SLATE.c800,
            table_row_bg_normal: tailwind::SLATE.c50,
            table_row_bg_alt: tailwind::SLATE.c100,
        }
    }

    // Prebuilt styles for common use cases

    /// Style for panel backgrounds
    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel)
    }

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default().fg(self.accent_secondary)
    }

    /// Style for the border of the focused panel
    pub fn panel_border_focused(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key hints (e.g., "^S" in "^S share")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for table headers
    pub fn table_header(&self) -> Style {
        Style::default()
            .fg(self.table_header_fg)
            .bg(self.table_header_bg)
    }

    /// Style for selected table rows
    pub fn table_selected(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for normal table rows
    pub fn table_row(&self) -> Style {
        Style::default().fg(self.table_row_fg)
    }

    /// Style for error messages
    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.status_error)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for success messages
    pub fn success(&self) -> Style {
        Style::default()
            .fg(self.status_success)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for warning messages
    pub fn warning(&self) -> Style {
        Style::default()
            .fg(self.status_warning)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for lines only present in the modified buffer
    pub fn diff_added(&self) -> Style {
        Style::default().fg(self.diff_added_fg).bg(self.diff_added_bg)
    }

    /// Style for lines only present in the original buffer
    pub fn diff_removed(&self) -> Style {
        Style::default()
            .fg(self.diff_removed_fg)
            .bg(self.diff_removed_bg)
    }

    /// Style for line numbers
    pub fn gutter(&self) -> Style {
        Style::default().fg(self.gutter_fg)
    }

    /// Style for the character under the cursor
    pub fn cursor(&self) -> Style {
        Style::default().bg(self.cursor_bg).fg(self.selected_fg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_dark_mode() {
        assert!(Theme::for_dark_mode(true).is_dark);
        assert!(!Theme::for_dark_mode(false).is_dark);
        assert_eq!(Theme::default(), Theme::dark());
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::dark().bg_primary, Theme::light().bg_primary);
    }
}
