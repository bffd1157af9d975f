//! Centralized theme configuration for the demo UI.
//!
//! Render files use `theme::module::CONSTANT` rather than hardcoding
//! `Color::*` values.
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);
}

/// Main panel styles
pub mod panel {
    use super::*;

    pub const BORDER: Color = palette::PURPLE;
    pub const TITLE: Style = Style::new().fg(palette::CYAN).add_modifier(Modifier::BOLD);
    pub const TEXT: Color = palette::TEXT;
    pub const COUNT: Color = palette::CYAN;
    pub const EMPTY: Color = palette::TEXT_DIM;
}

/// Toast styles, one set per level
pub mod toast {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ToastColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const INFO: ToastColors = ToastColors {
        fg: palette::TEXT,
        bg: palette::BG_HIGHLIGHT,
        border: palette::TEXT_MUTED,
    };

    pub const WARNING: ToastColors = ToastColors {
        fg: palette::BG_DARK,
        bg: palette::WARNING,
        border: palette::WARNING,
    };

    pub const ERROR: ToastColors = ToastColors {
        fg: palette::TEXT,
        bg: palette::ERROR,
        border: Color::Rgb(255, 135, 145),
    };

    /// "+N more" marker under a truncated stack
    pub const OVERFLOW: Style = Style::new()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::ITALIC);
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = Color::Rgb(130, 133, 158);
    pub const DESCRIPTION: Color = Color::Rgb(90, 92, 119);
    pub const SEPARATOR: Color = Color::Rgb(90, 92, 119);
}
