//! Toast payload carried by the demo's notification queue

use crate::theme::toast::{self, ToastColors};

/// Toast level - determines colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastLevel {
    #[default]
    Info,
    Warning,
    Error,
}

impl ToastLevel {
    pub fn colors(self) -> ToastColors {
        match self {
            ToastLevel::Info => toast::INFO,
            ToastLevel::Warning => toast::WARNING,
            ToastLevel::Error => toast::ERROR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    /// How many times the toast was replaced in place
    pub updates: u32,
}

impl Toast {
    pub fn new(level: ToastLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            updates: 0,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Error, message)
    }

    /// Copy of this toast with the update counter advanced
    pub fn bumped(&self) -> Self {
        Self {
            updates: self.updates + 1,
            ..self.clone()
        }
    }

    /// Text shown inside the toast box
    pub fn display_text(&self) -> String {
        if self.updates == 0 {
            self.message.clone()
        } else {
            format!("{} (x{})", self.message, self.updates + 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_level() {
        assert_eq!(Toast::info("a").level, ToastLevel::Info);
        assert_eq!(Toast::warning("b").level, ToastLevel::Warning);
        assert_eq!(Toast::error("c").level, ToastLevel::Error);
    }

    #[test]
    fn test_bumped_keeps_message_and_level() {
        let toast = Toast::warning("Disk almost full");
        let bumped = toast.bumped().bumped();

        assert_eq!(bumped.level, ToastLevel::Warning);
        assert_eq!(bumped.message, "Disk almost full");
        assert_eq!(bumped.updates, 2);
        assert_eq!(toast.updates, 0);
    }

    #[test]
    fn test_display_text() {
        let toast = Toast::info("Saved");
        assert_eq!(toast.display_text(), "Saved");
        assert_eq!(toast.bumped().display_text(), "Saved (x2)");
    }

    #[test]
    fn test_level_colors() {
        assert_eq!(ToastLevel::Info.colors(), toast::INFO);
        assert_eq!(ToastLevel::Error.colors(), toast::ERROR);
        assert_ne!(ToastLevel::Warning.colors(), ToastLevel::Info.colors());
    }
}
