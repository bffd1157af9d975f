// Configuration type definitions

use serde::Deserialize;

/// Corner the toast stack grows from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    #[default]
    TopRight,
    BottomRight,
}

/// Toast display section
#[derive(Debug, Clone, Deserialize)]
pub struct ToastConfig {
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
    #[serde(default)]
    pub position: ToastPosition,
}

fn default_max_visible() -> usize {
    5
}

impl Default for ToastConfig {
    fn default() -> Self {
        ToastConfig {
            max_visible: default_max_visible(),
            position: ToastPosition::TopRight,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub toasts: ToastConfig,
}
