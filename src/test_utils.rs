//! Shared test utilities for notiq

#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::config::Config;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Helper to create App with default config for tests
    pub fn test_app() -> App {
        App::new(&Config::default())
    }

    /// Run `f` with the app's provider entered, the way the main loop does
    pub fn with_provider<R>(app: &mut App, f: impl FnOnce(&mut App) -> R) -> R {
        let provider = app.provider().clone();
        provider.scope(|| f(app))
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
