use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use super::app_state::{App, TOASTS};
use super::toast::{Toast, ToastLevel};
use crate::error::NotiqError;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> Result<(), NotiqError> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event)?;
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle a key press; must run inside the app's provider
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<(), NotiqError> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('a') => self.push_toast(ToastLevel::Info)?,
            KeyCode::Char('w') => self.push_toast(ToastLevel::Warning)?,
            KeyCode::Char('e') => self.push_toast(ToastLevel::Error)?,
            KeyCode::Char('u') => update_newest()?,
            KeyCode::Char('d') => dismiss_oldest()?,
            KeyCode::Char('c') => TOASTS.use_queue()?.borrow_mut().remove_all(),
            _ => {}
        }
        Ok(())
    }

    /// Add `count` info toasts, as if `a` had been pressed that many times
    pub fn seed(&mut self, count: usize) -> Result<(), NotiqError> {
        for _ in 0..count {
            self.push_toast(ToastLevel::Info)?;
        }
        Ok(())
    }

    /// Surface a config problem as a sticky error toast
    pub fn show_config_warning(&mut self, warning: &str) -> Result<(), NotiqError> {
        TOASTS
            .use_queue()?
            .borrow_mut()
            .add("config-warning", Toast::error(warning));
        Ok(())
    }

    fn push_toast(&mut self, level: ToastLevel) -> Result<(), NotiqError> {
        let queue = TOASTS.use_queue()?;
        let (number, id) = self.next_toast_id();
        let message = match level {
            ToastLevel::Info => format!("Toast #{}", number),
            ToastLevel::Warning => format!("Warning #{}", number),
            ToastLevel::Error => format!("Error #{}", number),
        };
        queue.borrow_mut().add(&id, Toast::new(level, message));
        Ok(())
    }
}

/// Replace the newest toast in place with a bumped copy
fn update_newest() -> Result<(), NotiqError> {
    let queue = TOASTS.use_queue()?;
    let mut queue = queue.borrow_mut();
    let newest = queue
        .list()
        .last()
        .map(|entry| (entry.id.clone(), entry.data.bumped()));
    if let Some((id, toast)) = newest {
        queue.add(&id, toast);
    }
    Ok(())
}

fn dismiss_oldest() -> Result<(), NotiqError> {
    let queue = TOASTS.use_queue()?;
    let oldest = queue.borrow().list().first().map(|entry| entry.id.clone());
    if let Some(id) = oldest {
        queue.borrow_mut().remove(&id);
    }
    Ok(())
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
