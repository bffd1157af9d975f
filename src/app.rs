mod app_events;
mod app_render;
mod app_state;
mod toast;

pub use app_state::{App, TOASTS};
pub use toast::{Toast, ToastLevel};
